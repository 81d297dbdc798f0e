use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed mask used wherever a secret value would otherwise be formatted.
pub const MASK: &str = "***";

/// Plaintext secret value that zeroizes its memory on drop.
///
/// `Debug` and `Display` always render [`MASK`], so a value cannot leak through
/// log records, panic messages, or error formatting. The raw bytes are only
/// reachable through [`SecretString::expose`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    /// Wrap a plaintext value
    pub fn new(value: String) -> Self {
        Self { inner: value }
    }

    /// Get the plaintext. Callers must not pass the result to anything that
    /// logs or persists it.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the length of the value in bytes
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}
