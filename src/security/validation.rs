use crate::error::ValidationError;
use crate::security::SecretString;

/// Input validation applied before any network call.
///
/// Only non-empty checks: owner, repository, and secret identifiers are opaque
/// to this library, and the API server enforces its own naming and length
/// limits.
pub struct InputValidator;

impl InputValidator {
    /// Validate a repository scope
    pub fn validate_scope(owner: &str, repo: &str) -> Result<(), ValidationError> {
        if owner.trim().is_empty() {
            return Err(ValidationError::EmptyOwner);
        }

        if repo.trim().is_empty() {
            return Err(ValidationError::EmptyRepository);
        }

        Ok(())
    }

    /// Validate a secret name within a scope
    pub fn validate_secret_name(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptySecretName);
        }

        Ok(())
    }

    /// Validate a plaintext secret value before encryption
    pub fn validate_secret_value(value: &SecretString) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptySecretValue);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_scope() {
        assert!(InputValidator::validate_scope("octocat", "hello-world").is_ok());
    }

    #[test]
    fn rejects_empty_owner() {
        let err = InputValidator::validate_scope("", "hello-world").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyOwner));
    }

    #[test]
    fn rejects_whitespace_repository() {
        let err = InputValidator::validate_scope("octocat", "   ").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyRepository));
    }

    #[test]
    fn rejects_empty_secret_name() {
        let err = InputValidator::validate_secret_name("").unwrap_err();
        assert!(matches!(err, ValidationError::EmptySecretName));
    }

    #[test]
    fn rejects_empty_secret_value() {
        let value = SecretString::from("");
        let err = InputValidator::validate_secret_value(&value).unwrap_err();
        assert!(matches!(err, ValidationError::EmptySecretValue));
    }
}
