//! GitHub Actions Repository Secrets
//!
//! A small client library for managing GitHub Actions secrets at the repository
//! scope: listing repository and organization secrets, reading secret metadata,
//! fetching the repository's encryption public key, encrypting and upserting a
//! secret value, and deleting a secret.
//!
//! Secret values are sealed with libsodium-compatible sealed boxes (X25519 +
//! XSalsa20-Poly1305) under the repository's public key before they ever leave
//! the process; the GitHub API server decrypts and stores them. Plaintext values
//! are wrapped in [`SecretString`], which zeroizes on drop and always formats as
//! a mask.
//!
//! ```no_run
//! use github_actions_secrets::{GitHubClient, SecretsManager, SecretString};
//!
//! # async fn run() -> github_actions_secrets::Result<()> {
//! let client = GitHubClient::new("ghp_example_token");
//! let manager = SecretsManager::new(client);
//!
//! let value = SecretString::from("hunter2");
//! manager.upsert("octocat", "hello-world", "DEPLOY_TOKEN", &value).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod crypto;
pub mod error;
pub mod secrets;
pub mod security;

pub use client::GitHubClient;
pub use error::{EncodingError, Error, Result, UpstreamError, ValidationError};
pub use secrets::{PublicKeyMaterial, Secret, SecretList, SecretsManager};
pub use security::SecretString;
