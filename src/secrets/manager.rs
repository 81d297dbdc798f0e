use tracing::{error, info};

use crate::client::GitHubClient;
use crate::crypto;
use crate::error::Result;
use crate::secrets::types::{PublicKeyMaterial, Secret, SecretList, SetSecretRequest};
use crate::security::{InputValidator, SecretString};

/// Manages Actions secrets for repository scopes.
///
/// Every operation is a single-shot async call: at most two sequential outbound
/// requests, no shared mutable state between calls, no local retry. Dropping an
/// in-flight future cancels it; the write step either completes as one network
/// exchange or does not happen.
pub struct SecretsManager {
    client: GitHubClient,
}

impl SecretsManager {
    /// Create a manager around an API client
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    /// List all secrets in a repository. A scope with none yields an empty list.
    pub async fn list(&self, owner: &str, repo: &str) -> Result<Vec<Secret>> {
        InputValidator::validate_scope(owner, repo)?;

        let list = self.client.list_secrets(owner, repo).await.map_err(|e| {
            error!(owner, repo, error = %e, "failed to list repository secrets");
            e
        })?;

        Ok(list.secrets)
    }

    /// List organization secrets visible to a repository
    pub async fn list_organization(&self, owner: &str, repo: &str) -> Result<Vec<Secret>> {
        InputValidator::validate_scope(owner, repo)?;

        let list = self
            .client
            .list_organization_secrets(owner, repo)
            .await
            .map_err(|e| {
                error!(owner, repo, error = %e, "failed to list organization secrets");
                e
            })?;

        Ok(list.secrets)
    }

    /// Fetch one secret's metadata
    pub async fn get(&self, owner: &str, repo: &str, name: &str) -> Result<Secret> {
        InputValidator::validate_scope(owner, repo)?;
        InputValidator::validate_secret_name(name)?;

        let secret = self.client.get_secret(owner, repo, name).await.map_err(|e| {
            error!(owner, repo, secret = name, error = %e, "failed to get secret");
            e
        })?;

        Ok(secret)
    }

    /// Fetch the repository's current secret-encryption public key
    pub async fn get_public_key(&self, owner: &str, repo: &str) -> Result<PublicKeyMaterial> {
        InputValidator::validate_scope(owner, repo)?;

        let key = self.client.get_public_key(owner, repo).await.map_err(|e| {
            error!(owner, repo, error = %e, "failed to get public key");
            e
        })?;

        Ok(key)
    }

    /// Create or update a secret.
    ///
    /// Fetches the repository's public key, seals the plaintext under it, and
    /// submits the base64 ciphertext together with the key id from the same
    /// fetch. The write replaces any existing secret of the same name, so the
    /// operation is idempotent. Validation failures are reported before any
    /// request goes out, and a key-fetch failure means the write is never
    /// attempted.
    pub async fn upsert(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        value: &SecretString,
    ) -> Result<()> {
        InputValidator::validate_scope(owner, repo)?;
        InputValidator::validate_secret_name(name)?;
        InputValidator::validate_secret_value(value)?;

        // Never cached: the server-side keypair may rotate between calls.
        let key = self.client.get_public_key(owner, repo).await.map_err(|e| {
            error!(owner, repo, secret = name, error = %e, "failed to get public key for upsert");
            e
        })?;

        let encrypted_value = crypto::seal_for_github(value.expose().as_bytes(), &key.key)
            .map_err(|e| {
                error!(owner, repo, secret = name, error = %e, "failed to seal secret value");
                e
            })?;

        let body = SetSecretRequest {
            encrypted_value,
            key_id: key.key_id,
        };

        self.client
            .put_secret(owner, repo, name, &body)
            .await
            .map_err(|e| {
                error!(owner, repo, secret = name, error = %e, "failed to write secret");
                e
            })?;

        info!(owner, repo, secret = name, value = %value, "secret upserted");
        Ok(())
    }

    /// Delete a named secret.
    ///
    /// Deleting a secret that does not exist surfaces whatever the API reports
    /// (a 404 status error); it is not treated as success.
    pub async fn delete(&self, owner: &str, repo: &str, name: &str) -> Result<()> {
        InputValidator::validate_scope(owner, repo)?;
        InputValidator::validate_secret_name(name)?;

        self.client
            .delete_secret(owner, repo, name)
            .await
            .map_err(|e| {
                error!(owner, repo, secret = name, error = %e, "failed to delete secret");
                e
            })?;

        info!(owner, repo, secret = name, "secret deleted");
        Ok(())
    }
}
