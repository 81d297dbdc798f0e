use std::time::Duration;

use reqwest::{Client, Response};

use crate::error::UpstreamError;
use crate::secrets::types::{PublicKeyMaterial, Secret, SecretList, SetSecretRequest};

/// Default GitHub REST API endpoint
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// REST API version pinned by this client
const API_VERSION: &str = "2022-11-28";

/// Typed client for the GitHub Actions secrets endpoints with optimized HTTP client
///
/// Covers exactly the secret operations at the repository scope: listing
/// repository and organization secrets, reading one secret's metadata, fetching
/// the encryption public key, writing an encrypted secret, and deleting a
/// secret. Authentication is a bearer token; retry and rate-limit policy is left
/// to the transport and the API server.
pub struct GitHubClient {
    base_url: String,
    token: String,
    client: Client,
}

impl GitHubClient {
    /// Create a new client against the public GitHub API
    pub fn new(token: &str) -> Self {
        Self::new_with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a new client against a custom endpoint (GitHub Enterprise, tests)
    pub fn new_with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client: Self::create_optimized_client(),
        }
    }

    /// Create an optimized HTTP client with connection pooling
    fn create_optimized_client() -> Client {
        Client::builder()
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .tcp_keepalive(Duration::from_secs(60))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("failed to create HTTP client")
    }

    /// List all secrets available in a repository
    pub async fn list_secrets(&self, owner: &str, repo: &str) -> Result<SecretList, UpstreamError> {
        let url = format!("{}/repos/{owner}/{repo}/actions/secrets", self.base_url);
        let response = self.send(self.client.get(&url)).await?;
        Ok(response.json().await?)
    }

    /// List organization secrets visible to a repository
    pub async fn list_organization_secrets(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<SecretList, UpstreamError> {
        let url = format!(
            "{}/repos/{owner}/{repo}/actions/organization-secrets",
            self.base_url
        );
        let response = self.send(self.client.get(&url)).await?;
        Ok(response.json().await?)
    }

    /// Fetch one secret's metadata (the API never returns plaintext values)
    pub async fn get_secret(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<Secret, UpstreamError> {
        let url = format!(
            "{}/repos/{owner}/{repo}/actions/secrets/{name}",
            self.base_url
        );
        let response = self.send(self.client.get(&url)).await?;
        Ok(response.json().await?)
    }

    /// Fetch the repository's current secret-encryption public key.
    ///
    /// The key rotates at the server's discretion, so callers must fetch it
    /// fresh immediately before encrypting.
    pub async fn get_public_key(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<PublicKeyMaterial, UpstreamError> {
        let url = format!(
            "{}/repos/{owner}/{repo}/actions/secrets/public-key",
            self.base_url
        );
        let response = self.send(self.client.get(&url)).await?;
        Ok(response.json().await?)
    }

    /// Create or update a secret with an already-encrypted value.
    ///
    /// The API decrypts using the private key matched by `key_id` and stores
    /// the secret, replacing any existing secret of the same name.
    pub async fn put_secret(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        body: &SetSecretRequest,
    ) -> Result<(), UpstreamError> {
        let url = format!(
            "{}/repos/{owner}/{repo}/actions/secrets/{name}",
            self.base_url
        );
        self.send(self.client.put(&url).json(body)).await?;
        Ok(())
    }

    /// Delete a named secret from a repository
    pub async fn delete_secret(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<(), UpstreamError> {
        let url = format!(
            "{}/repos/{owner}/{repo}/actions/secrets/{name}",
            self.base_url
        );
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }

    /// Send a request with GitHub headers and surface non-2xx responses.
    ///
    /// The response body text is attached to the error as-is so callers can
    /// distinguish not-found from permission failures without this library
    /// interpreting them.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, UpstreamError> {
        let response = request
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, message });
        }

        Ok(response)
    }
}
