pub mod manager;
pub mod types;

pub use manager::SecretsManager;
pub use types::{PublicKeyMaterial, Secret, SecretList, SetSecretRequest};
