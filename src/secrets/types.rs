use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one Actions secret.
///
/// The API never returns a secret's value after it has been written; only the
/// name and timestamps are visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secret {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response shape of the secret-listing endpoints.
///
/// A scope with no secrets deserializes to an empty `secrets` vector, never an
/// absent one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretList {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub secrets: Vec<Secret>,
}

/// A repository's secret-encryption public key.
///
/// `key_id` is the opaque token the server uses to select the matching private
/// key at decryption time. The key pair rotates at the server's discretion, so
/// this material must be fetched fresh for every encryption and never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicKeyMaterial {
    pub key_id: String,
    pub key: String,
}

/// Request body for the secret-write endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SetSecretRequest {
    pub encrypted_value: String,
    pub key_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_deserializes_to_empty_vec() {
        let list: SecretList = serde_json::from_str(r#"{"total_count": 0, "secrets": []}"#).unwrap();
        assert_eq!(list.total_count, 0);
        assert!(list.secrets.is_empty());

        // Some endpoints omit the array entirely when there is nothing to list.
        let list: SecretList = serde_json::from_str(r#"{"total_count": 0}"#).unwrap();
        assert!(list.secrets.is_empty());
    }

    #[test]
    fn secret_timestamps_parse() {
        let secret: Secret = serde_json::from_str(
            r#"{"name": "GH_TOKEN", "created_at": "2020-01-10T14:59:22Z", "updated_at": "2020-01-11T11:59:22Z"}"#,
        )
        .unwrap();
        assert_eq!(secret.name, "GH_TOKEN");
        assert!(secret.updated_at > secret.created_at);
    }

    #[test]
    fn set_secret_request_serializes_expected_fields() {
        let body = SetSecretRequest {
            encrypted_value: "c2VhbGVk".to_string(),
            key_id: "568250167242549743".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["encrypted_value"], "c2VhbGVk");
        assert_eq!(json["key_id"], "568250167242549743");
    }
}
