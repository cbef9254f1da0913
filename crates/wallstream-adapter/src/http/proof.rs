/*
[INPUT]:  App secret and access token
[OUTPUT]: appsecret_proof query parameter value
[POS]:    HTTP layer - request proof for app-authenticated Graph calls
[UPDATE]: When changing proof algorithm or parameter format
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the `appsecret_proof` the Graph API expects alongside the access
/// token on app-authenticated calls
#[derive(Debug, Clone)]
pub struct AppSecretProof {
    app_secret: String,
}

impl AppSecretProof {
    pub fn new(app_secret: impl Into<String>) -> Self {
        Self {
            app_secret: app_secret.into(),
        }
    }

    /// HMAC-SHA256 of the access token keyed by the app secret, hex-encoded
    pub fn compute(&self, access_token: &str) -> String {
        // HMAC-SHA256 accepts keys of any length
        let mut mac = HmacSha256::new_from_slice(self.app_secret.as_bytes())
            .expect("hmac key length");
        mac.update(access_token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proof_matches_known_vector() {
        let proof = AppSecretProof::new("key")
            .compute("The quick brown fox jumps over the lazy dog");
        assert_eq!(
            proof,
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn test_proof_is_hex_sha256_sized() {
        let proof = AppSecretProof::new("app-secret").compute("token");
        assert_eq!(proof.len(), 64);
        assert!(proof.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_proof_varies_with_token() {
        let signer = AppSecretProof::new("app-secret");
        assert_ne!(signer.compute("token-a"), signer.compute("token-b"));
    }
}
