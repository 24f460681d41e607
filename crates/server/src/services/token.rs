//! Signed session tokens.
//!
//! HS256 JWTs carrying the admin identity. Verification is stateless: every
//! admin request re-validates signature and expiry against the signing
//! secret; nothing is persisted server-side.

use anyhow::{Context, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::User;

/// JWT issuer claim value.
const ISSUER: &str = "portfolio";

/// Session token lifetime in seconds (1 hour).
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Claims embedded in a session token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenClaims {
    /// Issuer.
    pub iss: String,
    /// Subject (user ID).
    pub sub: String,
    /// Username.
    pub name: String,
    /// Role granted at login.
    pub role: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Token signing and verification service.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Create a new token service with HMAC-SHA256 signing.
    ///
    /// The secret comes from environment configuration and is validated
    /// there to be at least 32 bytes.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Mint a session token for an authenticated user.
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = chrono::Utc::now().timestamp();

        let claims = TokenClaims {
            iss: ISSUER.to_string(),
            sub: user.id.to_string(),
            name: user.username.clone(),
            role: user.role.clone(),
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        self.sign(&claims)
    }

    /// Verify a token's signature, issuer, and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);

        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .context("invalid token")?;

        Ok(data.claims)
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String> {
        let header = Header::new(Algorithm::HS256);
        jsonwebtoken::encode(&header, claims, &self.encoding_key)
            .context("failed to encode session token")
    }
}
