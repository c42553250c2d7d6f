//! Identity-token generation and validation.
//!
//! Identities are anonymous: an opaque random id embedded in an
//! HS256-signed JWT held client-side as a cookie. Nothing is persisted
//! server-side; the embedded id is the durable `userId` used for vote
//! deduplication. A client that loses its token simply gets a new
//! identity (and with it a fresh dedup window).

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use primetime_core::types::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every identity token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IdentityClaims {
    /// Subject -- the opaque anonymous user id.
    pub sub: UserId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for identity token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Identity token lifetime in days (default: 30).
    pub identity_expiry_days: i64,
}

/// Default identity token expiry in days.
const DEFAULT_IDENTITY_EXPIRY_DAYS: i64 = 30;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                | Required | Default |
    /// |------------------------|----------|---------|
    /// | `JWT_SECRET`           | **yes**  | --      |
    /// | `IDENTITY_EXPIRY_DAYS` | no       | `30`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let identity_expiry_days: i64 = std::env::var("IDENTITY_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_IDENTITY_EXPIRY_DAYS.to_string())
            .parse()
            .expect("IDENTITY_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            identity_expiry_days,
        }
    }
}

/// Mint a fresh opaque user id (32 hex characters).
pub fn mint_user_id() -> UserId {
    Uuid::new_v4().simple().to_string()
}

/// Generate an HS256 identity token for the given user id.
pub fn generate_identity_token(
    user_id: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.identity_expiry_days * 24 * 60 * 60;

    let claims = IdentityClaims {
        sub: user_id.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an identity token, returning the embedded
/// [`IdentityClaims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_identity_token(
    token: &str,
    config: &JwtConfig,
) -> Result<IdentityClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
