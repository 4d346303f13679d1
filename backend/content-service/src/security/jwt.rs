use anyhow::{anyhow, Result};
/// JWT token generation and validation using HS256
/// One access token per login; lifetime comes from configuration
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use uuid::Uuid;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Email address
    pub email: String,
}

struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
}

// Thread-safe mutable storage for JWT keys loaded from configuration
lazy_static! {
    static ref JWT_KEYS: RwLock<Option<KeyPair>> = RwLock::new(None);
}

/// Initialize JWT keys from the configured HMAC secret
/// Must be called during application startup before any JWT operations
pub fn initialize_keys(secret: &str, ttl_hours: i64) -> Result<()> {
    if secret.is_empty() {
        return Err(anyhow!("JWT secret must not be empty"));
    }

    let mut keys = JWT_KEYS
        .write()
        .map_err(|e| anyhow!("Failed to acquire write lock on JWT keys: {}", e))?;
    *keys = Some(KeyPair {
        encoding: EncodingKey::from_secret(secret.as_bytes()),
        decoding: DecodingKey::from_secret(secret.as_bytes()),
        ttl_hours,
    });

    Ok(())
}

fn with_keys<T>(f: impl FnOnce(&KeyPair) -> Result<T>) -> Result<T> {
    let keys = JWT_KEYS
        .read()
        .map_err(|e| anyhow!("Failed to acquire read lock on JWT keys: {}", e))?;

    match keys.as_ref() {
        Some(pair) => f(pair),
        None => Err(anyhow!(
            "JWT keys not initialized. Call initialize_keys() during startup"
        )),
    }
}

/// Generate an access token for a user
pub fn generate_token(user_id: Uuid, email: &str) -> Result<String> {
    with_keys(|pair| {
        let now = Utc::now();
        let expiry = now + Duration::hours(pair.ttl_hours);

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            email: email.to_string(),
        };

        encode(&Header::default(), &claims, &pair.encoding)
            .map_err(|e| anyhow!("Failed to generate access token: {}", e))
    })
}

/// Validate and decode a token
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    with_keys(|pair| {
        decode::<Claims>(token, &pair.decoding, &Validation::default())
            .map_err(|e| anyhow!("Token validation failed: {}", e))
    })
}
