//! Bearer-token issuance and verification.
//!
//! Staff sessions are carried by an HS256 JWT whose claims name the user and the
//! gym they operate. The gym id rides in the token so handlers can authorize
//! gym-scoped access without an extra lookup when the user record is unchanged;
//! the auth guard still reloads the user to catch deleted accounts.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{config::Config, error::auth::AuthError, model::user::User};

/// JWT claims for staff authentication.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,
    /// Id of the gym the user belongs to.
    pub gym_id: i32,
    /// Issued-at timestamp (seconds).
    pub iat: i64,
    /// Expiration timestamp (seconds).
    pub exp: i64,
}

/// Issues and verifies HS256 session tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: i64,
}

impl TokenService {
    /// Creates a token service from the configured signing secret.
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expiry_hours: config.token_expiry_hours,
        }
    }

    /// Issues a signed token for the given user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AuthError::InvalidToken)` - Encoding failed
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.expiry_hours);

        let claims = Claims {
            sub: user.id,
            gym_id: user.gym_id,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode session token: {e}");
            AuthError::InvalidToken
        })
    }

    /// Verifies a token's signature and expiry and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
