use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::AuthContext,
    service::token::TokenService,
};

/// Guard that authenticates a request from its `Authorization` header.
///
/// Verifies the bearer token, reloads the user to catch deleted accounts, and
/// yields an [`AuthContext`] carrying the caller's user id and gym id. The
/// context is passed explicitly into service calls so every gym-ownership check
/// is made against the authenticated caller, never ambient state.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request.
    ///
    /// # Returns
    /// - `Ok(AuthContext)` - Caller's user id and gym id
    /// - `Err(AuthError)` - Missing/invalid token or user no longer exists
    pub async fn require(&self) -> Result<AuthContext, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        // The gym id comes from the user row, not the token, so a staff account
        // moved between gyms is scoped correctly on its next request.
        Ok(AuthContext {
            user_id: user.id,
            gym_id: user.gym_id,
        })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
