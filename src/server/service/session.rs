use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

/// Login flow: verifies credentials and issues a session token.
pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Authenticates a staff user by email and password.
    ///
    /// Unknown email and wrong password produce the same error, so the login
    /// endpoint does not reveal which accounts exist.
    ///
    /// # Returns
    /// - `Ok((token, user))` - Signed session token and the authenticated user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_credentials(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = bcrypt::verify(password, &credentials.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&credentials.user)?;

        Ok((token, credentials.user))
    }
}
