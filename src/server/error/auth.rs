use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature or expiry validation.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// Token verified but the user it references no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Unknown email or wrong password during session creation.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated caller tried to act on a record owned by another gym.
    ///
    /// The message names the operation that was denied, never the record's gym.
    #[error("{0}")]
    GymAccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized. Token and lookup failures share a
/// generic client-facing message; gym-ownership denials surface the operation
/// message so staff know which action was rejected. Details are logged at
/// debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth failure: {}", self);

        let message = match self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotInDatabase(_) => {
                "Token invalid or missing, please sign in again.".to_string()
            }
            Self::InvalidCredentials => "Invalid email or password.".to_string(),
            Self::GymAccessDenied(msg) => msg,
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto { error: message })).into_response()
    }
}
