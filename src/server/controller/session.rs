use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        session::{LoginDto, SessionDto},
    },
    server::{error::AppError, service::session::SessionService, state::AppState},
};

pub static SESSION_TAG: &str = "session";

#[utoipa::path(
    post,
    path = "/sessions",
    tag = SESSION_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully authenticated", body = SessionDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = SessionService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SessionDto {
            token,
            user: user.into_dto(),
        }),
    ))
}
