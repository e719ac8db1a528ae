use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        gym::{CreateGymDto, GymDto, UpdateGymDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::gym::{CreateGymParams, UpdateGymParams},
        service::gym::GymService,
        state::AppState,
    },
};

pub static GYM_TAG: &str = "gym";

#[utoipa::path(
    get,
    path = "/gyms",
    tag = GYM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved gyms", body = Vec<GymDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gyms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let gyms = GymService::new(&state.db).get_all().await?;

    let dtos: Vec<GymDto> = gyms.into_iter().map(|gym| gym.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/gyms",
    tag = GYM_TAG,
    request_body = CreateGymDto,
    responses(
        (status = 201, description = "Successfully created gym", body = GymDto),
        (status = 400, description = "Invalid gym data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gym(
    State(state): State<AppState>,
    Json(payload): Json<CreateGymDto>,
) -> Result<impl IntoResponse, AppError> {
    let gym = GymService::new(&state.db)
        .create(CreateGymParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(gym.into_dto())))
}

#[utoipa::path(
    put,
    path = "/gyms",
    tag = GYM_TAG,
    request_body = UpdateGymDto,
    responses(
        (status = 200, description = "Successfully updated the caller's gym", body = GymDto),
        (status = 400, description = "Invalid gym data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateGymDto>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let gym = GymService::new(&state.db)
        .update(ctx, UpdateGymParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(gym.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/gyms",
    tag = GYM_TAG,
    responses(
        (status = 204, description = "Successfully deleted the caller's gym"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    GymService::new(&state.db).delete(ctx).await?;

    Ok(StatusCode::NO_CONTENT)
}
