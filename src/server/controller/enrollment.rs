use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        enrollment::{CreateEnrollmentDto, EnrollmentDto, UpdateEnrollmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::enrollment::{CreateEnrollmentParams, UpdateEnrollmentParams},
        service::enrollment::EnrollmentService,
        state::AppState,
    },
};

pub static ENROLLMENT_TAG: &str = "enrollment";

#[utoipa::path(
    get,
    path = "/enrollments",
    tag = ENROLLMENT_TAG,
    responses(
        (status = 200, description = "Enrollments of the caller's gym", body = Vec<EnrollmentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrollments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let enrollments = EnrollmentService::new(&state.db, &state.queue)
        .get_by_gym(ctx)
        .await?;

    let dtos: Vec<EnrollmentDto> = enrollments.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/enrollments",
    tag = ENROLLMENT_TAG,
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Successfully enrolled student", body = EnrollmentDto),
        (status = 400, description = "Start hour in the past", body = ErrorDto),
        (status = 401, description = "Student belongs to another gym", body = ErrorDto),
        (status = 404, description = "Student or plan not found", body = ErrorDto),
        (status = 409, description = "Student already enrolled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let enrollment = EnrollmentService::new(&state.db, &state.queue)
        .create(ctx, CreateEnrollmentParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(enrollment.into_dto())))
}

#[utoipa::path(
    put,
    path = "/enrollments/{enrollment_id}",
    tag = ENROLLMENT_TAG,
    params(
        ("enrollment_id" = i32, Path, description = "Enrollment ID")
    ),
    request_body = UpdateEnrollmentDto,
    responses(
        (status = 200, description = "Successfully updated enrollment", body = EnrollmentDto),
        (status = 400, description = "Fallback plan vanished or start hour in the past", body = ErrorDto),
        (status = 401, description = "Enrollment belongs to another gym", body = ErrorDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(enrollment_id): Path<i32>,
    Json(payload): Json<UpdateEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let enrollment = EnrollmentService::new(&state.db, &state.queue)
        .update(ctx, enrollment_id, UpdateEnrollmentParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(enrollment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/enrollments/{enrollment_id}",
    tag = ENROLLMENT_TAG,
    params(
        ("enrollment_id" = i32, Path, description = "Enrollment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted enrollment"),
        (status = 401, description = "Enrollment belongs to another gym", body = ErrorDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(enrollment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    EnrollmentService::new(&state.db, &state.queue)
        .delete(ctx, enrollment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
