use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, check_in::CheckInDto},
    server::{error::AppError, service::check_in::CheckInService, state::AppState},
};

pub static CHECK_IN_TAG: &str = "check_in";

#[utoipa::path(
    get,
    path = "/students/{student_id}/checkin",
    tag = CHECK_IN_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Check-in history, newest first", body = Vec<CheckInDto>),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_check_ins(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let check_ins = CheckInService::new(&state.db)
        .get_by_student(student_id)
        .await?;

    let dtos: Vec<CheckInDto> = check_ins.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/students/{student_id}/checkin",
    tag = CHECK_IN_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 201, description = "Successfully recorded check-in", body = CheckInDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_check_in(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let check_in = CheckInService::new(&state.db).create(student_id).await?;

    Ok((StatusCode::CREATED, Json(check_in.into_dto())))
}
