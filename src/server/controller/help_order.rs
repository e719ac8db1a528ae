use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        help_order::{AnswerHelpOrderDto, CreateHelpOrderDto, HelpOrderDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::help_order::HelpOrderService,
        state::AppState,
    },
};

pub static HELP_ORDER_TAG: &str = "help_order";

#[utoipa::path(
    post,
    path = "/students/{student_id}/help-orders",
    tag = HELP_ORDER_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = CreateHelpOrderDto,
    responses(
        (status = 201, description = "Successfully filed question", body = HelpOrderDto),
        (status = 400, description = "Question too short", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Student has no enrollment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_help_order(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
    Json(payload): Json<CreateHelpOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = HelpOrderService::new(&state.db, &state.queue)
        .create(student_id, payload.question)
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/students/{student_id}/help-orders",
    tag = HELP_ORDER_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "The student's help orders, oldest first", body = Vec<HelpOrderDto>),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Student has no enrollment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_help_orders(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let orders = HelpOrderService::new(&state.db, &state.queue)
        .get_by_student(student_id)
        .await?;

    let dtos: Vec<HelpOrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/help-orders",
    tag = HELP_ORDER_TAG,
    responses(
        (status = 200, description = "Unanswered orders of the caller's gym", body = Vec<HelpOrderDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unanswered_help_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let orders = HelpOrderService::new(&state.db, &state.queue)
        .get_unanswered(ctx)
        .await?;

    let dtos: Vec<HelpOrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    put,
    path = "/help-orders/{help_order_id}/answer",
    tag = HELP_ORDER_TAG,
    params(
        ("help_order_id" = i32, Path, description = "Help order ID")
    ),
    request_body = AnswerHelpOrderDto,
    responses(
        (status = 200, description = "Successfully answered help order", body = HelpOrderDto),
        (status = 400, description = "Answer too short", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Help order not found in the caller's gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn answer_help_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(help_order_id): Path<i32>,
    Json(payload): Json<AnswerHelpOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let order = HelpOrderService::new(&state.db, &state.queue)
        .answer(ctx, help_order_id, payload.answer)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/help-orders/{help_order_id}",
    tag = HELP_ORDER_TAG,
    params(
        ("help_order_id" = i32, Path, description = "Help order ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted help order"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Help order not found in the caller's gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_help_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(help_order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    HelpOrderService::new(&state.db, &state.queue)
        .delete(ctx, help_order_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
