use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        plan::{CreatePlanDto, PlanDto, UpdatePlanDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::plan::{CreatePlanParams, UpdatePlanParams},
        service::plan::PlanService,
        state::AppState,
    },
};

pub static PLAN_TAG: &str = "plan";

#[utoipa::path(
    get,
    path = "/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved plans", body = Vec<PlanDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let plans = PlanService::new(&state.db).get_all().await?;

    let dtos: Vec<PlanDto> = plans.into_iter().map(|plan| plan.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/plans/{plan_id}",
    tag = PLAN_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved plan", body = PlanDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let plan = PlanService::new(&state.db).get(plan_id).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

#[utoipa::path(
    post,
    path = "/plans",
    tag = PLAN_TAG,
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Successfully created plan", body = PlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let plan = PlanService::new(&state.db)
        .create(CreatePlanParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

#[utoipa::path(
    put,
    path = "/plans/{plan_id}",
    tag = PLAN_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan ID")
    ),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Successfully updated plan", body = PlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
    Json(payload): Json<UpdatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let plan = PlanService::new(&state.db)
        .update(plan_id, UpdatePlanParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/plans/{plan_id}",
    tag = PLAN_TAG,
    params(
        ("plan_id" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted plan"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(plan_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    PlanService::new(&state.db).delete(plan_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
