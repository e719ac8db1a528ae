use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{check_in, enrollment, gym, help_order, plan, session, student, user},
    state::AppState,
};

/// OpenAPI documentation for the gym-management API.
///
/// Served interactively at `/docs`, with the raw specification at
/// `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GymDesk API",
        description = "Gym-management backend: staff sessions, students, plans, enrollments, check-ins, and help orders"
    ),
    paths(
        session::create_session,
        user::register_user,
        user::get_users,
        user::update_user,
        gym::get_gyms,
        gym::create_gym,
        gym::update_gym,
        gym::delete_gym,
        student::create_student,
        student::get_students,
        student::get_student,
        student::update_student,
        student::delete_student,
        plan::get_plans,
        plan::get_plan,
        plan::create_plan,
        plan::update_plan,
        plan::delete_plan,
        enrollment::get_enrollments,
        enrollment::create_enrollment,
        enrollment::update_enrollment,
        enrollment::delete_enrollment,
        check_in::get_check_ins,
        check_in::create_check_in,
        help_order::create_help_order,
        help_order::get_student_help_orders,
        help_order::get_unanswered_help_orders,
        help_order::answer_help_order,
        help_order::delete_help_order,
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(session::create_session))
        .route(
            "/users",
            post(user::register_user)
                .get(user::get_users)
                .put(user::update_user),
        )
        .route(
            "/gyms",
            get(gym::get_gyms)
                .post(gym::create_gym)
                .put(gym::update_gym)
                .delete(gym::delete_gym),
        )
        .route(
            "/students",
            post(student::create_student).get(student::get_students),
        )
        .route(
            "/students/{student_id}",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/students/{student_id}/checkin",
            get(check_in::get_check_ins).post(check_in::create_check_in),
        )
        .route(
            "/students/{student_id}/help-orders",
            post(help_order::create_help_order).get(help_order::get_student_help_orders),
        )
        .route("/plans", get(plan::get_plans).post(plan::create_plan))
        .route(
            "/plans/{plan_id}",
            get(plan::get_plan)
                .put(plan::update_plan)
                .delete(plan::delete_plan),
        )
        .route(
            "/enrollments",
            get(enrollment::get_enrollments).post(enrollment::create_enrollment),
        )
        .route(
            "/enrollments/{enrollment_id}",
            put(enrollment::update_enrollment).delete(enrollment::delete_enrollment),
        )
        .route(
            "/help-orders",
            get(help_order::get_unanswered_help_orders),
        )
        .route(
            "/help-orders/{help_order_id}/answer",
            put(help_order::answer_help_order),
        )
        .route(
            "/help-orders/{help_order_id}",
            axum::routing::delete(help_order::delete_help_order),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
