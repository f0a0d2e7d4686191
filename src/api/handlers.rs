use actix_web::{http::header, web, HttpResponse};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{HealthResponse, SignupQuery, SignupResponse};
use crate::state::AppState;

pub async fn root(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, state.config.index_path.as_str()))
        .finish()
}

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        uptime_seconds: state.uptime_seconds(),
        activities: state.activities.count().await,
    };

    HttpResponse::Ok().json(response)
}

pub async fn get_activities(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.activities.list().await)
}

pub async fn get_activity(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let activity = state
        .activities
        .get(&path)
        .await
        .ok_or_else(AppError::activity_not_found)?;

    Ok(HttpResponse::Ok().json(activity))
}

// POST /activities/{activity_name}/signup?email=...
pub async fn signup_for_activity(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SignupQuery>,
) -> AppResult<HttpResponse> {
    let activity_name = path.into_inner();
    info!("Signup request for {}", activity_name);

    let email = state
        .activities
        .signup(&activity_name, &query.email)
        .await?;

    Ok(HttpResponse::Ok().json(SignupResponse::new(&email, &activity_name)))
}
