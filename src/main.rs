use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

mod builder;
mod catalog;
mod display;
mod models;

use models::{ApiResponse, DailyInput, RoutineError};

fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/routine", post(create_routine))
        .route("/activities", get(list_activities))
        .route("/activities/:id", get(get_activity))
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let addr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8080)));
    tracing::info!("Routine planner API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app()).await.unwrap();
}

async fn root() -> &'static str {
    "Routine Planner API v0.1.0"
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Plan tomorrow from one day of self-reported metrics
async fn create_routine(
    Json(input): Json<DailyInput>,
) -> (StatusCode, Json<ApiResponse>) {
    match builder::build_routine(&input) {
        Ok(routine) => {
            let rendered = display::render_routine(&routine);
            let response = ApiResponse {
                status: "success".to_string(),
                message: format!(
                    "Planned {} blocks for tomorrow ({} intensity)",
                    routine.blocks.len(),
                    routine.intensity.as_str()
                ),
                data: Some(serde_json::json!({
                    "id": Uuid::new_v4(),
                    "generated_at": Utc::now().to_rfc3339(),
                    "intensity": routine.intensity,
                    "blocks": routine.blocks,
                    "display": rendered,
                })),
            };
            (StatusCode::OK, Json(response))
        }
        Err(err @ RoutineError::InvalidInput { .. }) => {
            tracing::warn!("rejected routine request: {}", err);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse {
                    status: "error".to_string(),
                    message: err.to_string(),
                    data: None,
                }),
            )
        }
        Err(err) => {
            // Rule table referenced an id missing from the catalog
            tracing::error!("routine construction defect: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse {
                    status: "error".to_string(),
                    message: err.to_string(),
                    data: None,
                }),
            )
        }
    }
}

/// Full catalog listing (read-only)
async fn list_activities() -> Json<serde_json::Value> {
    let activities = catalog::all();
    Json(serde_json::json!({
        "activities": activities,
        "count": activities.len(),
    }))
}

/// Single catalog entry, with a nearest-match hint on unknown ids
async fn get_activity(Path(id): Path<String>) -> (StatusCode, Json<ApiResponse>) {
    match catalog::parse(&id).and_then(catalog::lookup) {
        Ok(def) => (
            StatusCode::OK,
            Json(ApiResponse {
                status: "success".to_string(),
                message: display::title_case(def.id.as_str()),
                data: Some(serde_json::json!({ "activity": def })),
            }),
        ),
        Err(err) => {
            let message = match catalog::closest(&id) {
                Some(suggestion) => format!("{} (did you mean '{}'?)", err, suggestion),
                None => err.to_string(),
            };
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse {
                    status: "error".to_string(),
                    message,
                    data: None,
                }),
            )
        }
    }
}
