use crate::models::outcome::Outcome;
use crate::models::responses::HealthResponse;
use crate::routes::AppState;
use axum::{extract::State, response::Json};
use chrono::Utc;
use tracing::error;

pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, Outcome> {
    let books = state.catalog.book_count().await.map_err(|e| {
        error!("Health check failed: {}", e);
        Outcome::InternalError
    })?;

    Ok(Json(HealthResponse {
        service: "book-catalog".to_string(),
        status: "running".to_string(),
        books,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
