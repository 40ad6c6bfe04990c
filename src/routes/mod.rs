pub mod books;
pub mod docs;
pub mod health;

use crate::config::Config;
use crate::models::storage::Catalog;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use books::{delete_book, get_book, insert_book, list_books, redirect_to_books, update_book};
use docs::openapi;
use health::health_check;

pub type Backend = Arc<dyn Catalog + Send + Sync>;

/// Shared by every route; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Backend,
    pub strict_lookup: bool,
    pub public_url: Arc<str>,
}

impl AppState {
    pub fn new(catalog: Backend, config: &Config) -> Self {
        Self {
            catalog,
            strict_lookup: config.strict_lookup,
            public_url: Arc::from(config.public_url.as_str()),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_to_books))
        .route("/books", get(list_books).post(insert_book).put(update_book))
        .route(
            "/books/:book_name",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/status", get(health_check))
        .route("/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
