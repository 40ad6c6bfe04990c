use crate::models::book::Book;
use crate::models::outcome::Outcome;
use crate::models::storage::StorageError;
use crate::routes::AppState;
use crate::utils::payload::BookPayload;
use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tracing::{debug, error, info};

fn storage_failure(action: &str, e: StorageError) -> Outcome {
    error!("Failed to {}: {}", action, e);
    Outcome::InternalError
}

pub async fn insert_book(
    State(state): State<AppState>,
    BookPayload(book): BookPayload,
) -> Outcome {
    debug!("Inserting book {:?}", book);

    state
        .catalog
        .insert_book(book)
        .await
        .unwrap_or_else(|e| storage_failure("insert book", e))
}

pub async fn get_book(
    Path(book_name): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.catalog.get_book_by_name(&book_name).await {
        Ok(Some(book)) => Json(book).into_response(),
        Ok(None) => {
            info!("Book '{}' not found", book_name);
            if state.strict_lookup {
                Outcome::NotFound.into_response()
            } else {
                Json(None::<Book>).into_response()
            }
        }
        Err(e) => storage_failure("look up book", e).into_response(),
    }
}

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, Outcome> {
    state
        .catalog
        .list_books()
        .await
        .map(Json)
        .map_err(|e| storage_failure("list books", e))
}

/// The stored name always comes from the body; the path segment is informational.
pub async fn update_book(
    path: Option<Path<String>>,
    State(state): State<AppState>,
    BookPayload(book): BookPayload,
) -> Outcome {
    if let Some(Path(book_name)) = path {
        if book_name != book.name {
            debug!(
                "Update addressed to '{}' carries book '{}'",
                book_name, book.name
            );
        }
    }

    state
        .catalog
        .update_book(book)
        .await
        .unwrap_or_else(|e| storage_failure("update book", e))
}

pub async fn delete_book(
    Path(book_name): Path<String>,
    State(state): State<AppState>,
) -> Outcome {
    match state.catalog.delete_book(&book_name).await {
        Ok(outcome) => {
            info!("Delete '{}': {:?}", book_name, outcome);
            outcome
        }
        Err(e) => storage_failure("delete book", e),
    }
}

pub async fn redirect_to_books() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, "/books")])
}
