use crate::models::book::Book;
use crate::models::outcome::Outcome;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use tracing::warn;

/// A `Book` decoded from the request body.
///
/// Unlike `axum::Json`, the Content-Type header is not checked and every
/// decoding failure is answered with `400 Bad Request`.
#[derive(Debug)]
pub struct BookPayload(pub Book);

#[async_trait]
impl<S> FromRequest<S> for BookPayload
where
    S: Send + Sync,
{
    type Rejection = Outcome;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| Outcome::BadRequest)?;

        decode_book(&body).map(BookPayload)
    }
}

pub fn decode_book(body: &[u8]) -> Result<Book, Outcome> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected book payload: {}", e);
        Outcome::BadRequest
    })
}
