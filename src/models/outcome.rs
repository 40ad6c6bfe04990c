use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Result of a catalog operation, as reported back to HTTP clients.
///
/// The discriminants are the internal status codes; `status_line` maps each
/// one to the HTTP status and plain-text message sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Ok = 0,
    Created = 1,
    NotModified = 2,
    BadRequest = 3,
    NotFound = 4,
    InternalError = 5,
}

impl Outcome {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Unknown codes collapse to `InternalError`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Outcome::Ok,
            1 => Outcome::Created,
            2 => Outcome::NotModified,
            3 => Outcome::BadRequest,
            4 => Outcome::NotFound,
            _ => Outcome::InternalError,
        }
    }

    pub fn status_line(self) -> (StatusCode, &'static str) {
        match self {
            Outcome::Ok => (StatusCode::OK, "OK"),
            Outcome::Created => (StatusCode::CREATED, "New Book Created"),
            Outcome::NotModified => (StatusCode::NOT_MODIFIED, "Book Not Modified"),
            Outcome::BadRequest => (StatusCode::BAD_REQUEST, "Bad Request"),
            Outcome::NotFound => (StatusCode::NOT_FOUND, "Resource Not Found"),
            Outcome::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        self.status_line().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table() {
        let table = [
            (0, 200, "OK"),
            (1, 201, "New Book Created"),
            (2, 304, "Book Not Modified"),
            (3, 400, "Bad Request"),
            (4, 404, "Resource Not Found"),
            (5, 500, "Internal Server Error"),
        ];

        for (code, http, message) in table {
            let (status, text) = Outcome::from_code(code).status_line();
            assert_eq!(status.as_u16(), http, "code {}", code);
            assert_eq!(text, message);
        }
    }

    #[test]
    fn unknown_codes_are_internal_errors() {
        assert_eq!(Outcome::from_code(-1), Outcome::InternalError);
        assert_eq!(Outcome::from_code(42), Outcome::InternalError);
    }

    #[test]
    fn code_matches_discriminant() {
        assert_eq!(Outcome::Created.code(), 1);
        assert_eq!(Outcome::from_code(Outcome::NotFound.code()), Outcome::NotFound);
        assert_eq!(Outcome::default(), Outcome::Ok);
    }

    #[test]
    fn into_response_uses_mapped_status() {
        let response = Outcome::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
