use crate::routes::AppState;
use axum::{extract::State, response::Json};
use serde_json::{json, Value};

const TAG: &str = "Book Management";

pub async fn openapi(State(state): State<AppState>) -> Json<Value> {
    Json(document(&state.public_url))
}

fn text_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "text/plain": { "schema": { "type": "string" } } }
    })
}

fn book_name_param() -> Value {
    json!({
        "in": "path",
        "name": "bookName",
        "required": true,
        "schema": { "type": "string" }
    })
}

fn book_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Book" } }
        }
    })
}

/// OpenAPI 3.0 description of the book routes.
pub fn document(server_url: &str) -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Sample book management API",
            "description": "Sample OpenAPI Specification for a Book Management System",
            "version": "1.0"
        },
        "servers": [{ "url": server_url, "description": "Main Server" }],
        "tags": [{ "name": TAG, "description": "Managing book-related operations" }],
        "paths": {
            "/books": {
                "get": {
                    "tags": [TAG],
                    "summary": "List all the available books",
                    "responses": {
                        "200": {
                            "description": "List of books returned successfully!",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "tags": [TAG],
                    "summary": "Add a new book",
                    "requestBody": book_body(),
                    "responses": {
                        "200": text_response("Book details updated successfully!"),
                        "201": text_response("New book added successfully!"),
                        "400": text_response("Body is not a valid book")
                    }
                },
                "put": {
                    "tags": [TAG],
                    "summary": "Update a book",
                    "requestBody": book_body(),
                    "responses": {
                        "200": text_response("Book details updated successfully!"),
                        "304": { "description": "Book not found!" },
                        "400": text_response("Body is not a valid book")
                    }
                }
            },
            "/books/{bookName}": {
                "get": {
                    "tags": [TAG],
                    "summary": "List the book pointed to by bookName",
                    "parameters": [book_name_param()],
                    "responses": {
                        "200": {
                            "description": "The requested book, or null",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Book" }
                                }
                            }
                        }
                    }
                },
                "put": {
                    "tags": [TAG],
                    "summary": "Update a book",
                    "parameters": [book_name_param()],
                    "requestBody": book_body(),
                    "responses": {
                        "200": text_response("Book details updated successfully!"),
                        "304": { "description": "Book not found!" },
                        "400": text_response("Body is not a valid book")
                    }
                },
                "delete": {
                    "tags": [TAG],
                    "summary": "Delete a book",
                    "parameters": [book_name_param()],
                    "responses": {
                        "200": text_response("Book details deleted successfully!"),
                        "404": text_response("Book couldn't be located on the server!")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Book": {
                    "type": "object",
                    "required": ["name", "author"],
                    "properties": {
                        "name": { "type": "string" },
                        "author": { "type": "string" },
                        "content": { "type": "string", "default": "" },
                        "numPages": { "type": "integer", "format": "int32", "default": 0 }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_book_operation() {
        let doc = document("http://localhost:9000");

        assert_eq!(doc["servers"][0]["url"], "http://localhost:9000");
        for method in ["get", "post", "put"] {
            assert!(doc["paths"]["/books"][method].is_object(), "/books {}", method);
        }
        for method in ["get", "put", "delete"] {
            assert!(
                doc["paths"]["/books/{bookName}"][method].is_object(),
                "/books/{{bookName}} {}",
                method
            );
        }
        assert_eq!(
            doc["components"]["schemas"]["Book"]["required"],
            json!(["name", "author"])
        );
    }
}
