use serde::{Deserialize, Serialize};

/// A catalog record. `name` is the identity key; nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub num_pages: i32,
}

impl Book {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            content: String::new(),
            num_pages: 0,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>, num_pages: i32) -> Self {
        self.content = content.into();
        self.num_pages = num_pages;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let book: Book = serde_json::from_value(json!({
            "name": "Dune",
            "author": "Frank Herbert"
        }))
        .unwrap();

        assert_eq!(book, Book::new("Dune", "Frank Herbert"));
    }

    #[test]
    fn serializes_with_camel_case_page_count() {
        let book = Book::new("Dune", "Frank Herbert").with_content("spice", 412);
        let value = serde_json::to_value(&book).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Dune",
                "author": "Frank Herbert",
                "content": "spice",
                "numPages": 412
            })
        );
    }

    #[test]
    fn missing_author_is_rejected() {
        let result = serde_json::from_value::<Book>(json!({ "name": "Dune" }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_name_is_accepted() {
        let book: Book = serde_json::from_str(r#"{"name":"","author":"anon"}"#).unwrap();
        assert!(book.name.is_empty());
    }
}
