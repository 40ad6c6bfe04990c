use crate::models::book::Book;
use crate::models::outcome::Outcome;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Catalog lock poisoned by a panicking writer")]
    Poisoned,
}

#[async_trait]
pub trait Catalog {
    async fn insert_book(&self, book: Book) -> Result<Outcome, StorageError>;
    async fn update_book(&self, book: Book) -> Result<Outcome, StorageError>;
    async fn delete_book(&self, name: &str) -> Result<Outcome, StorageError>;
    async fn get_book_by_name(&self, name: &str) -> Result<Option<Book>, StorageError>;
    async fn list_books(&self) -> Result<Vec<Book>, StorageError>;
    async fn last_outcome(&self) -> Result<Outcome, StorageError>;
    async fn book_count(&self) -> Result<usize, StorageError>;
    async fn test_connection(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct Shelves {
    books: HashMap<String, Book>,
    last_outcome: Outcome,
}

impl Shelves {
    /// Upserts `book` and reports whether the name was already present.
    fn put(&mut self, book: Book) -> bool {
        self.books.insert(book.name.clone(), book).is_some()
    }

    fn record(&mut self, outcome: Outcome) -> Outcome {
        self.last_outcome = outcome;
        outcome
    }
}

/// In-memory catalog keyed by book name.
///
/// The map and the outcome of the most recent write live behind a single
/// lock, so each write observes and reports its own result.
#[derive(Debug, Default)]
pub struct Library {
    shelves: RwLock<Shelves>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Shelves>, StorageError> {
        self.shelves.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Shelves>, StorageError> {
        self.shelves.write().map_err(|_| StorageError::Poisoned)
    }
}

#[async_trait]
impl Catalog for Library {
    async fn insert_book(&self, book: Book) -> Result<Outcome, StorageError> {
        let mut shelves = self.write()?;
        let outcome = if shelves.put(book) {
            Outcome::Ok
        } else {
            Outcome::Created
        };
        Ok(shelves.record(outcome))
    }

    async fn update_book(&self, book: Book) -> Result<Outcome, StorageError> {
        let mut shelves = self.write()?;
        // Absent names are still stored; the caller only learns nothing was there.
        let outcome = if shelves.put(book) {
            Outcome::Ok
        } else {
            Outcome::NotModified
        };
        Ok(shelves.record(outcome))
    }

    async fn delete_book(&self, name: &str) -> Result<Outcome, StorageError> {
        let mut shelves = self.write()?;
        let outcome = match shelves.books.remove(name) {
            Some(_) => Outcome::Ok,
            None => Outcome::NotFound,
        };
        Ok(shelves.record(outcome))
    }

    async fn get_book_by_name(&self, name: &str) -> Result<Option<Book>, StorageError> {
        Ok(self.read()?.books.get(name).cloned())
    }

    async fn list_books(&self) -> Result<Vec<Book>, StorageError> {
        Ok(self.read()?.books.values().cloned().collect())
    }

    async fn last_outcome(&self) -> Result<Outcome, StorageError> {
        Ok(self.read()?.last_outcome)
    }

    async fn book_count(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.books.len())
    }

    async fn test_connection(&self) -> Result<(), StorageError> {
        self.read().map(|_| ())
    }
}
