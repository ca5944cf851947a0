//! Core domain entities of the catalog.
//!
//! Entities are plain data structures; validation rules are declared on the
//! input types and enforced by the application services before anything
//! reaches a repository.
//!
//! # Entity Types
//!
//! - [`Book`] - A catalogued book, owning side of the book/author relation
//! - [`Author`] - A book author, inverse side of the relation
//! - [`Money`] - Price value object embedded into a book
//!
//! # Design Pattern
//!
//! Following the "New Type" pattern, separate structs carry writes:
//! - `NewBook`, `NewAuthor` - For creating or fully replacing records
//! - `BookPatch`, `AuthorPatch` - For partial updates

pub mod author;
pub mod book;
pub mod money;

pub use author::{Author, AuthorPatch, BookRef, NewAuthor};
pub use book::{AuthorRef, Book, BookPatch, NewBook};
pub use money::{Currency, Money, UnknownCurrency};

use validator::ValidationError;

/// Rejects control characters other than whitespace in free text.
///
/// PostgreSQL cannot store NUL in `TEXT`/`VARCHAR` columns.
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(|c| c.is_control() && !c.is_whitespace()) {
        return Err(ValidationError::new("control_character")
            .with_message("text must not contain control characters".into()));
    }
    Ok(())
}
