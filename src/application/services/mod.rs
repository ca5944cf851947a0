//! Business logic services for the application layer.

pub mod author_service;
pub mod book_service;

pub use author_service::AuthorService;
pub use book_service::BookService;

use crate::error::AppError;
use validator::Validate;

/// Runs the declared constraints of a write model before it reaches a repository.
fn validated<T: Validate>(input: &T, entity: &'static str) -> Result<(), AppError> {
    input.validate().map_err(|errors| {
        tracing::debug!(entity, %errors, "rejected invalid input");
        AppError::from(errors)
    })
}
