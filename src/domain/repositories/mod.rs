//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`BookRepository`] - Book CRUD, owner of the book/author join
//! - [`AuthorRepository`] - Author CRUD, inverse view of the join
//!
//! Finder criteria are expressed with [`BookFilter`] and [`AuthorFilter`].

pub mod author_repository;
pub mod book_repository;
pub mod filter;

pub use author_repository::AuthorRepository;
pub use book_repository::BookRepository;
pub use filter::{AuthorFilter, BookFilter};

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use book_repository::MockBookRepository;
