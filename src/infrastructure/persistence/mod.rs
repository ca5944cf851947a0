//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries are
//! checked at runtime (`query_as` + `FromRow`), and derived finders are built
//! with [`sqlx::QueryBuilder`] from the domain filters.
//!
//! # Repositories
//!
//! - [`PgBookRepository`] - Books, their embedded price and the author join
//! - [`PgAuthorRepository`] - Authors and the inverse view of the join

pub mod pg_author_repository;
pub mod pg_book_repository;

pub use pg_author_repository::PgAuthorRepository;
pub use pg_book_repository::PgBookRepository;
