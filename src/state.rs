//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthorService, BookService};
use crate::domain::repositories::{AuthorRepository, BookRepository};
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::persistence::{PgAuthorRepository, PgBookRepository};

#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
    pub author_service: Arc<AuthorService>,
}

impl AppState {
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        author_repository: Arc<dyn AuthorRepository>,
    ) -> Self {
        Self {
            book_service: Arc::new(BookService::new(book_repository)),
            author_service: Arc::new(AuthorService::new(author_repository)),
        }
    }

    /// State backed by the PostgreSQL repositories.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self::new(
            Arc::new(PgBookRepository::new(pool.clone())),
            Arc::new(PgAuthorRepository::new(pool)),
        )
    }

    /// State backed by one in-process store serving both repositories.
    pub fn in_memory(store: MemoryStore) -> Self {
        Self::new(Arc::new(store.clone()), Arc::new(store))
    }
}
