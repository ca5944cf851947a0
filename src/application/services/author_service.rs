//! Author service.

use serde_json::json;
use std::sync::Arc;

use super::validated;
use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::repositories::{AuthorFilter, AuthorRepository};
use crate::error::AppError;

/// Service for authors and the author-side finder operations.
///
/// Authors only carry their names; which books they wrote is decided when
/// books are written, see [`crate::application::services::BookService`].
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    /// Creates a new author service.
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a name is empty or longer than 255 characters.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_author(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        validated(&new_author, "author")?;
        let author = self.repository.create(new_author).await?;
        tracing::info!(author_id = author.id, name = %author.full_name(), "author created");
        Ok(author)
    }

    /// Retrieves an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_author(&self, id: i64) -> Result<Author, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "id": id })))
    }

    pub async fn list_authors(&self) -> Result<Vec<Author>, AppError> {
        self.repository.list().await
    }

    pub async fn count_authors(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Replaces the names of an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a name constraint is violated.
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn replace_author(&self, id: i64, author: NewAuthor) -> Result<Author, AppError> {
        validated(&author, "author")?;
        let author = self.repository.update(id, author).await?;
        tracing::info!(author_id = id, "author replaced");
        Ok(author)
    }

    /// Applies a partial update to an author.
    ///
    /// # Errors
    ///
    /// Same as [`AuthorService::replace_author`].
    pub async fn patch_author(&self, id: i64, patch: AuthorPatch) -> Result<Author, AppError> {
        let current = self.get_author(id).await?;
        let merged = patch.apply_to(&current);
        validated(&merged, "author")?;
        let author = self.repository.update(id, merged).await?;
        tracing::info!(author_id = id, "author patched");
        Ok(author)
    }

    /// Deletes an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Conflict`] if a book would be left without authors.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_author(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(author_id = id, "author deleted");
        Ok(())
    }

    /// Authors whose last name equals `last_name` exactly.
    pub async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Author>, AppError> {
        self.repository
            .search(&AuthorFilter::new().with_last_name(last_name))
            .await
    }

    /// Authors of at least one book titled exactly `title`.
    pub async fn find_by_books_title(&self, title: &str) -> Result<Vec<Author>, AppError> {
        self.repository
            .search(&AuthorFilter::new().with_book_title(title))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BookRef;
    use crate::domain::repositories::MockAuthorRepository;

    fn stored_author(id: i64) -> Author {
        Author::new(
            id,
            "Rajesh".to_string(),
            "RV".to_string(),
            vec![BookRef {
                id: 2,
                title: "Pro Spring Boot".to_string(),
            }],
        )
    }

    #[tokio::test]
    async fn test_create_author_success() {
        let mut mock_repo = MockAuthorRepository::new();
        mock_repo
            .expect_create()
            .withf(|a| a.first_name == "Rajesh" && a.last_name == "RV")
            .times(1)
            .returning(|a| Ok(Author::new(1, a.first_name, a.last_name, vec![])));

        let service = AuthorService::new(Arc::new(mock_repo));

        let author = service
            .create_author(NewAuthor::new("Rajesh", "RV"))
            .await
            .unwrap();

        assert_eq!(author.id, 1);
        assert!(author.books.is_empty());
    }

    #[tokio::test]
    async fn test_create_author_with_blank_name_is_rejected() {
        let mut mock_repo = MockAuthorRepository::new();
        mock_repo.expect_create().times(0);

        let service = AuthorService::new(Arc::new(mock_repo));

        let err = service
            .create_author(NewAuthor::new("Rajesh", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.details()["fields"].get("lastName").is_some());
    }

    #[tokio::test]
    async fn test_patch_author_keeps_other_name() {
        let mut mock_repo = MockAuthorRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_author(id))));
        mock_repo
            .expect_update()
            .withf(|id, a| *id == 3 && a.first_name == "Rajesh" && a.last_name == "R. V.")
            .times(1)
            .returning(|id, a| Ok(Author::new(id, a.first_name, a.last_name, vec![])));

        let service = AuthorService::new(Arc::new(mock_repo));

        let patch = AuthorPatch {
            last_name: Some("R. V.".to_string()),
            ..Default::default()
        };
        let author = service.patch_author(3, patch).await.unwrap();

        assert_eq!(author.last_name, "R. V.");
    }

    #[tokio::test]
    async fn test_get_author_not_found() {
        let mut mock_repo = MockAuthorRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = AuthorService::new(Arc::new(mock_repo));

        let result = service.get_author(9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_propagates_conflict() {
        let mut mock_repo = MockAuthorRepository::new();
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|id| Err(AppError::conflict("sole author", json!({ "id": id }))));

        let service = AuthorService::new(Arc::new(mock_repo));

        let result = service.delete_author(1).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_find_by_books_title_uses_traversal_filter() {
        let mut mock_repo = MockAuthorRepository::new();
        mock_repo
            .expect_search()
            .withf(|f| *f == AuthorFilter::new().with_book_title("Pro Spring Boot"))
            .times(1)
            .returning(|_| Ok(vec![stored_author(1)]));

        let service = AuthorService::new(Arc::new(mock_repo));

        let found = service.find_by_books_title("Pro Spring Boot").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].last_name, "RV");
    }
}
