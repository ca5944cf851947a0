//! PostgreSQL implementation of author repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Author, BookRef, NewAuthor};
use crate::domain::repositories::{AuthorFilter, AuthorRepository};
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    first_name: String,
    last_name: String,
}

#[derive(Debug, FromRow)]
struct AuthorBookRow {
    author_id: i64,
    id: i64,
    title: String,
}

/// PostgreSQL repository for authors.
///
/// Never writes `book_authors` except through the cascade when an author is
/// deleted.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

async fn assemble(conn: &mut PgConnection, rows: Vec<AuthorRow>) -> Result<Vec<Author>, AppError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let links = sqlx::query_as::<_, AuthorBookRow>(
        r#"
        SELECT ba.author_id, b.id, b.title
        FROM book_authors ba
        JOIN books b ON b.id = ba.book_id
        WHERE ba.author_id = ANY($1)
        ORDER BY ba.author_id, b.id
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?;

    let mut books: HashMap<i64, Vec<BookRef>> = HashMap::new();
    for link in links {
        books.entry(link.author_id).or_default().push(BookRef {
            id: link.id,
            title: link.title,
        });
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let author_books = books.remove(&row.id).unwrap_or_default();
            Author::new(row.id, row.first_name, row.last_name, author_books)
        })
        .collect())
}

async fn load_author(conn: &mut PgConnection, id: i64) -> Result<Option<Author>, AppError> {
    let row = sqlx::query_as::<_, AuthorRow>(
        "SELECT id, first_name, last_name FROM authors WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    match row {
        Some(row) => Ok(assemble(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO authors (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&new_author.first_name)
        .bind(&new_author.last_name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Author::new(row.id, row.first_name, row.last_name, Vec::new()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        let mut conn = self.pool.acquire().await?;
        load_author(&mut conn, id).await
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        self.search(&AuthorFilter::new()).await
    }

    async fn search(&self, filter: &AuthorFilter) -> Result<Vec<Author>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT a.id, a.first_name, a.last_name FROM authors a WHERE TRUE",
        );
        if let Some(last_name) = &filter.last_name {
            qb.push(" AND a.last_name = ").push_bind(last_name.clone());
        }
        if let Some(title) = &filter.book_title {
            qb.push(
                " AND EXISTS (SELECT 1 FROM book_authors ba JOIN books b ON b.id = ba.book_id \
                 WHERE ba.author_id = a.id AND b.title = ",
            )
            .push_bind(title.clone())
            .push(")");
        }
        qb.push(" ORDER BY a.id");

        let mut conn = self.pool.acquire().await?;
        let rows = qb
            .build_query_as::<AuthorRow>()
            .fetch_all(&mut *conn)
            .await?;

        assemble(&mut conn, rows).await
    }

    async fn update(&self, id: i64, author: NewAuthor) -> Result<Author, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE authors SET first_name = $2, last_name = $3 WHERE id = $1")
            .bind(id)
            .bind(&author.first_name)
            .bind(&author.last_name)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Author not found", json!({ "id": id })));
        }

        let updated = load_author(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "id": id })))?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> =
            sqlx::query_scalar("SELECT id FROM authors WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Err(AppError::not_found("Author not found", json!({ "id": id })));
        }

        let orphaned: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT ba.book_id
            FROM book_authors ba
            WHERE ba.author_id = $1
              AND NOT EXISTS (
                  SELECT 1 FROM book_authors other
                  WHERE other.book_id = ba.book_id AND other.author_id <> $1
              )
            ORDER BY ba.book_id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        if !orphaned.is_empty() {
            return Err(AppError::conflict(
                "Author is the only author of some books",
                json!({ "id": id, "bookIds": orphaned }),
            ));
        }

        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
