//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{AuthorRef, Book, Currency, Money, NewBook};
use crate::domain::repositories::{BookFilter, BookRepository};
use crate::error::AppError;

const BOOK_COLUMNS: &str =
    "b.id, b.title, b.description, b.published_date, b.price_amount, b.price_currency";

#[derive(Debug, FromRow)]
struct BookRow {
    id: i64,
    title: String,
    description: String,
    published_date: NaiveDate,
    price_amount: Decimal,
    price_currency: String,
}

#[derive(Debug, FromRow)]
struct BookAuthorRow {
    book_id: i64,
    id: i64,
    first_name: String,
    last_name: String,
}

/// PostgreSQL repository for books.
///
/// Writes the `books` row and its `book_authors` rows in one transaction.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Loads the ordered authors of every row and assembles the entities.
async fn assemble(conn: &mut PgConnection, rows: Vec<BookRow>) -> Result<Vec<Book>, AppError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let links = sqlx::query_as::<_, BookAuthorRow>(
        r#"
        SELECT ba.book_id, a.id, a.first_name, a.last_name
        FROM book_authors ba
        JOIN authors a ON a.id = ba.author_id
        WHERE ba.book_id = ANY($1)
        ORDER BY ba.book_id, ba.position
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?;

    let mut authors: HashMap<i64, Vec<AuthorRef>> = HashMap::new();
    for link in links {
        authors.entry(link.book_id).or_default().push(AuthorRef {
            id: link.id,
            first_name: link.first_name,
            last_name: link.last_name,
        });
    }

    rows.into_iter()
        .map(|row| {
            let currency: Currency = row.price_currency.parse().map_err(|e| {
                AppError::internal(
                    "Stored price has an unknown currency",
                    json!({ "bookId": row.id, "reason": format!("{e}") }),
                )
            })?;

            Ok(Book::new(
                row.id,
                row.title,
                row.description,
                row.published_date,
                Money::new(currency, row.price_amount),
                authors.remove(&row.id).unwrap_or_default(),
            ))
        })
        .collect()
}

async fn load_book(conn: &mut PgConnection, id: i64) -> Result<Option<Book>, AppError> {
    let row = sqlx::query_as::<_, BookRow>(&format!(
        "SELECT {BOOK_COLUMNS} FROM books b WHERE b.id = $1"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    match row {
        Some(row) => Ok(assemble(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

async fn ensure_authors_exist(conn: &mut PgConnection, author_ids: &[i64]) -> Result<(), AppError> {
    let found: Vec<i64> = sqlx::query_scalar("SELECT id FROM authors WHERE id = ANY($1)")
        .bind(author_ids)
        .fetch_all(&mut *conn)
        .await?;

    let missing: Vec<i64> = author_ids
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::not_found(
            "Author not found",
            json!({ "missingAuthorIds": missing }),
        ))
    }
}

/// Replaces the join rows of a book, keeping the given author order.
async fn link_authors(
    conn: &mut PgConnection,
    book_id: i64,
    author_ids: &[i64],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM book_authors WHERE book_id = $1")
        .bind(book_id)
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO book_authors (book_id, author_id, position)
        SELECT $1, t.author_id, (t.ord - 1)::INTEGER
        FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(author_id, ord)
        "#,
    )
    .bind(book_id)
    .bind(author_ids)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &BookFilter) {
    if let Some(title) = &filter.title {
        qb.push(" AND b.title = ").push_bind(title.clone());
    }
    if let Some(keyword) = &filter.title_contains {
        // strpos keeps '%' and '_' literal
        qb.push(" AND strpos(b.title, ")
            .push_bind(keyword.clone())
            .push(") > 0");
    }
    if let Some(date) = filter.published_after {
        qb.push(" AND b.published_date > ").push_bind(date);
    }
    if let Some(currency) = filter.currency {
        qb.push(" AND b.price_currency = ")
            .push_bind(currency.as_str());
    }
    if let Some((low, high)) = filter.amount_between {
        qb.push(" AND b.price_amount BETWEEN ")
            .push_bind(low)
            .push(" AND ")
            .push_bind(high);
    }
    if let Some(last_name) = &filter.author_last_name {
        qb.push(
            " AND EXISTS (SELECT 1 FROM book_authors ba JOIN authors a ON a.id = ba.author_id \
             WHERE ba.book_id = b.id AND a.last_name = ",
        )
        .push_bind(last_name.clone())
        .push(")");
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let author_ids = new_book.distinct_author_ids();
        let mut tx = self.pool.begin().await?;

        ensure_authors_exist(&mut tx, &author_ids).await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, description, published_date, price_amount, price_currency)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&new_book.title)
        .bind(&new_book.description)
        .bind(new_book.published_date)
        .bind(new_book.price.amount)
        .bind(new_book.price.currency.as_str())
        .fetch_one(&mut *tx)
        .await?;

        link_authors(&mut tx, id, &author_ids).await?;

        let book = load_book(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::internal("Created book vanished", json!({ "id": id })))?;

        tx.commit().await?;
        Ok(book)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let mut conn = self.pool.acquire().await?;
        load_book(&mut conn, id).await
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        self.search(&BookFilter::new()).await
    }

    async fn search(&self, filter: &BookFilter) -> Result<Vec<Book>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {BOOK_COLUMNS} FROM books b WHERE TRUE"
        ));
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY b.id");

        let mut conn = self.pool.acquire().await?;
        let rows = qb
            .build_query_as::<BookRow>()
            .fetch_all(&mut *conn)
            .await?;

        assemble(&mut conn, rows).await
    }

    async fn update(&self, id: i64, book: NewBook) -> Result<Book, AppError> {
        let author_ids = book.distinct_author_ids();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE books SET
                title          = $2,
                description    = $3,
                published_date = $4,
                price_amount   = $5,
                price_currency = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&book.title)
        .bind(&book.description)
        .bind(book.published_date)
        .bind(book.price.amount)
        .bind(book.price.currency.as_str())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Book not found", json!({ "id": id })));
        }

        ensure_authors_exist(&mut tx, &author_ids).await?;
        link_authors(&mut tx, id, &author_ids).await?;

        let updated = load_book(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // book_authors rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Book not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
