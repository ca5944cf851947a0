//! PostgreSQL repository tests.
//!
//! `#[sqlx::test]` creates a throwaway database per test from `DATABASE_URL`
//! and applies `./migrations` to it.

use book_catalog::domain::entities::{Currency, Money, NewAuthor, NewBook};
use book_catalog::domain::repositories::{
    AuthorFilter, AuthorRepository, BookFilter, BookRepository,
};
use book_catalog::error::AppError;
use book_catalog::infrastructure::persistence::{PgAuthorRepository, PgBookRepository};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

fn repos(pool: PgPool) -> (PgBookRepository, PgAuthorRepository) {
    let pool = Arc::new(pool);
    (
        PgBookRepository::new(pool.clone()),
        PgAuthorRepository::new(pool),
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_book(title: &str, published: NaiveDate, cents: i64, authors: Vec<i64>) -> NewBook {
    NewBook::new(
        title,
        "D",
        published,
        Money::usd(Decimal::new(cents, 2)),
        authors,
    )
}

#[sqlx::test]
async fn test_create_and_find_book(pool: PgPool) {
    let (books, authors) = repos(pool);
    let a = authors.create(NewAuthor::new("Ada", "Lovelace")).await.unwrap();
    let b = authors.create(NewAuthor::new("Charles", "Babbage")).await.unwrap();

    let created = books
        .create(new_book("T", date(2020, 1, 1), 999, vec![b.id, a.id, b.id]))
        .await
        .unwrap();

    let found = books.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.price, Money::usd(Decimal::new(999, 2)));
    assert_eq!(found.author_ids(), vec![b.id, a.id]);
}

#[sqlx::test]
async fn test_create_with_unknown_author_writes_nothing(pool: PgPool) {
    let (books, _) = repos(pool);

    let result = books
        .create(new_book("T", date(2020, 1, 1), 999, vec![404]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
    assert_eq!(books.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_search_semantics(pool: PgPool) {
    let (books, authors) = repos(pool);
    let a = authors.create(NewAuthor::new("Felipe", "Gutierrez")).await.unwrap();
    books
        .create(new_book("Spring Microservices", date(2016, 6, 28), 4583, vec![a.id]))
        .await
        .unwrap();
    books
        .create(new_book("100%_Spring", date(2016, 5, 21), 4274, vec![a.id]))
        .await
        .unwrap();

    let by_keyword = books
        .search(&BookFilter::new().with_title_containing("%_"))
        .await
        .unwrap();
    assert_eq!(by_keyword.len(), 1);
    assert_eq!(by_keyword[0].title, "100%_Spring");

    let lower = books
        .search(&BookFilter::new().with_title_containing("spring"))
        .await
        .unwrap();
    assert!(lower.is_empty());

    let after = books
        .search(&BookFilter::new().with_published_after(date(2016, 5, 21)))
        .await
        .unwrap();
    assert_eq!(after.len(), 1);

    let in_range = books
        .search(
            &BookFilter::new()
                .with_currency(Currency::Usd)
                .with_amount_between(Decimal::new(4274, 2), Decimal::new(4583, 2)),
        )
        .await
        .unwrap();
    assert_eq!(in_range.len(), 2);

    let by_author = books
        .search(&BookFilter::new().with_author_last_name("Gutierrez"))
        .await
        .unwrap();
    assert_eq!(by_author.len(), 2);
    assert!(by_author[0].id < by_author[1].id);
}

#[sqlx::test]
async fn test_author_inverse_view_and_delete_rules(pool: PgPool) {
    let (books, authors) = repos(pool);
    let a = authors.create(NewAuthor::new("Felipe", "Gutierrez")).await.unwrap();
    let b = authors.create(NewAuthor::new("Josh", "Long")).await.unwrap();
    let book = books
        .create(new_book("Spring Microservices", date(2016, 6, 28), 4583, vec![a.id, b.id]))
        .await
        .unwrap();

    let found = authors
        .search(&AuthorFilter::new().with_book_title("Spring Microservices"))
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].books[0].id, book.id);

    authors.delete(b.id).await.unwrap();
    let after = books.find_by_id(book.id).await.unwrap().unwrap();
    assert_eq!(after.author_ids(), vec![a.id]);

    let conflict = authors.delete(a.id).await;
    assert!(matches!(conflict, Err(AppError::Conflict { .. })));

    books.delete(book.id).await.unwrap();
    authors.delete(a.id).await.unwrap();
    assert_eq!(authors.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_update_replaces_authors(pool: PgPool) {
    let (books, authors) = repos(pool);
    let a = authors.create(NewAuthor::new("A", "One")).await.unwrap();
    let b = authors.create(NewAuthor::new("B", "Two")).await.unwrap();
    let book = books
        .create(new_book("T", date(2020, 1, 1), 100, vec![a.id]))
        .await
        .unwrap();

    let mut replacement = new_book("T2", date(2021, 1, 1), 250, vec![b.id]);
    replacement.price = Money::new(Currency::Cad, Decimal::new(250, 2));
    let updated = books.update(book.id, replacement).await.unwrap();

    assert_eq!(updated.title, "T2");
    assert_eq!(updated.price.currency, Currency::Cad);
    assert_eq!(updated.author_ids(), vec![b.id]);
    assert!(authors.find_by_id(a.id).await.unwrap().unwrap().books.is_empty());

    let missing = books
        .update(9999, new_book("T", date(2020, 1, 1), 100, vec![a.id]))
        .await;
    assert!(matches!(missing, Err(AppError::NotFound { .. })));
}
