//! Sample data inserted at startup.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

use crate::application::services::{AuthorService, BookService};
use crate::domain::entities::{Book, Money, NewAuthor, NewBook};
use crate::error::AppError;

struct SampleBook {
    title: &'static str,
    description: &'static str,
    published: (i32, u32, u32),
    price_cents: i64,
    author: (&'static str, &'static str),
}

const SAMPLE_BOOKS: [SampleBook; 2] = [
    SampleBook {
        title: "Spring Microservices",
        description: "Learn how to efficiently build and implement microservices in Spring,\n\
                      and how to use Docker and Mesos to push the boundaries. Examine a number of \
                      real-world use cases and hands-on code examples.\n\
                      Distribute your microservices in a completely new way",
        published: (2016, 6, 28),
        price_cents: 4583,
        author: ("Felipe", "Gutierrez"),
    },
    SampleBook {
        title: "Pro Spring Boot",
        description: "A no-nonsense guide containing case studies and best practise for Spring Boot",
        published: (2016, 5, 21),
        price_cents: 4274,
        author: ("Rajesh", "RV"),
    },
];

/// Inserts the sample books, each with its single author, when the catalog
/// holds no books yet.
///
/// Returns the inserted books; an already populated catalog yields an empty
/// list.
///
/// # Errors
///
/// Returns the first error raised by the services.
pub async fn seed_catalog(
    books: &BookService,
    authors: &AuthorService,
) -> Result<Vec<Book>, AppError> {
    let existing = books.count_books().await?;
    if existing > 0 {
        tracing::info!(existing, "catalog already populated, skipping seed");
        return Ok(Vec::new());
    }

    let mut seeded = Vec::with_capacity(SAMPLE_BOOKS.len());
    for sample in &SAMPLE_BOOKS {
        let (first_name, last_name) = sample.author;
        let author = authors
            .create_author(NewAuthor::new(first_name, last_name))
            .await?;

        let (y, m, d) = sample.published;
        let published_date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
            AppError::internal("Invalid sample date", json!({ "title": sample.title }))
        })?;

        let book = books
            .create_book(NewBook::new(
                sample.title,
                sample.description,
                published_date,
                Money::usd(Decimal::new(sample.price_cents, 2)),
                vec![author.id],
            ))
            .await?;
        seeded.push(book);
    }

    tracing::info!(count = seeded.len(), "sample catalog seeded");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryStore;
    use std::sync::Arc;

    fn services() -> (BookService, AuthorService) {
        let store = Arc::new(MemoryStore::new());
        (BookService::new(store.clone()), AuthorService::new(store))
    }

    #[test]
    fn test_sample_descriptions_fit_column() {
        for sample in &SAMPLE_BOOKS {
            assert!(sample.description.chars().count() <= 255, "{}", sample.title);
        }
    }

    #[tokio::test]
    async fn test_seed_inserts_two_books() {
        let (books, authors) = services();

        let seeded = seed_catalog(&books, &authors).await.unwrap();

        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[0].title, "Spring Microservices");
        assert_eq!(seeded[0].price, Money::usd(Decimal::new(4583, 2)));
        assert_eq!(seeded[0].authors[0].last_name, "Gutierrez");
        assert_eq!(seeded[1].title, "Pro Spring Boot");
        assert_eq!(seeded[1].authors[0].first_name, "Rajesh");
        assert_eq!(authors.count_authors().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seed_is_skipped_when_books_exist() {
        let (books, authors) = services();
        seed_catalog(&books, &authors).await.unwrap();

        let second = seed_catalog(&books, &authors).await.unwrap();

        assert!(second.is_empty());
        assert_eq!(books.count_books().await.unwrap(), 2);
    }
}
