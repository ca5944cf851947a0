//! Book entity, the owning side of the book/author relation.

use chrono::NaiveDate;
use validator::Validate;

use super::money::Money;
use super::validate_text;

/// Reference to an author as seen from a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A stored book with its embedded price and ordered authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub published_date: NaiveDate,
    pub price: Money,
    pub authors: Vec<AuthorRef>,
}

impl Book {
    pub fn new(
        id: i64,
        title: String,
        description: String,
        published_date: NaiveDate,
        price: Money,
        authors: Vec<AuthorRef>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            published_date,
            price,
            authors,
        }
    }

    pub fn author_ids(&self) -> Vec<i64> {
        self.authors.iter().map(|a| a.id).collect()
    }

    pub fn has_author_last_name(&self, last_name: &str) -> bool {
        self.authors.iter().any(|a| a.last_name == last_name)
    }
}

/// Input data for creating or fully replacing a book.
///
/// `authors` holds author ids, written to the book/author join in the given
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, max = 255), custom(function = "validate_text"))]
    pub title: String,

    #[validate(length(min = 1, max = 255), custom(function = "validate_text"))]
    pub description: String,

    pub published_date: NaiveDate,

    #[validate(nested)]
    pub price: Money,

    #[validate(length(min = 1, message = "a book needs at least one author"))]
    pub authors: Vec<i64>,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        published_date: NaiveDate,
        price: Money,
        authors: Vec<i64>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            published_date,
            price,
            authors,
        }
    }

    /// Copy with the price stored at its canonical scale.
    pub fn normalized(mut self) -> Self {
        self.price = self.price.rescaled();
        self
    }

    /// Author ids with repeats removed, first occurrence wins.
    pub fn distinct_author_ids(&self) -> Vec<i64> {
        let mut ids = Vec::with_capacity(self.authors.len());
        for id in &self.authors {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }
}

impl From<&Book> for NewBook {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            description: book.description.clone(),
            published_date: book.published_date,
            price: book.price.clone(),
            authors: book.author_ids(),
        }
    }
}

/// Partial update for an existing book. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub price: Option<Money>,
    pub authors: Option<Vec<i64>>,
}

impl BookPatch {
    /// Produces the full replacement resulting from applying this patch.
    pub fn apply_to(self, current: &Book) -> NewBook {
        let mut merged = NewBook::from(current);
        if let Some(title) = self.title {
            merged.title = title;
        }
        if let Some(description) = self.description {
            merged.description = description;
        }
        if let Some(published_date) = self.published_date {
            merged.published_date = published_date;
        }
        if let Some(price) = self.price {
            merged.price = price;
        }
        if let Some(authors) = self.authors {
            merged.authors = authors;
        }
        merged
    }
}
