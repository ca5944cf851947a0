//! Query filters behind the catalog finder operations.
//!
//! Every finder is a conjunction of the criteria set on a filter. Semantics
//! are shared by all repository implementations:
//!
//! - string comparisons are case-sensitive
//! - `title_contains` is a plain substring test, no wildcard characters
//! - `published_after` is strictly greater than the given date
//! - `amount_between` is inclusive on both bounds
//! - relation criteria match when any related entity matches, and each
//!   matching entity is returned once

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::{Author, Book, Currency};

/// Criteria for book searches. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub title_contains: Option<String>,
    pub published_after: Option<NaiveDate>,
    pub currency: Option<Currency>,
    pub amount_between: Option<(Decimal, Decimal)>,
    pub author_last_name: Option<String>,
}

impl BookFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact title match.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Substring match on the title.
    pub fn with_title_containing(mut self, keyword: impl Into<String>) -> Self {
        self.title_contains = Some(keyword.into());
        self
    }

    pub fn with_published_after(mut self, date: NaiveDate) -> Self {
        self.published_after = Some(date);
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Price amount within `[low, high]`.
    pub fn with_amount_between(mut self, low: Decimal, high: Decimal) -> Self {
        self.amount_between = Some((low, high));
        self
    }

    /// At least one author with exactly this last name.
    pub fn with_author_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.author_last_name = Some(last_name.into());
        self
    }

    /// Evaluates the filter against an in-memory book.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(title) = &self.title
            && book.title != *title
        {
            return false;
        }
        if let Some(keyword) = &self.title_contains
            && !book.title.contains(keyword.as_str())
        {
            return false;
        }
        if let Some(date) = self.published_after
            && book.published_date <= date
        {
            return false;
        }
        if let Some(currency) = self.currency
            && book.price.currency != currency
        {
            return false;
        }
        if let Some((low, high)) = self.amount_between
            && (book.price.amount < low || book.price.amount > high)
        {
            return false;
        }
        if let Some(last_name) = &self.author_last_name
            && !book.has_author_last_name(last_name)
        {
            return false;
        }
        true
    }
}

/// Criteria for author searches. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorFilter {
    pub last_name: Option<String>,
    pub book_title: Option<String>,
}

impl AuthorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// At least one book with exactly this title.
    pub fn with_book_title(mut self, title: impl Into<String>) -> Self {
        self.book_title = Some(title.into());
        self
    }

    /// Evaluates the filter against an in-memory author.
    pub fn matches(&self, author: &Author) -> bool {
        if let Some(last_name) = &self.last_name
            && author.last_name != *last_name
        {
            return false;
        }
        if let Some(title) = &self.book_title
            && !author.books.iter().any(|b| b.title == *title)
        {
            return false;
        }
        true
    }
}
