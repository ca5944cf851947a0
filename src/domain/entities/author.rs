//! Author entity, the inverse side of the book/author relation.

use validator::Validate;

use super::validate_text;

/// Reference to a book as seen from one of its authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRef {
    pub id: i64,
    pub title: String,
}

/// A stored author.
///
/// `books` is never written through the author: it is read back from the
/// book/author join owned by [`crate::domain::entities::Book`], in ascending
/// book id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub books: Vec<BookRef>,
}

impl Author {
    pub fn new(id: i64, first_name: String, last_name: String, books: Vec<BookRef>) -> Self {
        Self {
            id,
            first_name,
            last_name,
            books,
        }
    }

    /// Full display name, e.g. "Felipe Gutierrez".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input data for creating or fully replacing an author.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewAuthor {
    #[validate(length(min = 1, max = 255), custom(function = "validate_text"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 255), custom(function = "validate_text"))]
    pub last_name: String,
}

impl NewAuthor {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl From<&Author> for NewAuthor {
    fn from(author: &Author) -> Self {
        Self::new(author.first_name.clone(), author.last_name.clone())
    }
}

/// Partial update for an existing author. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AuthorPatch {
    /// Produces the full replacement resulting from applying this patch.
    pub fn apply_to(self, current: &Author) -> NewAuthor {
        NewAuthor {
            first_name: self.first_name.unwrap_or_else(|| current.first_name.clone()),
            last_name: self.last_name.unwrap_or_else(|| current.last_name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author::new(
            1,
            "Felipe".to_string(),
            "Gutierrez".to_string(),
            vec![BookRef {
                id: 1,
                title: "Spring Microservices".to_string(),
            }],
        )
    }

    #[test]
    fn test_full_name() {
        assert_eq!(author().full_name(), "Felipe Gutierrez");
    }

    #[test]
    fn test_new_author_validation() {
        assert!(NewAuthor::new("Rajesh", "RV").validate().is_ok());

        let errors = NewAuthor::new("", "RV").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));

        let errors = NewAuthor::new("Rajesh", "x".repeat(256)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let patch = AuthorPatch {
            last_name: Some("G.".to_string()),
            ..Default::default()
        };

        let replaced = patch.apply_to(&author());

        assert_eq!(replaced.first_name, "Felipe");
        assert_eq!(replaced.last_name, "G.");
    }
}
