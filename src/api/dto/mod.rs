//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and `utoipa` for their schema in
//! the OpenAPI document. Field constraints live on the domain write models and
//! are checked by the services.

pub mod author;
pub mod book;
pub mod health;
pub mod search;
