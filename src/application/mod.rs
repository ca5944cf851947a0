//! Application layer services implementing the catalog use cases.
//!
//! Services validate write models, translate named finder operations into
//! repository filters and log state changes. Handlers only talk to services.
//!
//! # Contents
//!
//! - [`services::BookService`] - Book CRUD and book finders
//! - [`services::AuthorService`] - Author CRUD and author finders
//! - [`seed`] - Sample catalog inserted at startup

pub mod seed;
pub mod services;
