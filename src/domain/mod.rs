//! Domain layer containing the catalog entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Books, authors and the embedded money value
//! - [`repositories`] - Data access trait definitions and query filters
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Finder semantics live in explicit filter types, never in method names

pub mod entities;
pub mod repositories;
