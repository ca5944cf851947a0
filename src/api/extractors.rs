//! Request extractors that reject malformed input with [`AppError`].
//!
//! Axum's own extractors answer with plain-text bodies; these wrappers route
//! the rejection through [`AppError`] so every 4xx carries the JSON error
//! envelope.

use axum::extract::{FromRequest, FromRequestParts, Path, Query};

use crate::error::AppError;

/// JSON body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameter extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
