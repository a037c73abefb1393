//! Request extractors whose rejections use the `{detail}` error body

use axum::extract::FromRequestParts;

use crate::error::ApiError;

/// `Query<T>` that rejects with [`ApiError`] instead of axum's plain-text body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
