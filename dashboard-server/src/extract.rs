//! Request extractors whose rejections use the `AppError` JSON body

use axum::extract::{FromRequest, FromRequestParts};

use crate::AppError;

/// `Json` with malformed bodies reported as 400 validation errors
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query` with unparsable query strings reported as 400 validation errors
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
