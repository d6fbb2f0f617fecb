//! `Json` and `Query` extractors whose rejections go through `AppError`,
//! so malformed requests get the same JSON error body as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
