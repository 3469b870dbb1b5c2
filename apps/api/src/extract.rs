use axum::extract::FromRequest;

use crate::errors::AppError;

/// JSON body extractor whose rejections use the `AppError` envelope
/// instead of axum's plain-text responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
