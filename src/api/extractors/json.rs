use axum::extract::FromRequest;
use crate::error::AppError;

/// `Json` whose rejections are reported through [`AppError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
