use crate::application::catalog::CatalogError;
use crate::domain::{BorrowItemError, ReturnItemError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// レスポンスの `message` にはアプリケーション層のメッセージをそのまま載せる。
#[derive(Debug)]
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match self.0 {
            // 404 Not Found - リクエストされたリソースが存在しない
            CatalogError::MemberOrItemNotFound => {
                (StatusCode::NOT_FOUND, "MEMBER_OR_ITEM_NOT_FOUND")
            }
            CatalogError::MemberNotFound => (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND"),

            // 422 Unprocessable Entity - ビジネスルール違反
            CatalogError::Borrow(BorrowItemError::NotAvailable { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ITEM_NOT_AVAILABLE")
            }
            CatalogError::Return(ReturnItemError::NotInBorrowedList) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ITEM_NOT_BORROWED")
            }
        };

        let body = Json(ErrorResponse::new(error_type, self.0.to_string()));
        (status, body).into_response()
    }
}
