use thiserror::Error;

use crate::domain::{BorrowItemError, ReturnItemError};

/// カタログ（アプリケーション層）のエラー
///
/// 表示文字列は利用者に返すメッセージそのもの。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// 貸出時に会員または資料が存在しない
    #[error("Member or Item not found.")]
    MemberOrItemNotFound,

    /// 返却時に会員が存在しない
    #[error("Member not found.")]
    MemberNotFound,

    /// 貸出のドメインエラー
    #[error(transparent)]
    Borrow(#[from] BorrowItemError),

    /// 返却のドメインエラー
    #[error(transparent)]
    Return(#[from] ReturnItemError),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
