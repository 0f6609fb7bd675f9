use thiserror::Error;

/// 貸出のエラー
///
/// 表示文字列は利用者に返すメッセージそのもの。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorrowItemError {
    /// 既に貸出中
    #[error("Item {title} is not available.")]
    NotAvailable { title: String },
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnItemError {
    /// 会員の貸出リストに存在しない
    #[error("Item not found in borrowed list.")]
    NotInBorrowedList,
}
