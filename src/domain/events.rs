use serde::{Deserialize, Serialize};
use std::fmt;

use super::ItemId;

/// イベント：資料が貸し出された
///
/// `Display` は利用者向けの成功メッセージ（`"{member_name} borrowed {title}"`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBorrowed {
    pub item_id: ItemId,
    pub title: String,
    pub member_name: String,
}

impl ItemBorrowed {
    /// 利用者向けの成功メッセージ
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ItemBorrowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} borrowed {}", self.member_name, self.title)
    }
}

/// イベント：資料が返却された
///
/// 貸出中でない資料の返却でも発生する（冪等）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReturned {
    pub item_id: ItemId,
    pub title: String,
}

impl ItemReturned {
    /// 利用者向けの成功メッセージ
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ItemReturned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} returned successfully.", self.title)
    }
}
