use serde::{Deserialize, Serialize};

use super::{BorrowItemError, ItemBorrowed, ItemId, ItemReturned};

/// 資料の種別と種別固有の属性
///
/// 種別は固定（Book | Magazine | EBook | AudioBook | Technology）のため、
/// trait オブジェクトではなく列挙型で表現し、詳細表示は `detail()` の
/// パターンマッチで切り替える。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ItemKind {
    Book {
        author: String,
    },
    Magazine {
        /// 自由形式の文字列（検証しない）
        issue_date: String,
    },
    EBook {
        filesize_mb: f64,
        format: String,
    },
    AudioBook {
        duration_minutes: u32,
        narrator: String,
    },
    Technology {
        device_type: String,
        brand: String,
    },
}

impl ItemKind {
    /// 種別ラベル（詳細表示の先頭に使われる）
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "Book",
            ItemKind::Magazine { .. } => "Magazine",
            ItemKind::EBook { .. } => "EBook",
            ItemKind::AudioBook { .. } => "AudioBook",
            ItemKind::Technology { .. } => "Technology",
        }
    }
}

/// 資料（カタログの1エントリ）
///
/// 不変条件：
/// - `title` と `item_id` は作成後に変更されない
/// - `available` が `false` になるのは、ちょうど1人の会員に貸出中の間だけ
///
/// 誰が借りているかは資料側では保持しない。その関係は会員の貸出リストにのみ存在する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    item_id: ItemId,
    title: String,
    #[serde(flatten)]
    kind: ItemKind,
    available: bool,
}

impl Item {
    /// 初期の貸出可否を明示して資料を作成する
    pub fn new(
        item_id: ItemId,
        title: impl Into<String>,
        kind: ItemKind,
        available: bool,
    ) -> Self {
        Self {
            item_id,
            title: title.into(),
            kind,
            available,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// 資料を貸し出す
    ///
    /// 状態遷移：Available → Unavailable
    ///
    /// # エラー
    /// 既に貸出中の場合は`BorrowItemError::NotAvailable`を返す。状態は変化しない。
    pub fn borrow(&mut self, member_name: &str) -> Result<ItemBorrowed, BorrowItemError> {
        if !self.available {
            return Err(BorrowItemError::NotAvailable {
                title: self.title.clone(),
            });
        }

        self.available = false;

        Ok(ItemBorrowed {
            item_id: self.item_id.clone(),
            title: self.title.clone(),
            member_name: member_name.to_string(),
        })
    }

    /// 資料を返却する
    ///
    /// 常に Available に戻す。既に貸出可能な資料に対しても成功扱い（冪等）で、
    /// 貸出中かどうかの検証は会員側の貸出リストで行う。
    pub fn return_item(&mut self) -> ItemReturned {
        self.available = true;

        ItemReturned {
            item_id: self.item_id.clone(),
            title: self.title.clone(),
        }
    }

    /// 種別ごとの詳細表示
    pub fn detail(&self) -> String {
        let title = &self.title;
        match &self.kind {
            ItemKind::Book { author } => format!("Book: {title}, Author: {author}"),
            ItemKind::Magazine { issue_date } => {
                format!("Magazine: {title}, Issue Date: {issue_date}")
            }
            ItemKind::EBook {
                filesize_mb,
                format,
            } => format!("EBook: {title}, Size: {filesize_mb}MB, Format: {format}"),
            ItemKind::AudioBook {
                duration_minutes,
                narrator,
            } => format!(
                "AudioBook: {title}, Duration: {duration_minutes} mins, Narrator: {narrator}"
            ),
            ItemKind::Technology { device_type, brand } => {
                format!("Technology: {title}, Type: {device_type}, Brand: {brand}")
            }
        }
    }
}
