use serde::{Deserialize, Serialize};

use crate::domain::{
    Item, ItemId, ItemKind, Member, MemberId,
    commands::{BorrowItem, ReturnItem},
};

/// 資料登録リクエスト（POST /items）
///
/// 種別固有の属性は `kind` タグと同じ階層に置く。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub item_id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: ItemKind,
    /// 省略時は貸出可能
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl CreateItemRequest {
    pub fn to_item(&self) -> Item {
        Item::new(
            ItemId::new(self.item_id.as_str()),
            self.title.as_str(),
            self.kind.clone(),
            self.available,
        )
    }
}

/// 資料レスポンス（GET /items/:id と GET /items）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item_id: String,
    pub title: String,
    pub kind: String,
    pub available: bool,
    pub detail: String,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.item_id().value().to_string(),
            title: item.title().to_string(),
            kind: item.kind().label().to_string(),
            available: item.is_available(),
            detail: item.detail(),
        }
    }
}

/// 会員登録リクエスト（POST /members）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub member_id: String,
    pub name: String,
}

impl CreateMemberRequest {
    pub fn to_member(&self) -> Member {
        Member::new(MemberId::new(self.member_id.as_str()), self.name.as_str())
    }
}

/// 会員レスポンス（GET /members/:id）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub member_id: String,
    pub name: String,
    /// 貸出中の資料ID（貸出順）
    pub borrowed_items: Vec<String>,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.member_id().value().to_string(),
            name: member.name().to_string(),
            borrowed_items: member
                .borrowed_items()
                .iter()
                .map(|id| id.value().to_string())
                .collect(),
        }
    }
}

/// 会員の貸出中資料レスポンス（GET /members/:id/items）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowedItemsResponse {
    pub member_id: String,
    /// 貸出順の詳細表示
    pub details: Vec<String>,
}

/// 貸出リクエスト（POST /loans）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowItemRequest {
    pub member_id: String,
    pub item_id: String,
}

impl BorrowItemRequest {
    pub fn to_command(&self) -> BorrowItem {
        BorrowItem {
            member_id: MemberId::new(self.member_id.as_str()),
            item_id: ItemId::new(self.item_id.as_str()),
        }
    }
}

/// 返却リクエスト（POST /returns）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnItemRequest {
    pub member_id: String,
    pub item_id: String,
}

impl ReturnItemRequest {
    pub fn to_command(&self) -> ReturnItem {
        ReturnItem {
            member_id: MemberId::new(self.member_id.as_str()),
            item_id: ItemId::new(self.item_id.as_str()),
        }
    }
}

/// 貸出・返却の成功レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
