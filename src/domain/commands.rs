use serde::{Deserialize, Serialize};

use super::{ItemId, MemberId};

/// コマンド：資料を借りる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowItem {
    pub member_id: MemberId,
    pub item_id: ItemId,
}

/// コマンド：資料を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnItem {
    pub member_id: MemberId,
    pub item_id: ItemId,
}
