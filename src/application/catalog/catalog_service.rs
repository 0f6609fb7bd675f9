use crate::domain::{Item, ItemBorrowed, ItemId, ItemReturned, Member, MemberId};

use super::errors::{CatalogError, Result};

/// カタログ（集約ルート）
///
/// すべての資料と会員を所有し、IDの解決と貸出・返却の仲介を行う。
/// 資料・会員ともに登録順を保持する（`library_summary` の出力順）。
///
/// IDの重複は登録時に検証しない。重複した場合の検索結果は未定義で、
/// 現在の実装では先に登録されたものが返る。
///
/// 内部に排他制御を持たない。複数の呼び出し元から共有する場合は
/// カタログ単位のロックで直列化すること（API層を参照）。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    members: Vec<Member>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 資料を登録する（末尾に追加）
    pub fn add_item(&mut self, item: Item) {
        tracing::debug!(item_id = %item.item_id(), title = item.title(), "Item added");
        self.items.push(item);
    }

    /// 会員を登録する（末尾に追加）
    pub fn add_member(&mut self, member: Member) {
        tracing::debug!(member_id = %member.member_id(), name = member.name(), "Member added");
        self.members.push(member);
    }

    /// 登録順の資料一覧
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// 登録順の会員一覧
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// IDで資料を検索する（最初に一致したもの）
    pub fn find_item_by_id(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.item_id() == item_id)
    }

    /// IDで会員を検索する（最初に一致したもの）
    pub fn find_member_by_id(&self, member_id: &MemberId) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.member_id() == member_id)
    }

    /// 会員に資料を貸し出す
    ///
    /// # エラー
    /// - MemberOrItemNotFound: 会員または資料が存在しない（状態は変化しない）
    /// - Borrow: 資料が貸出中
    pub fn borrow_item(
        &mut self,
        member_id: &MemberId,
        item_id: &ItemId,
    ) -> Result<ItemBorrowed> {
        tracing::debug!(%member_id, %item_id, "Borrow requested");

        // items と members は別フィールドなので同時に可変借用できる
        let member = self
            .members
            .iter_mut()
            .find(|member| member.member_id() == member_id);
        let item = self.items.iter_mut().find(|item| item.item_id() == item_id);

        let (Some(member), Some(item)) = (member, item) else {
            tracing::warn!(%member_id, %item_id, "Borrow refused: member or item not found");
            return Err(CatalogError::MemberOrItemNotFound);
        };

        match member.borrow_item(item) {
            Ok(event) => {
                tracing::info!(%member_id, %item_id, "{}", event);
                Ok(event)
            }
            Err(e) => {
                tracing::warn!(%member_id, %item_id, "Borrow refused: {}", e);
                Err(e.into())
            }
        }
    }

    /// 会員から資料を返却する
    ///
    /// 資料の存在確認は会員の貸出リストの探索で兼ねる。
    ///
    /// # エラー
    /// - MemberNotFound: 会員が存在しない
    /// - Return: 資料が会員の貸出リストにない
    pub fn return_item(
        &mut self,
        member_id: &MemberId,
        item_id: &ItemId,
    ) -> Result<ItemReturned> {
        tracing::debug!(%member_id, %item_id, "Return requested");

        let Some(member) = self
            .members
            .iter_mut()
            .find(|member| member.member_id() == member_id)
        else {
            tracing::warn!(%member_id, %item_id, "Return refused: member not found");
            return Err(CatalogError::MemberNotFound);
        };

        match member.return_item(item_id, &mut self.items) {
            Ok(event) => {
                tracing::info!(%member_id, %item_id, "{}", event);
                Ok(event)
            }
            Err(e) => {
                tracing::warn!(%member_id, %item_id, "Return refused: {}", e);
                Err(e.into())
            }
        }
    }

    /// 会員の貸出中資料の詳細（貸出順、1資料1要素）
    ///
    /// 会員が存在しない場合は`None`。
    pub fn borrowed_item_details(&self, member_id: &MemberId) -> Option<Vec<String>> {
        self.find_member_by_id(member_id)
            .map(|member| member.borrowed_item_details(&self.items))
    }

    /// 会員の貸出中資料の詳細（貸出順、改行区切り）
    ///
    /// 会員が存在しない場合は`None`。
    pub fn list_borrowed_items(&self, member_id: &MemberId) -> Option<String> {
        self.find_member_by_id(member_id)
            .map(|member| member.list_borrowed_items(&self.items))
    }

    /// 全資料の詳細（登録順、改行区切り）
    pub fn library_summary(&self) -> String {
        self.items
            .iter()
            .map(Item::detail)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
