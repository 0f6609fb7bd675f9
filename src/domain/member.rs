use serde::{Deserialize, Serialize};

use super::{
    BorrowItemError, Item, ItemBorrowed, ItemId, ItemReturned, MemberId, ReturnItemError,
};

/// 会員
///
/// 貸出中の資料はIDのみで保持する（資料の所有者はカタログ）。
/// `borrowed_items` の順序は貸出順。
///
/// 不変条件：ある資料は同時に高々1人の会員の貸出リストにのみ存在し、
/// 存在する間はその資料の `available` が `false` である。
/// この整合性は `borrow_item` / `return_item` が維持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    member_id: MemberId,
    name: String,
    borrowed_items: Vec<ItemId>,
}

impl Member {
    pub fn new(member_id: MemberId, name: impl Into<String>) -> Self {
        Self {
            member_id,
            name: name.into(),
            borrowed_items: Vec::new(),
        }
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 貸出中の資料ID（貸出順）
    pub fn borrowed_items(&self) -> &[ItemId] {
        &self.borrowed_items
    }

    /// 資料を借りる
    ///
    /// 資料側の状態遷移が成功した場合に限り、貸出リストの末尾に追加する。
    ///
    /// # エラー
    /// 資料が貸出中の場合は`BorrowItemError::NotAvailable`を返す。
    /// 貸出リストは変化しない。
    pub fn borrow_item(&mut self, item: &mut Item) -> Result<ItemBorrowed, BorrowItemError> {
        let event = item.borrow(&self.name)?;
        self.borrowed_items.push(item.item_id().clone());
        Ok(event)
    }

    /// 資料を返却する
    ///
    /// 貸出リストからIDを線形探索し、見つかれば（残りの順序を保ったまま）取り除いて
    /// 資料を返却状態に戻す。`items` は資料の所有者（カタログ）が持つ資料一覧。
    ///
    /// # エラー
    /// 貸出リストに存在しない場合は`ReturnItemError::NotInBorrowedList`を返す。
    /// いずれの状態も変化しない。
    pub fn return_item(
        &mut self,
        item_id: &ItemId,
        items: &mut [Item],
    ) -> Result<ItemReturned, ReturnItemError> {
        let position = self
            .borrowed_items
            .iter()
            .position(|id| id == item_id)
            .ok_or(ReturnItemError::NotInBorrowedList)?;

        let item = items
            .iter_mut()
            .find(|item| item.item_id() == item_id)
            .ok_or(ReturnItemError::NotInBorrowedList)?;

        self.borrowed_items.remove(position);
        Ok(item.return_item())
    }

    /// 貸出中の資料の詳細（貸出順、1資料1要素）
    pub fn borrowed_item_details(&self, items: &[Item]) -> Vec<String> {
        self.borrowed_items
            .iter()
            .filter_map(|id| items.iter().find(|item| item.item_id() == id))
            .map(Item::detail)
            .collect()
    }

    /// 貸出中の資料の詳細を貸出順に改行区切りで返す
    ///
    /// 貸出がない場合は空文字列。
    pub fn list_borrowed_items(&self, items: &[Item]) -> String {
        self.borrowed_item_details(items).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemKind;

    fn items() -> Vec<Item> {
        vec![
            Item::new(
                ItemId::from("B001"),
                "OOP Basics",
                ItemKind::Book {
                    author: "Kin Dev".to_string(),
                },
                true,
            ),
            Item::new(
                ItemId::from("M001"),
                "Tech Monthly",
                ItemKind::Magazine {
                    issue_date: "May 2024".to_string(),
                },
                true,
            ),
        ]
    }

    fn alice() -> Member {
        Member::new(MemberId::from("M1001"), "Alice")
    }

    // TDD: borrow_item() のテスト
    #[test]
    fn test_borrow_item_appends_to_list() {
        let mut items = items();
        let mut member = alice();

        let event = member.borrow_item(&mut items[0]).unwrap();

        assert_eq!(event.to_string(), "Alice borrowed OOP Basics");
        assert_eq!(member.borrowed_items(), &[ItemId::from("B001")]);
        assert!(!items[0].is_available());
    }

    #[test]
    fn test_borrow_item_keeps_borrow_order() {
        let mut items = items();
        let mut member = alice();

        member.borrow_item(&mut items[1]).unwrap();
        member.borrow_item(&mut items[0]).unwrap();

        assert_eq!(
            member.borrowed_items(),
            &[ItemId::from("M001"), ItemId::from("B001")]
        );
    }

    #[test]
    fn test_borrow_unavailable_item_leaves_list_untouched() {
        let mut items = items();
        let mut alice = alice();
        let mut bob = Member::new(MemberId::from("M1002"), "Bob");

        alice.borrow_item(&mut items[0]).unwrap();
        let result = bob.borrow_item(&mut items[0]);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Item OOP Basics is not available."
        );
        assert!(bob.borrowed_items().is_empty());
        assert_eq!(alice.borrowed_items(), &[ItemId::from("B001")]);
    }

    // TDD: return_item() のテスト
    #[test]
    fn test_return_item_removes_from_list() {
        let mut items = items();
        let mut member = alice();
        member.borrow_item(&mut items[0]).unwrap();
        member.borrow_item(&mut items[1]).unwrap();

        let event = member
            .return_item(&ItemId::from("B001"), &mut items)
            .unwrap();

        assert_eq!(event.to_string(), "OOP Basics returned successfully.");
        assert_eq!(member.borrowed_items(), &[ItemId::from("M001")]);
        assert!(items[0].is_available());
        assert!(!items[1].is_available());
    }

    #[test]
    fn test_return_item_not_borrowed() {
        let mut items = items();
        let mut member = alice();
        member.borrow_item(&mut items[1]).unwrap();

        let result = member.return_item(&ItemId::from("B001"), &mut items);

        assert_eq!(result.unwrap_err(), ReturnItemError::NotInBorrowedList);
        assert_eq!(member.borrowed_items(), &[ItemId::from("M001")]);
        assert!(!items[1].is_available());
    }

    // 他の会員が借りている資料は返却できない
    #[test]
    fn test_return_item_borrowed_by_someone_else() {
        let mut items = items();
        let mut alice = alice();
        let mut bob = Member::new(MemberId::from("M1002"), "Bob");
        alice.borrow_item(&mut items[0]).unwrap();

        let result = bob.return_item(&ItemId::from("B001"), &mut items);

        assert_eq!(result.unwrap_err(), ReturnItemError::NotInBorrowedList);
        assert!(!items[0].is_available());
        assert_eq!(alice.borrowed_items(), &[ItemId::from("B001")]);
    }

    // TDD: list_borrowed_items() のテスト
    #[test]
    fn test_list_borrowed_items_empty() {
        assert_eq!(alice().list_borrowed_items(&items()), "");
    }

    #[test]
    fn test_list_borrowed_items_in_borrow_order() {
        let mut items = items();
        let mut member = alice();
        member.borrow_item(&mut items[1]).unwrap();
        member.borrow_item(&mut items[0]).unwrap();

        assert_eq!(
            member.list_borrowed_items(&items),
            "Magazine: Tech Monthly, Issue Date: May 2024\nBook: OOP Basics, Author: Kin Dev"
        );
    }

    // タイトルに改行を含んでも1資料は1要素のまま
    #[test]
    fn test_borrowed_item_details_one_entry_per_item() {
        let mut items = vec![Item::new(
            ItemId::from("B900"),
            "Line1\nLine2",
            ItemKind::Book {
                author: "X".to_string(),
            },
            true,
        )];
        let mut member = alice();
        member.borrow_item(&mut items[0]).unwrap();

        let details = member.borrowed_item_details(&items);

        assert_eq!(details, vec!["Book: Line1\nLine2, Author: X".to_string()]);
    }
}
