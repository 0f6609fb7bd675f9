use crate::domain::{Item, ItemId, ItemKind, Member, MemberId};

use super::Catalog;

/// デモ・受け入れシナリオ用のサンプルカタログ
///
/// 資料（登録順）：B001, M001, E001, A001, T001
/// 会員：M1001（Alice）, M1002（Bob）
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.add_item(Item::new(
        ItemId::from("B001"),
        "OOP Basics",
        ItemKind::Book {
            author: "Kin Dev".to_string(),
        },
        true,
    ));
    catalog.add_item(Item::new(
        ItemId::from("M001"),
        "Tech Monthly",
        ItemKind::Magazine {
            issue_date: "May 2024".to_string(),
        },
        true,
    ));
    catalog.add_item(Item::new(
        ItemId::from("E001"),
        "Learning TypeScript",
        ItemKind::EBook {
            filesize_mb: 5.0,
            format: "PDF".to_string(),
        },
        true,
    ));
    catalog.add_item(Item::new(
        ItemId::from("A001"),
        "History of AI",
        ItemKind::AudioBook {
            duration_minutes: 320,
            narrator: "Sam Reed".to_string(),
        },
        true,
    ));
    catalog.add_item(Item::new(
        ItemId::from("T001"),
        "Laptop Pro",
        ItemKind::Technology {
            device_type: "Laptop".to_string(),
            brand: "Lenovo".to_string(),
        },
        true,
    ));

    catalog.add_member(Member::new(MemberId::from("M1001"), "Alice"));
    catalog.add_member(Member::new(MemberId::from("M1002"), "Bob"));

    catalog
}
