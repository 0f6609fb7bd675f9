use serde::{Deserialize, Serialize};
use std::fmt;

/// 資料ID - カタログ内で一意であることを前提とする（登録時には検証しない）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// 会員ID - カタログ内で一意であることを前提とする（登録時には検証しない）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_value() {
        let id = ItemId::new("B001");
        assert_eq!(id.value(), "B001");
        assert_eq!(id.to_string(), "B001");
    }

    #[test]
    fn test_item_id_equality() {
        assert_eq!(ItemId::from("B001"), ItemId::new(String::from("B001")));
        assert_ne!(ItemId::from("B001"), ItemId::from("B002"));
    }

    #[test]
    fn test_member_id_value() {
        let id = MemberId::from("M1001");
        assert_eq!(id.value(), "M1001");
        assert_eq!(id.to_string(), "M1001");
    }

    // シリアライズ時は文字列そのものになる
    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&MemberId::from("M1002")).unwrap();
        assert_eq!(json, "\"M1002\"");

        let id: ItemId = serde_json::from_str("\"T001\"").unwrap();
        assert_eq!(id, ItemId::from("T001"));
    }
}
