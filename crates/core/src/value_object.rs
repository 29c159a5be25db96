//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Name of a stocked item.
///
/// The name is kept exactly as supplied; only its trimmed form has to be
/// non-empty. `" apple"` and `"apple"` are distinct items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ValueObject for ItemName {}

impl ItemName {
    pub fn parse(raw: impl Into<String>) -> InventoryResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InventoryError::invalid_argument("item name cannot be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank_names() {
        for raw in ["", "   ", "\t\n"] {
            match ItemName::parse(raw) {
                Err(InventoryError::InvalidArgument(_)) => {}
                other => panic!("expected InvalidArgument for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let name = ItemName::parse(" apple ").unwrap();
        assert_eq!(name.as_str(), " apple ");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any name with a visible character parses and round-trips.
            #[test]
            fn visible_names_parse(name in "[ ]{0,3}[A-Za-z0-9][A-Za-z0-9 ]{0,30}") {
                let parsed = ItemName::parse(name.clone()).unwrap();
                prop_assert_eq!(parsed.into_inner(), name);
            }
        }
    }
}
