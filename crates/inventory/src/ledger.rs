//! Insertion-ordered stock table.

use std::collections::HashMap;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Item name → quantity, iterated in first-insertion order.
///
/// Serializes as a flat JSON object. Deserializing keeps the object's key
/// order and rejects negative or non-integer quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLedger {
    order: Vec<String>,
    quantities: HashMap<String, i64>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.quantities.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.quantities.contains_key(name)
    }

    /// Set the quantity for `name`. An existing item keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, quantity: i64) {
        let name = name.into();
        if let Some(slot) = self.quantities.get_mut(&name) {
            *slot = quantity;
            return;
        }
        self.order.push(name.clone());
        self.quantities.insert(name, quantity);
    }

    pub fn remove(&mut self, name: &str) -> Option<i64> {
        let removed = self.quantities.remove(name)?;
        self.order.retain(|existing| existing != name);
        Some(removed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.quantities.get(name).map(|q| (name.as_str(), *q)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, i64)> for StockLedger {
    fn from_iter<I: IntoIterator<Item = (N, i64)>>(iter: I) -> Self {
        let mut ledger = StockLedger::new();
        for (name, quantity) in iter {
            ledger.insert(name, quantity);
        }
        ledger
    }
}

impl Serialize for StockLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, quantity) in self.iter() {
            map.serialize_entry(name, &quantity)?;
        }
        map.end()
    }
}

struct LedgerVisitor;

impl<'de> Visitor<'de> for LedgerVisitor {
    type Value = StockLedger;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("an object mapping item names to non-negative integer quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut ledger = StockLedger::new();
        while let Some((name, quantity)) = access.next_entry::<String, i64>()? {
            if quantity < 0 {
                return Err(de::Error::custom(format!(
                    "negative quantity {quantity} for item '{name}'"
                )));
            }
            ledger.insert(name, quantity);
        }
        Ok(ledger)
    }
}

impl<'de> Deserialize<'de> for StockLedger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LedgerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_insertion_order_and_updates_in_place() {
        let mut ledger = StockLedger::new();
        ledger.insert("pear", 2);
        ledger.insert("apple", 10);
        ledger.insert("pear", 7);

        let items: Vec<_> = ledger.iter().collect();
        assert_eq!(items, vec![("pear", 7), ("apple", 10)]);
    }

    #[test]
    fn remove_drops_name_from_order() {
        let mut ledger: StockLedger = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(ledger.remove("b"), Some(2));
        assert_eq!(ledger.remove("b"), None);

        ledger.insert("b", 9);
        let names: Vec<_> = ledger.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
    }

    #[test]
    fn deserialize_keeps_file_order() {
        let ledger: StockLedger =
            serde_json::from_str(r#"{ "zucchini": 4, "apple": 1, "mango": 0 }"#).unwrap();
        let names: Vec<_> = ledger.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zucchini", "apple", "mango"]);
    }

    #[test]
    fn deserialize_rejects_negative_and_fractional_quantities() {
        assert!(serde_json::from_str::<StockLedger>(r#"{"apple": -1}"#).is_err());
        assert!(serde_json::from_str::<StockLedger>(r#"{"apple": 2.5}"#).is_err());
        assert!(serde_json::from_str::<StockLedger>(r#"["apple"]"#).is_err());
    }

    #[test]
    fn serializes_as_flat_object() {
        let ledger: StockLedger = [("apple", 7), ("banana", 15)].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&ledger).unwrap(),
            r#"{"apple":7,"banana":15}"#
        );
    }
}
