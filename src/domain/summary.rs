use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::format_units;

/// Result of an income or expense query: the aggregate total in major units
/// and the matching transactions themselves, in insertion order.
#[derive(Debug, PartialEq, Serialize)]
pub struct Summary<'a, T> {
    pub total: f64,
    pub list: Vec<&'a T>,
}

impl<T> Default for Summary<'_, T> {
    fn default() -> Self {
        Self {
            total: 0.0,
            list: Vec::new(),
        }
    }
}

impl<'a, T> Summary<'a, T> {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// True if this exact transaction (by address, not by value) is in the list.
    /// For ledgers of `&Entry`, `Rc<Entry>` or `Arc<Entry>`, pass the entry the
    /// handle points to.
    pub fn contains<U: ?Sized>(&self, transaction: &U) -> bool
    where
        T: Borrow<U>,
    {
        self.list
            .iter()
            .any(|t| std::ptr::eq(Borrow::<U>::borrow(*t), transaction))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.list.iter().copied()
    }
}

impl<T: Serialize> Summary<'_, T> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T> fmt::Display for Summary<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.list.len() == 1 {
            "transaction"
        } else {
            "transactions"
        };
        write!(
            f,
            "{} {}, total {}",
            self.list.len(),
            noun,
            format_units(self.total)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;

    #[test]
    fn test_default_summary_is_empty() {
        let summary: Summary<'_, Entry> = Summary::default();
        assert_eq!(summary.total, 0.0);
        assert!(summary.is_empty());
        assert_eq!(summary.to_string(), "0 transactions, total 0.00");
    }

    #[test]
    fn test_contains_uses_identity() {
        let entry = Entry::now(5031);
        let twin = entry.clone();
        let summary = Summary {
            total: 50.31,
            list: vec![&entry],
        };

        assert!(summary.contains(&entry));
        assert!(!summary.contains(&twin));
        assert_eq!(summary.to_string(), "1 transaction, total 50.31");
    }

    #[test]
    fn test_contains_sees_through_handles() {
        let entry = Entry::now(-1299);
        let borrowed = vec![&entry];
        let summary = Summary {
            total: 12.99,
            list: vec![&borrowed[0]],
        };
        assert!(summary.contains(&entry));
        assert!(!summary.contains(&entry.clone()));

        let shared = std::rc::Rc::new(Entry::now(5031));
        let handles = vec![std::rc::Rc::clone(&shared)];
        let summary = Summary {
            total: 50.31,
            list: vec![&handles[0]],
        };
        assert!(summary.contains(&*shared));
    }

    #[test]
    fn test_summary_json() {
        let entry = Entry::now(-3500).with_category("rent");
        let summary = Summary {
            total: 35.0,
            list: vec![&entry],
        };

        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(json["total"], 35.0);
        assert_eq!(json["list"][0]["value"], -3500);
        assert_eq!(json["list"][0]["category"], "rent");
    }
}
