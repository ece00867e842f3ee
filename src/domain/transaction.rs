use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, Polarity, cents_to_units};

pub type EntryId = Uuid;

/// Anything the ledger can record.
///
/// The sign of `value` decides polarity: positive is income, negative is
/// expense, zero is neither. `get_value` is the amount in major units and is
/// always taken from the transaction itself, never re-derived by the ledger.
pub trait Transaction {
    /// Signed amount in cents
    fn value(&self) -> Cents;

    /// When the transaction happened; used only for date-window filtering
    fn created_at(&self) -> DateTime<Utc>;

    /// Amount in major units (5031 cents -> 50.31)
    fn get_value(&self) -> f64;
}

impl<T: Transaction + ?Sized> Transaction for &T {
    fn value(&self) -> Cents {
        (**self).value()
    }

    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }

    fn get_value(&self) -> f64 {
        (**self).get_value()
    }
}

impl<T: Transaction + ?Sized> Transaction for Box<T> {
    fn value(&self) -> Cents {
        (**self).value()
    }

    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }

    fn get_value(&self) -> f64 {
        (**self).get_value()
    }
}

impl<T: Transaction + ?Sized> Transaction for Rc<T> {
    fn value(&self) -> Cents {
        (**self).value()
    }

    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }

    fn get_value(&self) -> f64 {
        (**self).get_value()
    }
}

impl<T: Transaction + ?Sized> Transaction for Arc<T> {
    fn value(&self) -> Cents {
        (**self).value()
    }

    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }

    fn get_value(&self) -> f64 {
        (**self).get_value()
    }
}

/// A recorded income or expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Signed amount in cents
    pub value: Cents,
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
    /// Category for grouping (e.g., "salary", "groceries")
    pub category: Option<String>,
}

impl Entry {
    pub fn new(value: Cents, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            created_at,
            description: None,
            category: None,
        }
    }

    /// An entry stamped with the current time.
    pub fn now(value: Cents) -> Self {
        Self::new(value, Utc::now())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_income(&self) -> bool {
        Polarity::Income.matches(self.value)
    }

    pub fn is_expense(&self) -> bool {
        Polarity::Expense.matches(self.value)
    }
}

impl Transaction for Entry {
    fn value(&self) -> Cents {
        self.value
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn get_value(&self) -> f64 {
        cents_to_units(self.value)
    }
}
