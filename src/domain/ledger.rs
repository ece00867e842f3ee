use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Cents, Summary, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Money coming in (value > 0)
    Income,
    /// Money going out (value < 0)
    Expense,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Income => "income",
            Polarity::Expense => "expense",
        }
    }

    /// Zero matches neither polarity.
    pub fn matches(&self, value: Cents) -> bool {
        match self {
            Polarity::Income => value > 0,
            Polarity::Expense => value < 0,
        }
    }

    /// Contribution of one transaction to a total. Expenses are reported
    /// as a positive magnitude.
    fn contribution(&self, units: f64) -> f64 {
        match self {
            Polarity::Income => units,
            Polarity::Expense => units.abs(),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional date bounds for a query. Both bounds are exclusive: a
/// transaction stamped exactly at `start` or `end` falls outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateWindow {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| timestamp > start)
            && self.end.is_none_or(|end| timestamp < end)
    }

    /// Build a window from optional `YYYY-MM-DD` or RFC 3339 strings.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, ParseDateError> {
        Ok(Self {
            start: start.map(parse_timestamp).transpose()?,
            end: end.map(parse_timestamp).transpose()?,
        })
    }
}

/// Parse a timestamp. A bare date means midnight UTC.
/// Example: "2022-01-31" -> 2022-01-31T00:00:00Z
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, ParseDateError> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| ParseDateError(input.to_string()));
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ParseDateError(input.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError(pub String);

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date '{}': expected YYYY-MM-DD or RFC 3339", self.0)
    }
}

impl std::error::Error for ParseDateError {}

/// An append-only, in-memory record of transactions.
///
/// Insertion order is kept and every query returns its matches in that
/// order. Nothing is validated on insert, deduplicated or ever removed.
#[derive(Debug, Clone)]
pub struct Ledger<T> {
    transactions: Vec<T>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }
}

impl<T> Ledger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transactions: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.transactions.iter()
    }

    pub fn transactions(&self) -> &[T] {
        &self.transactions
    }
}

impl<T: Transaction> Ledger<T> {
    pub fn add_transaction(&mut self, transaction: T) {
        tracing::debug!(
            value = transaction.value(),
            created_at = %transaction.created_at(),
            len = self.transactions.len() + 1,
            "transaction added"
        );
        self.transactions.push(transaction);
    }

    /// All transactions with a positive value, optionally restricted to
    /// the open interval (`start_date`, `end_date`).
    pub fn get_all_incomes(
        &self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Summary<'_, T> {
        self.query(Polarity::Income, DateWindow::new(start_date, end_date))
    }

    /// All transactions with a negative value, optionally restricted to
    /// the open interval (`start_date`, `end_date`). The total is positive.
    pub fn get_all_expenses(
        &self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Summary<'_, T> {
        self.query(Polarity::Expense, DateWindow::new(start_date, end_date))
    }

    pub fn query(&self, polarity: Polarity, window: DateWindow) -> Summary<'_, T> {
        let mut summary = Summary::default();
        for transaction in self
            .transactions
            .iter()
            .filter(|t| polarity.matches(t.value()) && window.contains(t.created_at()))
        {
            summary.total += polarity.contribution(transaction.get_value());
            summary.list.push(transaction);
        }

        tracing::trace!(
            %polarity,
            start = ?window.start,
            end = ?window.end,
            matched = summary.list.len(),
            total = summary.total,
            "ledger query"
        );
        summary
    }
}

impl<T: Transaction> Extend<T> for Ledger<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for transaction in iter {
            self.add_transaction(transaction);
        }
    }
}

impl<T: Transaction> FromIterator<T> for Ledger<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        ledger.extend(iter);
        ledger
    }
}

impl<'a, T> IntoIterator for &'a Ledger<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
