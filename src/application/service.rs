use crate::domain::{DateWindow, Entry, Ledger, Polarity, Summary, parse_cents, parse_timestamp};

use super::LedgerError;

/// Application service over a ledger of [`Entry`] records.
/// Accepts amounts and dates as strings and reports parse failures as
/// [`LedgerError`] instead of leaving them to the caller.
#[derive(Debug, Default)]
pub struct LedgerService {
    ledger: Ledger<Entry>,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ledger(ledger: Ledger<Entry>) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger<Entry> {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger<Entry> {
        self.ledger
    }

    // ========================
    // Recording
    // ========================

    /// Record an entry from a signed decimal amount ("50.31", "-12.99") and a
    /// `YYYY-MM-DD` or RFC 3339 timestamp.
    pub fn record_entry(
        &mut self,
        amount: &str,
        created_at: &str,
        description: Option<String>,
        category: Option<String>,
    ) -> Result<&Entry, LedgerError> {
        let value = parse_cents(amount).map_err(|source| LedgerError::InvalidAmount {
            input: amount.to_string(),
            source,
        })?;
        let created_at = parse_timestamp(created_at)?;

        let mut entry = Entry::new(value, created_at);
        entry.description = description;
        entry.category = category;

        self.ledger.add_transaction(entry);
        Ok(&self.ledger.transactions()[self.ledger.len() - 1])
    }

    // ========================
    // Queries
    // ========================

    pub fn incomes(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Summary<'_, Entry>, LedgerError> {
        self.summary(Polarity::Income, start, end)
    }

    pub fn expenses(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Summary<'_, Entry>, LedgerError> {
        self.summary(Polarity::Expense, start, end)
    }

    /// Query and render the summary as JSON.
    pub fn summary_json(
        &self,
        polarity: Polarity,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<String, LedgerError> {
        Ok(self.summary(polarity, start, end)?.to_json()?)
    }

    fn summary(
        &self,
        polarity: Polarity,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Summary<'_, Entry>, LedgerError> {
        let window = DateWindow::parse(start, end)?;
        Ok(self.ledger.query(polarity, window))
    }
}
