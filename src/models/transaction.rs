//! Transaction model
//!
//! A transaction is one recorded income or expense event. Transactions are
//! created through [`crate::ledger::Ledger::add`], which assigns the id and
//! the date default; they are immutable afterwards and only leave the ledger
//! through removal by id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, TransactionType};
use super::ids::TransactionId;
use super::money::Money;

/// A recorded financial event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the ledger
    pub id: TransactionId,

    /// Short label, e.g. "Groceries" or "March paycheck"
    pub name: String,

    /// Positive magnitude; the sign is implied by `transaction_type`
    pub amount: Money,

    /// Descriptive category from the fixed set
    pub category: Category,

    /// Whether this is an expense or income
    pub transaction_type: TransactionType,

    /// Calendar date of the event (no time of day)
    pub date: NaiveDate,

    /// Optional free-text notes
    pub description: Option<String>,

    /// Free-text tags; always a sequence once constructed, possibly empty
    #[serde(default)]
    pub tags: Vec<String>,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount
        )
    }
}

/// Input for creating a new transaction
///
/// Everything the caller supplies; the ledger fills in the id and the date
/// default at creation time.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub name: String,
    pub amount: Money,
    pub category: Category,
    pub transaction_type: TransactionType,
    pub description: Option<String>,
    pub tags: Vec<String>,
    /// Defaults to today when `None`
    pub date: Option<NaiveDate>,
}

impl NewTransaction {
    /// Create an input with the required fields; optional fields start empty
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: Category,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category,
            transaction_type,
            description: None,
            tags: Vec::new(),
            date: None,
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the tags
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set an explicit date instead of defaulting to today
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Validate the input
    ///
    /// The ledger calls this before any mutation occurs, so a failing input
    /// leaves the collection untouched.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.name.trim().is_empty() {
            return Err(TransactionValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Validation errors for new transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyName,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(_) => write!(f, "amount must be positive"),
            Self::EmptyName => write!(f, "name cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewTransaction {
        NewTransaction::new(
            "Lunch",
            Money::from_cents(1250),
            Category::Food,
            TransactionType::Expense,
        )
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        let mut input = sample_input();
        input.amount = Money::zero();
        assert_eq!(
            input.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let mut input = sample_input();
        input.amount = Money::from_cents(-100);
        assert!(matches!(
            input.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut input = sample_input();
        input.name = "   ".into();
        assert_eq!(
            input.validate(),
            Err(TransactionValidationError::EmptyName)
        );
    }

    #[test]
    fn test_builder_methods() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let input = sample_input()
            .description("team lunch")
            .tags(vec!["work".into(), "food".into()])
            .date(date);

        assert_eq!(input.description.as_deref(), Some("team lunch"));
        assert_eq!(input.tags.len(), 2);
        assert_eq!(input.date, Some(date));
    }

    #[test]
    fn test_serialization_round_trip() {
        let txn = Transaction {
            id: TransactionId::from("ab12cd34"),
            name: "Rent".into(),
            amount: Money::from_cents(120000),
            category: Category::Housing,
            transaction_type: TransactionType::Expense,
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            description: None,
            tags: Vec::new(),
        };

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"Housing\""));
        assert!(json.contains("\"expense\""));
        assert!(json.contains("\"2026-02-01\""));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_missing_tags_deserialize_to_empty() {
        let json = r#"{
            "id": "ab12cd34",
            "name": "Rent",
            "amount": 120000,
            "category": "Housing",
            "transaction_type": "expense",
            "date": "2026-02-01",
            "description": null
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.tags.is_empty());
    }
}
