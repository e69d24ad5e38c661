//! The ledger store
//!
//! [`Ledger`] owns the in-memory transaction collection and its on-disk
//! representation. Mutations (add/remove) synchronously re-persist the whole
//! collection through an atomic write; aggregations are pure reads over the
//! current in-memory state and never touch the disk.
//!
//! The store assumes one caller at a time within one process. Two processes
//! pointed at the same file get last-writer-wins with no coordination.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::models::{
    Category, Money, Month, NewTransaction, Transaction, TransactionId, TransactionType,
};
use crate::storage::{read_json, write_json_atomic};

/// What to do when the ledger file exists but cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptFilePolicy {
    /// Start with an empty ledger and surface a warning; the unreadable file
    /// is left in place until the next mutation rewrites it
    #[default]
    StartEmpty,
    /// Refuse to start
    Fail,
}

/// On-disk document: the full ordered transaction list plus a write stamp
#[derive(Debug, Serialize, Deserialize)]
struct LedgerFile {
    transactions: Vec<Transaction>,
    last_updated: DateTime<Utc>,
}

/// Aggregated view of one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: Month,
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
    /// Summed expense amounts per category; income transactions are counted
    /// in `income` but excluded from this breakdown
    pub category_totals: HashMap<Category, Money>,
    /// All transactions in the window, income and expense alike
    pub transaction_count: usize,
}

/// The transaction ledger: in-memory collection, persistence contract, and
/// derived-summary computations
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
    load_warning: Option<String>,
}

impl Ledger {
    /// Open a ledger backed by the given file
    ///
    /// A missing file yields an empty ledger. An unparseable file is handled
    /// per `on_corrupt`: `StartEmpty` records a warning (see
    /// [`Ledger::load_warning`]) and starts empty, `Fail` returns the error.
    pub fn open(path: impl Into<PathBuf>, on_corrupt: CorruptFilePolicy) -> TallyResult<Self> {
        let path = path.into();

        let (transactions, load_warning) = match read_json::<LedgerFile, _>(&path) {
            Ok(Some(file)) => (file.transactions, None),
            Ok(None) => (Vec::new(), None),
            Err(err @ TallyError::Corrupt { .. }) => match on_corrupt {
                CorruptFilePolicy::StartEmpty => (
                    Vec::new(),
                    Some(format!("{}; starting with an empty ledger", err)),
                ),
                CorruptFilePolicy::Fail => return Err(err),
            },
            Err(err) => return Err(err),
        };

        Ok(Self {
            path,
            transactions,
            load_warning,
        })
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Warning recorded when a corrupt file was discarded at load time
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions in the ledger
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger has no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Add a new transaction
    ///
    /// Validates the input, assigns a fresh id and the date default (today),
    /// appends, and persists the full collection before returning. If the
    /// persist fails the in-memory append is not rolled back; the atomic
    /// write guarantees the previous on-disk document is still intact.
    pub fn add(&mut self, input: NewTransaction) -> TallyResult<Transaction> {
        input
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        let transaction = Transaction {
            id: self.fresh_id(),
            name: input.name.trim().to_string(),
            amount: input.amount,
            category: input.category,
            transaction_type: input.transaction_type,
            date: input.date.unwrap_or_else(|| chrono::Local::now().date_naive()),
            description: input.description,
            tags: input.tags,
        };

        self.transactions.push(transaction.clone());
        self.persist()?;
        Ok(transaction)
    }

    /// Remove a transaction by id
    ///
    /// Returns true and persists if the id was present; returns false with no
    /// mutation and no persistence call otherwise.
    pub fn remove(&mut self, id: &TransactionId) -> TallyResult<bool> {
        match self.transactions.iter().position(|t| &t.id == id) {
            Some(index) => {
                self.transactions.remove(index);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Look up a transaction by id
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Sum of amounts over income transactions
    pub fn total_income(&self) -> Money {
        self.sum_of_type(TransactionType::Income)
    }

    /// Sum of amounts over expense transactions
    pub fn total_expenses(&self) -> Money {
        self.sum_of_type(TransactionType::Expense)
    }

    /// Total income minus total expenses
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// All transactions with the given category, in insertion order
    pub fn by_category(&self, category: Category) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// All transactions with `start <= date <= end`, inclusive on both ends
    pub fn by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect()
    }

    /// Aggregate one calendar month
    pub fn monthly_summary(&self, month: Month) -> MonthlySummary {
        let window = self.by_date_range(month.start_date(), month.end_date());

        let mut income = Money::zero();
        let mut expenses = Money::zero();
        let mut category_totals: HashMap<Category, Money> = HashMap::new();

        for txn in &window {
            match txn.transaction_type {
                TransactionType::Income => income += txn.amount,
                TransactionType::Expense => {
                    expenses += txn.amount;
                    *category_totals.entry(txn.category).or_default() += txn.amount;
                }
            }
        }

        MonthlySummary {
            month,
            income,
            expenses,
            balance: income - expenses,
            category_totals,
            transaction_count: window.len(),
        }
    }

    fn sum_of_type(&self, transaction_type: TransactionType) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.transaction_type == transaction_type)
            .map(|t| t.amount)
            .sum()
    }

    /// Generate an id not already present in the collection
    ///
    /// Eight hex characters collide rarely but not never; re-roll until the
    /// id is free. Removed ids are never handed out again in practice because
    /// the generator is random, not sequential.
    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) -> TallyResult<()> {
        let file = LedgerFile {
            transactions: self.transactions.clone(),
            last_updated: Utc::now(),
        };
        write_json_atomic(&self.path, &file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_empty() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        let ledger = Ledger::open(path, CorruptFilePolicy::default()).unwrap();
        (temp_dir, ledger)
    }

    fn expense(name: &str, cents: i64, category: Category) -> NewTransaction {
        NewTransaction::new(name, Money::from_cents(cents), category, TransactionType::Expense)
    }

    fn income(name: &str, cents: i64, category: Category) -> NewTransaction {
        NewTransaction::new(name, Money::from_cents(cents), category, TransactionType::Income)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (_temp_dir, ledger) = open_empty();
        assert!(ledger.is_empty());
        assert!(ledger.load_warning().is_none());
    }

    #[test]
    fn test_add_then_get_round_trips_fields() {
        let (_temp_dir, mut ledger) = open_empty();

        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let added = ledger
            .add(
                expense("Lunch", 1250, Category::Food)
                    .description("team lunch")
                    .tags(vec!["work".into()])
                    .date(date),
            )
            .unwrap();

        let fetched = ledger.get(&added.id).unwrap();
        assert_eq!(fetched.name, "Lunch");
        assert_eq!(fetched.amount, Money::from_cents(1250));
        assert_eq!(fetched.category, Category::Food);
        assert_eq!(fetched.transaction_type, TransactionType::Expense);
        assert_eq!(fetched.date, date);
        assert_eq!(fetched.description.as_deref(), Some("team lunch"));
        assert_eq!(fetched.tags, vec!["work".to_string()]);
    }

    #[test]
    fn test_add_defaults_date_to_today() {
        let (_temp_dir, mut ledger) = open_empty();
        let added = ledger.add(income("Pay", 100, Category::Salary)).unwrap();
        assert_eq!(added.date, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let (_temp_dir, mut ledger) = open_empty();

        let err = ledger
            .add(expense("Nothing", 0, Category::Food))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: amount must be positive");
        assert!(ledger.is_empty());
        assert!(!ledger.path().exists());
    }

    #[test]
    fn test_remove_unknown_id_is_soft_and_does_not_persist() {
        let (_temp_dir, mut ledger) = open_empty();
        ledger.add(expense("Lunch", 1250, Category::Food)).unwrap();

        let stamp_before = std::fs::metadata(ledger.path()).unwrap().modified().unwrap();
        let removed = ledger.remove(&TransactionId::from("deadbeef")).unwrap();

        assert!(!removed);
        assert_eq!(ledger.len(), 1);
        let stamp_after = std::fs::metadata(ledger.path()).unwrap().modified().unwrap();
        assert_eq!(stamp_before, stamp_after);
    }

    #[test]
    fn test_remove_existing_id() {
        let (_temp_dir, mut ledger) = open_empty();
        let kept = ledger.add(expense("Lunch", 1250, Category::Food)).unwrap();
        let gone = ledger.add(expense("Cab", 900, Category::Transportation)).unwrap();

        assert!(ledger.remove(&gone.id).unwrap());
        assert_eq!(ledger.len(), 1);
        assert!(ledger.get(&gone.id).is_none());
        assert!(ledger.get(&kept.id).is_some());
    }

    #[test]
    fn test_persistence_round_trip_preserves_order_and_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        let mut ledger = Ledger::open(&path, CorruptFilePolicy::default()).unwrap();
        ledger
            .add(income("Pay", 500_000, Category::Salary).date(
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            ))
            .unwrap();
        ledger
            .add(expense("Groceries", 15_000, Category::Food).date(
                NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            ))
            .unwrap();

        let reloaded = Ledger::open(&path, CorruptFilePolicy::default()).unwrap();
        assert_eq!(reloaded.transactions(), ledger.transactions());
    }

    #[test]
    fn test_corrupt_file_start_empty_records_warning() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let ledger = Ledger::open(&path, CorruptFilePolicy::StartEmpty).unwrap();
        assert!(ledger.is_empty());
        assert!(ledger.load_warning().unwrap().contains("Corrupt ledger file"));
        // The unreadable file is preserved until the next mutation
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_fail_policy_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let result = Ledger::open(&path, CorruptFilePolicy::Fail);
        assert!(matches!(result, Err(TallyError::Corrupt { .. })));
    }

    #[test]
    fn test_unknown_category_label_poisons_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        std::fs::write(
            &path,
            r#"{
              "transactions": [
                { "id": "aaaa1111", "name": "Ok", "amount": 100,
                  "category": "Housing", "transaction_type": "expense",
                  "date": "2026-01-05", "description": null, "tags": [] },
                { "id": "bbbb2222", "name": "Bad", "amount": 100,
                  "category": "Groceries", "transaction_type": "expense",
                  "date": "2026-01-06", "description": null, "tags": [] }
              ],
              "last_updated": "2026-01-06T12:00:00Z"
            }"#,
        )
        .unwrap();

        let ledger = Ledger::open(&path, CorruptFilePolicy::StartEmpty).unwrap();
        assert!(ledger.is_empty());
        assert!(ledger.load_warning().is_some());
    }

    #[test]
    fn test_balance_is_income_minus_expenses() {
        let (_temp_dir, mut ledger) = open_empty();

        ledger.add(income("Pay", 500_000, Category::Salary)).unwrap();
        ledger.add(expense("Groceries", 15_000, Category::Food)).unwrap();
        ledger.add(expense("Cab", 900, Category::Transportation)).unwrap();

        assert_eq!(ledger.total_income(), Money::from_cents(500_000));
        assert_eq!(ledger.total_expenses(), Money::from_cents(15_900));
        assert_eq!(
            ledger.balance(),
            ledger.total_income() - ledger.total_expenses()
        );

        let cab_id = ledger.by_category(Category::Transportation)[0].id.clone();
        ledger.remove(&cab_id).unwrap();
        assert_eq!(
            ledger.balance(),
            ledger.total_income() - ledger.total_expenses()
        );
    }

    #[test]
    fn test_by_category_preserves_insertion_order() {
        let (_temp_dir, mut ledger) = open_empty();

        let first = ledger.add(expense("Lunch", 1250, Category::Food)).unwrap();
        ledger.add(expense("Cab", 900, Category::Transportation)).unwrap();
        let second = ledger.add(expense("Dinner", 3000, Category::Food)).unwrap();

        let food = ledger.by_category(Category::Food);
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].id, first.id);
        assert_eq!(food[1].id, second.id);
    }

    #[test]
    fn test_date_range_is_inclusive_on_both_ends() {
        let (_temp_dir, mut ledger) = open_empty();

        for day in [10, 12, 15] {
            ledger
                .add(expense("X", 100, Category::OtherExpense).date(
                    NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
                ))
                .unwrap();
        }

        let hits = ledger.by_date_range(
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
        );
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_monthly_summary_scenario() {
        let (_temp_dir, mut ledger) = open_empty();
        let today = chrono::Local::now().date_naive();

        ledger.add(income("Paycheck", 500_000, Category::Salary)).unwrap();
        ledger.add(expense("Groceries", 15_000, Category::Food)).unwrap();

        assert_eq!(ledger.total_income(), Money::from_cents(500_000));
        assert_eq!(ledger.total_expenses(), Money::from_cents(15_000));
        assert_eq!(ledger.balance(), Money::from_cents(485_000));

        let summary = ledger.monthly_summary(Month::containing(today));
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.income, Money::from_cents(500_000));
        assert_eq!(summary.expenses, Money::from_cents(15_000));
        assert_eq!(summary.balance, Money::from_cents(485_000));

        // Income is excluded from the category breakdown
        assert_eq!(summary.category_totals.len(), 1);
        assert_eq!(
            summary.category_totals[&Category::Food],
            Money::from_cents(15_000)
        );
    }

    #[test]
    fn test_monthly_summary_window_excludes_neighbors() {
        let (_temp_dir, mut ledger) = open_empty();

        ledger
            .add(expense("In window", 100, Category::Food).date(
                NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            ))
            .unwrap();
        ledger
            .add(expense("Next year", 100, Category::Food).date(
                NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            ))
            .unwrap();
        ledger
            .add(expense("Prior month", 100, Category::Food).date(
                NaiveDate::from_ymd_opt(2026, 11, 30).unwrap(),
            ))
            .unwrap();

        let summary = ledger.monthly_summary(Month::new(2026, 12).unwrap());
        assert_eq!(summary.transaction_count, 1);
        assert_eq!(summary.expenses, Money::from_cents(100));
    }
}
