//! Category and transaction type enumerations
//!
//! Both are closed sets with a stable string encoding: the human-readable
//! label is the wire format, and loading re-hydrates by parsing the stored
//! label back against the enumeration. An unrecognized label fails the parse.
//!
//! Categories are descriptive only. Nothing stops an income transaction from
//! being filed under "Housing"; the split into expense-ish and income-ish
//! labels exists for the user's benefit, not the engine's.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a transaction takes money out or brings money in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    /// The wire-format label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TransactionType {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(LabelParseError {
                kind: "transaction type",
                label: s.to_string(),
            }),
        }
    }
}

/// Fixed set of transaction categories
///
/// The serde rename on each variant pins the persisted label, so renaming a
/// variant in code cannot silently change the file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    Food,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Housing")]
    Housing,
    #[serde(rename = "Utilities")]
    Utilities,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Insurance")]
    Insurance,
    #[serde(rename = "Taxes")]
    Taxes,
    #[serde(rename = "Other Expense")]
    OtherExpense,
    #[serde(rename = "Salary")]
    Salary,
    #[serde(rename = "Freelance")]
    Freelance,
    #[serde(rename = "Investment")]
    Investment,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Other Income")]
    OtherIncome,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 17] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Shopping,
        Category::Healthcare,
        Category::Education,
        Category::Travel,
        Category::Insurance,
        Category::Taxes,
        Category::OtherExpense,
        Category::Salary,
        Category::Freelance,
        Category::Investment,
        Category::Business,
        Category::OtherIncome,
    ];

    /// The wire-format label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Insurance => "Insurance",
            Category::Taxes => "Taxes",
            Category::OtherExpense => "Other Expense",
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investment => "Investment",
            Category::Business => "Business",
            Category::OtherIncome => "Other Income",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = LabelParseError;

    /// Match a label case-insensitively, so CLI users can type
    /// "food & dining" without chasing the exact capitalization.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| LabelParseError {
                kind: "category",
                label: s.to_string(),
            })
    }
}

/// Error for an unrecognized category or transaction type label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelParseError {
    pub kind: &'static str,
    pub label: String,
}

impl fmt::Display for LabelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.label)
    }
}

impl std::error::Error for LabelParseError {}
