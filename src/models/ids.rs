//! Transaction identifier
//!
//! Ids are short opaque tokens: the first eight hex characters of a freshly
//! generated UUIDv4. Short enough to type into `tally remove`, random enough
//! that the ledger can re-roll on the rare collision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Length of the short id in characters
    pub const LEN: usize = 8;

    /// Generate a new random id
    pub fn generate() -> Self {
        let full = Uuid::new_v4().simple().to_string();
        Self(full[..Self::LEN].to_string())
    }

    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdParseError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Error type for id parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    Empty,
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdParseError::Empty => write!(f, "Transaction id cannot be empty"),
        }
    }
}

impl std::error::Error for IdParseError {}
