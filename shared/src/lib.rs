use serde::{Deserialize, Serialize};
use std::fmt;

pub mod endpoints;
pub mod error;
pub mod form;
pub mod locale;
pub mod page;
pub mod state;
pub mod view;

pub use error::ClientError;
pub use form::{FormField, TransactionForm, ValidationError};
pub use locale::{Labels, Locale, Messages, UnknownLocale};
pub use page::{PageQuery, PageState, DEFAULT_PAGE_SIZE};
pub use state::{EditSession, ListState};
pub use view::{ListView, PaginationView, TransactionRow};

/// A ledger entry as served by the transactions API.
///
/// The server owns the id and the timestamp; the client only ever holds copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Opaque identifier assigned by the server
    pub id: String,
    pub account_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 local date-time (or RFC 3339) as produced by the server
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Body of a create or update request. Never carries an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub account_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
}

/// Kind of ledger movement.
///
/// The wire format is a bare string. Strings the client does not know are kept
/// as `Other` so a transaction with an unexpected type still renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    Other(String),
}

impl TransactionType {
    /// The types offered in the create and edit forms, in display order
    pub const SELECTABLE: [TransactionType; 3] = [
        TransactionType::Deposit,
        TransactionType::Withdrawal,
        TransactionType::Transfer,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::Transfer => "TRANSFER",
            TransactionType::Other(raw) => raw,
        }
    }
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "DEPOSIT" => TransactionType::Deposit,
            "WITHDRAWAL" => TransactionType::Withdrawal,
            "TRANSFER" => TransactionType::Transfer,
            _ => TransactionType::Other(raw),
        }
    }
}

impl From<TransactionType> for String {
    fn from(transaction_type: TransactionType) -> Self {
        match transaction_type {
            TransactionType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
