//! Pure rendering of list state into what the table, pager and dialogs display.

use crate::form::TransactionForm;
use crate::locale::Locale;
use crate::page::PageState;
use crate::state::{EditSession, ListState};
use crate::Transaction;

/// Shown in place of a missing or empty description
pub const DESCRIPTION_PLACEHOLDER: &str = "-";

/// One table row, fully formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: String,
    pub account_id: String,
    /// Always exactly two decimals, without currency symbol
    pub amount: String,
    pub type_label: &'static str,
    pub description: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page_info: String,
    pub current_page_number: u64,
    pub total_pages: u64,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

/// Snapshot of the whole transaction list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub locale: Locale,
    pub rows: Vec<TransactionRow>,
    pub pagination: PaginationView,
    pub page_size: u32,
    pub search_query: String,
    pub loading: bool,
    pub create_form: TransactionForm,
    pub edit: Option<EditSession>,
}

/// Two decimals, with exact half cents rounded away from zero.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0)
}

impl TransactionRow {
    pub fn from_transaction(transaction: &Transaction, locale: Locale) -> Self {
        let description = match transaction.description.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => DESCRIPTION_PLACEHOLDER.to_string(),
        };
        let timestamp = transaction
            .timestamp
            .as_deref()
            .map(|raw| locale.format_timestamp(raw))
            .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string());

        Self {
            id: transaction.id.clone(),
            account_id: transaction.account_id.clone(),
            amount: format_amount(transaction.amount),
            type_label: locale.type_label(&transaction.transaction_type),
            description,
            timestamp,
        }
    }
}

/// Rows for a fetched page, in the order the server returned them.
pub fn render_transactions(transactions: &[Transaction], locale: Locale) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|transaction| TransactionRow::from_transaction(transaction, locale))
        .collect()
}

impl PaginationView {
    pub fn from_state(page: &PageState, locale: Locale) -> Self {
        let current_page_number = u64::from(page.current_page) + 1;
        let total_pages = page.total_pages();
        Self {
            page_info: locale.page_indicator(current_page_number, total_pages),
            current_page_number,
            total_pages,
            previous_disabled: !page.has_previous(),
            next_disabled: !page.has_next(),
        }
    }
}

impl ListView {
    pub fn render(state: &ListState, locale: Locale) -> Self {
        Self {
            locale,
            rows: render_transactions(&state.transactions, locale),
            pagination: PaginationView::from_state(&state.page, locale),
            page_size: state.page.page_size,
            search_query: state.page.search_query.clone(),
            loading: state.in_flight > 0,
            create_form: state.create_form.clone(),
            edit: state.edit.clone(),
        }
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::render(&ListState::default(), Locale::default())
    }
}
