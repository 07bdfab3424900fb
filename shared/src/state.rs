use crate::form::TransactionForm;
use crate::page::PageState;
use crate::Transaction;

/// Everything the transaction list remembers between events.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub page: PageState,
    /// Result of the most recent applied list request
    pub transactions: Vec<Transaction>,
    pub create_form: TransactionForm,
    /// Present while the edit dialog is open
    pub edit: Option<EditSession>,
    /// Number of list requests still waiting for a response
    pub in_flight: usize,
}

/// The transaction being edited and the current contents of the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: String,
    pub form: TransactionForm,
}

impl ListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: PageState::new(page_size),
            ..Self::default()
        }
    }
}

impl EditSession {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id.clone(),
            form: TransactionForm::from_transaction(transaction),
        }
    }
}
