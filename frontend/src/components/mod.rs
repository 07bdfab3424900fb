pub mod edit_transaction_modal;
pub mod forms;
pub mod transactions;

pub use edit_transaction_modal::EditTransactionModal;
