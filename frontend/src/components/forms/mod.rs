pub mod transaction_fields;
pub mod transaction_form;

pub use transaction_form::TransactionForm;
