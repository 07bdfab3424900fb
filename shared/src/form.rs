//! Create/edit form contents and their validation.
//!
//! The rules mirror the constraints the ledger server enforces on its side, so
//! a form that passes here is only rejected by the server for business reasons
//! (duplicate, unknown id, changed account).

use crate::{Transaction, TransactionDraft, TransactionType};
use thiserror::Error;

/// Smallest amount the server accepts
pub const MIN_AMOUNT: f64 = 0.01;

/// Text of the create form or the edit form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub account_id: String,
    pub amount: String,
    pub transaction_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    AccountId,
    Amount,
    Type,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("account id must not be blank")]
    BlankAccountId,
    #[error("amount {0:?} is not a number")]
    InvalidAmount(String),
    #[error("amount must be at least 0.01")]
    AmountTooSmall,
    #[error("transaction type must not be blank")]
    BlankType,
}

impl TransactionForm {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            account_id: transaction.account_id.clone(),
            amount: transaction.amount.to_string(),
            transaction_type: transaction.transaction_type.as_str().to_string(),
            description: transaction.description.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::AccountId => self.account_id = value,
            FormField::Amount => self.amount = value,
            FormField::Type => self.transaction_type = value,
            FormField::Description => self.description = value,
        }
    }

    /// Validate the form and build the request body. Reports the first problem found.
    pub fn to_draft(&self) -> Result<TransactionDraft, ValidationError> {
        if self.account_id.trim().is_empty() {
            return Err(ValidationError::BlankAccountId);
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.clone()))?;
        if amount < MIN_AMOUNT {
            return Err(ValidationError::AmountTooSmall);
        }

        if self.transaction_type.trim().is_empty() {
            return Err(ValidationError::BlankType);
        }

        Ok(TransactionDraft {
            account_id: self.account_id.clone(),
            amount,
            transaction_type: TransactionType::from(self.transaction_type.trim().to_string()),
            description: self.description.clone(),
        })
    }
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            amount: String::new(),
            transaction_type: TransactionType::Deposit.as_str().to_string(),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TransactionForm {
        TransactionForm {
            account_id: "ACC-001".to_string(),
            amount: " 12.5 ".to_string(),
            transaction_type: "WITHDRAWAL".to_string(),
            description: "ATM".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_draft() {
        let draft = filled().to_draft().unwrap();
        assert_eq!(draft.account_id, "ACC-001");
        assert_eq!(draft.amount, 12.5);
        assert_eq!(draft.transaction_type, TransactionType::Withdrawal);
        assert_eq!(draft.description, "ATM");
    }

    #[test]
    fn test_blank_account_rejected() {
        let mut form = filled();
        form.account_id = "   ".to_string();
        assert_eq!(form.to_draft(), Err(ValidationError::BlankAccountId));
    }

    #[test]
    fn test_amount_must_be_a_finite_number() {
        for bad in ["", "abc", "NaN", "inf", "12,50"] {
            let mut form = filled();
            form.amount = bad.to_string();
            assert_eq!(
                form.to_draft(),
                Err(ValidationError::InvalidAmount(bad.to_string())),
                "amount {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_amount_lower_bound() {
        let mut form = filled();
        form.amount = "0".to_string();
        assert_eq!(form.to_draft(), Err(ValidationError::AmountTooSmall));

        form.amount = "-5".to_string();
        assert_eq!(form.to_draft(), Err(ValidationError::AmountTooSmall));

        form.amount = "0.01".to_string();
        assert!(form.to_draft().is_ok());
    }

    #[test]
    fn test_blank_type_rejected() {
        let mut form = filled();
        form.transaction_type = String::new();
        assert_eq!(form.to_draft(), Err(ValidationError::BlankType));
    }

    #[test]
    fn test_from_transaction_fills_every_field() {
        let transaction = Transaction {
            id: "t-1".to_string(),
            account_id: "ACC-7".to_string(),
            amount: 100.0,
            transaction_type: TransactionType::Transfer,
            description: None,
            timestamp: None,
        };

        let form = TransactionForm::from_transaction(&transaction);
        assert_eq!(form.account_id, "ACC-7");
        assert_eq!(form.amount, "100");
        assert_eq!(form.transaction_type, "TRANSFER");
        assert_eq!(form.description, "");
    }

    #[test]
    fn test_set_updates_single_field() {
        let mut form = TransactionForm::default();
        assert_eq!(form.transaction_type, "DEPOSIT");

        form.set(FormField::Description, "Lunch".to_string());
        form.set(FormField::Amount, "9.99".to_string());
        assert_eq!(form.description, "Lunch");
        assert_eq!(form.amount, "9.99");
        assert_eq!(form.account_id, "");
    }
}
