//! User-facing text for the two supported UI languages.

use crate::form::ValidationError;
use crate::TransactionType;
use chrono::{DateTime, NaiveDateTime};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    EnUs,
}

/// Alert and confirmation texts
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub load_failed: &'static str,
    pub create_conflict: &'static str,
    pub create_failed: &'static str,
    pub create_succeeded: &'static str,
    pub update_failed: &'static str,
    pub update_succeeded: &'static str,
    pub delete_confirm: &'static str,
    pub delete_failed: &'static str,
    pub delete_succeeded: &'static str,
    pub blank_account_id: &'static str,
    pub invalid_amount: &'static str,
    pub amount_too_small: &'static str,
    pub blank_type: &'static str,
}

/// Headings, column names and button captions
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub id: &'static str,
    pub account_id: &'static str,
    pub amount: &'static str,
    pub transaction_type: &'static str,
    pub description: &'static str,
    pub timestamp: &'static str,
    pub actions: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub page_size: &'static str,
    pub search_placeholder: &'static str,
    pub search: &'static str,
    pub create_heading: &'static str,
    pub create_submit: &'static str,
    pub edit_heading: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
}

static ZH_CN_MESSAGES: Messages = Messages {
    load_failed: "加载交易失败。请重试。",
    create_conflict: "交易已存在！",
    create_failed: "创建交易失败。请重试。",
    create_succeeded: "交易创建成功！",
    update_failed: "更新交易失败。请重试。",
    update_succeeded: "交易更新成功！",
    delete_confirm: "您确定要删除此交易吗？",
    delete_failed: "删除交易失败。请重试。",
    delete_succeeded: "交易删除成功！",
    blank_account_id: "账户ID不能为空。",
    invalid_amount: "金额必须是有效的数字。",
    amount_too_small: "金额必须大于 0。",
    blank_type: "交易类型不能为空。",
};

static EN_US_MESSAGES: Messages = Messages {
    load_failed: "Failed to load transactions. Please try again.",
    create_conflict: "Transaction already exists!",
    create_failed: "Failed to create transaction. Please try again.",
    create_succeeded: "Transaction created successfully!",
    update_failed: "Failed to update transaction. Please try again.",
    update_succeeded: "Transaction updated successfully!",
    delete_confirm: "Are you sure you want to delete this transaction?",
    delete_failed: "Failed to delete transaction. Please try again.",
    delete_succeeded: "Transaction deleted successfully!",
    blank_account_id: "Account ID cannot be blank.",
    invalid_amount: "Amount must be a valid number.",
    amount_too_small: "Amount must be greater than 0.",
    blank_type: "Transaction type cannot be blank.",
};

static ZH_CN_LABELS: Labels = Labels {
    title: "银行交易管理",
    id: "ID",
    account_id: "账户ID",
    amount: "金额",
    transaction_type: "类型",
    description: "描述",
    timestamp: "时间",
    actions: "操作",
    edit: "编辑",
    delete: "删除",
    previous: "上一页",
    next: "下一页",
    page_size: "每页显示",
    search_placeholder: "搜索交易...",
    search: "搜索",
    create_heading: "新建交易",
    create_submit: "创建交易",
    edit_heading: "编辑交易",
    save: "保存更改",
    cancel: "取消",
    loading: "加载中...",
    empty: "暂无交易",
};

static EN_US_LABELS: Labels = Labels {
    title: "Bank Transactions",
    id: "ID",
    account_id: "Account ID",
    amount: "Amount",
    transaction_type: "Type",
    description: "Description",
    timestamp: "Time",
    actions: "Actions",
    edit: "Edit",
    delete: "Delete",
    previous: "Previous",
    next: "Next",
    page_size: "Per page",
    search_placeholder: "Search transactions...",
    search: "Search",
    create_heading: "New Transaction",
    create_submit: "Create Transaction",
    edit_heading: "Edit Transaction",
    save: "Save Changes",
    cancel: "Cancel",
    loading: "Loading...",
    empty: "No transactions",
};

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::EnUs => "en-US",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::ZhCn => &ZH_CN_MESSAGES,
            Locale::EnUs => &EN_US_MESSAGES,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::ZhCn => &ZH_CN_LABELS,
            Locale::EnUs => &EN_US_LABELS,
        }
    }

    /// Display label of a transaction type. Anything not a deposit or a withdrawal
    /// is shown as a transfer.
    pub fn type_label(self, transaction_type: &TransactionType) -> &'static str {
        match (self, transaction_type) {
            (Locale::ZhCn, TransactionType::Deposit) => "存款",
            (Locale::ZhCn, TransactionType::Withdrawal) => "取款",
            (Locale::ZhCn, _) => "转账",
            (Locale::EnUs, TransactionType::Deposit) => "Deposit",
            (Locale::EnUs, TransactionType::Withdrawal) => "Withdrawal",
            (Locale::EnUs, _) => "Transfer",
        }
    }

    pub fn page_indicator(self, page_number: u64, total_pages: u64) -> String {
        match self {
            Locale::ZhCn => format!("第 {} 页，共 {} 页", page_number, total_pages),
            Locale::EnUs => format!("Page {} of {}", page_number, total_pages),
        }
    }

    pub fn validation_message(self, error: &ValidationError) -> &'static str {
        let messages = self.messages();
        match error {
            ValidationError::BlankAccountId => messages.blank_account_id,
            ValidationError::InvalidAmount(_) => messages.invalid_amount,
            ValidationError::AmountTooSmall => messages.amount_too_small,
            ValidationError::BlankType => messages.blank_type,
        }
    }

    /// Format a server timestamp the way the locale writes dates.
    ///
    /// Offset timestamps are shown in their own offset; values that cannot be
    /// parsed are returned unchanged.
    pub fn format_timestamp(self, raw: &str) -> String {
        let Some(timestamp) = parse_timestamp(raw) else {
            return raw.to_string();
        };
        let pattern = match self {
            Locale::ZhCn => "%Y/%-m/%-d %H:%M:%S",
            Locale::EnUs => "%-m/%-d/%Y, %-I:%M:%S %p",
        };
        timestamp.format(pattern).to_string()
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    raw.parse::<NaiveDateTime>().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale {0:?}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" => Ok(Locale::ZhCn),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(UnknownLocale(tag.to_string())),
        }
    }
}
