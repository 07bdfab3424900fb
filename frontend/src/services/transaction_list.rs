//! Transaction list controller.
//!
//! Owns the page/search state, talks to the API through [`TransactionApi`] and
//! to the user through [`Dialogs`], and publishes a fresh [`ListView`] after
//! every change. Every operation catches its own failures and turns them into
//! an alert, so the list stays usable after any error.
//!
//! State lives in a `RefCell` that is never borrowed across an `.await`, so
//! operations spawned from different UI events may interleave. A page response
//! is applied only if the page query that requested it is still current.

use crate::services::api::TransactionApi;
use crate::services::dialogs::Dialogs;
use log::{debug, error, info, warn};
use shared::{
    EditSession, FormField, ListState, ListView, Locale, Messages, PageQuery, Transaction,
    TransactionForm,
};
use std::cell::RefCell;

type Observer = Box<dyn Fn(ListView)>;

pub struct TransactionListController<A, D> {
    api: A,
    dialogs: D,
    locale: Locale,
    state: RefCell<ListState>,
    observer: Option<Observer>,
}

impl<A: TransactionApi, D: Dialogs> TransactionListController<A, D> {
    pub fn new(api: A, dialogs: D, locale: Locale, page_size: u32) -> Self {
        Self {
            api,
            dialogs,
            locale,
            state: RefCell::new(ListState::new(page_size)),
            observer: None,
        }
    }

    /// Register the callback that receives every new view
    pub fn with_observer(mut self, observer: impl Fn(ListView) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn view(&self) -> ListView {
        ListView::render(&self.state.borrow(), self.locale)
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer(self.view());
        }
    }

    fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    /// Fetch the current page and the total count, then re-render.
    pub async fn load_transactions(&self) {
        let query = {
            let mut state = self.state.borrow_mut();
            state.in_flight += 1;
            state.page.query()
        };
        self.notify();

        let result = match self.api.list_transactions(&query).await {
            Ok(transactions) => Ok((transactions, self.total_items().await)),
            Err(err) => Err(err),
        };
        self.state.borrow_mut().in_flight -= 1;

        match result {
            Ok((transactions, total)) => {
                self.apply_page(&query, transactions, total);
                self.notify();
            }
            Err(err) => {
                let current = self.state.borrow().page.query() == query;
                self.notify();
                if current {
                    error!("failed to load transactions for {:?}: {}", query, err);
                    self.dialogs.alert(self.messages().load_failed);
                } else {
                    warn!("ignoring failure of stale request {:?}: {}", query, err);
                }
            }
        }
    }

    /// Total number of transactions in the ledger, ignoring any search.
    /// A failed count is treated as an empty ledger.
    async fn total_items(&self) -> u64 {
        match self.api.count_transactions().await {
            Ok(total) => total,
            Err(err) => {
                warn!("failed to fetch transaction count: {}", err);
                0
            }
        }
    }

    fn apply_page(&self, query: &PageQuery, transactions: Vec<Transaction>, total: u64) {
        let mut state = self.state.borrow_mut();
        if state.page.query() != *query {
            warn!("discarding stale response for {:?}", query);
            return;
        }
        debug!("showing {} transactions for {:?} of {}", transactions.len(), query, total);
        state.page.total_items = total;
        state.transactions = transactions;
    }

    pub async fn previous_page(&self) {
        let moved = self.state.borrow_mut().page.previous_page();
        if moved {
            self.load_transactions().await;
        }
    }

    pub async fn next_page(&self) {
        let moved = self.state.borrow_mut().page.next_page();
        if moved {
            self.load_transactions().await;
        }
    }

    pub async fn change_page_size(&self, page_size: u32) {
        let changed = self.state.borrow_mut().page.set_page_size(page_size);
        if !changed {
            warn!("ignoring invalid page size {}", page_size);
            return;
        }
        self.load_transactions().await;
    }

    pub async fn search(&self, text: &str) {
        self.state.borrow_mut().page.set_search_query(text);
        self.load_transactions().await;
    }

    pub fn edit_create_form(&self, field: FormField, value: String) {
        self.state.borrow_mut().create_form.set(field, value);
        self.notify();
    }

    pub fn edit_update_form(&self, field: FormField, value: String) {
        if let Some(session) = self.state.borrow_mut().edit.as_mut() {
            session.form.set(field, value);
        }
        self.notify();
    }

    pub async fn create_transaction(&self) {
        let form = self.state.borrow().create_form.clone();
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                warn!("create form rejected: {}", err);
                self.dialogs.alert(self.locale.validation_message(&err));
                return;
            }
        };

        match self.api.create_transaction(&draft).await {
            Ok(()) => {
                info!("created transaction for account {}", draft.account_id);
                self.state.borrow_mut().create_form = TransactionForm::default();
                self.notify();
                self.load_transactions().await;
                self.dialogs.alert(self.messages().create_succeeded);
            }
            Err(err) if err.is_conflict() => {
                error!("transaction already exists: {}", err);
                self.dialogs.alert(self.messages().create_conflict);
            }
            Err(err) => {
                error!("failed to create transaction: {}", err);
                self.dialogs.alert(self.messages().create_failed);
            }
        }
    }

    /// Load one transaction into the edit form and open the edit dialog.
    pub async fn edit_transaction(&self, id: &str) {
        match self.api.get_transaction(id).await {
            Ok(transaction) => {
                self.state.borrow_mut().edit = Some(EditSession::from_transaction(&transaction));
                self.notify();
            }
            Err(err) => {
                error!("failed to load transaction {}: {}", id, err);
                self.dialogs.alert(self.messages().load_failed);
            }
        }
    }

    /// Save the edit form. The dialog stays open when saving fails.
    pub async fn update_transaction(&self) {
        let session = self.state.borrow().edit.clone();
        let Some(session) = session else {
            return;
        };
        let draft = match session.form.to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                warn!("edit form rejected: {}", err);
                self.dialogs.alert(self.locale.validation_message(&err));
                return;
            }
        };

        match self.api.update_transaction(&session.id, &draft).await {
            Ok(()) => {
                info!("updated transaction {}", session.id);
                self.close_edit_session(&session.id);
                self.load_transactions().await;
                self.dialogs.alert(self.messages().update_succeeded);
            }
            Err(err) => {
                error!("failed to update transaction {}: {}", session.id, err);
                self.dialogs.alert(self.messages().update_failed);
            }
        }
    }

    pub fn close_edit_modal(&self) {
        self.state.borrow_mut().edit = None;
        self.notify();
    }

    /// Close the edit dialog only if it still shows transaction `id`.
    fn close_edit_session(&self, id: &str) {
        let open = self.state.borrow().edit.as_ref().map(|session| session.id == id);
        if open == Some(true) {
            self.close_edit_modal();
        } else {
            debug!("edit dialog moved on from {}, leaving it open", id);
        }
    }

    pub async fn delete_transaction(&self, id: &str) {
        if !self.dialogs.confirm(self.messages().delete_confirm) {
            debug!("deletion of {} cancelled", id);
            return;
        }

        match self.api.delete_transaction(id).await {
            Ok(()) => {
                info!("deleted transaction {}", id);
                self.load_transactions().await;
                self.dialogs.alert(self.messages().delete_succeeded);
            }
            Err(err) => {
                error!("failed to delete transaction {}: {}", id, err);
                self.dialogs.alert(self.messages().delete_failed);
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::{ClientError, TransactionDraft, TransactionType};
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List(PageQuery),
        Count,
        Get(String),
        Create(TransactionDraft),
        Update(String, TransactionDraft),
        Delete(String),
    }

    /// In-memory ledger standing in for the backend
    #[derive(Default)]
    struct FakeLedger {
        transactions: RefCell<Vec<Transaction>>,
        calls: RefCell<Vec<Call>>,
        list_error: RefCell<Option<ClientError>>,
        count_error: RefCell<Option<ClientError>>,
        mutation_error: RefCell<Option<ClientError>>,
        slow_pages: RefCell<HashSet<u32>>,
        failing_pages: RefCell<HashSet<u32>>,
        slow_updates: Cell<bool>,
        next_id: Cell<u32>,
    }

    #[derive(Clone, Default)]
    struct FakeApi(Rc<FakeLedger>);

    impl FakeApi {
        fn with_transactions(count: usize) -> Self {
            let api = Self::default();
            *api.0.transactions.borrow_mut() = (0..count)
                .map(|i| transaction(&format!("t-{}", i), &format!("entry {}", i)))
                .collect();
            api.0.next_id.set(count as u32);
            api
        }

        fn calls(&self) -> Vec<Call> {
            self.0.calls.borrow().clone()
        }

        fn list_calls(&self) -> Vec<PageQuery> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    Call::List(query) => Some(query),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, call: Call) {
            self.0.calls.borrow_mut().push(call);
        }

        fn mutation_result(&self) -> Result<(), ClientError> {
            match self.0.mutation_error.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TransactionApi for FakeApi {
        async fn list_transactions(&self, query: &PageQuery) -> Result<Vec<Transaction>, ClientError> {
            self.record(Call::List(query.clone()));
            let slow = self.0.slow_pages.borrow().contains(&query.page);
            if slow {
                for _ in 0..3 {
                    tokio::task::yield_now().await;
                }
            }
            if let Some(err) = self.0.list_error.borrow().clone() {
                return Err(err);
            }
            if self.0.failing_pages.borrow().contains(&query.page) {
                return Err(ClientError::Http { status: 503 });
            }

            let matching: Vec<Transaction> = self
                .0
                .transactions
                .borrow()
                .iter()
                .filter(|t| match query.search.as_deref() {
                    Some(search) => t.description.as_deref().unwrap_or("").contains(search),
                    None => true,
                })
                .cloned()
                .collect();
            Ok(matching
                .into_iter()
                .skip((query.page * query.size) as usize)
                .take(query.size as usize)
                .collect())
        }

        async fn count_transactions(&self) -> Result<u64, ClientError> {
            self.record(Call::Count);
            if let Some(err) = self.0.count_error.borrow().clone() {
                return Err(err);
            }
            Ok(self.0.transactions.borrow().len() as u64)
        }

        async fn get_transaction(&self, id: &str) -> Result<Transaction, ClientError> {
            self.record(Call::Get(id.to_string()));
            self.0
                .transactions
                .borrow()
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(ClientError::Http { status: 404 })
        }

        async fn create_transaction(&self, draft: &TransactionDraft) -> Result<(), ClientError> {
            self.record(Call::Create(draft.clone()));
            self.mutation_result()?;
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            self.0.transactions.borrow_mut().push(Transaction {
                id: format!("t-{}", id),
                account_id: draft.account_id.clone(),
                amount: draft.amount,
                transaction_type: draft.transaction_type.clone(),
                description: Some(draft.description.clone()),
                timestamp: None,
            });
            Ok(())
        }

        async fn update_transaction(&self, id: &str, draft: &TransactionDraft) -> Result<(), ClientError> {
            self.record(Call::Update(id.to_string(), draft.clone()));
            if self.0.slow_updates.get() {
                for _ in 0..3 {
                    tokio::task::yield_now().await;
                }
            }
            self.mutation_result()?;
            if let Some(existing) = self.0.transactions.borrow_mut().iter_mut().find(|t| t.id == id) {
                existing.amount = draft.amount;
                existing.transaction_type = draft.transaction_type.clone();
                existing.description = Some(draft.description.clone());
            }
            Ok(())
        }

        async fn delete_transaction(&self, id: &str) -> Result<(), ClientError> {
            self.record(Call::Delete(id.to_string()));
            self.mutation_result()?;
            self.0.transactions.borrow_mut().retain(|t| t.id != id);
            Ok(())
        }
    }

    #[derive(Clone)]
    struct FakeDialogs {
        alerts: Rc<RefCell<Vec<String>>>,
        confirms: Rc<Cell<usize>>,
        answer: Rc<Cell<bool>>,
    }

    impl FakeDialogs {
        fn answering(answer: bool) -> Self {
            Self {
                alerts: Rc::default(),
                confirms: Rc::default(),
                answer: Rc::new(Cell::new(answer)),
            }
        }

        fn alerts(&self) -> Vec<String> {
            self.alerts.borrow().clone()
        }
    }

    impl Dialogs for FakeDialogs {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirms.set(self.confirms.get() + 1);
            self.answer.get()
        }
    }

    fn transaction(id: &str, description: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: "ACC-001".to_string(),
            amount: 12.5,
            transaction_type: TransactionType::Deposit,
            description: Some(description.to_string()),
            timestamp: Some("2024-01-05T09:03:07".to_string()),
        }
    }

    fn controller(api: &FakeApi, dialogs: &FakeDialogs) -> TransactionListController<FakeApi, FakeDialogs> {
        TransactionListController::new(api.clone(), dialogs.clone(), Locale::EnUs, 10)
    }

    fn row_ids(view: &ListView) -> Vec<String> {
        view.rows.iter().map(|row| row.id.clone()).collect()
    }

    fn fill_create_form(controller: &TransactionListController<FakeApi, FakeDialogs>) {
        controller.edit_create_form(FormField::AccountId, "ACC-42".to_string());
        controller.edit_create_form(FormField::Amount, "12.5".to_string());
        controller.edit_create_form(FormField::Type, "WITHDRAWAL".to_string());
        controller.edit_create_form(FormField::Description, "Groceries".to_string());
    }

    #[tokio::test]
    async fn test_load_requests_exact_page_and_renders_rows_in_order() {
        let api = FakeApi::with_transactions(25);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);

        list.load_transactions().await;

        assert_eq!(
            api.calls(),
            vec![Call::List(PageQuery { page: 0, size: 10, search: None }), Call::Count]
        );
        let view = list.view();
        let expected: Vec<String> = (0..10).map(|i| format!("t-{}", i)).collect();
        assert_eq!(row_ids(&view), expected);
        assert_eq!(view.rows[0].amount, "12.50");
        assert_eq!(view.pagination.page_info, "Page 1 of 3");
        assert!(view.pagination.previous_disabled);
        assert!(!view.pagination.next_disabled);
        assert!(!view.loading);
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_count_failure_counts_as_empty_ledger() {
        let api = FakeApi::with_transactions(25);
        *api.0.count_error.borrow_mut() = Some(ClientError::Http { status: 500 });
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);

        list.load_transactions().await;

        let view = list.view();
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.pagination.total_pages, 0);
        assert!(view.pagination.next_disabled);
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_list_failure_alerts_and_keeps_previous_rows() {
        let api = FakeApi::with_transactions(25);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.load_transactions().await;

        *api.0.list_error.borrow_mut() = Some(ClientError::Network("offline".to_string()));
        list.next_page().await;

        let view = list.view();
        assert_eq!(row_ids(&view)[0], "t-0");
        assert!(!view.loading);
        assert_eq!(
            dialogs.alerts(),
            vec!["Failed to load transactions. Please try again.".to_string()]
        );
        // the count is not requested once the page request failed
        assert_eq!(api.calls().last(), Some(&Call::List(PageQuery { page: 1, size: 10, search: None })));
    }

    #[tokio::test]
    async fn test_paging_respects_bounds() {
        let api = FakeApi::with_transactions(25);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.load_transactions().await;

        list.previous_page().await;
        assert_eq!(api.list_calls().len(), 1);

        list.next_page().await;
        list.next_page().await;
        let view = list.view();
        assert_eq!(row_ids(&view), vec!["t-20", "t-21", "t-22", "t-23", "t-24"]);
        assert!(view.pagination.next_disabled);
        assert!(!view.pagination.previous_disabled);

        list.next_page().await;
        assert_eq!(api.list_calls().len(), 3);

        list.previous_page().await;
        assert_eq!(api.list_calls().last().map(|q| q.page), Some(1));
    }

    #[tokio::test]
    async fn test_page_size_change_resets_to_first_page() {
        let api = FakeApi::with_transactions(25);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.load_transactions().await;
        list.next_page().await;

        list.change_page_size(20).await;

        assert_eq!(
            api.list_calls().last(),
            Some(&PageQuery { page: 0, size: 20, search: None })
        );
        let view = list.view();
        assert_eq!(view.rows.len(), 20);
        assert_eq!(view.page_size, 20);
        assert_eq!(view.pagination.page_info, "Page 1 of 2");

        list.change_page_size(0).await;
        assert_eq!(api.list_calls().len(), 3);
        assert_eq!(list.view().page_size, 20);
    }

    #[tokio::test]
    async fn test_search_resets_page_and_uses_query() {
        let api = FakeApi::with_transactions(25);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.load_transactions().await;
        list.next_page().await;

        list.search("  entry 2 ").await;

        assert_eq!(
            api.list_calls().last(),
            Some(&PageQuery { page: 0, size: 10, search: Some("entry 2".to_string()) })
        );
        let view = list.view();
        assert_eq!(view.search_query, "entry 2");
        assert_eq!(row_ids(&view), vec!["t-2", "t-20", "t-21", "t-22", "t-23", "t-24"]);
        // bounds still come from the unfiltered count
        assert_eq!(view.pagination.total_pages, 3);
    }

    #[tokio::test]
    async fn test_stale_page_response_is_discarded() {
        let api = FakeApi::with_transactions(25);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.load_transactions().await;
        api.0.slow_pages.borrow_mut().insert(1);

        tokio::join!(list.next_page(), async {
            tokio::task::yield_now().await;
            list.previous_page().await;
        });

        let view = list.view();
        assert_eq!(view.pagination.current_page_number, 1);
        assert_eq!(row_ids(&view)[0], "t-0");
        assert!(!view.loading);
        assert_eq!(
            api.list_calls().iter().map(|q| q.page).collect::<Vec<_>>(),
            vec![0, 1, 0]
        );
    }

    #[tokio::test]
    async fn test_stale_page_failure_is_not_alerted() {
        let api = FakeApi::with_transactions(25);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.load_transactions().await;
        api.0.slow_pages.borrow_mut().insert(1);
        api.0.failing_pages.borrow_mut().insert(1);

        tokio::join!(list.next_page(), async {
            tokio::task::yield_now().await;
            list.previous_page().await;
        });

        let view = list.view();
        assert_eq!(view.pagination.current_page_number, 1);
        assert_eq!(row_ids(&view)[0], "t-0");
        assert!(!view.loading);
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_create_conflict_shows_duplicate_message() {
        let api = FakeApi::with_transactions(3);
        *api.0.mutation_error.borrow_mut() = Some(ClientError::Http { status: 409 });
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        fill_create_form(&list);

        list.create_transaction().await;

        assert_eq!(dialogs.alerts(), vec!["Transaction already exists!".to_string()]);
        assert_eq!(list.view().create_form.account_id, "ACC-42");
        assert!(api.list_calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_other_failure_shows_generic_message() {
        for err in [
            ClientError::Http { status: 400 },
            ClientError::Http { status: 500 },
            ClientError::Network("offline".to_string()),
        ] {
            let api = FakeApi::with_transactions(3);
            *api.0.mutation_error.borrow_mut() = Some(err);
            let dialogs = FakeDialogs::answering(true);
            let list = controller(&api, &dialogs);
            fill_create_form(&list);

            list.create_transaction().await;

            assert_eq!(
                dialogs.alerts(),
                vec!["Failed to create transaction. Please try again.".to_string()]
            );
        }
    }

    #[tokio::test]
    async fn test_create_success_resets_form_and_reloads() {
        let api = FakeApi::with_transactions(3);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        fill_create_form(&list);

        list.create_transaction().await;

        let calls = api.calls();
        assert_eq!(
            calls[0],
            Call::Create(TransactionDraft {
                account_id: "ACC-42".to_string(),
                amount: 12.5,
                transaction_type: TransactionType::Withdrawal,
                description: "Groceries".to_string(),
            })
        );
        assert_eq!(calls[1], Call::List(PageQuery { page: 0, size: 10, search: None }));

        let view = list.view();
        assert_eq!(view.create_form, TransactionForm::default());
        assert_eq!(view.rows.len(), 4);
        assert_eq!(dialogs.alerts(), vec!["Transaction created successfully!".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_create_form_issues_no_request() {
        let api = FakeApi::with_transactions(3);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        fill_create_form(&list);
        list.edit_create_form(FormField::Amount, "twelve".to_string());

        list.create_transaction().await;

        assert!(api.calls().is_empty());
        assert_eq!(dialogs.alerts(), vec!["Amount must be a valid number.".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_without_confirmation_issues_no_request() {
        let api = FakeApi::with_transactions(3);
        let dialogs = FakeDialogs::answering(false);
        let list = controller(&api, &dialogs);

        list.delete_transaction("t-1").await;

        assert_eq!(dialogs.confirms.get(), 1);
        assert!(api.calls().is_empty());
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_confirmation_issues_single_delete() {
        let api = FakeApi::with_transactions(3);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);

        list.delete_transaction("t-1").await;

        let deletes: Vec<Call> = api
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Delete(_)))
            .collect();
        assert_eq!(deletes, vec![Call::Delete("t-1".to_string())]);
        assert_eq!(row_ids(&list.view()), vec!["t-0", "t-2"]);
        assert_eq!(dialogs.alerts(), vec!["Transaction deleted successfully!".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_failure_only_alerts() {
        let api = FakeApi::with_transactions(3);
        *api.0.mutation_error.borrow_mut() = Some(ClientError::Http { status: 404 });
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);

        list.delete_transaction("t-9").await;

        assert!(api.list_calls().is_empty());
        assert_eq!(
            dialogs.alerts(),
            vec!["Failed to delete transaction. Please try again.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_edit_opens_dialog_with_transaction() {
        let api = FakeApi::with_transactions(3);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);

        list.edit_transaction("t-2").await;

        let edit = list.view().edit.expect("edit dialog should be open");
        assert_eq!(edit.id, "t-2");
        assert_eq!(edit.form.account_id, "ACC-001");
        assert_eq!(edit.form.amount, "12.5");
        assert_eq!(edit.form.transaction_type, "DEPOSIT");
        assert_eq!(edit.form.description, "entry 2");
    }

    #[tokio::test]
    async fn test_edit_of_missing_transaction_alerts() {
        let api = FakeApi::with_transactions(3);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);

        list.edit_transaction("nope").await;

        assert!(list.view().edit.is_none());
        assert_eq!(
            dialogs.alerts(),
            vec!["Failed to load transactions. Please try again.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_update_failure_keeps_dialog_open() {
        let api = FakeApi::with_transactions(3);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.edit_transaction("t-0").await;
        list.edit_update_form(FormField::Amount, "99".to_string());
        *api.0.mutation_error.borrow_mut() = Some(ClientError::Http { status: 500 });

        list.update_transaction().await;

        let edit = list.view().edit.expect("edit dialog should stay open");
        assert_eq!(edit.form.amount, "99");
        assert!(api.list_calls().is_empty());
        assert_eq!(
            dialogs.alerts(),
            vec!["Failed to update transaction. Please try again.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_update_success_closes_dialog_and_reloads() {
        let api = FakeApi::with_transactions(3);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.edit_transaction("t-0").await;
        list.edit_update_form(FormField::Amount, "99".to_string());
        list.edit_update_form(FormField::Description, String::new());

        list.update_transaction().await;

        assert!(api.calls().contains(&Call::Update(
            "t-0".to_string(),
            TransactionDraft {
                account_id: "ACC-001".to_string(),
                amount: 99.0,
                transaction_type: TransactionType::Deposit,
                description: String::new(),
            }
        )));
        let view = list.view();
        assert!(view.edit.is_none());
        assert_eq!(view.rows[0].amount, "99.00");
        assert_eq!(view.rows[0].description, "-");
        assert_eq!(dialogs.alerts(), vec!["Transaction updated successfully!".to_string()]);
    }

    #[tokio::test]
    async fn test_update_success_keeps_newer_edit_dialog_open() {
        let api = FakeApi::with_transactions(3);
        api.0.slow_updates.set(true);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.edit_transaction("t-0").await;
        list.edit_update_form(FormField::Amount, "99".to_string());

        tokio::join!(list.update_transaction(), async {
            tokio::task::yield_now().await;
            list.edit_transaction("t-1").await;
            list.edit_update_form(FormField::Description, "draft".to_string());
        });

        let edit = list.view().edit.expect("second edit dialog should stay open");
        assert_eq!(edit.id, "t-1");
        assert_eq!(edit.form.description, "draft");
        assert_eq!(row_ids(&list.view()), vec!["t-0", "t-1", "t-2"]);
        assert_eq!(list.view().rows[0].amount, "99.00");
        assert_eq!(dialogs.alerts(), vec!["Transaction updated successfully!".to_string()]);
    }

    #[tokio::test]
    async fn test_close_edit_dialog_discards_changes() {
        let api = FakeApi::with_transactions(3);
        let dialogs = FakeDialogs::answering(true);
        let list = controller(&api, &dialogs);
        list.edit_transaction("t-1").await;
        list.edit_update_form(FormField::Amount, "1".to_string());

        list.close_edit_modal();
        list.update_transaction().await;

        assert!(list.view().edit.is_none());
        assert!(!api.calls().iter().any(|call| matches!(call, Call::Update(..))));
    }

    #[tokio::test]
    async fn test_observer_sees_loading_then_rows() {
        let api = FakeApi::with_transactions(2);
        let dialogs = FakeDialogs::answering(true);
        let seen: Rc<RefCell<Vec<ListView>>> = Rc::default();
        let sink = seen.clone();
        let list = TransactionListController::new(api.clone(), dialogs.clone(), Locale::ZhCn, 10)
            .with_observer(move |view| sink.borrow_mut().push(view));

        list.load_transactions().await;

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].loading);
        assert!(seen[0].rows.is_empty());
        assert!(!seen[1].loading);
        assert_eq!(seen[1].rows.len(), 2);
        assert_eq!(seen[1].rows[0].type_label, "存款");
    }
}
