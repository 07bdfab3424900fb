use crate::config::AppConfig;
use crate::services::api::ApiClient;
use crate::services::dialogs::BrowserDialogs;
use crate::services::transaction_list::TransactionListController;
use shared::{FormField, ListView};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub type BrowserController = TransactionListController<ApiClient, BrowserDialogs>;

pub struct UseTransactionListResult {
    pub view: ListView,
    pub actions: UseTransactionListActions,
}

#[derive(Clone)]
pub struct UseTransactionListActions {
    pub previous_page: Callback<()>,
    pub next_page: Callback<()>,
    pub change_page_size: Callback<u32>,
    pub search: Callback<String>,
    pub on_create_field_change: Callback<(FormField, String)>,
    pub create: Callback<()>,
    pub edit: Callback<String>,
    pub on_edit_field_change: Callback<(FormField, String)>,
    pub save_edit: Callback<()>,
    pub close_edit: Callback<()>,
    pub delete: Callback<String>,
}

/// Binds a [`TransactionListController`] to component state. The controller is
/// created once per mount and loads the first page right away.
#[hook]
pub fn use_transaction_list(config: &AppConfig) -> UseTransactionListResult {
    let view = use_state(ListView::default);

    let controller = {
        let setter = view.setter();
        let config = config.clone();
        use_memo((), move |_| {
            BrowserController::new(
                ApiClient::with_base_url(config.api_base_url.clone()),
                BrowserDialogs,
                config.locale,
                config.default_page_size,
            )
            .with_observer(move |next| setter.set(next))
        })
    };

    // Initial load
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                controller.load_transactions().await;
            });
            || ()
        });
    }

    let previous_page = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.previous_page().await;
            });
        })
    };

    let next_page = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.next_page().await;
            });
        })
    };

    let change_page_size = {
        let controller = controller.clone();
        use_callback((), move |page_size: u32, _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.change_page_size(page_size).await;
            });
        })
    };

    let search = {
        let controller = controller.clone();
        use_callback((), move |text: String, _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.search(&text).await;
            });
        })
    };

    let on_create_field_change = {
        let controller = controller.clone();
        use_callback((), move |(field, value): (FormField, String), _| {
            controller.edit_create_form(field, value);
        })
    };

    let create = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.create_transaction().await;
            });
        })
    };

    let edit = {
        let controller = controller.clone();
        use_callback((), move |id: String, _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.edit_transaction(&id).await;
            });
        })
    };

    let on_edit_field_change = {
        let controller = controller.clone();
        use_callback((), move |(field, value): (FormField, String), _| {
            controller.edit_update_form(field, value);
        })
    };

    let save_edit = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.update_transaction().await;
            });
        })
    };

    let close_edit = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            controller.close_edit_modal();
        })
    };

    let delete = {
        let controller = controller.clone();
        use_callback((), move |id: String, _| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.delete_transaction(&id).await;
            });
        })
    };

    let actions = UseTransactionListActions {
        previous_page,
        next_page,
        change_page_size,
        search,
        on_create_field_change,
        create,
        edit,
        on_edit_field_change,
        save_edit,
        close_edit,
        delete,
    };

    UseTransactionListResult {
        view: (*view).clone(),
        actions,
    }
}
