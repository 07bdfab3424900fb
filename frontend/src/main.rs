use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::transactions::{PaginationBar, SearchBar, TransactionTable};
use components::{forms::TransactionForm, EditTransactionModal};
use config::AppConfig;
use hooks::use_transaction_list::use_transaction_list;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let list = use_transaction_list(&props.config);
    let view = list.view;
    let actions = list.actions;
    let labels = view.locale.labels();

    html! {
        <div class="app">
            <header class="header">
                <h1>{labels.title}</h1>
            </header>

            <main class="main">
                <TransactionForm
                    form={view.create_form.clone()}
                    locale={view.locale}
                    on_field_change={actions.on_create_field_change.clone()}
                    on_submit={actions.create.clone()}
                />

                <SearchBar
                    locale={view.locale}
                    initial_query={view.search_query.clone()}
                    on_search={actions.search.clone()}
                />

                <TransactionTable
                    rows={view.rows.clone()}
                    loading={view.loading}
                    locale={view.locale}
                    on_edit={actions.edit.clone()}
                    on_delete={actions.delete.clone()}
                />

                <PaginationBar
                    pagination={view.pagination.clone()}
                    page_size={view.page_size}
                    page_size_options={props.config.page_size_options.clone()}
                    locale={view.locale}
                    on_previous={actions.previous_page.clone()}
                    on_next={actions.next_page.clone()}
                    on_page_size_change={actions.change_page_size.clone()}
                />
            </main>

            <EditTransactionModal
                session={view.edit.clone()}
                locale={view.locale}
                on_field_change={actions.on_edit_field_change.clone()}
                on_save={actions.save_edit.clone()}
                on_close={actions.close_edit.clone()}
            />
        </div>
    }
}

fn main() {
    // Only fails if a logger is already installed.
    let _ = Logger::init(log::LevelFilter::Info);

    let config = AppConfig::from_document().unwrap_or_else(|err| {
        log::warn!("falling back to default configuration: {:#}", err);
        AppConfig::default()
    });
    log::set_max_level(config.log_level);
    log::info!(
        "starting ledger client (locale {}, page size {})",
        config.locale.tag(),
        config.default_page_size
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
