use shared::{Locale, TransactionRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Vec<TransactionRow>,
    pub loading: bool,
    pub locale: Locale,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let labels = props.locale.labels();

    html! {
        <section class="transactions-section">
            {if props.loading {
                html! { <div class="loading">{labels.loading}</div> }
            } else { html! {} }}

            <div class="table-container">
                <table class="table transactions-table">
                    <thead>
                        <tr>
                            <th>{labels.id}</th>
                            <th>{labels.account_id}</th>
                            <th>{labels.amount}</th>
                            <th>{labels.transaction_type}</th>
                            <th>{labels.description}</th>
                            <th>{labels.timestamp}</th>
                            <th>{labels.actions}</th>
                        </tr>
                    </thead>
                    <tbody id="transactionsBody">
                        {if props.rows.is_empty() && !props.loading {
                            html! {
                                <tr class="empty-row">
                                    <td colspan="7">{labels.empty}</td>
                                </tr>
                            }
                        } else { html! {} }}

                        {for props.rows.iter().map(|row| {
                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                let id = row.id.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
                            };
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                let id = row.id.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                            };

                            html! {
                                <tr key={row.id.clone()}>
                                    <td>{&row.id}</td>
                                    <td>{&row.account_id}</td>
                                    <td class="amount">{format!("${}", row.amount)}</td>
                                    <td>{row.type_label}</td>
                                    <td class="description">{&row.description}</td>
                                    <td class="date">{&row.timestamp}</td>
                                    <td>
                                        <button
                                            type="button"
                                            class="btn btn-sm btn-outline-primary edit-btn"
                                            data-id={row.id.clone()}
                                            onclick={on_edit}
                                        >
                                            {labels.edit}
                                        </button>
                                        <button
                                            type="button"
                                            class="btn btn-sm btn-outline-danger delete-btn"
                                            data-id={row.id.clone()}
                                            onclick={on_delete}
                                        >
                                            {labels.delete}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn row(id: &str) -> TransactionRow {
        TransactionRow {
            id: id.to_string(),
            account_id: "ACC-001".to_string(),
            amount: "12.50".to_string(),
            type_label: "Deposit",
            description: "-".to_string(),
            timestamp: "1/5/2024, 9:03:07 AM".to_string(),
        }
    }

    #[wasm_bindgen_test]
    async fn test_renders_one_row_per_transaction() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let props = TransactionTableProps {
            rows: vec![row("t-1"), row("t-2")],
            loading: false,
            locale: Locale::EnUs,
            on_edit: Callback::noop(),
            on_delete: Callback::noop(),
        };
        yew::Renderer::<TransactionTable>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let rows = root.query_selector_all("#transactionsBody tr").unwrap();
        assert_eq!(rows.length(), 2);
        assert!(root.inner_html().contains("$12.50"));
    }
}
