use super::transaction_fields::{TransactionFields, CREATE_FIELD_IDS};
use shared::{FormField, Locale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub form: shared::TransactionForm,
    pub locale: Locale,
    pub on_field_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let labels = props.locale.labels();

    html! {
        <section class="create-transaction-section">
            <h2>{labels.create_heading}</h2>

            <form id="transactionForm" class="transaction-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <TransactionFields
                    form={props.form.clone()}
                    locale={props.locale}
                    ids={CREATE_FIELD_IDS}
                    on_change={props.on_field_change.clone()}
                />

                <button type="submit" class="btn btn-primary">
                    {labels.create_submit}
                </button>
            </form>
        </section>
    }
}
