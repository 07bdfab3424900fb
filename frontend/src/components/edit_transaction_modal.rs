use crate::components::forms::transaction_fields::{TransactionFields, EDIT_FIELD_IDS};
use shared::{EditSession, FormField, Locale};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditTransactionModalProps {
    /// The modal is shown while a session is present
    pub session: Option<EditSession>,
    pub locale: Locale,
    pub on_field_change: Callback<(FormField, String)>,
    pub on_save: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(EditTransactionModal)]
pub fn edit_transaction_modal(props: &EditTransactionModalProps) -> Html {
    let labels = props.locale.labels();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_save_click = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            on_save.emit(());
        })
    };

    let on_submit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };

    let Some(session) = props.session.as_ref() else {
        return html! {};
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div id="editTransactionModal" class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{labels.edit_heading}</h3>

                    <form id="editTransactionForm" onsubmit={on_submit}>
                        <input type="hidden" id="editTransactionId" value={session.id.clone()} />

                        <TransactionFields
                            form={session.form.clone()}
                            locale={props.locale}
                            ids={EDIT_FIELD_IDS}
                            account_readonly=true
                            on_change={props.on_field_change.clone()}
                        />
                    </form>

                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {labels.cancel}
                        </button>
                        <button
                            type="button"
                            id="saveTransactionBtn"
                            class="btn btn-primary"
                            onclick={on_save_click}
                        >
                            {labels.save}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
