use shared::{FormField, Locale, TransactionType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Element ids for one rendering of the transaction fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldIds {
    pub account_id: &'static str,
    pub amount: &'static str,
    pub transaction_type: &'static str,
    pub description: &'static str,
}

pub const CREATE_FIELD_IDS: FieldIds = FieldIds {
    account_id: "accountId",
    amount: "amount",
    transaction_type: "type",
    description: "description",
};

pub const EDIT_FIELD_IDS: FieldIds = FieldIds {
    account_id: "editAccountId",
    amount: "editAmount",
    transaction_type: "editType",
    description: "editDescription",
};

#[derive(Properties, PartialEq)]
pub struct TransactionFieldsProps {
    pub form: shared::TransactionForm,
    pub locale: Locale,
    pub ids: FieldIds,
    #[prop_or_default]
    pub account_readonly: bool,
    pub on_change: Callback<(FormField, String)>,
}

#[function_component(TransactionFields)]
pub fn transaction_fields(props: &TransactionFieldsProps) -> Html {
    let labels = props.locale.labels();

    let input_handler = |field: FormField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    let on_type_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((FormField::Type, select.value()));
        })
    };

    html! {
        <>
            <div class="form-group">
                <label for={props.ids.account_id}>{labels.account_id}</label>
                <input
                    type="text"
                    id={props.ids.account_id}
                    value={props.form.account_id.clone()}
                    readonly={props.account_readonly}
                    oninput={input_handler(FormField::AccountId)}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for={props.ids.amount}>{labels.amount}</label>
                <input
                    type="number"
                    id={props.ids.amount}
                    step="0.01"
                    min="0.01"
                    value={props.form.amount.clone()}
                    oninput={input_handler(FormField::Amount)}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for={props.ids.transaction_type}>{labels.transaction_type}</label>
                <select id={props.ids.transaction_type} onchange={on_type_change}>
                    {for TransactionType::SELECTABLE.iter().map(|option| html! {
                        <option
                            value={option.as_str().to_string()}
                            selected={option.as_str() == props.form.transaction_type}
                        >
                            {props.locale.type_label(option)}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for={props.ids.description}>{labels.description}</label>
                <input
                    type="text"
                    id={props.ids.description}
                    value={props.form.description.clone()}
                    oninput={input_handler(FormField::Description)}
                />
            </div>
        </>
    }
}
