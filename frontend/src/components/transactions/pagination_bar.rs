use shared::{Locale, PaginationView};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: PaginationView,
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
    pub locale: Locale,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_page_size_change: Callback<u32>,
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let labels = props.locale.labels();

    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| on_previous.emit(()))
    };

    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let on_page_size_change = {
        let on_page_size_change = props.on_page_size_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<u32>() {
                Ok(size) => on_page_size_change.emit(size),
                Err(err) => log::warn!("ignoring page size {:?}: {}", select.value(), err),
            }
        })
    };

    html! {
        <div class="pagination-bar">
            <button
                type="button"
                id="prevPage"
                class="btn btn-outline-secondary"
                disabled={props.pagination.previous_disabled}
                onclick={on_previous}
            >
                {labels.previous}
            </button>

            <span id="pageInfo" class="page-info">{&props.pagination.page_info}</span>

            <button
                type="button"
                id="nextPage"
                class="btn btn-outline-secondary"
                disabled={props.pagination.next_disabled}
                onclick={on_next}
            >
                {labels.next}
            </button>

            <label for="pageSize">{labels.page_size}</label>
            <select id="pageSize" onchange={on_page_size_change}>
                {for props.page_size_options.iter().map(|size| html! {
                    <option value={size.to_string()} selected={*size == props.page_size}>
                        {size.to_string()}
                    </option>
                })}
            </select>
        </div>
    }
}
