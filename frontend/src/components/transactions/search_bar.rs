use shared::Locale;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub locale: Locale,
    /// Query the list is currently filtered by
    #[prop_or_default]
    pub initial_query: String,
    pub on_search: Callback<String>,
}

/// Search box. The query is only submitted on Enter or the search button.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let labels = props.locale.labels();
    let text = use_state(|| props.initial_query.clone());

    let on_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    let on_keypress = {
        let text = text.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_search.emit((*text).clone());
            }
        })
    };

    let on_click = {
        let text = text.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit((*text).clone()))
    };

    html! {
        <div class="search-bar">
            <input
                type="text"
                id="searchInput"
                placeholder={labels.search_placeholder}
                value={(*text).clone()}
                oninput={on_input}
                onkeypress={on_keypress}
            />
            <button type="button" id="searchBtn" class="btn btn-primary" onclick={on_click}>
                {labels.search}
            </button>
        </div>
    }
}
