use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: AttrValue,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

/// City input with a search button; Enter in the input also submits
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let callback = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    let onsubmit = {
        let callback = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            callback.emit(());
        })
    };

    html! {
        <form class="search-row" {onsubmit}>
            <input
                type="text"
                class="search-input"
                placeholder={Config::INPUT_PLACEHOLDER}
                aria-label="City name"
                value={props.query.clone()}
                {oninput}
            />
            <button type="submit" class="search-button">{"Search"}</button>
        </form>
    }
}
