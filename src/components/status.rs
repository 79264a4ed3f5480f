use crate::models::lookup::LookupState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: LookupState,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    html! {
        <>
            if props.state.loading {
                <p class="status loading">{"Loading..."}</p>
            }
            if let Some(message) = props.state.error_message() {
                <p class="status error">{message}</p>
            }
        </>
    }
}
