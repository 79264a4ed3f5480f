use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::lookup::{LookupAction, LookupState};
use crate::services::lookup::{next_ticket, submit};
use crate::services::wttr_api::WeatherSource;

/// Handle returned by `use_weather_lookup` hook
#[derive(Clone)]
pub struct LookupHandle {
    pub state: UseReducerHandle<LookupState>,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Custom hook driving one lookup widget against `source`
#[hook]
pub fn use_weather_lookup(source: Rc<dyn WeatherSource>) -> LookupHandle {
    let state = use_reducer(LookupState::default);
    // Last ticket handed out; only the newest request may update the state
    let tickets = use_mut_ref(|| 0u64);

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |query: String| dispatcher.dispatch(LookupAction::Input(query)))
    };

    let on_submit = {
        let dispatcher = state.dispatcher();
        let query = state.query.clone();
        Callback::from(move |()| {
            let ticket = next_ticket(&tickets);

            let source = source.clone();
            let dispatcher = dispatcher.clone();
            let query = query.clone();

            spawn_local(async move {
                submit(&*source, &query, ticket, move |action| {
                    log_action(&action);
                    dispatcher.dispatch(action);
                })
                .await;
            });
        })
    };

    LookupHandle {
        state,
        on_input,
        on_submit,
    }
}

/// Writes request starts and failure causes to the browser console
fn log_action(action: &LookupAction) {
    match action {
        LookupAction::Started { ticket, city } => {
            gloo::console::debug!(&format!("Looking up weather for {city} (request #{ticket})"));
        }
        LookupAction::Resolved {
            ticket,
            outcome: Err(e),
        } => {
            gloo::console::warn!(&format!("Weather request #{ticket} failed: {e}"));
        }
        _ => {}
    }
}
