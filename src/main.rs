use std::rc::Rc;
use yew::prelude::*;

use weather_lookup::components::{SearchBar, Status, WeatherCard};
use weather_lookup::config::Config;
use weather_lookup::hooks::use_weather_lookup::use_weather_lookup;
use weather_lookup::services::wttr_api::{WeatherSource, WttrClient};

#[derive(Properties)]
struct AppProps {
    source: Rc<dyn WeatherSource>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let lookup = use_weather_lookup(props.source.clone());
    let state = &*lookup.state;

    html! {
        <div class="app-container">
            <div class="card">
                <h2>{Config::TITLE}</h2>

                <SearchBar
                    query={state.query.clone()}
                    on_input={lookup.on_input.clone()}
                    on_submit={lookup.on_submit.clone()}
                />

                <Status state={state.clone()} />

                if let Some((city, weather)) = state.report() {
                    <WeatherCard city={city.to_string()} weather={weather.clone()} />
                }
            </div>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    match WttrClient::new() {
        Ok(client) => {
            let props = AppProps {
                source: Rc::new(client),
            };
            yew::Renderer::<App>::with_props(props).render();
        }
        Err(e) => gloo::console::error!(&format!("Failed to start weather lookup: {e}")),
    }
}
