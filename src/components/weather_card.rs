use crate::models::weather::WeatherResult;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeatherCardProps {
    pub city: AttrValue,
    pub weather: WeatherResult,
}

#[function_component(WeatherCard)]
pub fn weather_card(props: &WeatherCardProps) -> Html {
    let weather = &props.weather;

    html! {
        <div class="weather-result">
            <h3>{props.city.clone()}</h3>
            <p>{"🌡 Temperature: "}{weather.temperature_label()}</p>
            <p>{"💧 Humidity: "}{weather.humidity_label()}</p>
            <p>{"☁ Condition: "}{&weather.condition}</p>
        </div>
    }
}
