pub mod search_bar;
pub mod status;
pub mod weather_card;

pub use search_bar::SearchBar;
pub use status::Status;
pub use weather_card::WeatherCard;
