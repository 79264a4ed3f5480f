/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Weather provider endpoint; the city is appended as a path segment
    pub const PROVIDER_BASE_URL: &'static str = "https://wttr.in";

    /// Value of the `format` query parameter selecting the JSON response
    pub const RESPONSE_FORMAT: &'static str = "j1";

    /// Heading shown on the lookup card
    pub const TITLE: &'static str = "Weather App (wttr.in)";

    pub const INPUT_PLACEHOLDER: &'static str = "Enter city name";
}
