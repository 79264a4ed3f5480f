/// Shown when the lookup is submitted without a city.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name";
/// Shown when the provider answers with a non-success status.
pub const REJECTED_MESSAGE: &str = "Could not fetch weather";
/// Shown for transport failures and unreadable responses.
pub const NETWORK_MESSAGE: &str = "Network error";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Empty query")]
    EmptyQuery,

    #[error("Provider returned status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// The fixed message displayed to the user. The specific cause stays in
    /// `Display` and is only ever written to the console.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyQuery => EMPTY_QUERY_MESSAGE,
            Self::Status(_) => REJECTED_MESSAGE,
            Self::Network(_) | Self::DataError(_) | Self::ConfigError(_) => NETWORK_MESSAGE,
        }
    }
}
