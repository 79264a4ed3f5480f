use super::error::AppError;
use serde::Deserialize;
use std::fmt;

/// A scalar as the provider sent it. wttr.in quotes its numbers, so text is
/// kept verbatim; a bare JSON number is printed the way a browser would.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => f.write_str(&format_number(number)),
        }
    }
}

/// Integral values drop their fraction and exponent, so `18.0` and `6e1`
/// read as `18` and `60`. Other floats use the shortest round-trip form.
fn format_number(number: &serde_json::Number) -> String {
    if let Some(n) = number.as_i64() {
        return n.to_string();
    }
    if let Some(n) = number.as_u64() {
        return n.to_string();
    }
    let Some(value) = number.as_f64() else {
        return number.to_string();
    };

    if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Subset of the `format=j1` payload that the lookup consumes.
#[derive(Deserialize, Debug)]
pub struct ProviderResponse {
    pub current_condition: Vec<CurrentCondition>,
}

#[derive(Deserialize, Debug)]
pub struct CurrentCondition {
    #[serde(rename = "temp_C")]
    pub temp_c: Reading,
    pub humidity: Reading,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WeatherDescription>,
}

#[derive(Deserialize, Debug)]
pub struct WeatherDescription {
    pub value: String,
}

/// Current conditions for one city, kept in the provider's own formatting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherResult {
    pub temperature: String,
    pub humidity: String,
    pub condition: String,
}

impl WeatherResult {
    pub fn new(
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            humidity: humidity.into(),
            condition: condition.into(),
        }
    }

    /// Builds the result from the first current-condition entry and its first
    /// description. Empty collections are a shape error.
    pub fn from_response(response: ProviderResponse) -> Result<Self, AppError> {
        let current = response
            .current_condition
            .into_iter()
            .next()
            .ok_or_else(|| AppError::DataError("current_condition is empty".to_string()))?;

        let description = current
            .weather_desc
            .into_iter()
            .next()
            .ok_or_else(|| AppError::DataError("weatherDesc is empty".to_string()))?;

        Ok(Self {
            temperature: current.temp_c.to_string(),
            humidity: current.humidity.to_string(),
            condition: description.value,
        })
    }

    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity)
    }
}
