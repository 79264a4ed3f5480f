pub mod use_weather_lookup;
