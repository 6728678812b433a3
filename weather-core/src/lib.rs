//! Core library for the current-conditions page.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and the OpenWeather fetch client
//! - Shared domain models (location, query, provider payload, errors)
//! - Presentation formatting helpers
//!
//! It is used by `weather-web`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod format;
pub mod model;
pub mod provider;

pub use config::Config;
pub use model::{
    Condition, CurrentConditions, FetchError, Location, Measurements, Units, WeatherError,
    WeatherQuery, LOCATION, SUCCESS_SENTINEL, UNITS,
};
pub use provider::{openweather::OpenWeatherProvider, WeatherProvider};
