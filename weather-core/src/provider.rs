use crate::model::{CurrentConditions, FetchError, WeatherQuery};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current weather conditions.
///
/// Implementations issue exactly one outbound call per invocation and return
/// the parsed body verbatim; shape validation happens at the call site via
/// [`CurrentConditions::validated`]. The trait exists so the page handler can
/// be exercised against a canned provider in tests.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_conditions(
        &self,
        query: &WeatherQuery,
    ) -> Result<CurrentConditions, FetchError>;
}
