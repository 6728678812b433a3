use async_trait::async_trait;
use reqwest::Client;

use crate::model::{CurrentConditions, FetchError, WeatherQuery};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Fetch client for the OpenWeather current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint. Used by tests to talk to a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            // Transport defaults only; no extra timeout or retry policy.
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    /// One GET, body parsed verbatim.
    ///
    /// The HTTP status is deliberately ignored: OpenWeather reports its own
    /// errors inside the body (`cod` + `message`), and the caller inspects
    /// those during validation. Only a failed call or an unparseable body is
    /// an error here.
    async fn current_conditions(
        &self,
        query: &WeatherQuery,
    ) -> Result<CurrentConditions, FetchError> {
        let url = format!("{}/weather", self.base_url);

        tracing::debug!(
            lat = query.latitude,
            lon = query.longitude,
            units = %query.units,
            "requesting current conditions"
        );

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", query.latitude.to_string()),
                ("lon", query.longitude.to_string()),
                ("units", query.units.as_str().to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let body = res.text().await?;
        let parsed = serde_json::from_str(&body)?;

        Ok(parsed)
    }
}
