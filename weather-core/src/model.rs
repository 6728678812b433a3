use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Status value the provider uses to mark its own response as valid.
pub const SUCCESS_SENTINEL: u16 = 200;

/// Geographic location served by this deployment.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub city: &'static str,
    pub postal_code: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: &'static str,
}

/// Algonquin College, Woodroffe Campus. Fixed per deployment.
pub const LOCATION: Location = Location {
    city: "Ottawa",
    postal_code: "K2G 1V8",
    latitude: 45.3211,
    longitude: -75.7391,
    country_code: "CA",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

/// Unit system used for every query in this deployment.
pub const UNITS: Units = Units::Metric;

impl Units {
    /// Value of the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to a single fetch operation.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub units: Units,
}

impl WeatherQuery {
    pub fn for_location(location: &Location, units: Units) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            units,
        }
    }
}

/// One entry of the provider's condition sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The provider's main measurements block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurements {
    pub temp: f64,
    pub feels_like: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Current-conditions payload as returned by the provider.
///
/// Every field is lenient: error bodies carry only `cod` and `message`, so
/// nothing here is required at parse time. Fields the page does not read are
/// kept in `extra` so the debug panel can show the payload in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Provider status code. OpenWeather emits it as a number on success and
    /// as a string on some error paths.
    #[serde(
        default,
        deserialize_with = "status_from_number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub cod: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weather: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<Measurements>,
    /// Observation time, seconds since epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CurrentConditions {
    /// Apply the shape invariant: the payload is valid only when the provider
    /// did not report an error status and the condition sequence is non-empty.
    ///
    /// An absent `cod` is not treated as an error; only a present status that
    /// differs from the success sentinel is. A payload that passes both checks
    /// is returned unchanged.
    pub fn validated(self) -> Result<Self, WeatherError> {
        if let Some(cod) = self.cod
            && cod != SUCCESS_SENTINEL
        {
            return Err(WeatherError::Provider {
                status: cod,
                message: self.message.unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        if self.weather.is_empty() {
            return Err(WeatherError::MissingConditions);
        }

        Ok(self)
    }
}

fn status_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u16),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid status code '{s}'"))),
    }
}

/// Failure of the outbound call itself. The fetch client does not classify
/// provider-level errors; those stay in the parsed body.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to reach the weather provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode the weather provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Everything that can go wrong between a query and a renderable payload.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The response body itself signals an error via its status field.
    #[error("{message}")]
    Provider { status: u16, message: String },
    /// Parsed fine, but the condition sequence is empty or absent.
    #[error("weather data not available for this location")]
    MissingConditions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conditions(value: Value) -> CurrentConditions {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn cod_parses_from_number() {
        let parsed = conditions(json!({ "cod": 200 }));
        assert_eq!(parsed.cod, Some(200));
    }

    #[test]
    fn cod_parses_from_string() {
        let parsed = conditions(json!({ "cod": "401", "message": "Invalid API key" }));
        assert_eq!(parsed.cod, Some(401));
        assert_eq!(parsed.message.as_deref(), Some("Invalid API key"));
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let parsed = conditions(json!({
            "cod": 200,
            "weather": [{ "description": "clear sky", "icon": "01d", "id": 800 }],
            "main": { "temp": 21.4, "feels_like": 20.9, "humidity": 40 },
            "dt": 1_700_000_000,
            "wind": { "speed": 3.6 },
            "name": "Ottawa"
        }));

        let value = serde_json::to_value(&parsed).expect("payload should serialize");
        assert_eq!(value["wind"]["speed"], json!(3.6));
        assert_eq!(value["name"], json!("Ottawa"));
        assert_eq!(value["main"]["humidity"], json!(40));
        assert_eq!(value["weather"][0]["id"], json!(800));
    }

    #[test]
    fn valid_payload_is_returned_unchanged() {
        let parsed = conditions(json!({
            "cod": 200,
            "weather": [{ "description": "clear sky", "icon": "01d" }],
            "main": { "temp": 21.4, "feels_like": 20.9 },
            "dt": 1_700_000_000
        }));

        let validated = parsed.validated().expect("payload should be valid");
        assert_eq!(validated.weather[0].description, "clear sky");
        assert_eq!(validated.dt, Some(1_700_000_000));
    }

    #[test]
    fn provider_error_carries_status_and_message() {
        let parsed = conditions(json!({ "cod": "401", "message": "Invalid API key" }));

        match parsed.validated() {
            Err(WeatherError::Provider { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn provider_error_message_falls_back_when_absent() {
        let parsed = conditions(json!({ "cod": 502 }));

        match parsed.validated() {
            Err(WeatherError::Provider { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "Unknown error");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn empty_conditions_fail_despite_success_status() {
        let parsed = conditions(json!({
            "cod": 200,
            "weather": [],
            "main": { "temp": 21.4, "feels_like": 20.9 }
        }));

        assert!(matches!(
            parsed.validated(),
            Err(WeatherError::MissingConditions)
        ));
    }

    #[test]
    fn absent_conditions_fail_the_same_way() {
        let parsed = conditions(json!({ "cod": 200 }));

        assert!(matches!(
            parsed.validated(),
            Err(WeatherError::MissingConditions)
        ));
    }

    #[test]
    fn absent_cod_is_not_an_error() {
        let parsed = conditions(json!({
            "weather": [{ "description": "clear sky", "icon": "01d" }]
        }));

        assert!(parsed.validated().is_ok());
    }

    #[test]
    fn query_takes_coordinates_from_the_location() {
        let query = WeatherQuery::for_location(&LOCATION, UNITS);
        assert_eq!(query.latitude, LOCATION.latitude);
        assert_eq!(query.longitude, LOCATION.longitude);
        assert_eq!(query.units, Units::Metric);
    }
}
