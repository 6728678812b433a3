//! HTTP surface: a single page route serving the fixed location's current
//! conditions.

use anyhow::Context;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use weather_core::{LOCATION, UNITS, WeatherError, WeatherProvider, WeatherQuery};

use crate::page;

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

pub fn router(provider: Arc<dyn WeatherProvider>) -> Router {
    Router::new()
        .route("/", get(current_conditions_page))
        .with_state(AppState { provider })
}

pub async fn serve(provider: impl WeatherProvider + 'static, bind: &str) -> anyhow::Result<()> {
    let app = router(Arc::new(provider));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind to {bind}"))?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Non-2xx reply for the page route: a plain-text body with either the
/// provider's own status code or a fixed 500.
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    body: String,
}

impl PageError {
    fn fetch_failed() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "Failed to fetch weather data. Please check logs.".to_string(),
        }
    }

    fn provider_error(status: u16, message: &str) -> Self {
        Self {
            // A provider status that is not a representable HTTP status
            // becomes a plain 500.
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: format!("OpenWeatherMap API Error: {message}"),
        }
    }

    fn data_unavailable() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "Weather data not available for this location.".to_string(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, self.body).into_response()
    }
}

/// The page route.
///
/// One fetch per request, awaited before rendering. Failures are logged here
/// and surfaced as terminal error responses; the transport error itself never
/// reaches the client.
async fn current_conditions_page(
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    let query = WeatherQuery::for_location(&LOCATION, UNITS);

    let payload = match state.provider.current_conditions(&query).await {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch weather data");
            return Err(PageError::fetch_failed());
        }
    };

    match payload.validated() {
        Ok(conditions) => Ok(Html(page::render(&LOCATION, &conditions))),
        Err(WeatherError::Provider { status, message }) => {
            tracing::error!(status, message = %message, "weather provider reported an error");
            Err(PageError::provider_error(status, &message))
        }
        Err(err) => {
            tracing::error!(error = %err, "weather payload failed validation");
            Err(PageError::data_unavailable())
        }
    }
}
