use clap::Parser;
use weather_core::{Config, OpenWeatherProvider};

use crate::server;

const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-web", version, about = "Current-conditions web page")]
pub struct Cli {
    /// Listen address, e.g. "0.0.0.0:8080". Overrides the config file.
    #[arg(long)]
    pub bind: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let api_key = config.require_api_key()?.to_owned();

        let bind = self
            .bind
            .or(config.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let provider = OpenWeatherProvider::new(api_key);
        server::serve(provider, &bind).await
    }
}
