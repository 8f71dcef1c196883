//! Current-conditions fetch from the Open-Meteo forecast API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;
use vreme_core::ForecastConfig;

use crate::types::{WeatherError, WeatherReading};

/// Forecast response, reduced to the current-conditions block.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    winddirection: f64,
    time: String,
}

/// Client for the Open-Meteo forecast endpoint.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(config: &ForecastConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch current conditions for a coordinate pair. Single attempt.
    #[instrument(skip(self), level = "debug")]
    pub async fn current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReading, WeatherError> {
        let url = Url::parse_with_params(
            &format!("{}/v1/forecast", self.base_url),
            &[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", "auto".to_string()),
            ],
        )
        .map_err(|e| WeatherError::Parse(format!("forecast url: {e}")))?;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Http {
                status: status.as_u16(),
            });
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(format!("forecast response: {e}")))?;

        let current = body.current_weather.ok_or(WeatherError::NoWeatherData)?;

        tracing::debug!(
            temperature = current.temperature,
            windspeed = current.windspeed,
            time = %current.time,
            "current conditions fetched"
        );

        Ok(WeatherReading {
            temperature_c: current.temperature,
            wind_speed_kph: current.windspeed,
            wind_direction_deg: current.winddirection.rem_euclid(360.0),
            observed_at: current.time,
        })
    }
}
