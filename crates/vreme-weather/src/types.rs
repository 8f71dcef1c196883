use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A place resolved from a free-text query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// Full display name as reported by the geocoding service
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A current-conditions snapshot for one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub wind_speed_kph: f64,
    /// Wind bearing in degrees, reduced to [0, 360)
    pub wind_direction_deg: f64,
    /// Observation time as reported by the service (minute resolution)
    pub observed_at: String,
}

impl WeatherReading {
    /// Observation time with the ISO "T" separator replaced by a space.
    pub fn observed_at_display(&self) -> String {
        NaiveDateTime::parse_from_str(&self.observed_at, "%Y-%m-%dT%H:%M")
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.observed_at.replace('T', " "))
    }
}

/// Successful outcome of one search: the resolved place and its
/// current weather.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub place: GeocodedPlace,
    pub reading: WeatherReading,
}

/// Errors from the resolve-then-fetch pipeline.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("empty place query")]
    EmptyQuery,

    #[error("no place found for \"{0}\"")]
    NoPlaceFound(String),

    #[error("no current weather data available")]
    NoWeatherData,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned status {status}")]
    Http { status: u16 },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown error")]
    Unknown,
}

impl WeatherError {
    /// User-facing message for presentation.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => "Please enter a place name.".to_string(),
            Self::NoPlaceFound(query) => {
                format!("No place found matching \"{}\".", query)
            }
            Self::NoWeatherData => {
                "No current weather data is available for this place.".to_string()
            }
            Self::Network(_) | Self::Http { .. } | Self::Parse(_) => {
                "Network error. Check your connection and try again.".to_string()
            }
            Self::Unknown => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(observed_at: &str) -> WeatherReading {
        WeatherReading {
            temperature_c: 21.3,
            wind_speed_kph: 12.0,
            wind_direction_deg: 90.0,
            observed_at: observed_at.to_string(),
        }
    }

    #[test]
    fn observed_at_display_replaces_separator() {
        let r = reading("2024-05-01T12:00");
        assert_eq!(r.observed_at_display(), "2024-05-01 12:00");
    }

    #[test]
    fn observed_at_display_falls_back_on_odd_input() {
        let r = reading("2024-05-01T12:00:30+02:00");
        assert_eq!(r.observed_at_display(), "2024-05-01 12:00:30+02:00");
    }

    #[test]
    fn test_user_messages() {
        let err = WeatherError::NoPlaceFound("Atlantis".into());
        assert!(err.user_message().contains("Atlantis"));

        let err = WeatherError::EmptyQuery;
        assert!(err.user_message().contains("place name"));

        let err = WeatherError::NoWeatherData;
        assert!(err.user_message().contains("weather"));

        let err = WeatherError::Http { status: 503 };
        assert!(err.user_message().contains("Network"));
    }
}
