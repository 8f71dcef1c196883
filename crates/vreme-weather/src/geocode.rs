//! Forward geocoding: convert a place name to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;
use vreme_core::GeocoderConfig;

use crate::types::{GeocodedPlace, WeatherError};

const USER_AGENT: &str = "vreme/0.1.0";

/// One candidate match from Nominatim. Coordinates arrive as numeric
/// strings and are parsed at this boundary.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Client for the Nominatim search endpoint.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
    country_qualifier: String,
    language: String,
}

impl Geocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            country_qualifier: config.country_qualifier.clone(),
            language: config.language.clone(),
        })
    }

    /// Resolve a free-text place name to the first matching place.
    ///
    /// A single attempt; the caller is expected to have rejected empty
    /// queries already.
    #[instrument(skip(self), level = "debug")]
    pub async fn resolve(&self, query: &str) -> Result<GeocodedPlace, WeatherError> {
        let qualified = if self.country_qualifier.is_empty() {
            query.to_string()
        } else {
            format!("{}, {}", query, self.country_qualifier)
        };

        let url = Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[
                ("format", "json"),
                ("q", qualified.as_str()),
                ("accept-language", self.language.as_str()),
            ],
        )
        .map_err(|e| WeatherError::Parse(format!("geocoding url: {e}")))?;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Http {
                status: status.as_u16(),
            });
        }

        let candidates: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(format!("geocoding response: {e}")))?;

        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NoPlaceFound(query.to_string()))?;

        let latitude = first
            .lat
            .parse::<f64>()
            .map_err(|e| WeatherError::Parse(format!("latitude \"{}\": {e}", first.lat)))?;
        let longitude = first
            .lon
            .parse::<f64>()
            .map_err(|e| WeatherError::Parse(format!("longitude \"{}\": {e}", first.lon)))?;

        if first.display_name.is_empty() {
            return Err(WeatherError::Parse("empty display name".to_string()));
        }

        tracing::debug!(
            place = %first.display_name,
            latitude,
            longitude,
            "geocoded"
        );

        Ok(GeocodedPlace {
            display_name: first.display_name,
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> GeocoderConfig {
        GeocoderConfig {
            base_url: base_url.to_string(),
            ..GeocoderConfig::default()
        }
    }

    #[tokio::test]
    async fn resolve_returns_first_candidate() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("format", "json"))
            .and(query_param("q", "Пловдив, България"))
            .and(query_param("accept-language", "bg"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "42.1354", "lon": "24.7453", "display_name": "Пловдив, България"},
                {"lat": "0.0", "lon": "0.0", "display_name": "elsewhere"}
            ])))
            .mount(&mock_server)
            .await;

        let geocoder = Geocoder::new(&test_config(&mock_server.uri())).unwrap();
        let place = geocoder.resolve("Пловдив").await.unwrap();

        assert_eq!(place.display_name, "Пловдив, България");
        assert!((place.latitude - 42.1354).abs() < 1e-9);
        assert!((place.longitude - 24.7453).abs() < 1e-9);
    }

    #[tokio::test]
    async fn resolve_empty_list_is_no_place_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let geocoder = Geocoder::new(&test_config(&mock_server.uri())).unwrap();
        let err = geocoder.resolve("Atlantis").await.unwrap_err();

        assert!(matches!(err, WeatherError::NoPlaceFound(q) if q == "Atlantis"));
    }

    #[tokio::test]
    async fn resolve_server_error_is_http() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let geocoder = Geocoder::new(&test_config(&mock_server.uri())).unwrap();
        let err = geocoder.resolve("София").await.unwrap_err();

        assert!(matches!(err, WeatherError::Http { status: 503 }));
    }

    #[tokio::test]
    async fn resolve_malformed_body_is_parse() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let geocoder = Geocoder::new(&test_config(&mock_server.uri())).unwrap();
        let err = geocoder.resolve("София").await.unwrap_err();

        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[tokio::test]
    async fn resolve_unparseable_coordinates_is_parse() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "forty-two", "lon": "24.7", "display_name": "somewhere"}
            ])))
            .mount(&mock_server)
            .await;

        let geocoder = Geocoder::new(&test_config(&mock_server.uri())).unwrap();
        let err = geocoder.resolve("somewhere").await.unwrap_err();

        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[tokio::test]
    async fn resolve_without_qualifier_sends_bare_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Wien"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "48.2083", "lon": "16.3731", "display_name": "Wien, Österreich"}
            ])))
            .mount(&mock_server)
            .await;

        let mut config = test_config(&mock_server.uri());
        config.country_qualifier = String::new();

        let geocoder = Geocoder::new(&config).unwrap();
        let place = geocoder.resolve("Wien").await.unwrap();
        assert_eq!(place.display_name, "Wien, Österreich");
    }
}
