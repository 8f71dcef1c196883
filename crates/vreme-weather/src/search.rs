//! Search orchestration: resolve a place name, then fetch its weather.
//!
//! A search runs the two network calls strictly in sequence; the
//! forecast is only requested after geocoding has produced
//! coordinates. Every path, success or failure, leaves the service
//! ready for the next search.

use tracing::instrument;
use vreme_core::Config;

use crate::forecast::ForecastClient;
use crate::geocode::Geocoder;
use crate::types::{SearchReport, WeatherError};

/// Lifecycle of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    Resolved,
    Failed,
}

impl SearchState {
    /// True while a search is in flight.
    pub fn is_busy(self) -> bool {
        matches!(self, SearchState::Searching)
    }

    /// True if a new search may begin.
    pub fn can_start(self) -> bool {
        !self.is_busy()
    }
}

/// Sequences the geocoder and the forecast client for one search at a
/// time.
pub struct SearchService {
    geocoder: Geocoder,
    forecast: ForecastClient,
    state: SearchState,
}

impl SearchService {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        Ok(Self {
            geocoder: Geocoder::new(&config.geocoder)?,
            forecast: ForecastClient::new(&config.weather)?,
            state: SearchState::default(),
        })
    }

    /// Current lifecycle state, for in-progress indicators.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Run one search.
    ///
    /// Empty (after trimming) queries fail before any network call.
    /// The busy state is cleared before this returns, on every path.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&mut self, query: &str) -> Result<SearchReport, WeatherError> {
        let query = query.trim();
        if query.is_empty() {
            self.state = SearchState::Failed;
            return Err(WeatherError::EmptyQuery);
        }

        self.state = SearchState::Searching;
        let outcome = self.run(query).await;

        self.state = match &outcome {
            Ok(report) => {
                tracing::info!(place = %report.place.display_name, "search resolved");
                SearchState::Resolved
            }
            Err(err) => {
                tracing::info!(error = %err, "search failed");
                SearchState::Failed
            }
        };

        outcome
    }

    // Geocode first; the forecast request only starts once coordinates
    // are known.
    async fn run(&self, query: &str) -> Result<SearchReport, WeatherError> {
        let place = self.geocoder.resolve(query).await?;
        let reading = self.forecast.current(place.latitude, place.longitude).await?;
        Ok(SearchReport { place, reading })
    }
}
