//! Place-name weather lookup for vreme
//!
//! Resolves a free-text place name via Nominatim, fetches current
//! conditions from Open-Meteo, and exposes the search pipeline that
//! ties the two together.

pub mod compass;
pub mod forecast;
pub mod geocode;
pub mod search;
pub mod types;

pub use compass::CompassPoint;
pub use forecast::ForecastClient;
pub use geocode::Geocoder;
pub use search::{SearchService, SearchState};
pub use types::{GeocodedPlace, SearchReport, WeatherError, WeatherReading};
