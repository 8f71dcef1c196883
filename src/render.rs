//! Text presentation of search outcomes.

use vreme_weather::{CompassPoint, SearchReport, WeatherError};

/// Render a successful search as a small text card.
pub fn render_report(report: &SearchReport) -> String {
    let place = &report.place;
    let reading = &report.reading;
    let direction = CompassPoint::from_degrees(reading.wind_direction_deg);

    format!(
        "{}\n\
         Coordinates: {:.2}, {:.2}\n\
         Temperature: {}°C\n\
         Wind: {} km/h ({})\n\
         Updated: {}",
        place.display_name,
        place.latitude,
        place.longitude,
        reading.temperature_c,
        reading.wind_speed_kph,
        direction,
        reading.observed_at_display(),
    )
}

/// Render a failed search as a single-line message.
pub fn render_error(err: &WeatherError) -> String {
    format!("Error: {}", err.user_message())
}
