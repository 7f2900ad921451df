//! Build-time embedded dashboard configuration.
//!
//! `dashboard.toml` is validated by `build.rs` and embedded as JSON, so parsing here cannot fail
//! for a successfully built crate.

use std::sync::OnceLock;

use platform_host::WeatherLocation;
use serde::Deserialize;

use crate::model::InspirationRecord;

include!(concat!(env!("OUT_DIR"), "/dashboard_config_generated.rs"));

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Forecast location and refresh cadence.
pub struct WeatherConfig {
    /// Human-readable place name shown on medium and large weather widgets.
    pub location_label: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Seconds between forecast refreshes while the dashboard is mounted.
    pub refresh_interval_secs: u32,
}

impl WeatherConfig {
    /// Returns the forecast request location.
    pub fn location(&self) -> WeatherLocation {
        WeatherLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Clock widget cadence.
pub struct ClockConfig {
    /// Milliseconds between clock re-renders.
    pub tick_interval_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One search engine the search box can submit to.
pub struct SearchEngine {
    /// Stable identifier stored in dashboard state.
    pub id: String,
    /// Label used in the search placeholder.
    pub display_name: String,
    /// Results page URL without a query string.
    pub url: String,
    /// Query-string parameter that carries the search terms.
    pub query_param: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Search engine catalog.
pub struct SearchConfig {
    /// Engine selected on first run.
    pub default_engine: String,
    /// Engines in display order.
    pub engines: Vec<SearchEngine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Remote images used when no custom background is stored.
pub struct BackgroundConfig {
    /// Candidate background URLs.
    pub pool: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Parsed dashboard configuration.
pub struct DashboardConfig {
    /// Config schema version.
    pub schema_version: u32,
    /// Weather widget settings.
    pub weather: WeatherConfig,
    /// Clock widget settings.
    pub clock: ClockConfig,
    /// Search box settings.
    pub search: SearchConfig,
    /// Random background pool.
    pub background: BackgroundConfig,
    /// Daily inspiration pool.
    pub inspiration: Vec<InspirationRecord>,
}

/// Returns the embedded dashboard configuration.
pub fn dashboard_config() -> &'static DashboardConfig {
    static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        serde_json::from_str(DASHBOARD_CONFIG_JSON)
            .expect("generated dashboard config should parse")
    })
}

/// Returns the generated configuration JSON payload.
pub fn dashboard_config_json() -> &'static str {
    DASHBOARD_CONFIG_JSON
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_carries_the_shipped_defaults() {
        let config = dashboard_config();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.weather.location(), WeatherLocation::default());
        assert_eq!(config.weather.refresh_interval_secs, 30 * 60);
        assert_eq!(config.clock.tick_interval_ms, 1000);
        assert_eq!(config.background.pool.len(), 5);
        assert_eq!(config.inspiration.len(), 4);
        assert_eq!(config.inspiration[0].author, "Steve Jobs");
    }

    #[test]
    fn search_catalog_lists_engines_in_display_order() {
        let ids: Vec<&str> = dashboard_config()
            .search
            .engines
            .iter()
            .map(|engine| engine.id.as_str())
            .collect();
        assert_eq!(ids, vec!["google", "bing", "duckduckgo"]);
        assert_eq!(dashboard_config().search.default_engine, "google");
        assert!(dashboard_config_json().contains("picsum.photos"));
    }
}
