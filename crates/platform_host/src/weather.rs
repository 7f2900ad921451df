//! Weather forecast contracts and the Open-Meteo payload normalization.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Public forecast endpoint queried by browser adapters.
pub const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Geographic coordinate the forecast is requested for.
pub struct WeatherLocation {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Default for WeatherLocation {
    /// Hong Kong.
    fn default() -> Self {
        Self {
            latitude: 22.3193,
            longitude: 114.1694,
        }
    }
}

impl WeatherLocation {
    /// Builds the forecast request URL: current temperature, WMO code and day flag, plus a
    /// two-day hourly series of temperature and WMO code.
    pub fn forecast_url(&self) -> String {
        format!(
            "{FORECAST_ENDPOINT}?latitude={}&longitude={}\
             &current=temperature_2m,weather_code,is_day\
             &hourly=temperature_2m,weather_code&timezone=auto&forecast_days=2",
            self.latitude, self.longitude
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Current conditions in the normalized snapshot.
pub struct CurrentConditions {
    /// Air temperature at 2m in degrees Celsius.
    pub temp: f64,
    /// WMO weather interpretation code.
    pub code: u16,
    /// Whether the sun is up at the requested location.
    #[serde(rename = "isDay")]
    pub is_day: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
/// Hourly series in the normalized snapshot. All three vectors share indices.
///
/// Samples the endpoint reports as `null` are kept as `None` so indices stay aligned.
pub struct HourlySeries {
    /// Local ISO-8601 timestamps without offset, e.g. `2026-10-16T15:00`.
    pub time: Vec<String>,
    /// Temperatures at 2m in degrees Celsius.
    pub temperature_2m: Vec<Option<f64>>,
    /// WMO weather interpretation codes.
    pub weather_code: Vec<Option<u16>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Normalized forecast consumed by the weather widget.
pub struct WeatherSnapshot {
    /// Current conditions.
    pub current: CurrentConditions,
    /// Hourly forecast.
    pub hourly: HourlySeries,
}

#[derive(Debug, Deserialize)]
struct RawCurrent {
    temperature_2m: f64,
    weather_code: u16,
    is_day: u8,
}

#[derive(Debug, Deserialize)]
struct RawHourly {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    weather_code: Vec<Option<u16>>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current: RawCurrent,
    hourly: RawHourly,
}

impl OpenMeteoResponse {
    fn into_snapshot(self) -> WeatherSnapshot {
        WeatherSnapshot {
            current: CurrentConditions {
                temp: self.current.temperature_2m,
                code: self.current.weather_code,
                is_day: self.current.is_day != 0,
            },
            hourly: HourlySeries {
                time: self.hourly.time,
                temperature_2m: self.hourly.temperature_2m,
                weather_code: self.hourly.weather_code,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure to obtain a forecast.
pub enum WeatherError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("weather endpoint returned HTTP {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("weather request failed: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("weather payload could not be decoded: {0}")]
    Decode(String),
    /// No weather backend is available on this host.
    #[error("weather service unavailable")]
    Unavailable,
}

/// Parses an Open-Meteo forecast body into a [`WeatherSnapshot`].
///
/// # Errors
///
/// Returns [`WeatherError::Decode`] when required fields are missing or mistyped.
pub fn parse_forecast(body: &str) -> Result<WeatherSnapshot, WeatherError> {
    serde_json::from_str::<OpenMeteoResponse>(body)
        .map(OpenMeteoResponse::into_snapshot)
        .map_err(|err| WeatherError::Decode(err.to_string()))
}

/// Object-safe boxed future used by [`WeatherService`].
pub type WeatherFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that fetches a forecast for a location.
pub trait WeatherService {
    /// Fetches and normalizes the forecast for `location`.
    fn fetch_forecast<'a>(
        &'a self,
        location: WeatherLocation,
    ) -> WeatherFuture<'a, Result<WeatherSnapshot, WeatherError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Weather service for hosts without network access.
pub struct NoopWeatherService;

impl WeatherService for NoopWeatherService {
    fn fetch_forecast<'a>(
        &'a self,
        _location: WeatherLocation,
    ) -> WeatherFuture<'a, Result<WeatherSnapshot, WeatherError>> {
        Box::pin(async { Err(WeatherError::Unavailable) })
    }
}

#[derive(Debug, Clone)]
/// Weather service answering every request with a preset result and recording requests.
pub struct FixedWeatherService {
    result: Result<WeatherSnapshot, WeatherError>,
    requests: Rc<RefCell<Vec<WeatherLocation>>>,
}

impl FixedWeatherService {
    /// Creates a service that always returns `result`.
    pub fn new(result: Result<WeatherSnapshot, WeatherError>) -> Self {
        Self {
            result,
            requests: Rc::default(),
        }
    }

    /// Returns the locations requested so far.
    pub fn requests(&self) -> Vec<WeatherLocation> {
        self.requests.borrow().clone()
    }
}

impl WeatherService for FixedWeatherService {
    fn fetch_forecast<'a>(
        &'a self,
        location: WeatherLocation,
    ) -> WeatherFuture<'a, Result<WeatherSnapshot, WeatherError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(location);
            self.result.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "latitude": 22.3,
        "longitude": 114.17,
        "current": {"time": "2026-10-16T09:00", "temperature_2m": 27.4, "weather_code": 2, "is_day": 1},
        "hourly": {
            "time": ["2026-10-16T00:00", "2026-10-16T01:00"],
            "temperature_2m": [25.1, 24.8],
            "weather_code": [3, 61]
        }
    }"#;

    #[test]
    fn forecast_url_selects_current_and_hourly_fields() {
        let url = WeatherLocation::default().forecast_url();
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=22.3193&longitude=114.1694\
             &current=temperature_2m,weather_code,is_day\
             &hourly=temperature_2m,weather_code&timezone=auto&forecast_days=2"
        );
    }

    #[test]
    fn parse_forecast_reshapes_payload() {
        let snapshot = parse_forecast(SAMPLE_BODY).expect("parse");
        assert_eq!(
            snapshot,
            WeatherSnapshot {
                current: CurrentConditions {
                    temp: 27.4,
                    code: 2,
                    is_day: true,
                },
                hourly: HourlySeries {
                    time: vec![
                        "2026-10-16T00:00".to_string(),
                        "2026-10-16T01:00".to_string()
                    ],
                    temperature_2m: vec![Some(25.1), Some(24.8)],
                    weather_code: vec![Some(3), Some(61)],
                },
            }
        );
    }

    #[test]
    fn null_hourly_samples_decode_as_gaps() {
        let body = r#"{
            "current": {"temperature_2m": 18.0, "weather_code": 0, "is_day": 0},
            "hourly": {
                "time": ["2026-10-16T00:00", "2026-10-16T01:00", "2026-10-16T02:00"],
                "temperature_2m": [17.5, null, 16.9],
                "weather_code": [0, null, 1]
            }
        }"#;
        let snapshot = parse_forecast(body).expect("parse");
        assert_eq!(snapshot.hourly.temperature_2m, vec![Some(17.5), None, Some(16.9)]);
        assert_eq!(snapshot.hourly.weather_code, vec![Some(0), None, Some(1)]);
        assert!(!snapshot.current.is_day);
    }

    #[test]
    fn normalized_snapshot_serializes_is_day_in_camel_case() {
        let snapshot = parse_forecast(SAMPLE_BODY).expect("parse");
        let value = serde_json::to_value(&snapshot).expect("serialize");
        assert_eq!(value["current"]["isDay"], serde_json::json!(true));
        assert_eq!(value["hourly"]["weather_code"][1], serde_json::json!(61));
    }

    #[test]
    fn parse_forecast_rejects_missing_sections() {
        let err = parse_forecast(r#"{"current": {}}"#).unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[test]
    fn fixed_service_records_requests() {
        let service = FixedWeatherService::new(Err(WeatherError::Status(503)));
        let result = block_on(service.fetch_forecast(WeatherLocation::default()));
        assert_eq!(result, Err(WeatherError::Status(503)));
        assert_eq!(service.requests(), vec![WeatherLocation::default()]);
    }

    #[test]
    fn noop_service_reports_unavailable() {
        let result = block_on(NoopWeatherService.fetch_forecast(WeatherLocation::default()));
        assert_eq!(result, Err(WeatherError::Unavailable));
    }
}
