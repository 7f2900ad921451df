//! Open-Meteo forecast client over `fetch`.

use platform_host::{WeatherError, WeatherFuture, WeatherLocation, WeatherService, WeatherSnapshot};

#[derive(Debug, Clone, Copy, Default)]
/// Forecast service issuing one GET per refresh against the Open-Meteo endpoint.
pub struct WebWeatherService;

impl WeatherService for WebWeatherService {
    fn fetch_forecast<'a>(
        &'a self,
        location: WeatherLocation,
    ) -> WeatherFuture<'a, Result<WeatherSnapshot, WeatherError>> {
        Box::pin(async move { fetch(location).await })
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch(location: WeatherLocation) -> Result<WeatherSnapshot, WeatherError> {
    use gloo_net::http::Request;

    let response = Request::get(&location.forecast_url())
        .send()
        .await
        .map_err(|err| WeatherError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(WeatherError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| WeatherError::Network(err.to_string()))?;
    platform_host::parse_forecast(&body)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch(location: WeatherLocation) -> Result<WeatherSnapshot, WeatherError> {
    let _ = location;
    Err(WeatherError::Unavailable)
}
