use leptos::{logging, spawn_local};

use crate::{
    config::dashboard_config, host::DashboardHostContext, reducer::DashboardAction,
    runtime_context::DashboardRuntimeContext,
};

pub(super) fn fetch_weather(host: DashboardHostContext, runtime: DashboardRuntimeContext) {
    let location = dashboard_config().weather.location();
    spawn_local(async move {
        match host.weather_service().fetch_forecast(location).await {
            Ok(snapshot) => runtime.dispatch_action(DashboardAction::WeatherLoaded { snapshot }),
            Err(error) => {
                logging::warn!("weather refresh failed: {error}");
                runtime.dispatch_action(DashboardAction::WeatherFailed { error });
            }
        }
    });
}

pub(super) fn navigate(host: &DashboardHostContext, url: &str) {
    if let Err(err) = host.navigation().navigate(url) {
        logging::warn!("navigate to {url} failed: {err}");
    }
}
