//! Weather refresh and clock tick intervals, torn down with the provider's reactive owner.

use crate::runtime_context::DashboardRuntimeContext;

#[cfg(target_arch = "wasm32")]
pub(crate) fn install_timers(runtime: DashboardRuntimeContext) {
    use gloo_timers::callback::Interval;
    use leptos::{on_cleanup, SignalSet};

    use crate::{clock::read_local_clock, config::dashboard_config, reducer::DashboardAction};

    let config = dashboard_config();
    let refresh_ms = config.weather.refresh_interval_secs.saturating_mul(1000);
    let weather = Interval::new(refresh_ms, move || {
        runtime.dispatch_action(DashboardAction::RefreshWeather);
    });

    let clock = Interval::new(config.clock.tick_interval_ms, move || {
        runtime.clock.set(read_local_clock());
    });

    on_cleanup(move || {
        weather.cancel();
        clock.cancel();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn install_timers(runtime: DashboardRuntimeContext) {
    let _ = runtime;
}
