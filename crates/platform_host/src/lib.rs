//! Typed host contracts shared by the dashboard runtime and the browser adapters.
//!
//! This crate is the API boundary for everything the dashboard needs from its environment:
//! small-record preferences, large image assets, forecast fetches, local image uploads, and
//! navigation. Each contract ships with in-memory or no-op implementations for tests, while the
//! browser implementations live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod navigation;
pub mod picker;
pub mod storage;
pub mod time;
pub mod weather;

pub use host::{HostServices, HostStrategy};
pub use navigation::{NavigationService, NoopNavigationService, RecordingNavigationService};
pub use picker::{
    FixedImagePickerService, ImagePickerFuture, ImagePickerService, NoopImagePickerService,
};
pub use storage::assets::{
    AssetStore, AssetStoreFuture, MemoryAssetStore, NoopAssetStore, BACKGROUND_ASSET_KEY,
};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{
    calendar_day_key, next_monotonic_timestamp_ms, today_calendar_day_key, unix_time_ms_now,
};
pub use weather::{
    parse_forecast, CurrentConditions, FixedWeatherService, HourlySeries, NoopWeatherService,
    WeatherError, WeatherFuture, WeatherLocation, WeatherService, WeatherSnapshot,
    FORECAST_ENDPOINT,
};
