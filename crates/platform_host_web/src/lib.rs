//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Records go to `localStorage`, the custom background goes to IndexedDB (`ZenTabDB`, store
//! `assets`), forecasts are fetched from Open-Meteo, uploads use a hidden file input, and
//! navigation replaces `window.location`. Non-wasm builds compile inert fallbacks so the runtime
//! crate can be tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod navigation;
pub mod picker;
pub mod storage;
pub mod weather;

pub use adapters::{
    asset_store, build_host_services, host_strategy_name, image_picker_service,
    navigation_service, prefs_store, selected_host_strategy, weather_service, AssetStoreAdapter,
    ImagePickerServiceAdapter, NavigationServiceAdapter, PrefsStoreAdapter,
    WeatherServiceAdapter,
};
pub use navigation::WebNavigationService;
pub use picker::WebImagePickerService;
pub use storage::indexed_db::WebAssetStore;
pub use storage::local_prefs::WebPrefsStore;
pub use weather::WebWeatherService;
