use std::rc::Rc;

use platform_host::{
    AssetStore, AssetStoreFuture, HostServices, HostStrategy, ImagePickerFuture,
    ImagePickerService, MemoryAssetStore, MemoryPrefsStore, NavigationService,
    NoopImagePickerService, NoopNavigationService, NoopWeatherService, PrefsStore,
    PrefsStoreFuture, WeatherError, WeatherFuture, WeatherLocation, WeatherService,
    WeatherSnapshot,
};

use crate::{
    WebAssetStore, WebImagePickerService, WebNavigationService, WebPrefsStore, WebWeatherService,
};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "memory-host")]
    {
        HostStrategy::Memory
    }

    #[cfg(not(feature = "memory-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preferences backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// `localStorage`-backed records.
    Browser(WebPrefsStore),
    /// Process-local records.
    Memory(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Memory(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Memory(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Memory(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete image-asset backend behind [`AssetStore`].
#[derive(Debug, Clone)]
pub enum AssetStoreAdapter {
    /// IndexedDB-backed assets.
    Browser(WebAssetStore),
    /// Process-local assets.
    Memory(MemoryAssetStore),
}

impl AssetStore for AssetStoreAdapter {
    fn load_asset<'a>(
        &'a self,
        key: &'a str,
    ) -> AssetStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_asset(key),
            Self::Memory(store) => store.load_asset(key),
        }
    }

    fn save_asset<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> AssetStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_asset(key, value),
            Self::Memory(store) => store.save_asset(key, value),
        }
    }

    fn delete_asset<'a>(&'a self, key: &'a str) -> AssetStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_asset(key),
            Self::Memory(store) => store.delete_asset(key),
        }
    }
}

/// Adapter enum that erases the concrete forecast backend behind [`WeatherService`].
#[derive(Debug, Clone, Copy)]
pub enum WeatherServiceAdapter {
    /// `fetch`-backed Open-Meteo client.
    Browser(WebWeatherService),
    /// Offline fallback that always reports the forecast as unavailable.
    Memory(NoopWeatherService),
}

impl WeatherService for WeatherServiceAdapter {
    fn fetch_forecast<'a>(
        &'a self,
        location: WeatherLocation,
    ) -> WeatherFuture<'a, Result<WeatherSnapshot, WeatherError>> {
        match self {
            Self::Browser(service) => service.fetch_forecast(location),
            Self::Memory(service) => service.fetch_forecast(location),
        }
    }
}

/// Adapter enum that erases the concrete upload backend behind [`ImagePickerService`].
#[derive(Debug, Clone, Copy)]
pub enum ImagePickerServiceAdapter {
    /// Native file chooser.
    Browser(WebImagePickerService),
    /// Picker that always fails.
    Memory(NoopImagePickerService),
}

impl ImagePickerService for ImagePickerServiceAdapter {
    fn pick_image_data_url<'a>(&'a self) -> ImagePickerFuture<'a, Result<String, String>> {
        match self {
            Self::Browser(service) => service.pick_image_data_url(),
            Self::Memory(service) => service.pick_image_data_url(),
        }
    }
}

/// Adapter enum that erases the concrete navigation backend behind [`NavigationService`].
#[derive(Debug, Clone, Copy)]
pub enum NavigationServiceAdapter {
    /// `window.location` navigation.
    Browser(WebNavigationService),
    /// Navigation that is silently dropped.
    Memory(NoopNavigationService),
}

impl NavigationService for NavigationServiceAdapter {
    fn navigate(&self, url: &str) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.navigate(url),
            Self::Memory(service) => service.navigate(url),
        }
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Memory => PrefsStoreAdapter::Memory(MemoryPrefsStore::default()),
    }
}

/// Builds the image-asset adapter for the compile-time selected host strategy.
pub fn asset_store() -> AssetStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => AssetStoreAdapter::Browser(WebAssetStore),
        HostStrategy::Memory => AssetStoreAdapter::Memory(MemoryAssetStore::default()),
    }
}

/// Builds the forecast adapter for the compile-time selected host strategy.
pub fn weather_service() -> WeatherServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => WeatherServiceAdapter::Browser(WebWeatherService),
        HostStrategy::Memory => WeatherServiceAdapter::Memory(NoopWeatherService),
    }
}

/// Builds the upload adapter for the compile-time selected host strategy.
pub fn image_picker_service() -> ImagePickerServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ImagePickerServiceAdapter::Browser(WebImagePickerService),
        HostStrategy::Memory => ImagePickerServiceAdapter::Memory(NoopImagePickerService),
    }
}

/// Builds the navigation adapter for the compile-time selected host strategy.
pub fn navigation_service() -> NavigationServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => NavigationServiceAdapter::Browser(WebNavigationService),
        HostStrategy::Memory => NavigationServiceAdapter::Memory(NoopNavigationService),
    }
}

/// Builds the full host service bundle consumed by `dashboard_runtime`.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        assets: Rc::new(asset_store()),
        weather: Rc::new(weather_service()),
        image_picker: Rc::new(image_picker_service()),
        navigation: Rc::new(navigation_service()),
        host_strategy: selected_host_strategy(),
    }
}
