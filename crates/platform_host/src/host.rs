//! Host service bundle injected into the dashboard runtime.

use std::rc::Rc;

use crate::{
    AssetStore, ImagePickerService, MemoryAssetStore, MemoryPrefsStore, NavigationService,
    NoopImagePickerService, NoopNavigationService, NoopWeatherService, PrefsStore,
    WeatherService,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser storage, network, and file chooser.
    Browser,
    /// Process-local memory stores with no network or file access.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// Environment-specific selection happens before this bundle reaches `dashboard_runtime`, which
/// keeps the models and reducer free of browser details.
#[derive(Clone)]
pub struct HostServices {
    /// Small JSON record store (widget layout, shortcuts, daily inspiration).
    pub prefs: Rc<dyn PrefsStore>,
    /// Large image store (custom background).
    pub assets: Rc<dyn AssetStore>,
    /// Forecast fetcher.
    pub weather: Rc<dyn WeatherService>,
    /// Local image upload.
    pub image_picker: Rc<dyn ImagePickerService>,
    /// Top-level navigation for search and launches.
    pub navigation: Rc<dyn NavigationService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle backed by fresh in-memory stores and inert network, picker, and
    /// navigation services.
    pub fn in_memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            assets: Rc::new(MemoryAssetStore::default()),
            weather: Rc::new(NoopWeatherService),
            image_picker: Rc::new(NoopImagePickerService),
            navigation: Rc::new(NoopNavigationService),
            host_strategy: HostStrategy::Memory,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
