//! Host-side runtime helpers for executing reducer effects against injected services.

mod boot;
mod host_ui;
mod persistence_effects;
mod timers;
mod uploads;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{
    AssetStore, HostServices, ImagePickerService, NavigationService, PrefsStore, WeatherService,
};

use crate::{
    reducer::{DashboardAction, RuntimeEffect},
    runtime_context::DashboardRuntimeContext,
};

pub(crate) use timers::install_timers;

#[derive(Clone)]
/// Host service bundle for dashboard runtime side effects.
pub struct DashboardHostContext {
    services: HostServices,
}

impl Default for DashboardHostContext {
    fn default() -> Self {
        Self::new(platform_host_web::build_host_services())
    }
}

impl DashboardHostContext {
    /// Wraps an injected host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured asset store.
    pub fn asset_store(&self) -> Rc<dyn AssetStore> {
        self.services.assets.clone()
    }

    /// Returns the configured forecast service.
    pub fn weather_service(&self) -> Rc<dyn WeatherService> {
        self.services.weather.clone()
    }

    /// Returns the configured image picker.
    pub fn image_picker(&self) -> Rc<dyn ImagePickerService> {
        self.services.image_picker.clone()
    }

    /// Returns the configured navigation service.
    pub fn navigation(&self) -> Rc<dyn NavigationService> {
        self.services.navigation.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Installs boot hydration: stored layout, shortcuts, today's inspiration, and background,
    /// followed by the first forecast fetch.
    pub fn install_boot_hydration(&self, dispatch: Callback<DashboardAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DashboardRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistWidgets => {
                persistence_effects::persist_widgets(self.clone(), runtime)
            }
            RuntimeEffect::PersistShortcuts => {
                persistence_effects::persist_shortcuts(self.clone(), runtime)
            }
            RuntimeEffect::PersistBackground => {
                persistence_effects::persist_background(self.clone(), runtime)
            }
            RuntimeEffect::ClearBackground => {
                persistence_effects::clear_background(self.clone(), runtime)
            }
            RuntimeEffect::FetchWeather => host_ui::fetch_weather(self.clone(), runtime),
            RuntimeEffect::PickImage(target) => {
                uploads::pick_image(self.clone(), runtime, target)
            }
            RuntimeEffect::Navigate(url) => host_ui::navigate(self, &url),
        }
    }
}

impl std::fmt::Debug for DashboardHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardHostContext")
            .field("host_strategy", &self.host_strategy_name())
            .finish()
    }
}
