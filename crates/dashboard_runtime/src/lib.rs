//! Dashboard models, reducer, persistence, and the Leptos runtime provider for ZenTab.
//!
//! The models (`widgets`, `shortcuts`, `inspiration`, `background`) are plain functions over
//! in-memory lists. [`reduce_dashboard`] is the single transition function; it returns
//! [`RuntimeEffect`] intents that the effect executor runs against the injected
//! [`platform_host::HostServices`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod background;
pub mod clock;
pub mod config;
mod effect_executor;
pub mod host;
pub mod inspiration;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod search;
pub mod shortcuts;
pub mod weather;
pub mod widgets;

pub use clock::{read_clock, read_local_clock, ClockReading};
pub use config::{dashboard_config, DashboardConfig, SearchEngine};
pub use host::DashboardHostContext;
pub use model::*;
pub use persistence::PersistError;
pub use reducer::{reduce_dashboard, DashboardAction, RuntimeEffect, UploadTarget};
pub use runtime_context::{use_dashboard_runtime, DashboardProvider, DashboardRuntimeContext};
pub use shortcuts::{display_icon, PLACEHOLDER_ICON};
pub use weather::{describe, forecast_items, icon_kind, ForecastItem, WeatherIconKind};
pub use widgets::render_view;
