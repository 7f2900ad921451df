//! Core dashboard runtime state types and persisted record shapes.

use platform_host::WeatherSnapshot;
use serde::{Deserialize, Serialize};

/// Preference key for the widget layout list.
pub const WIDGETS_KEY: &str = "zen_widget_config";
/// Preference key for the shortcut list.
pub const SHORTCUTS_KEY: &str = "zen_shortcuts";
/// Preference key for the cached daily inspiration pick.
pub const INSPIRATION_KEY: &str = "zen_inspiration";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Renderer selected for a widget slot.
pub enum WidgetKind {
    /// Current conditions plus forecast strip.
    Weather,
    /// Time, date, and minute progress.
    Clock,
    /// Daily quote and tip.
    Quote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Grid footprint of a widget.
pub enum WidgetSize {
    /// One column on desktop.
    Small,
    /// Two columns on desktop.
    Medium,
    /// Full row on desktop.
    Large,
}

impl WidgetSize {
    /// All sizes in settings-panel order.
    pub const ALL: [WidgetSize; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Returns the number of desktop grid columns (out of four) the widget spans.
    pub const fn desktop_columns(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 4,
        }
    }

    /// Returns the stable lowercase token used in storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Stored placement and visibility of one widget.
pub struct WidgetDescriptor {
    /// Stable widget identifier (`weather-1`, `clock-1`, `quote-1`).
    pub id: String,
    /// Renderer selector.
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Grid footprint.
    pub size: WidgetSize,
    /// Hidden widgets stay in the list but are not rendered.
    pub visible: bool,
    /// Relative sort key; ties keep list position.
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One launcher tile.
pub struct ShortcutEntry {
    /// Unique identifier.
    pub id: String,
    /// Non-empty label.
    pub title: String,
    /// Absolute, scheme-bearing target URL.
    pub url: String,
    /// Custom icon as an absolute URL or a `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Quote, attribution, and productivity tip shown by the quote widget.
pub struct InspirationRecord {
    /// Quote text.
    pub quote: String,
    /// Quote attribution.
    pub author: String,
    /// Short actionable tip.
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Page background currently in effect.
pub enum BackgroundState {
    /// Nothing chosen yet (before boot hydration finishes).
    #[default]
    Unset,
    /// Session-random pick from the configured pool; nothing is persisted.
    Random {
        /// Chosen pool URL.
        url: String,
    },
    /// User-chosen image persisted in the asset store.
    Custom {
        /// Remote URL or `data:` URL.
        source: String,
    },
}

impl BackgroundState {
    /// Returns the URL the renderer should paint, if any.
    pub fn display_url(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Random { url } => Some(url),
            Self::Custom { source } => Some(source),
        }
    }

    /// Returns `true` when a persisted custom background is active.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction for adjacent widget moves in the settings panel.
pub enum MoveDirection {
    /// Toward index 0.
    Up,
    /// Toward the end of the list.
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Icon input collected by the shortcut editor.
///
/// An uploaded image (`inline_data`) takes precedence over a typed URL.
pub struct IconSource {
    /// Uploaded image as a `data:` URL.
    pub inline_data: Option<String>,
    /// Typed icon or site URL.
    pub url: Option<String>,
}

impl IconSource {
    /// Icon source with only a typed URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            inline_data: None,
            url: Some(url.into()),
        }
    }

    /// Icon source with only uploaded inline data.
    pub fn from_inline(data_url: impl Into<String>) -> Self {
        Self {
            inline_data: Some(data_url.into()),
            url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Weather widget status.
pub enum WeatherStatus {
    /// First fetch still in flight.
    #[default]
    Loading,
    /// Latest successful forecast.
    Ready(WeatherSnapshot),
    /// No forecast could be loaded.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
/// Dashboard snapshot rendered by the presentation layer.
pub struct DashboardState {
    /// Widget descriptors in stored order.
    pub widgets: Vec<WidgetDescriptor>,
    /// Shortcuts in launch order.
    pub shortcuts: Vec<ShortcutEntry>,
    /// Today's inspiration, once hydrated.
    pub inspiration: Option<InspirationRecord>,
    /// Active background.
    pub background: BackgroundState,
    /// Weather widget status.
    pub weather: WeatherStatus,
    /// Selected search engine id.
    pub search_engine: String,
    /// Whether the settings panel is open.
    pub settings_open: bool,
    /// Whether boot hydration has finished.
    pub boot_hydrated: bool,
    /// User mutations received before boot hydration finished, replayed in order afterwards.
    pub deferred_mutations: Vec<crate::reducer::DashboardAction>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            widgets: crate::widgets::default_widgets(),
            shortcuts: crate::shortcuts::default_shortcuts(),
            inspiration: None,
            background: BackgroundState::Unset,
            weather: WeatherStatus::Loading,
            search_engine: crate::search::default_engine().id.clone(),
            settings_open: false,
            boot_hydrated: false,
            deferred_mutations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient UI state that is never persisted.
pub struct InteractionState {
    /// Shortcut currently being dragged.
    pub dragged_shortcut_id: Option<String>,
    /// Whether the add-shortcut form is open.
    pub shortcut_editor_open: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn widget_descriptor_uses_stored_field_names() {
        let raw = r#"{"id":"clock-1","type":"clock","size":"medium","visible":true,"order":1}"#;
        let descriptor: WidgetDescriptor = serde_json::from_str(raw).expect("decode");
        assert_eq!(descriptor.kind, WidgetKind::Clock);
        assert_eq!(descriptor.size, WidgetSize::Medium);
        assert_eq!(serde_json::to_string(&descriptor).expect("encode"), raw);
    }

    #[test]
    fn shortcut_without_icon_omits_the_field() {
        let entry = ShortcutEntry {
            id: "1".to_string(),
            title: "YouTube".to_string(),
            url: "https://www.youtube.com".to_string(),
            icon: None,
        };
        let raw = serde_json::to_string(&entry).expect("encode");
        assert_eq!(
            raw,
            r#"{"id":"1","title":"YouTube","url":"https://www.youtube.com"}"#
        );
        let decoded: ShortcutEntry = serde_json::from_str(&raw).expect("decode");
        assert_eq!(decoded, entry);
    }

    #[test]
    fn background_display_url_follows_variant() {
        assert_eq!(BackgroundState::Unset.display_url(), None);
        let custom = BackgroundState::Custom {
            source: "data:image/png;base64,AA==".to_string(),
        };
        assert!(custom.is_custom());
        assert_eq!(custom.display_url(), Some("data:image/png;base64,AA=="));
    }
}
