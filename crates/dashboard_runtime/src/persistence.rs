//! Dashboard persistence over the injected preference and asset stores.
//!
//! Loads never fail: missing, blank, or malformed records fall back to defaults and the problem is
//! logged. Saves replace the whole record and report failures to the caller.

use platform_host::{load_pref_with, save_pref_with, AssetStore, PrefsStore, BACKGROUND_ASSET_KEY};
use thiserror::Error;

use crate::{
    model::{ShortcutEntry, WidgetDescriptor, SHORTCUTS_KEY, WIDGETS_KEY},
    shortcuts::default_shortcuts,
    widgets::default_widgets,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Persistence failures surfaced to the effect executor.
pub enum PersistError {
    /// A preference record could not be written.
    #[error("save `{key}` failed: {message}")]
    Prefs {
        /// Preference key.
        key: &'static str,
        /// Store or serialization error.
        message: String,
    },
    /// The background asset could not be written or deleted.
    #[error("asset `{key}` failed: {message}")]
    Asset {
        /// Asset key.
        key: &'static str,
        /// Store error.
        message: String,
    },
}

async fn load_list_or<S, T>(store: &S, key: &str, fallback: fn() -> Vec<T>) -> Vec<T>
where
    S: PrefsStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    match load_pref_with::<_, Vec<T>>(store, key).await {
        Ok(Some(list)) => list,
        Ok(None) => fallback(),
        Err(err) => {
            leptos::logging::warn!("load `{key}` failed, using defaults: {err}");
            fallback()
        }
    }
}

/// Loads the widget layout, or the defaults.
pub async fn load_widgets<S: PrefsStore + ?Sized>(store: &S) -> Vec<WidgetDescriptor> {
    load_list_or(store, WIDGETS_KEY, default_widgets).await
}

/// Persists the whole widget layout.
pub async fn persist_widgets<S: PrefsStore + ?Sized>(
    store: &S,
    widgets: &[WidgetDescriptor],
) -> Result<(), PersistError> {
    save_pref_with(store, WIDGETS_KEY, &widgets)
        .await
        .map_err(|message| PersistError::Prefs {
            key: WIDGETS_KEY,
            message,
        })
}

/// Loads the shortcut list, or the defaults.
///
/// A stored empty list is honoured; only a missing or unreadable record seeds the defaults.
pub async fn load_shortcuts<S: PrefsStore + ?Sized>(store: &S) -> Vec<ShortcutEntry> {
    load_list_or(store, SHORTCUTS_KEY, default_shortcuts).await
}

/// Persists the whole shortcut list.
pub async fn persist_shortcuts<S: PrefsStore + ?Sized>(
    store: &S,
    shortcuts: &[ShortcutEntry],
) -> Result<(), PersistError> {
    save_pref_with(store, SHORTCUTS_KEY, &shortcuts)
        .await
        .map_err(|message| PersistError::Prefs {
            key: SHORTCUTS_KEY,
            message,
        })
}

/// Loads the stored custom background, if any.
pub async fn load_background<A: AssetStore + ?Sized>(assets: &A) -> Option<String> {
    match assets.load_asset(BACKGROUND_ASSET_KEY).await {
        Ok(value) => value.filter(|source| !source.trim().is_empty()),
        Err(err) => {
            leptos::logging::warn!("load custom background failed: {err}");
            None
        }
    }
}

/// Stores `source` as the custom background.
pub async fn persist_background<A: AssetStore + ?Sized>(
    assets: &A,
    source: &str,
) -> Result<(), PersistError> {
    assets
        .save_asset(BACKGROUND_ASSET_KEY, source)
        .await
        .map_err(|message| PersistError::Asset {
            key: BACKGROUND_ASSET_KEY,
            message,
        })
}

/// Deletes the custom background.
pub async fn delete_background<A: AssetStore + ?Sized>(assets: &A) -> Result<(), PersistError> {
    assets
        .delete_asset(BACKGROUND_ASSET_KEY)
        .await
        .map_err(|message| PersistError::Asset {
            key: BACKGROUND_ASSET_KEY,
            message,
        })
}
