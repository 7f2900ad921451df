//! Daily inspiration selection and its once-per-day cache.

use platform_host::{load_pref_with, save_pref_with, PrefsStore};
use serde::{Deserialize, Serialize};

use crate::{config::dashboard_config, model::InspirationRecord, model::INSPIRATION_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Stored `{date, data}` pair for the day's pick.
pub struct InspirationCache {
    /// Calendar-day key the pick was made for.
    pub date: String,
    /// The pick.
    pub data: InspirationRecord,
}

/// Returns the configured inspiration pool.
pub fn inspiration_pool() -> &'static [InspirationRecord] {
    &dashboard_config().inspiration
}

/// Deterministically picks the record for `date_key`: character-code sum modulo pool size.
pub fn pick(date_key: &str) -> InspirationRecord {
    pick_from(inspiration_pool(), date_key)
}

fn pick_from(pool: &[InspirationRecord], date_key: &str) -> InspirationRecord {
    let sum: u64 = date_key.encode_utf16().map(u64::from).sum();
    let index = (sum % pool.len() as u64) as usize;
    pool[index].clone()
}

/// Returns the cached pick for `date_key`, or picks, stores, and returns a fresh one.
///
/// A cache that is missing, stale, or unreadable is replaced. A failed write is logged and the
/// fresh pick is still returned.
pub async fn get_or_refresh<S: PrefsStore + ?Sized>(
    store: &S,
    date_key: &str,
) -> InspirationRecord {
    match load_pref_with::<_, InspirationCache>(store, INSPIRATION_KEY).await {
        Ok(Some(cache)) if cache.date == date_key => return cache.data,
        Ok(_) => {}
        Err(err) => leptos::logging::warn!("inspiration cache unreadable: {err}"),
    }

    let cache = InspirationCache {
        date: date_key.to_string(),
        data: pick(date_key),
    };
    if let Err(err) = save_pref_with(store, INSPIRATION_KEY, &cache).await {
        leptos::logging::warn!("persist inspiration cache failed: {err}");
    }
    cache.data
}
