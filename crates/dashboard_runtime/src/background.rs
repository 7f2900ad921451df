//! Random-versus-custom page background.

use crate::{config::dashboard_config, model::BackgroundState, shortcuts::normalize_url};

/// Returns the configured random background pool.
pub fn background_pool() -> &'static [String] {
    &dashboard_config().background.pool
}

/// Returns a uniform sample in `[0, 1)`.
pub fn random_roll() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos();
        f64::from(nanos) / 1_000_000_000.0
    }
}

/// Maps `roll` in `[0, 1)` onto the pool. Out-of-range rolls are clamped.
pub fn pick_background(roll: f64) -> BackgroundState {
    let pool = background_pool();
    let scaled = (roll.clamp(0.0, 1.0) * pool.len() as f64) as usize;
    let index = scaled.min(pool.len().saturating_sub(1));
    BackgroundState::Random {
        url: pool[index].clone(),
    }
}

/// Picks a session-random background.
pub fn random_background() -> BackgroundState {
    pick_background(random_roll())
}

/// Normalizes a user-supplied background: blank is rejected, `data:` passes through, and bare
/// hosts get `https://`.
pub fn normalize_background_source(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.starts_with("data:") {
        Some(trimmed.to_string())
    } else {
        Some(normalize_url(trimmed))
    }
}

/// Background to show at boot given the stored custom asset, if any.
pub fn boot_background(stored: Option<String>) -> BackgroundState {
    match stored
        .as_deref()
        .and_then(normalize_background_source)
    {
        Some(source) => BackgroundState::Custom { source },
        None => random_background(),
    }
}
