//! Durable storage contracts: small JSON preferences and large image assets.

pub mod assets;
pub mod prefs;
