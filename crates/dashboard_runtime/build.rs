use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeatherSection {
    location_label: String,
    latitude: f64,
    longitude: f64,
    refresh_interval_secs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClockSection {
    tick_interval_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SearchEngineEntry {
    id: String,
    display_name: String,
    url: String,
    query_param: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SearchSection {
    default_engine: String,
    engines: Vec<SearchEngineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BackgroundSection {
    pool: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InspirationEntry {
    quote: String,
    author: String,
    tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DashboardConfigFile {
    schema_version: u32,
    weather: WeatherSection,
    clock: ClockSection,
    search: SearchSection,
    background: BackgroundSection,
    inspiration: Vec<InspirationEntry>,
}

fn validate(config: &DashboardConfigFile, path: &str) {
    if config.schema_version != 1 {
        panic!(
            "dashboard config schema mismatch in {path}: expected 1 found {}",
            config.schema_version
        );
    }
    if !(-90.0..=90.0).contains(&config.weather.latitude)
        || !(-180.0..=180.0).contains(&config.weather.longitude)
    {
        panic!("weather coordinate out of range in {path}");
    }
    if config.weather.refresh_interval_secs == 0 || config.clock.tick_interval_ms == 0 {
        panic!("refresh intervals must be non-zero in {path}");
    }

    let mut engine_ids = HashSet::new();
    for engine in &config.search.engines {
        if !engine_ids.insert(engine.id.as_str()) {
            panic!("duplicate search engine `{}` in {path}", engine.id);
        }
        if !engine.url.starts_with("https://") || engine.query_param.is_empty() {
            panic!("search engine `{}` needs an https url and a query param", engine.id);
        }
    }
    if !engine_ids.contains(config.search.default_engine.as_str()) {
        panic!(
            "default search engine `{}` is not declared in {path}",
            config.search.default_engine
        );
    }

    if config.background.pool.is_empty() {
        panic!("background pool in {path} must not be empty");
    }
    if let Some(url) = config
        .background
        .pool
        .iter()
        .find(|url| !url.starts_with("https://"))
    {
        panic!("background `{url}` in {path} must be an https url");
    }

    if config.inspiration.is_empty() {
        panic!("inspiration pool in {path} must not be empty");
    }
    if config
        .inspiration
        .iter()
        .any(|entry| entry.quote.trim().is_empty() || entry.author.trim().is_empty())
    {
        panic!("inspiration entries in {path} need a quote and an author");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("dashboard.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: DashboardConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path.display().to_string());

    let json = serde_json::to_string_pretty(&config).expect("serialize dashboard config");
    let generated = format!(
        "/// Build-time generated dashboard configuration JSON.\n\
pub const DASHBOARD_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("dashboard_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
