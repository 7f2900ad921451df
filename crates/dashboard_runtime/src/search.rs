//! Search box URL building.

use crate::config::{dashboard_config, SearchEngine};

/// Returns the configured engines in display order.
pub fn search_engines() -> &'static [SearchEngine] {
    &dashboard_config().search.engines
}

/// Looks up an engine by id.
pub fn find_engine(id: &str) -> Option<&'static SearchEngine> {
    search_engines().iter().find(|engine| engine.id == id)
}

/// Returns the engine selected on first run.
pub fn default_engine() -> &'static SearchEngine {
    let config = dashboard_config();
    find_engine(&config.search.default_engine)
        .expect("build.rs validates that the default engine is declared")
}

/// Builds the results URL for `query`, or `None` when the query is blank.
///
/// The query is percent-encoded as typed; only the blank check trims it.
pub fn search_url(engine: &SearchEngine, query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(format!(
        "{}?{}={}",
        engine.url,
        engine.query_param,
        urlencoding::encode(query)
    ))
}

/// Returns the search box placeholder for `engine`.
pub fn placeholder(engine: &SearchEngine) -> String {
    format!("Search {}...", engine.display_name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_engine_is_google() {
        assert_eq!(default_engine().display_name, "Google");
        assert_eq!(placeholder(default_engine()), "Search Google...");
    }

    #[test]
    fn blank_queries_produce_no_url() {
        assert_eq!(search_url(default_engine(), ""), None);
        assert_eq!(search_url(default_engine(), "   \t"), None);
    }

    #[test]
    fn queries_are_percent_encoded_per_engine() {
        assert_eq!(
            search_url(default_engine(), "rust & wasm").as_deref(),
            Some("https://www.google.com/search?q=rust%20%26%20wasm")
        );
        let ddg = find_engine("duckduckgo").expect("duckduckgo");
        assert_eq!(
            search_url(ddg, "café").as_deref(),
            Some("https://duckduckgo.com/?q=caf%C3%A9")
        );
        assert!(find_engine("altavista").is_none());
    }
}
