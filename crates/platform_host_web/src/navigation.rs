//! Same-tab navigation through `window.location`.

use platform_host::NavigationService;

#[derive(Debug, Clone, Copy, Default)]
/// Navigation service that replaces the current page location.
pub struct WebNavigationService;

impl NavigationService for WebNavigationService {
    fn navigate(&self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .location()
                .set_href(url)
                .map_err(crate::bridge::js_error_to_string)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err("navigation is only available when compiled for wasm32".to_string())
        }
    }
}
