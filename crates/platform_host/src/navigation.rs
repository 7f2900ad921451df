//! Top-level navigation contracts used by search and shortcut launches.

use std::{cell::RefCell, rc::Rc};

/// Host service that moves the current tab to another URL.
pub trait NavigationService {
    /// Navigates the current tab to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses the navigation.
    fn navigate(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Navigation service for hosts without a browsing context.
pub struct NoopNavigationService;

impl NavigationService for NoopNavigationService {
    fn navigate(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Navigation service that records every requested URL instead of leaving the page.
pub struct RecordingNavigationService {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigationService {
    /// Returns the URLs navigated to so far, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl NavigationService for RecordingNavigationService {
    fn navigate(&self, url: &str) -> Result<(), String> {
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }
}
