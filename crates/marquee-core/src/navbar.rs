//! UI-local state of the top navigation bar.
//!
//! The load phase, search bar and account popup are independent axes; each
//! transition below touches exactly one of them.

use serde::{Deserialize, Serialize};

/// Full-page loading state of the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    /// Not mounted yet.
    #[default]
    Idle,
    /// Waiting for the account fetch (or another loader owner) to settle.
    Loading,
    /// Data settled, header is shown.
    Ready,
}

/// View-owned flags of the navbar. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarState {
    pub phase: LoadPhase,
    pub search_visible: bool,
    pub search_query: String,
    pub account_popup_visible: bool,
    /// True once the page has scrolled away from the top.
    pub scrolled: bool,
    /// Set by `mount`; an unmounted view settles back to `Idle`.
    pub mounted: bool,
    /// Number of owners currently holding the full-page loader.
    pub loaders: usize,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// `Idle -> Loading`: marks the view mounted and takes the loader for
    /// the initial account fetch.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.begin_loading();
    }

    /// Takes the full-page loader. Every call must be paired with one
    /// `finish_loading`.
    pub fn begin_loading(&mut self) {
        self.loaders += 1;
        self.phase = LoadPhase::Loading;
    }

    /// Releases one loader owner. The phase leaves `Loading` only when the
    /// last owner is done: `Ready` for a mounted view, `Idle` otherwise.
    pub fn finish_loading(&mut self) {
        self.loaders = self.loaders.saturating_sub(1);
        if self.loaders == 0 {
            self.phase = if self.mounted {
                LoadPhase::Ready
            } else {
                LoadPhase::Idle
            };
        }
    }

    pub fn open_search(&mut self) {
        self.search_visible = true;
    }

    pub fn close_search(&mut self) {
        self.search_visible = false;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Flips the account popup and returns the new visibility.
    pub fn toggle_account_popup(&mut self) -> bool {
        self.account_popup_visible = !self.account_popup_visible;
        self.account_popup_visible
    }

    pub fn hide_account_popup(&mut self) {
        self.account_popup_visible = false;
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scrolled = offset > 0.0;
    }

    /// Clears the search query and hides the search bar after following a link.
    pub fn reset_for_navigation(&mut self) {
        self.search_query.clear();
        self.search_visible = false;
    }
}
