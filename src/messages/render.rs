//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_BASE_URL;
use crate::messages::ui_events::View;
use crate::models::User;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub view: View,

    // List screen
    pub users: Vec<User>,
    pub selected: usize,
    pub is_loading: bool,
    pub error: Option<String>,

    // Detail screen
    pub detail: Option<User>,

    // Popups
    pub show_help: bool,

    // Status bar
    pub base_url: String,
    pub cached_users: usize,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            view: View::List,
            users: Vec::new(),
            selected: 0,
            is_loading: false,
            error: None,
            detail: None,
            show_help: false,
            base_url: String::from(DEFAULT_BASE_URL),
            cached_users: 0,
        }
    }
}
