//! App state - pure data structure with no I/O logic

use crate::app::screen::{LoadOutcome, UsersScreen};
use crate::app::view_state::ViewState;
use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, View};
use crate::models::User;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub config: Config,

    // Screen state holder (cache, detail flag, published state)
    pub screen: UsersScreen,

    // Navigation
    pub view: View,
    pub detail: Option<User>,

    // What the list currently shows
    pub users: Vec<User>,
    pub selected: usize,
    pub is_loading: bool,
    pub error: Option<String>,

    // Popups
    pub show_help: bool,

    // Fetch ids only correlate log lines; responses are applied whatever their id
    pub next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            screen: UsersScreen::new(),
            view: View::List,
            detail: None,
            users: Vec::new(),
            selected: 0,
            is_loading: false,
            error: None,
            show_help: false,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Ask the screen for users, returning the fetch to launch if any
    pub fn load(&mut self) -> Option<NetworkCommand> {
        match self.screen.load(self.config.page_size) {
            LoadOutcome::Cached => {
                self.render_screen_state();
                None
            }
            LoadOutcome::Fetch { quantity } => Some(NetworkCommand::FetchUsers {
                id: self.next_id(),
                quantity,
            }),
        }
    }

    /// Apply a network response
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Users { id, state } => {
                tracing::debug!(id, ?state, "users state");
                self.screen.on_view_state(state);
                self.render_screen_state();
            }
        }
    }

    /// Reflect the screen's latest published state in the list view
    fn render_screen_state(&mut self) {
        match self.screen.current() {
            Some(ViewState::Loading(loading)) => {
                self.is_loading = *loading;
            }
            Some(ViewState::Success(users)) => {
                self.users = users.clone();
                self.error = None;
                self.selected = self.selected.min(self.users.len().saturating_sub(1));
            }
            Some(ViewState::Failure(e)) => {
                self.error = Some(e.to_string());
            }
            None => {}
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.users.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Show the selected user
    pub fn open_detail(&mut self) {
        if let Some(user) = self.users.get(self.selected) {
            self.detail = Some(user.clone());
            self.view = View::Detail;
            self.screen.mark_returning_from_detail();
        }
    }

    /// Back to the list, which reloads like a freshly created list view
    pub fn close_detail(&mut self) -> Option<NetworkCommand> {
        if self.view != View::Detail {
            return None;
        }
        self.view = View::List;
        self.detail = None;
        self.load()
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            view: self.view,
            users: self.users.clone(),
            selected: self.selected,
            is_loading: self.is_loading,
            error: self.error.clone(),
            detail: self.detail.clone(),
            show_help: self.show_help,
            base_url: self.config.base_url.clone(),
            cached_users: self.screen.cache().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_user;
    use crate::network::error::FetchError;

    fn users(n: usize) -> Vec<User> {
        (0..n).map(sample_user).collect()
    }

    fn deliver(state: &mut AppState, id: u64, states: Vec<ViewState<Vec<User>>>) {
        for s in states {
            state.handle_response(NetworkResponse::Users { id, state: s });
        }
    }

    fn fetch_id(cmd: Option<NetworkCommand>) -> u64 {
        match cmd {
            Some(NetworkCommand::FetchUsers { id, quantity }) => {
                assert_eq!(quantity, 10);
                id
            }
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_load_fetches_page_size() {
        let mut state = AppState::default();
        assert_eq!(fetch_id(state.load()), 1);
        assert_eq!(fetch_id(state.load()), 2);
    }

    #[test]
    fn test_list_keeps_users_after_loading_ends() {
        let mut state = AppState::default();
        let id = fetch_id(state.load());

        state.handle_response(NetworkResponse::Users {
            id,
            state: ViewState::Loading(true),
        });
        assert!(state.is_loading);

        deliver(
            &mut state,
            id,
            vec![ViewState::Success(users(10)), ViewState::Loading(false)],
        );
        assert!(!state.is_loading);
        assert_eq!(state.users.len(), 10);
        assert_eq!(state.to_render_state().cached_users, 10);
    }

    #[test]
    fn test_failure_is_shown_and_list_kept() {
        let mut state = AppState::default();
        let id = fetch_id(state.load());
        deliver(&mut state, id, vec![ViewState::Success(users(2))]);

        let id = fetch_id(state.load());
        deliver(
            &mut state,
            id,
            vec![
                ViewState::Loading(true),
                ViewState::Failure(FetchError::EmptyBody),
                ViewState::Loading(false),
            ],
        );

        assert_eq!(state.users.len(), 2);
        assert_eq!(
            state.error.as_deref(),
            Some("API call successful but empty response body")
        );
    }

    #[test]
    fn test_detail_round_trip_serves_cache() {
        let mut state = AppState::default();
        let id = fetch_id(state.load());
        deliver(
            &mut state,
            id,
            vec![
                ViewState::Loading(true),
                ViewState::Success(users(10)),
                ViewState::Loading(false),
            ],
        );

        state.select_next();
        state.open_detail();
        assert_eq!(state.view, View::Detail);
        assert_eq!(state.detail, Some(sample_user(1)));
        assert!(state.screen.is_returning_from_detail());

        assert_eq!(state.close_detail(), None);
        assert_eq!(state.view, View::List);
        assert_eq!(state.users, users(10));
        assert_eq!(
            state.screen.current(),
            Some(&ViewState::Success(users(10)))
        );

        // Refresh keeps serving the cache
        assert_eq!(state.load(), None);
    }

    #[test]
    fn test_open_detail_on_empty_list_is_noop() {
        let mut state = AppState::default();
        state.open_detail();
        assert_eq!(state.view, View::List);
        assert!(!state.screen.is_returning_from_detail());
        assert_eq!(state.close_detail(), None);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = AppState::default();
        let id = fetch_id(state.load());
        deliver(&mut state, id, vec![ViewState::Success(users(2))]);

        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }
}
