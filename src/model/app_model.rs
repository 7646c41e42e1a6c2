//! Main application model with state management

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

use super::media::ResultCard;
use super::notification::{Notification, Severity};
use super::search::{EmptyReason, SearchState};
use super::types::{AuthState, CardKey, LoginField, MediaType, Session, UiState};

/// Main application model containing all state
pub struct AppModel {
    auth: Arc<RwLock<AuthState>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
    toast_duration: Duration,
}

impl AppModel {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            auth: Arc::new(RwLock::new(AuthState::LoggedOut)),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
            toast_duration,
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub async fn auth_state(&self) -> AuthState {
        self.auth.read().await.clone()
    }

    pub async fn session(&self) -> Option<Session> {
        self.auth.read().await.session().cloned()
    }

    pub async fn is_login_visible(&self) -> bool {
        self.ui_state.lock().await.login_visible
    }

    pub async fn login_credentials(&self) -> (String, String) {
        let state = self.ui_state.lock().await;
        (state.login.username.clone(), state.login.password.clone())
    }

    pub async fn login_append(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        let focus = state.login.focus;
        match focus {
            LoginField::Username => state.login.username.push(c),
            LoginField::Password => state.login.password.push(c),
        }
    }

    pub async fn login_backspace(&self) {
        let mut state = self.ui_state.lock().await;
        let focus = state.login.focus;
        match focus {
            LoginField::Username => state.login.username.pop(),
            LoginField::Password => state.login.password.pop(),
        };
    }

    pub async fn toggle_login_field(&self) {
        let mut state = self.ui_state.lock().await;
        state.login.focus = state.login.focus.toggle();
    }

    /// Lock the login trigger. Returns false if a login is already running.
    pub async fn begin_login(&self) -> bool {
        let mut state = self.ui_state.lock().await;
        if state.login.submitting {
            return false;
        }
        state.login.submitting = true;
        state.login.error = None;
        true
    }

    pub async fn finish_login(&self) {
        self.ui_state.lock().await.login.submitting = false;
    }

    pub async fn set_login_error(&self, message: Option<String>) {
        self.ui_state.lock().await.login.error = message;
    }

    /// Store the session and switch the UI to its signed-in layout.
    pub async fn establish_session(&self, session: Session) {
        let welcome = format!("Signed in as {}", session.signed_in_user());
        *self.auth.write().await = AuthState::LoggedIn(session);

        let mut state = self.ui_state.lock().await;
        state.login_visible = false;
        state.login.password.clear();
        state.login.error = None;
        state.welcome = Some(welcome);
        state.search_enabled = true;
        state.search_focused = true;
    }

    pub async fn set_users_summary(&self, summary: String) {
        self.ui_state.lock().await.users_summary = Some(summary);
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub async fn is_search_enabled(&self) -> bool {
        self.ui_state.lock().await.search_enabled
    }

    pub async fn search_input(&self) -> (String, MediaType) {
        let state = self.ui_state.lock().await;
        (state.query.clone(), state.media_type)
    }

    pub async fn set_query(&self, query: String) {
        self.ui_state.lock().await.query = query;
    }

    pub async fn set_media_type(&self, media_type: MediaType) {
        self.ui_state.lock().await.media_type = media_type;
    }

    /// Claim a sequence number for whatever the search input holds right now.
    ///
    /// Query and media type are read under the same lock that issues the
    /// number, so the newest search always carries the newest input. A query
    /// shorter than `min_chars` still takes a number (retiring older searches)
    /// but yields `None` and the "start typing" state.
    pub async fn begin_search_from_input(&self, min_chars: usize) -> Option<(u64, String, MediaType)> {
        let mut ui = self.ui_state.lock().await;
        ui.search_seq += 1;
        ui.selected = 0;

        let query = ui.query.trim().to_string();
        if query.chars().count() < min_chars {
            ui.search = SearchState::Empty(EmptyReason::StartTyping);
            return None;
        }

        ui.search = SearchState::Pending;
        Some((ui.search_seq, query, ui.media_type))
    }

    /// Apply the outcome of search `seq` unless a newer search was issued since.
    pub async fn finish_search(&self, seq: u64, state: SearchState) -> bool {
        let mut ui = self.ui_state.lock().await;
        if ui.search_seq != seq {
            return false;
        }
        ui.search = state;
        ui.selected = 0;
        true
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.selected > 0 {
            state.selected -= 1;
        }
    }

    pub async fn move_selection_down(&self) {
        let mut state = self.ui_state.lock().await;
        if state.selected < state.search.cards().len().saturating_sub(1) {
            state.selected += 1;
        }
    }

    // ========================================================================
    // Submission locks
    // ========================================================================

    /// Take the lock on a card's submit control.
    ///
    /// Returns the card when the control was enabled; `None` when it is
    /// already in flight or the card is no longer on screen.
    pub async fn acquire_submit_lock(&self, key: CardKey) -> Option<ResultCard> {
        let mut state = self.ui_state.lock().await;
        if state.in_flight.contains(&key) {
            return None;
        }
        let card = match &state.search {
            SearchState::Results { generation, cards } if *generation == key.generation => {
                cards.get(key.index).cloned()
            }
            _ => None,
        }?;
        state.in_flight.insert(key);
        Some(card)
    }

    pub async fn release_submit_lock(&self, key: CardKey) {
        self.ui_state.lock().await.in_flight.remove(&key);
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Show a toast, replacing whatever is on screen and restarting its timer.
    pub async fn notify(&self, message: impl Into<String>, severity: Severity) {
        let toast = Notification::new(message, severity);
        match severity {
            Severity::Error => tracing::warn!(message = %toast.message, "Error notification"),
            _ => tracing::debug!(message = %toast.message, ?severity, "Notification"),
        }
        self.ui_state.lock().await.toast = Some(toast);
    }

    pub async fn current_toast(&self) -> Option<Notification> {
        self.ui_state.lock().await.toast.clone()
    }

    pub async fn auto_clear_expired_toast(&self) {
        let mut state = self.ui_state.lock().await;
        let expired = state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(self.toast_duration));
        if expired {
            state.toast = None;
        }
    }
}
