//! Core type definitions for the application

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

use super::notification::{Notification, Severity};
use super::search::SearchState;

pub const SUBMIT_LABEL: &str = "Add Request";
pub const SUBMIT_BUSY_LABEL: &str = "Adding…";

/// Catalog section a search runs against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MediaType {
    #[default]
    Movies,
    Tv,
    Books,
    Audiobooks,
}

impl MediaType {
    pub const ALL: [MediaType; 4] = [
        MediaType::Movies,
        MediaType::Tv,
        MediaType::Books,
        MediaType::Audiobooks,
    ];

    /// Value sent as the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movies => "movies",
            MediaType::Tv => "tv",
            MediaType::Books => "books",
            MediaType::Audiobooks => "audiobooks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaType::Movies => "Movies",
            MediaType::Tv => "TV",
            MediaType::Books => "Books",
            MediaType::Audiobooks => "Audiobooks",
        }
    }

    pub fn next(self) -> Self {
        match self {
            MediaType::Movies => MediaType::Tv,
            MediaType::Tv => MediaType::Books,
            MediaType::Books => MediaType::Audiobooks,
            MediaType::Audiobooks => MediaType::Movies,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            MediaType::Movies => MediaType::Audiobooks,
            MediaType::Tv => MediaType::Movies,
            MediaType::Books => MediaType::Tv,
            MediaType::Audiobooks => MediaType::Books,
        }
    }
}

/// Credentials handed out by a successful login.
///
/// Lives for the rest of the process; there is no logout.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: String,
    signed_in_user: String,
}

impl Session {
    pub fn new(token: impl Into<String>, signed_in_user: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            signed_in_user: signed_in_user.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn signed_in_user(&self) -> &str {
        &self.signed_in_user
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

// The token never goes into logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("signed_in_user", &self.signed_in_user)
            .field("has_token", &self.is_authenticated())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    LoggedOut,
    LoggedIn(Session),
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::LoggedIn(session) => Some(session),
            AuthState::LoggedOut => None,
        }
    }
}

/// Which login field receives typed characters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// Trigger control is disabled while a login call is in flight.
    pub submitting: bool,
    pub error: Option<String>,
}

/// Identity of one result card's submit control.
///
/// `generation` is the search that produced the card, so a fresh result set
/// never inherits locks from the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardKey {
    pub generation: u64,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub enabled: bool,
}

/// A backend account as listed by the users endpoint
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserEntry {
    pub name: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Result of submitting one item as a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    Created { message: String, target: String },
    /// The item already exists. Resolved, not failed.
    Conflict { message: String },
    Failed { message: String },
}

impl RequestOutcome {
    pub fn message(&self) -> &str {
        match self {
            RequestOutcome::Created { message, .. }
            | RequestOutcome::Conflict { message }
            | RequestOutcome::Failed { message } => message,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RequestOutcome::Created { .. } => Severity::Success,
            RequestOutcome::Conflict { .. } => Severity::Warning,
            RequestOutcome::Failed { .. } => Severity::Error,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub login_visible: bool,
    pub login: LoginForm,
    pub welcome: Option<String>,
    pub users_summary: Option<String>,
    pub search_enabled: bool,
    pub search_focused: bool,
    pub query: String,
    pub media_type: MediaType,
    pub search: SearchState,
    /// Sequence number of the most recently issued search.
    pub search_seq: u64,
    pub selected: usize,
    pub in_flight: HashSet<CardKey>,
    pub toast: Option<Notification>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            login_visible: true,
            login: LoginForm::default(),
            welcome: None,
            users_summary: None,
            search_enabled: false,
            search_focused: false,
            query: String::new(),
            media_type: MediaType::default(),
            search: SearchState::Idle,
            search_seq: 0,
            selected: 0,
            in_flight: HashSet::new(),
            toast: None,
        }
    }
}

impl UiState {
    pub fn submit_control(&self, key: CardKey) -> SubmitControl {
        if self.in_flight.contains(&key) {
            SubmitControl {
                label: SUBMIT_BUSY_LABEL,
                enabled: false,
            }
        } else {
            SubmitControl {
                label: SUBMIT_LABEL,
                enabled: true,
            }
        }
    }

    /// Key of the highlighted card, if results are showing.
    pub fn selected_card(&self) -> Option<CardKey> {
        match &self.search {
            SearchState::Results { generation, cards } if self.selected < cards.len() => {
                Some(CardKey {
                    generation: *generation,
                    index: self.selected,
                })
            }
            _ => None,
        }
    }
}
