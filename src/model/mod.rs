//! Model module - Application state and data types
//!
//! - `types`: Core type definitions (media type, session, UI state)
//! - `media`: Catalog items and the result cards built from them
//! - `search`: Search pipeline states
//! - `notification`: Transient status messages
//! - `app_model`: Main application model with state management methods

mod types;
mod media;
mod search;
mod notification;
mod app_model;

pub use types::{
    AuthState, CardKey, LoginField, LoginForm, MediaType, RequestOutcome, Session,
    SubmitControl, UiState, UserEntry, SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
};

pub use media::{MediaItem, ResultCard};

pub use search::{EmptyReason, SearchState};

pub use notification::{Notification, Severity};

pub use app_model::AppModel;
