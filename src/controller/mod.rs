//! Controller module - Application logic and event handling
//!
//! - `session`: Login gate and the optional users listing
//! - `search`: Debounced search pipeline
//! - `request`: Per-card request submission
//! - `events`: Typed UI events and their dispatch
//! - `input`: Key event handling

mod session;
mod search;
mod request;
mod events;
mod input;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::api::Backend;
use crate::config::{Config, DEFAULT_DEBOUNCE_MS, MIN_QUERY_CHARS};
use crate::model::AppModel;

pub use events::AppEvent;

#[derive(Clone, Debug)]
pub struct ControllerOptions {
    pub debounce: Duration,
    pub min_query_chars: usize,
    pub enumerate_users: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_query_chars: MIN_QUERY_CHARS,
            enumerate_users: false,
        }
    }
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        Self {
            debounce: config.debounce,
            enumerate_users: config.enumerate_users,
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    pub(crate) backend: Arc<dyn Backend>,
    pub(crate) options: ControllerOptions,
    /// The one pending debounce timer for the search input.
    debounce_timer: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl AppController {
    pub fn new(model: Arc<AppModel>, backend: Arc<dyn Backend>, options: ControllerOptions) -> Self {
        Self {
            model,
            backend,
            options,
            debounce_timer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn model(&self) -> &Arc<AppModel> {
        &self.model
    }
}
