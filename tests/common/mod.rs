#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use pooprequests_rs::api::{ApiRequest, ApiResponse, Backend};
use pooprequests_rs::controller::{AppController, ControllerOptions};
use pooprequests_rs::error::ApiError;
use pooprequests_rs::model::{AppModel, Session};

pub const DEBOUNCE: Duration = Duration::from_millis(260);
pub const TOAST: Duration = Duration::from_millis(2600);

/// What the backend saw for one call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub query: Option<String>,
    pub media_type: Option<&'static str>,
    pub body: Option<String>,
    pub token: Option<String>,
}

pub enum Reply {
    Now(Result<ApiResponse, ApiError>),
    Gated(oneshot::Receiver<Result<ApiResponse, ApiError>>),
}

/// In-memory backend answering from per-operation queues
#[derive(Default)]
pub struct ScriptedBackend {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<HashMap<&'static str, VecDeque<Reply>>>,
    echo_searches: AtomicBool,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, operation: &'static str, status: u16, body: &str) {
        self.push(operation, Reply::Now(Ok(ApiResponse::new(status, body))));
    }

    pub fn fail(&self, operation: &'static str, message: &str) {
        self.push(operation, Reply::Now(Err(ApiError::Transport(message.to_string()))));
    }

    /// Queue a reply that is held back until the returned sender fires.
    pub fn gate(&self, operation: &'static str) -> oneshot::Sender<Result<ApiResponse, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.push(operation, Reply::Gated(rx));
        tx
    }

    /// Answer unscripted searches with one item titled after the media type.
    pub fn echo_searches(&self) {
        self.echo_searches.store(true, Ordering::SeqCst);
    }

    fn push(&self, operation: &'static str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(operation)
            .or_default()
            .push_back(reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, operation: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.operation == operation)
            .collect()
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn send(
        &self,
        request: &ApiRequest,
        session: Option<&Session>,
    ) -> Result<ApiResponse, ApiError> {
        let (query, media_type, body) = match request {
            ApiRequest::Login { username, password } => (
                None,
                None,
                Some(format!("{}:{}", username, password)),
            ),
            ApiRequest::Search { media_type, query } => {
                (Some(query.clone()), Some(media_type.as_str()), None)
            }
            ApiRequest::Request { item } => (None, None, Some(item.payload().to_string())),
            ApiRequest::Users => (None, None, None),
        };
        self.calls.lock().unwrap().push(RecordedCall {
            operation: request.operation(),
            query,
            media_type,
            body,
            token: session.map(|s| s.token().to_string()),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(request.operation())
            .and_then(|queue| queue.pop_front());

        match reply {
            Some(Reply::Now(result)) => result,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_string()))),
            None => match request {
                ApiRequest::Search { media_type, .. } if self.echo_searches.load(Ordering::SeqCst) => {
                    let body = format!(r#"[{{"title":"{}"}}]"#, media_type.as_str());
                    Ok(ApiResponse::new(200, body))
                }
                _ => Ok(ApiResponse::new(500, "no scripted reply")),
            },
        }
    }
}

pub fn options() -> ControllerOptions {
    ControllerOptions {
        debounce: DEBOUNCE,
        ..ControllerOptions::default()
    }
}

pub fn controller(backend: Arc<ScriptedBackend>, options: ControllerOptions) -> AppController {
    let model = Arc::new(AppModel::new(TOAST));
    AppController::new(model, backend, options)
}

/// A controller that has already signed in as alice with token `tok`.
pub async fn signed_in(backend: Arc<ScriptedBackend>) -> AppController {
    backend.reply("login", 200, r#"{"token":"tok","user":"alice"}"#);
    let controller = controller(backend, options());
    controller
        .login("alice", "secret")
        .await
        .expect("scripted login succeeds");
    controller
}

/// Let spawned tasks and timers run until everything is idle.
///
/// Meant for paused-clock tests, where the sleep completes instantly once
/// no task can make progress.
pub async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
    tokio::time::sleep(Duration::from_secs(1)).await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}
