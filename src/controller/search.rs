//! Debounced search pipeline
//!
//! Keystrokes reset a single timer; only the query standing when it fires is
//! sent. Every issued search takes a sequence number and only the newest one
//! may write the result area, so late answers to older queries are dropped
//! on arrival.

use serde_json::value::RawValue;

use crate::api::{ApiRequest, ApiResponse};
use crate::decode::decode;
use crate::error::ApiError;
use crate::model::{EmptyReason, MediaType, ResultCard, SearchState, Severity};
use crate::{log_api_request, log_api_result};

use super::AppController;

const UNREADABLE: &str = "Search returned an unreadable response";

impl AppController {
    /// The search text changed; (re)start the debounce timer.
    pub async fn on_query_change(&self, text: String) {
        if !self.model.is_search_enabled().await {
            return;
        }
        self.model.set_query(text).await;

        let mut timer = self.debounce_timer.lock().await;
        if let Some(pending) = timer.take() {
            pending.abort();
        }

        let controller = self.clone();
        let delay = self.options.debounce;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detach the search itself so a later keystroke only cancels timers.
            tokio::spawn(async move { controller.run_search().await });
        }));
    }

    /// The media-type filter changed; search right away if there is a query.
    pub async fn select_media_type(&self, media_type: MediaType) {
        self.model.set_media_type(media_type).await;
        self.refresh_search().await;
    }

    /// Search again now with the current query and filter, dropping any
    /// pending debounce. Does nothing without a query.
    /// The filter is read from the model, never written here.
    pub async fn refresh_search(&self) {
        let (query, _) = self.model.search_input().await;
        if query.trim().is_empty() || !self.model.is_search_enabled().await {
            return;
        }

        if let Some(pending) = self.debounce_timer.lock().await.take() {
            pending.abort();
        }
        self.run_search().await;
    }

    /// Run the current query now.
    pub async fn run_search(&self) {
        let Some((seq, query, media_type)) = self
            .model
            .begin_search_from_input(self.options.min_query_chars)
            .await
        else {
            return;
        };
        let session = self.model.session().await;

        log_api_request!("search", seq, query = %query, media_type = media_type.as_str());
        let request = ApiRequest::Search {
            media_type,
            query: query.clone(),
        };
        let result = self.backend.send(&request, session.as_ref()).await;
        log_api_result!("search", result);

        let state = search_state(seq, result);
        let failure = match &state {
            SearchState::Error { reason } => Some(reason.clone()),
            _ => None,
        };

        if !self.model.finish_search(seq, state).await {
            tracing::debug!(seq, query = %query, "Discarding superseded search result");
            return;
        }

        match failure {
            Some(reason) => {
                tracing::error!(query = %query, reason = %reason, "Search failed");
                self.model.notify(reason, Severity::Error).await;
            }
            None => tracing::info!(seq, query = %query, "Search completed"),
        }
    }
}

fn search_state(seq: u64, result: Result<ApiResponse, ApiError>) -> SearchState {
    let response = match result {
        Ok(response) => response,
        Err(e) => return SearchState::Error { reason: e.to_string() },
    };

    if !response.is_success() {
        let reason = decode(&response.body)
            .error_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Search failed (HTTP {})", response.status));
        return SearchState::Error { reason };
    }

    let items: Vec<Box<RawValue>> = if response.body.trim().is_empty() {
        Vec::new()
    } else {
        match serde_json::from_str(&response.body) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "Search body is not a list");
                return SearchState::Error {
                    reason: UNREADABLE.to_string(),
                };
            }
        }
    };

    if items.is_empty() {
        return SearchState::Empty(EmptyReason::NoMatches);
    }

    SearchState::Results {
        generation: seq,
        cards: items.into_iter().map(ResultCard::from_payload).collect(),
    }
}
