//! Per-card request submission

use crate::api::{ApiRequest, ApiResponse};
use crate::decode::decode;
use crate::error::ApiError;
use crate::model::{CardKey, MediaItem, RequestOutcome, ResultCard};
use crate::{log_api_request, log_api_result};

use super::AppController;

const DEFAULT_TARGET: &str = "library";
const REQUEST_FAILED: &str = "Request failed";

impl AppController {
    /// Submit the card behind `key` through its control.
    ///
    /// The control is locked for the duration of the call and released
    /// whatever the outcome. Returns `None` when the control was already
    /// locked (or the card is gone), in which case nothing is sent.
    pub async fn submit_card(&self, key: CardKey) -> Option<RequestOutcome> {
        let Some(card) = self.model.acquire_submit_lock(key).await else {
            tracing::debug!(?key, "Submit control busy or stale, ignoring");
            return None;
        };

        let outcome = self.submit(&card).await;
        self.model.release_submit_lock(key).await;
        Some(outcome)
    }

    /// Send one card's item to the request endpoint and report the outcome.
    pub async fn submit(&self, card: &ResultCard) -> RequestOutcome {
        let outcome = match card.item() {
            Ok(item) => self.send_request(item).await,
            Err(e) => {
                tracing::warn!(error = %e, "Refusing to submit malformed item");
                RequestOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        self.model
            .notify(outcome.message().to_string(), outcome.severity())
            .await;
        outcome
    }

    async fn send_request(&self, item: MediaItem) -> RequestOutcome {
        let title = item.title().unwrap_or("Untitled").to_string();
        let session = self.model.session().await;

        log_api_request!("request", title = %title, media_type = ?item.media_type());
        let request = ApiRequest::Request { item };
        let result = self.backend.send(&request, session.as_ref()).await;
        log_api_result!("request", result);

        let outcome = request_outcome(&title, result);
        tracing::info!(title = %title, outcome = ?outcome, "Request resolved");
        outcome
    }
}

fn request_outcome(title: &str, result: Result<ApiResponse, ApiError>) -> RequestOutcome {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            return RequestOutcome::Failed {
                message: format!("{}: {}", REQUEST_FAILED, e),
            };
        }
    };
    let decoded = decode(&response.body);

    if response.is_success() {
        let target = decoded.str_field("target").unwrap_or(DEFAULT_TARGET).to_string();
        let message = decoded
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Added to {}", target));
        return RequestOutcome::Created { message, target };
    }

    if response.is_conflict() {
        let message = decoded
            .message()
            .or_else(|| decoded.error_message())
            .map(str::to_string)
            .unwrap_or_else(|| format!("'{}' already exists", title));
        return RequestOutcome::Conflict { message };
    }

    RequestOutcome::Failed {
        message: decoded.error_message().unwrap_or(REQUEST_FAILED).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_prefers_backend_message() {
        let outcome = request_outcome("Dune", Ok(ApiResponse::new(201, r#"{"message":"Queued in Radarr","target":"Movies"}"#)));
        assert_eq!(
            outcome,
            RequestOutcome::Created {
                message: "Queued in Radarr".into(),
                target: "Movies".into()
            }
        );
    }

    #[test]
    fn conflict_without_body_names_the_item() {
        let outcome = request_outcome("Dune", Ok(ApiResponse::new(409, "")));
        assert_eq!(outcome, RequestOutcome::Conflict { message: "'Dune' already exists".into() });
    }

    #[test]
    fn plain_text_failure_is_carried() {
        let outcome = request_outcome("Dune", Ok(ApiResponse::new(500, "upstream timeout")));
        assert_eq!(outcome, RequestOutcome::Failed { message: "upstream timeout".into() });
    }

    #[test]
    fn transport_failure_is_failed() {
        let outcome = request_outcome("Dune", Err(ApiError::Transport("connection refused".into())));
        assert_eq!(outcome, RequestOutcome::Failed { message: "Request failed: connection refused".into() });
    }
}
