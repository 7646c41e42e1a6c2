//! Login gate and the optional users listing

use crate::api::{ApiRequest, ApiResponse};
use crate::decode::{Decoded, decode};
use crate::error::{ApiError, SessionError};
use crate::model::{Session, Severity, UserEntry};
use crate::{log_api_request, log_api_result};

use super::AppController;

const LOGIN_FAILED: &str = "Login failed";
const USERS_FAILED: &str = "Could not load users";

impl AppController {
    /// Sign in with the given credentials.
    ///
    /// On success the session is stored and the search input unlocked. On
    /// failure the message is left next to the login control and the client
    /// stays signed out.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, SessionError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            let err = SessionError::Validation;
            self.model.set_login_error(Some(err.to_string())).await;
            return Err(err);
        }

        if !self.model.begin_login().await {
            tracing::debug!("Login already in flight, ignoring");
            return Err(SessionError::InFlight);
        }

        log_api_request!("login", username);
        let request = ApiRequest::Login {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = self.backend.send(&request, None).await;
        log_api_result!("login", result);

        let outcome = session_from_response(result);
        self.model.finish_login().await;

        match &outcome {
            Ok(session) => {
                tracing::info!(user = %session.signed_in_user(), "Signed in");
                self.model.establish_session(session.clone()).await;
                if self.options.enumerate_users {
                    self.load_users(session).await;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login rejected");
                self.model.set_login_error(Some(e.to_string())).await;
            }
        }

        outcome
    }

    /// Fetch the backend's user list for the status bar.
    ///
    /// Best effort: a failure is reported but leaves the session alone.
    pub async fn load_users(&self, session: &Session) {
        log_api_request!("users");
        let result = self.backend.send(&ApiRequest::Users, Some(session)).await;
        log_api_result!("users", result);

        match result {
            Ok(response) if response.is_success() => {
                match serde_json::from_str::<Vec<UserEntry>>(&response.body) {
                    Ok(users) => {
                        let admins = users.iter().filter(|u| u.is_admin).count();
                        tracing::debug!(users = users.len(), admins, "Loaded users");
                        self.model.set_users_summary(users_summary(users.len(), admins)).await;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Unreadable users listing");
                        self.model.notify(USERS_FAILED, Severity::Error).await;
                    }
                }
            }
            Ok(response) => {
                let decoded = decode(&response.body);
                let message = decoded.error_message().unwrap_or(USERS_FAILED).to_string();
                self.model.notify(message, Severity::Error).await;
            }
            Err(e) => {
                self.model.notify(format!("{}: {}", USERS_FAILED, e), Severity::Error).await;
            }
        }
    }
}

fn session_from_response(result: Result<ApiResponse, ApiError>) -> Result<Session, SessionError> {
    let response = result?;
    let decoded = decode(&response.body);

    if !response.is_success() {
        return Err(rejection(&decoded));
    }

    match decoded.str_field("token") {
        Some(token) => {
            let user = decoded.str_field("user").unwrap_or_default();
            Ok(Session::new(token, user))
        }
        None => Err(SessionError::Rejected(
            "Login response did not include a token".to_string(),
        )),
    }
}

fn rejection(decoded: &Decoded) -> SessionError {
    SessionError::Rejected(decoded.error_message().unwrap_or(LOGIN_FAILED).to_string())
}

fn users_summary(total: usize, admins: usize) -> String {
    let users = if total == 1 { "user" } else { "users" };
    let admin_label = if admins == 1 { "admin" } else { "admins" };
    format!("{} {}, {} {}", total, users, admins, admin_label)
}
