//! Backend seam
//!
//! The coordinator talks to the request service only through [`Backend`].
//! Transports hand back the raw status and body; decoding is left to the
//! caller so every endpoint goes through the same tolerant decoder.

mod http;

use std::fmt;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{MediaItem, MediaType, Session};

pub use http::{HttpBackend, search_path};

pub const LOGIN_PATH: &str = "/api/login";
pub const SEARCH_PATH: &str = "/api/search";
pub const REQUEST_PATH: &str = "/api/request";
pub const USERS_PATH: &str = "/api/users";

/// One call against the backend
#[derive(Clone)]
pub enum ApiRequest {
    Login { username: String, password: String },
    Search { media_type: MediaType, query: String },
    /// Body is the item's payload, sent as received.
    Request { item: MediaItem },
    Users,
}

impl ApiRequest {
    pub fn path(&self) -> &'static str {
        match self {
            ApiRequest::Login { .. } => LOGIN_PATH,
            ApiRequest::Search { .. } => SEARCH_PATH,
            ApiRequest::Request { .. } => REQUEST_PATH,
            ApiRequest::Users => USERS_PATH,
        }
    }

    /// Short name used in logs.
    pub fn operation(&self) -> &'static str {
        match self {
            ApiRequest::Login { .. } => "login",
            ApiRequest::Search { .. } => "search",
            ApiRequest::Request { .. } => "request",
            ApiRequest::Users => "users",
        }
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiRequest::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .finish_non_exhaustive(),
            ApiRequest::Search { media_type, query } => f
                .debug_struct("Search")
                .field("media_type", media_type)
                .field("query", query)
                .finish(),
            ApiRequest::Request { item } => f
                .debug_struct("Request")
                .field("title", &item.title())
                .finish(),
            ApiRequest::Users => f.write_str("Users"),
        }
    }
}

/// Status and body of a completed HTTP exchange
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

#[async_trait]
pub trait Backend: Send + Sync {
    /// Perform `request`, attaching the session's token when one is given.
    ///
    /// Any status code is a successful exchange; `Err` means nothing came back.
    async fn send(
        &self,
        request: &ApiRequest,
        session: Option<&Session>,
    ) -> Result<ApiResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_debug_hides_password() {
        let request = ApiRequest::Login {
            username: "alice".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{:?}", request);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn status_classes() {
        assert!(ApiResponse::new(201, "").is_success());
        assert!(!ApiResponse::new(409, "").is_success());
        assert!(ApiResponse::new(409, "").is_conflict());
        assert!(!ApiResponse::new(302, "").is_success());
    }
}
