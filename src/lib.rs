//! Terminal client for a media request service: sign in, search the catalog,
//! and file "add" requests against the backend.

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod decode;
pub mod error;
pub mod logging;
pub mod model;
pub mod sanitize;
pub mod view;
