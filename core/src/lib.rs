//! Text-returning HTTP request helper for the notes API.
//!
//! # Overview
//! `ApiClient::request` appends a path to the configured base URL, merges the
//! caller's headers over `Content-Type: application/json`, serializes JSON
//! bodies, and returns the response body as text through an injected
//! `Transport`.
//!
//! # Design
//! - `ApiClient` is stateless; the base URL arrives as an explicit
//!   `ApiConfig` rather than a global.
//! - `build_request` (pure) and `Transport::execute` (I/O) are separate, so
//!   request shaping is testable without a network.
//! - `NotesApi` is a typed consumer layered on the helper; the helper itself
//!   never parses responses.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod notes;
pub mod options;
pub mod transport;

pub use client::{merge_headers, ApiClient};
pub use config::{ApiConfig, BASE_URL_ENV};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notes::{Note, NoteInput, NotesApi};
pub use options::{RequestBody, RequestOptions};
pub use transport::{ReqwestTransport, Transport, TransportError};
