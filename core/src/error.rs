//! Error types for the API client.
//!
//! # Design
//! The request helper adds no failure modes of its own: `Transport` carries
//! whatever the transport reported and `Serialization` carries the serde error
//! for a body that could not be encoded. The remaining variants belong to
//! configuration loading and to the typed notes consumer.

use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not complete the round-trip (DNS, connect, bad URL).
    #[error("transport failed: {0}")]
    Transport(#[source] TransportError),

    /// The request body could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required configuration value was absent or blank.
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),

    /// Response text could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The server answered with a `{"detail": ...}` error document.
    #[error("server error: {0}")]
    Detail(String),
}
