//! # specter-backend - Generator Service Client
//!
//! Talks to the spec generator service over HTTP. The generator owns the
//! document file and the generation pipeline; this crate only moves JSON
//! envelopes back and forth:
//!
//! - `GET /file` — the current document text and its server-side path
//! - `POST /generate` — document text in, artifacts (or an error) out
//! - `POST /save` — overwrite the server-side file with new text
//!
//! The client is blocking (ureq); callers that must not block wrap calls
//! in `tokio::task::spawn_blocking`.

pub mod client;
pub mod wire;

pub use client::{swagger_url, BackendClient, DEFAULT_TIMEOUT_SECS};
pub use wire::{GenerateReply, GenerateRequest, SaveRequest, SpecFileReply};

/// Default listen address of the generator service.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8777";
