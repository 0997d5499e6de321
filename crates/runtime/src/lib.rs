//! # runtime
//!
//! Runtime orchestration for the Kokoro text front-end.
//!
//! This crate provides:
//! - The `Encoder` pipeline (normalize, segment, transcribe, sanitize, encode)
//! - Concurrent per-segment backend calls with cancellation
//! - Phoneme backends (`espeak-ng` and a deterministic mock)
//! - Structured logging and metrics

pub mod backend;
pub mod logging;
pub mod metrics;
mod pipeline;

pub use backend::{EspeakBackend, MockBackend, build_backend};
pub use pipeline::Encoder;
pub use tokio_util::sync::CancellationToken;
