//! # tts-core
//!
//! Core types, traits, and error definitions for the Kokoro text front-end.
//!
//! This crate provides the foundational abstractions used across all other crates
//! in the workspace, including:
//!
//! - Common data types (`Locale`, `Segment`, `EncodedMessage`)
//! - Trait definitions for pipeline components and the phoneme backend
//! - Unified error handling via `EncodeError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{BackendConfig, BackendKind, EncoderConfig, LoggingConfig, SymbolInventory};
pub use error::{EncodeError, EncodeResult};
pub use traits::{PhonemeBackend, TextNormalizer, VocabularySource};
pub use types::{
    EncodedMessage, Locale, MAX_TOKENS, SEGMENT_PUNCTUATION, Segment, SegmentKind, TokenId,
};
