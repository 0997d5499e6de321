//! Trait definitions for encode pipeline components.

use async_trait::async_trait;

use crate::error::EncodeResult;

/// Text normalization trait.
///
/// Implementations rewrite raw input text into a form the phoneme backend
/// reads aloud correctly (numbers, currency, abbreviations, etc.).
pub trait TextNormalizer: Send + Sync {
    /// Normalize the input text.
    ///
    /// Normalization is pure; an error means the rewrite engine itself failed.
    fn normalize(&self, input: &str) -> EncodeResult<String>;
}

/// Phoneme transcription capability.
///
/// Implementations must be deterministic for identical `(text, language_code)`
/// pairs and must report failures instead of returning partial output. Text
/// with nothing pronounceable may transcribe to an empty string.
#[async_trait]
pub trait PhonemeBackend: Send + Sync {
    /// Transcribe one phonemizable run into phonetic symbols.
    ///
    /// # Arguments
    /// * `text` - Trimmed, non-empty text without segment punctuation
    /// * `language_code` - Backend language code (e.g. `en-us`)
    async fn transcribe(&self, text: &str, language_code: &str) -> EncodeResult<String>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

/// Supplier of the ordered symbol inventory a vocabulary is built from.
pub trait VocabularySource {
    /// Symbols in id order: pad, punctuation, Latin letters, phonetic letters.
    fn symbols(&self) -> Vec<char>;
}
