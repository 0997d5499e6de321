//! Encode pipeline - raw text to model-ready token ids.
//!
//! Combines all components: normalizer → segmenter → phoneme backend →
//! sanitizer → vocabulary.

use std::sync::Arc;
use std::time::Instant;

use futures::future::try_join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use text_normalizer::Normalizer;
use text_tokenizer::{PhonemeSanitizer, Segmenter, Vocabulary, encode_phonemes, join};
use tts_core::{
    EncodeError, EncodeResult, EncodedMessage, EncoderConfig, Locale, MAX_TOKENS, PhonemeBackend,
    Segment, TextNormalizer,
};

use crate::backend::build_backend;
use crate::metrics::EncoderMetrics;

/// Text to token encoder.
///
/// Holds no per-call state; one instance can serve concurrent `encode` calls.
pub struct Encoder {
    normalizer: Box<dyn TextNormalizer>,
    segmenter: Segmenter,
    sanitizer: PhonemeSanitizer,
    vocab: Arc<Vocabulary>,
    backend: Arc<dyn PhonemeBackend>,
    max_tokens: usize,
    metrics: EncoderMetrics,
}

impl std::fmt::Debug for Encoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encoder")
            .field("backend", &self.backend.name())
            .field("vocab_size", &self.vocab.len())
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Encoder {
    /// Create an encoder with the default normalizer and segmenter.
    pub fn new(vocab: Arc<Vocabulary>, backend: Arc<dyn PhonemeBackend>) -> EncodeResult<Self> {
        Ok(Self {
            normalizer: Box::new(Normalizer::new()?),
            segmenter: Segmenter::new()?,
            sanitizer: PhonemeSanitizer::new(),
            vocab,
            backend,
            max_tokens: MAX_TOKENS,
            metrics: EncoderMetrics::new(),
        })
    }

    /// Create an encoder from configuration.
    #[instrument(skip_all)]
    pub fn from_config(config: &EncoderConfig) -> EncodeResult<Self> {
        config.validate()?;

        let vocab = Arc::new(Vocabulary::build(&config.inventory)?);
        let backend = build_backend(&config.backend);
        debug!(backend = backend.name(), vocab_size = vocab.len(), "encoder configured");

        let segmenter = Segmenter::with_punctuation(&config.segment_punctuation)?;
        Self::new(vocab, backend)?
            .with_segmenter(segmenter)
            .with_max_tokens(config.max_tokens)
    }

    /// Tighten the token bound (must be between 1 and 510).
    pub fn with_max_tokens(mut self, max_tokens: usize) -> EncodeResult<Self> {
        if !(1..=MAX_TOKENS).contains(&max_tokens) {
            return Err(EncodeError::config(format!(
                "max_tokens must be between 1 and {MAX_TOKENS}, got {max_tokens}"
            )));
        }
        self.max_tokens = max_tokens;
        Ok(self)
    }

    /// Replace the text normalizer.
    pub fn with_normalizer(mut self, normalizer: impl TextNormalizer + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    /// Replace the segmenter.
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Get the shared vocabulary.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }

    /// Name of the phoneme backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Token bound enforced by `encode`.
    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    /// Normalize text.
    pub fn normalize(&self, text: &str) -> EncodeResult<String> {
        self.normalizer.normalize(text)
    }

    /// Optionally normalize, then split into segments.
    pub fn segment(&self, text: &str, normalize: bool) -> EncodeResult<Vec<Segment>> {
        if normalize {
            let normalized = self.normalize(text)?;
            Ok(self.segmenter.segment(&normalized))
        } else {
            Ok(self.segmenter.segment(text))
        }
    }

    /// Run the pipeline up to and including phoneme sanitization.
    #[instrument(skip(self, text), fields(text_len = text.len(), locale = %locale))]
    pub async fn phonemize(&self, text: &str, locale: Locale, normalize: bool) -> EncodeResult<String> {
        let segments = self.segment(text, normalize)?;
        let language_code = locale.backend_code();

        let phonemizable = segments.iter().filter(|s| s.is_phonemizable()).count();
        self.metrics.backend_segments(phonemizable);
        debug!(segments = segments.len(), phonemizable, "text segmented");

        // Results come back in segment order regardless of completion order
        let transcribed = try_join_all(
            segments
                .iter()
                .map(|segment| self.transcribe_segment(segment, language_code)),
        )
        .await?;

        let phonemes = self.sanitizer.sanitize(&join(&transcribed), locale);
        debug!(phonemes_len = phonemes.len(), "phonemes sanitized");
        Ok(phonemes)
    }

    async fn transcribe_segment(&self, segment: &Segment, language_code: &str) -> EncodeResult<Segment> {
        if !segment.is_phonemizable() {
            return Ok(segment.clone());
        }

        let phonemes = self
            .backend
            .transcribe(&segment.text, language_code)
            .await
            .map_err(|e| match e {
                EncodeError::BackendUnavailable(_) | EncodeError::Cancelled => e,
                other => EncodeError::backend(format!("{}: {other}", self.backend.name())),
            })?;

        Ok(segment.with_text(phonemes))
    }

    /// Encode text into token ids.
    ///
    /// Fails with `EmptySequence` if no vocabulary symbols remain and with
    /// `SequenceTooLong` if more than `max_tokens` remain. Any backend failure
    /// fails the whole call.
    #[instrument(skip(self, text), fields(text_len = text.len(), locale = %locale))]
    pub async fn encode(
        &self,
        text: &str,
        locale: Locale,
        normalize: bool,
    ) -> EncodeResult<EncodedMessage> {
        let start = Instant::now();
        self.metrics.request_received();

        let result = self.run(text, locale, normalize).await;
        match &result {
            Ok(message) => {
                let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
                self.metrics.request_completed(message.len(), latency_ms);
                debug!(tokens = message.len(), latency_ms, "encode completed");
            }
            Err(e) => {
                self.metrics.request_failed(e);
                debug!(error = %e, "encode failed");
            }
        }

        result
    }

    async fn run(&self, text: &str, locale: Locale, normalize: bool) -> EncodeResult<EncodedMessage> {
        let phonemes = self.phonemize(text, locale, normalize).await?;
        let tokens = encode_phonemes(&self.vocab, &phonemes, self.max_tokens)?;

        self.metrics
            .chars_dropped(phonemes.chars().count().saturating_sub(tokens.len()));
        Ok(EncodedMessage::new(tokens, phonemes))
    }

    /// Like `encode`, but gives up with `Cancelled` once `cancel` fires.
    ///
    /// Cancelling drops every outstanding backend call.
    pub async fn encode_cancellable(
        &self,
        text: &str,
        locale: Locale,
        normalize: bool,
        cancel: &CancellationToken,
    ) -> EncodeResult<EncodedMessage> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                self.metrics.request_failed(&EncodeError::Cancelled);
                debug!("encode cancelled");
                Err(EncodeError::Cancelled)
            }
            result = self.encode(text, locale, normalize) => result,
        }
    }
}
