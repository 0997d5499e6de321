//! Encoder metrics.
//!
//! Recorded through the `metrics` facade; the embedding application decides
//! which recorder (if any) to install.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tts_core::EncodeError;

/// Metrics recorder for encode operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct EncoderMetrics;

impl EncoderMetrics {
    /// Create the recorder handle and register metric descriptions.
    pub fn new() -> Self {
        Self::register_metrics();
        Self
    }

    fn register_metrics() {
        describe_counter!(
            "kokoro_encode_requests_total",
            "Total number of encode calls received"
        );
        describe_counter!(
            "kokoro_encode_completed_total",
            "Total number of encode calls that produced tokens"
        );
        describe_counter!(
            "kokoro_encode_failed_total",
            "Total number of encode calls that failed, by reason"
        );
        describe_counter!(
            "kokoro_dropped_chars_total",
            "Phoneme characters dropped because they are not in the vocabulary"
        );

        describe_histogram!("kokoro_encode_tokens", "Token count of successful encodes");
        describe_histogram!(
            "kokoro_encode_latency_ms",
            "Total encode latency in milliseconds"
        );
        describe_histogram!(
            "kokoro_backend_segments",
            "Phonemizable segments sent to the backend per encode"
        );
    }

    /// Record a new encode call.
    pub fn request_received(&self) {
        counter!("kokoro_encode_requests_total").increment(1);
    }

    /// Record a successful encode.
    pub fn request_completed(&self, tokens: usize, latency_ms: f64) {
        counter!("kokoro_encode_completed_total").increment(1);
        histogram!("kokoro_encode_tokens").record(tokens as f64);
        histogram!("kokoro_encode_latency_ms").record(latency_ms);
    }

    /// Record a failed encode.
    pub fn request_failed(&self, error: &EncodeError) {
        counter!("kokoro_encode_failed_total", "reason" => error.kind()).increment(1);
    }

    /// Record characters removed by vocabulary filtering.
    pub fn chars_dropped(&self, count: usize) {
        if count > 0 {
            counter!("kokoro_dropped_chars_total").increment(count as u64);
        }
    }

    /// Record how many segments went to the backend.
    pub fn backend_segments(&self, count: usize) {
        histogram!("kokoro_backend_segments").record(count as f64);
    }
}
