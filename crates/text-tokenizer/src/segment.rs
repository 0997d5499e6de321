//! Splitting normalized text into punctuation and phonemizable runs.

use regex::Regex;
use tts_core::{EncodeError, EncodeResult, SEGMENT_PUNCTUATION, Segment, SegmentKind};

/// Splits text on runs of punctuation.
#[derive(Debug, Clone)]
pub struct Segmenter {
    pattern: Regex,
}

impl Segmenter {
    /// Create a segmenter for the default punctuation class.
    pub fn new() -> EncodeResult<Self> {
        Self::with_punctuation(SEGMENT_PUNCTUATION)
    }

    /// Create a segmenter for a custom punctuation class.
    pub fn with_punctuation(punctuation: &str) -> EncodeResult<Self> {
        if punctuation.is_empty() {
            return Err(EncodeError::config("segment punctuation class is empty"));
        }

        let class: String = punctuation
            .chars()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        let pattern = Regex::new(&format!(r"(?:\s*[{class}]+\s*)+"))
            .map_err(|e| EncodeError::config(format!("invalid punctuation class: {e}")))?;

        Ok(Self { pattern })
    }

    /// Split `text` into ordered, trimmed, non-empty segments.
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let mut builder = SegmentBuilder::default();
        let mut prev = 0;

        for m in self.pattern.find_iter(text) {
            if prev < m.start() {
                builder.push(&text[prev..m.start()], SegmentKind::Phonemizable);
            }
            builder.push(m.as_str(), SegmentKind::Literal);
            prev = m.end();
        }
        if prev < text.len() {
            builder.push(&text[prev..], SegmentKind::Phonemizable);
        }

        builder.segments
    }
}

#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
    pending_space: bool,
}

impl SegmentBuilder {
    fn push(&mut self, raw: &str, kind: SegmentKind) {
        let text = raw.trim();
        if text.is_empty() {
            self.pending_space |= !raw.is_empty();
            return;
        }

        let space_before = !self.segments.is_empty()
            && (self.pending_space || raw.starts_with(char::is_whitespace));
        self.segments.push(Segment {
            kind,
            text: text.to_string(),
            space_before,
        });
        self.pending_space = raw.ends_with(char::is_whitespace);
    }
}

/// Rebuild text from segments, with one space wherever whitespace separated
/// them in the source.
pub fn join(segments: &[Segment]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.text.len() + 1).sum());
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 && segment.space_before {
            out.push(' ');
        }
        out.push_str(&segment.text);
    }
    out
}
