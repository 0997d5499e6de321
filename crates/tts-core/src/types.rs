//! Core data types for the encode pipeline.

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// Token id as understood by the acoustic model.
pub type TokenId = u32;

/// Hard upper bound on the number of tokens `encode` may return.
///
/// The acoustic model accepts 512 positions; two are reserved for the pad
/// markers the consumer wraps the sequence with.
pub const MAX_TOKENS: usize = 510;

/// Punctuation that is passed through verbatim instead of being phonemized.
pub const SEGMENT_PUNCTUATION: &str = ";:,.!?¡¿—…\"«»“”(){}[]";

/// Supported locales.
///
/// The identifier is opaque to the pipeline: it selects the backend language
/// code and whether the American-English sanitizer rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// American English (`a`).
    #[default]
    #[serde(rename = "a")]
    AmericanEnglish,
    /// British English (`b`).
    #[serde(rename = "b")]
    BritishEnglish,
}

impl Locale {
    /// All known locales.
    pub const ALL: [Locale; 2] = [Locale::AmericanEnglish, Locale::BritishEnglish];

    /// Short identifier (`a`, `b`).
    pub fn id(self) -> &'static str {
        match self {
            Locale::AmericanEnglish => "a",
            Locale::BritishEnglish => "b",
        }
    }

    /// Language code passed to the phoneme backend.
    pub fn backend_code(self) -> &'static str {
        match self {
            Locale::AmericanEnglish => "en-us",
            Locale::BritishEnglish => "en-gb",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Locale {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "en-us" => Ok(Locale::AmericanEnglish),
            "b" | "en-gb" => Ok(Locale::BritishEnglish),
            _ => Err(EncodeError::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Classification of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Punctuation run, passed through verbatim.
    Literal,
    /// Text sent to the phoneme backend.
    Phonemizable,
}

/// A trimmed, non-empty run of normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment classification.
    pub kind: SegmentKind,
    /// Trimmed text content.
    pub text: String,
    /// Whether whitespace separated this segment from the previous one.
    pub space_before: bool,
}

impl Segment {
    /// Create a literal (punctuation) segment.
    pub fn literal(text: impl Into<String>, space_before: bool) -> Self {
        Self {
            kind: SegmentKind::Literal,
            text: text.into(),
            space_before,
        }
    }

    /// Create a phonemizable segment.
    pub fn phonemizable(text: impl Into<String>, space_before: bool) -> Self {
        Self {
            kind: SegmentKind::Phonemizable,
            text: text.into(),
            space_before,
        }
    }

    /// Check if the segment is sent to the backend.
    pub fn is_phonemizable(&self) -> bool {
        self.kind == SegmentKind::Phonemizable
    }

    /// Same segment position and kind with replaced text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            kind: self.kind,
            text: text.into(),
            space_before: self.space_before,
        }
    }
}

/// Result of a successful `encode` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedMessage {
    /// Vocabulary ids, `1..=MAX_TOKENS` long.
    pub tokens: Vec<TokenId>,
    /// Sanitized phoneme text the tokens were derived from.
    pub phonemes: String,
}

impl EncodedMessage {
    /// Create a new encoded message.
    pub fn new(tokens: Vec<TokenId>, phonemes: impl Into<String>) -> Self {
        Self {
            tokens,
            phonemes: phonemes.into(),
        }
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens wrapped with the pad id on both ends, as the model consumes them.
    pub fn padded(&self, pad_id: TokenId) -> Vec<TokenId> {
        let mut padded = Vec::with_capacity(self.tokens.len() + 2);
        padded.push(pad_id);
        padded.extend_from_slice(&self.tokens);
        padded.push(pad_id);
        padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::AmericanEnglish.id(), "a");
        assert_eq!(Locale::AmericanEnglish.backend_code(), "en-us");
        assert_eq!(Locale::BritishEnglish.id(), "b");
        assert_eq!(Locale::BritishEnglish.backend_code(), "en-gb");
        assert_eq!(Locale::BritishEnglish.to_string(), "b");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("a".parse::<Locale>().unwrap(), Locale::AmericanEnglish);
        assert_eq!("EN-US".parse::<Locale>().unwrap(), Locale::AmericanEnglish);
        assert_eq!("b".parse::<Locale>().unwrap(), Locale::BritishEnglish);
        assert_eq!("en-gb".parse::<Locale>().unwrap(), Locale::BritishEnglish);

        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedLocale(ref s) if s == "fr"));
    }

    #[test]
    fn test_locale_serde() {
        assert_eq!(
            serde_json::to_string(&Locale::BritishEnglish).unwrap(),
            "\"b\""
        );
        let locale: Locale = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(locale, Locale::AmericanEnglish);
    }

    #[test]
    fn test_segment_constructors() {
        let seg = Segment::literal(",", false);
        assert_eq!(seg.kind, SegmentKind::Literal);
        assert!(!seg.is_phonemizable());

        let seg = Segment::phonemizable("hello", true).with_text("həlˈoʊ");
        assert!(seg.is_phonemizable());
        assert_eq!(seg.text, "həlˈoʊ");
        assert!(seg.space_before);
    }

    #[test]
    fn test_encoded_message_padding() {
        let msg = EncodedMessage::new(vec![5, 6, 7], "abc");
        assert_eq!(msg.len(), 3);
        assert!(!msg.is_empty());
        assert_eq!(msg.padded(0), vec![0, 5, 6, 7, 0]);
    }
}
