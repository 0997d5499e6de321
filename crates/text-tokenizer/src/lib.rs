//! # text-tokenizer
//!
//! Phoneme tokenization for the Kokoro text front-end.
//!
//! This crate turns normalized text into model-ready token ids:
//! - `Segmenter` splits text into punctuation and phonemizable runs
//! - `PhonemeSanitizer` corrects backend phoneme output
//! - `Vocabulary` maps phoneme symbols to ids
//! - `encode_phonemes` filters, maps, and validates the sequence bounds
//!
//! # Example
//!
//! ```ignore
//! use text_tokenizer::{Vocabulary, encode_phonemes};
//!
//! let vocab = Vocabulary::kokoro()?;
//! let tokens = encode_phonemes(&vocab, "həlˈoʊ", 510)?;
//! println!("Token IDs: {:?}", tokens);
//! ```

mod sanitize;
mod segment;
mod vocab;

use tracing::instrument;
use tts_core::{EncodeError, EncodeResult, TokenId};

pub use sanitize::PhonemeSanitizer;
pub use segment::{Segmenter, join};
pub use tts_core::SEGMENT_PUNCTUATION;
pub use vocab::Vocabulary;

/// Map phoneme text to ids and check the sequence bounds.
///
/// Characters outside the vocabulary are dropped. Fails with
/// `EmptySequence` when nothing is left and `SequenceTooLong` when more than
/// `max_tokens` ids remain.
#[instrument(skip(vocab, phonemes), fields(phonemes_len = phonemes.len()))]
pub fn encode_phonemes(
    vocab: &Vocabulary,
    phonemes: &str,
    max_tokens: usize,
) -> EncodeResult<Vec<TokenId>> {
    let tokens = vocab.tokenize(phonemes);

    if tokens.is_empty() {
        return Err(EncodeError::EmptySequence);
    }
    if tokens.len() > max_tokens {
        return Err(EncodeError::SequenceTooLong {
            length: tokens.len(),
            max: max_tokens,
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_phonemes() {
        let vocab = Vocabulary::kokoro().unwrap();
        let tokens = encode_phonemes(&vocab, "ab", 510).unwrap();
        assert_eq!(tokens, vec![43, 44]);
    }

    #[test]
    fn test_encode_phonemes_empty() {
        let vocab = Vocabulary::kokoro().unwrap();
        assert!(matches!(
            encode_phonemes(&vocab, "", 510),
            Err(EncodeError::EmptySequence)
        ));
        assert!(matches!(
            encode_phonemes(&vocab, "你好", 510),
            Err(EncodeError::EmptySequence)
        ));
    }

    #[test]
    fn test_encode_phonemes_bounds() {
        let vocab = Vocabulary::kokoro().unwrap();

        let at_limit = "a".repeat(510);
        assert_eq!(encode_phonemes(&vocab, &at_limit, 510).unwrap().len(), 510);

        let over = "a".repeat(511);
        assert!(matches!(
            encode_phonemes(&vocab, &over, 510),
            Err(EncodeError::SequenceTooLong { length: 511, max: 510 })
        ));
    }

    #[test]
    fn test_filtered_chars_do_not_count() {
        let vocab = Vocabulary::kokoro().unwrap();
        // 510 mapped chars plus unmapped noise stays within bounds
        let text = format!("{}你好#", "a".repeat(510));
        assert_eq!(encode_phonemes(&vocab, &text, 510).unwrap().len(), 510);
    }
}
