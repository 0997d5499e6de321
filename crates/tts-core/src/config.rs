//! Configuration structures for the encode pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EncodeError, EncodeResult};
use crate::traits::VocabularySource;
use crate::types::{Locale, MAX_TOKENS, SEGMENT_PUNCTUATION};

/// Top-level encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Locale used when the caller does not pick one.
    #[serde(default)]
    pub default_locale: Locale,

    /// Whether text normalization runs by default.
    #[serde(default = "default_normalize")]
    pub normalize: bool,

    /// Upper bound on encoded tokens (at most 510).
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Symbol inventory the vocabulary is built from.
    ///
    /// Only the vocabulary reads it; segmentation uses `segment_punctuation`.
    #[serde(default)]
    pub inventory: SymbolInventory,

    /// Punctuation passed through verbatim instead of being phonemized.
    #[serde(default = "default_segment_punctuation")]
    pub segment_punctuation: String,

    /// Phoneme backend settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_normalize() -> bool {
    true
}

fn default_max_tokens() -> usize {
    MAX_TOKENS
}

fn default_segment_punctuation() -> String {
    SEGMENT_PUNCTUATION.to_string()
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            normalize: default_normalize(),
            max_tokens: default_max_tokens(),
            inventory: SymbolInventory::default(),
            segment_punctuation: default_segment_punctuation(),
            backend: BackendConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EncoderConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> EncodeResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> EncodeResult<()> {
        if !(1..=MAX_TOKENS).contains(&self.max_tokens) {
            return Err(EncodeError::config(format!(
                "max_tokens must be between 1 and {MAX_TOKENS}, got {}",
                self.max_tokens
            )));
        }

        if self.inventory.punctuation.is_empty() {
            return Err(EncodeError::config("inventory punctuation class is empty"));
        }

        if self.segment_punctuation.is_empty() {
            return Err(EncodeError::config("segment punctuation class is empty"));
        }

        if self.backend.kind == BackendKind::Espeak && self.backend.program.trim().is_empty() {
            return Err(EncodeError::config("backend program cannot be empty"));
        }

        Ok(())
    }
}

/// Ordered symbol inventory.
///
/// Symbols are concatenated pad, punctuation, letters, phonetic letters; a
/// symbol's id is its position in that concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInventory {
    /// Pad symbol (id 0).
    #[serde(default = "default_pad")]
    pub pad: char,
    /// Punctuation class, including the space character.
    #[serde(default = "default_punctuation")]
    pub punctuation: String,
    /// Latin letters.
    #[serde(default = "default_letters")]
    pub letters: String,
    /// Extended phonetic alphabet.
    #[serde(default = "default_ipa_letters")]
    pub ipa_letters: String,
}

fn default_pad() -> char {
    '$'
}

fn default_punctuation() -> String {
    ";:,.!?¡¿—…\"«»“” ".to_string()
}

fn default_letters() -> String {
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz".to_string()
}

fn default_ipa_letters() -> String {
    "ɑɐɒæɓʙβɔɕçɗɖðʤəɘɚɛɜɝɞɟʄɡɠɢʛɦɧħɥʜɨɪʝɭɬɫɮʟɱɯɰŋɳɲɴøɵɸθœɶʘɹɺɾɻʀʁɽʂʃʈʧʉʊʋⱱʌɣɤʍχʎʏʑʐʒʔʡʕʢǀǁǂǃˈˌːˑʼʴʰʱʲʷˠˤ˞↓↑→↗↘'̩'ᵻ"
        .to_string()
}

impl Default for SymbolInventory {
    fn default() -> Self {
        Self {
            pad: default_pad(),
            punctuation: default_punctuation(),
            letters: default_letters(),
            ipa_letters: default_ipa_letters(),
        }
    }
}

impl VocabularySource for SymbolInventory {
    fn symbols(&self) -> Vec<char> {
        std::iter::once(self.pad)
            .chain(self.punctuation.chars())
            .chain(self.letters.chars())
            .chain(self.ipa_letters.chars())
            .collect()
    }
}

/// Phoneme backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// The `espeak-ng` executable.
    #[default]
    Espeak,
    /// Deterministic in-process stand-in.
    Mock,
}

/// Phoneme backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend kind.
    #[serde(default)]
    pub kind: BackendKind,
    /// Executable name or path for the espeak backend.
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_program() -> String {
    "espeak-ng".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            program: default_program(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json or text).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_encoder_config_default() {
        let config = EncoderConfig::default();
        assert_eq!(config.default_locale, Locale::AmericanEnglish);
        assert!(config.normalize);
        assert_eq!(config.max_tokens, 510);
        assert_eq!(config.backend.kind, BackendKind::Espeak);
        assert_eq!(config.backend.program, "espeak-ng");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_inventory_order() {
        let symbols = SymbolInventory::default().symbols();
        assert_eq!(symbols[0], '$');
        assert_eq!(symbols[1], ';');
        assert_eq!(symbols[16], ' ');
        assert_eq!(symbols[17], 'A');
        assert_eq!(symbols[43], 'a');
        assert_eq!(symbols[69], 'ɑ');
        assert_eq!(symbols.len(), 178);
        assert_eq!(symbols.last(), Some(&'ᵻ'));
    }

    #[test]
    fn test_validate_max_tokens() {
        let config = EncoderConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EncodeError::Config(_))));

        let config = EncoderConfig {
            max_tokens: 511,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EncoderConfig {
            max_tokens: 64,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_program() {
        let config = EncoderConfig {
            backend: BackendConfig {
                kind: BackendKind::Espeak,
                program: "  ".to_string(),
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());

        // Mock backend never runs a program
        let config = EncoderConfig {
            backend: BackendConfig {
                kind: BackendKind::Mock,
                program: String::new(),
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_deserialization_with_defaults() {
        let config: EncoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_tokens, 510);
        assert_eq!(config.inventory, SymbolInventory::default());

        let json = r#"{
            "default_locale": "b",
            "normalize": false,
            "backend": { "kind": "mock" }
        }"#;
        let config: EncoderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_locale, Locale::BritishEnglish);
        assert!(!config.normalize);
        assert_eq!(config.backend.kind, BackendKind::Mock);
        assert_eq!(config.backend.program, "espeak-ng");
    }

    #[test]
    fn test_segment_punctuation() {
        let config = EncoderConfig::default();
        assert_eq!(config.segment_punctuation, SEGMENT_PUNCTUATION);

        let config: EncoderConfig =
            serde_json::from_str(r#"{ "segment_punctuation": "|" }"#).unwrap();
        assert_eq!(config.segment_punctuation, "|");
        assert_eq!(config.inventory, SymbolInventory::default());

        let config = EncoderConfig {
            segment_punctuation: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EncodeError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_tokens": 128, "logging": {{ "format": "json" }} }}"#).unwrap();

        let config = EncoderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_tokens, 128);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_tokens": 4096 }}"#).unwrap();
        assert!(matches!(
            EncoderConfig::from_file(file.path()),
            Err(EncodeError::Config(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            EncoderConfig::from_file(file.path()),
            Err(EncodeError::Serialization(_))
        ));
    }
}
