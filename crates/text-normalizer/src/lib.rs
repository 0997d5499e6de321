//! # text-normalizer
//!
//! Text normalization pipeline for the Kokoro text front-end.
//!
//! This crate rewrites raw English text into a form a phoneme backend reads
//! aloud correctly, handling:
//! - Typographic quotes and CJK punctuation
//! - Honorifics and `etc.`
//! - Years and clock times
//! - Currency amounts and decimals
//! - Numeric ranges, plurals, and dotted initialisms
//!
//! # Example
//!
//! ```ignore
//! use text_normalizer::Normalizer;
//! use tts_core::TextNormalizer;
//!
//! let normalizer = Normalizer::new()?;
//! let result = normalizer.normalize("Pay $1.50 now")?;
//! assert_eq!(result, "Pay 1 dollar and 50 cents now");
//! ```

pub mod numbers;
mod rules;

use tracing::{instrument, trace};
use tts_core::{EncodeResult, TextNormalizer};

pub use rules::{
    AcronymRule, CasualSpeechRule, CjkPunctuationRule, CurrencyRule, DecimalRule, HonorificRule,
    NumberRule, QuoteRule, RangeAndPluralRule, Rule, TrimRule, WhitespaceRule, default_rules,
};

/// Text normalizer with configurable rule pipeline.
#[derive(Debug)]
pub struct Normalizer {
    rules: Vec<Box<dyn Rule>>,
}

impl Normalizer {
    /// Create a new normalizer with default rules.
    pub fn new() -> EncodeResult<Self> {
        Ok(Self {
            rules: rules::default_rules()?,
        })
    }

    /// Create a normalizer with custom rules.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Add a rule to the pipeline.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Names of the rules, in application order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run the pipeline and keep the text produced by each rule.
    pub fn trace(&self, input: &str) -> EncodeResult<Vec<(String, String)>> {
        let mut steps = Vec::with_capacity(self.rules.len());
        let mut text = input.to_string();

        for rule in &self.rules {
            text = rule.apply(&text)?;
            steps.push((rule.name().to_string(), text.clone()));
        }

        Ok(steps)
    }
}

impl TextNormalizer for Normalizer {
    #[instrument(skip(self), fields(input_len = input.len()))]
    fn normalize(&self, input: &str) -> EncodeResult<String> {
        let mut text = input.to_string();

        // Apply all rules in sequence
        for rule in &self.rules {
            text = rule.apply(&text)?;
            trace!(rule = rule.name(), output = %text, "rule applied");
        }

        Ok(text)
    }
}
