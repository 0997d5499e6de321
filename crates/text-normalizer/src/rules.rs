//! Normalization rules.
//!
//! Each rule is one named rewrite step. `default_rules` returns them in the
//! order they must run; later rules rely on the output shape of earlier ones
//! (e.g. currency amounts only match once thousands separators are gone).

use regex::{Captures, Regex};
use tts_core::{EncodeError, EncodeResult};

use crate::numbers::{flip_money, point_num, split_num};

/// A text normalization rule.
pub trait Rule: Send + Sync + std::fmt::Debug {
    /// Get the rule name.
    fn name(&self) -> &str;

    /// Apply the rule to the input text.
    fn apply(&self, input: &str) -> EncodeResult<String>;
}

/// Create the default set of normalization rules, in application order.
pub fn default_rules() -> EncodeResult<Vec<Box<dyn Rule>>> {
    Ok(vec![
        Box::new(QuoteRule),
        Box::new(CjkPunctuationRule),
        Box::new(WhitespaceRule),
        Box::new(HonorificRule::new()?),
        Box::new(CasualSpeechRule::new()?),
        Box::new(NumberRule::new()?),
        Box::new(CurrencyRule::new()?),
        Box::new(DecimalRule::new()?),
        Box::new(RangeAndPluralRule::new()?),
        Box::new(AcronymRule::new()?),
        Box::new(TrimRule),
    ])
}

fn compile(pattern: &str) -> EncodeResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| EncodeError::normalization(format!("invalid pattern {pattern:?}: {e}")))
}

/// Replace every match of `re` for which `f` returns a replacement.
///
/// `f` receives the captures plus the text before and after the match, which
/// stands in for look-around assertions. Returning `None` keeps the match.
fn replace_matches<F>(re: &Regex, input: &str, mut f: F) -> EncodeResult<String>
where
    F: FnMut(&Captures<'_>, &str, &str) -> EncodeResult<Option<String>>,
{
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in re.captures_iter(input) {
        let Some(m) = caps.get(0) else { continue };
        if let Some(replacement) = f(&caps, &input[..m.start()], &input[m.end()..])? {
            out.push_str(&input[last..m.start()]);
            out.push_str(&replacement);
            last = m.end();
        }
    }

    out.push_str(&input[last..]);
    Ok(out)
}

/// Replace each `target` whose neighbours satisfy `prev` and `next`.
///
/// Neighbours are read from the unmodified input.
fn replace_char_between(
    input: &str,
    target: char,
    replacement: &str,
    prev: impl Fn(char) -> bool,
    next: impl Fn(Option<char>) -> bool,
) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());

    for (i, &c) in chars.iter().enumerate() {
        let hit = c == target
            && i > 0
            && prev(chars[i - 1])
            && next(chars.get(i + 1).copied());
        if hit {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }

    out
}

/// True when `rest` starts with a space followed by an ASCII capital.
fn followed_by_capitalized_word(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some(' ') && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Canonical quote forms; parentheses become guillemets.
#[derive(Debug)]
pub struct QuoteRule;

impl Rule for QuoteRule {
    fn name(&self) -> &str {
        "quotes"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        Ok(input
            .chars()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'',
                '«' | '»' | '\u{201C}' | '\u{201D}' => '"',
                '(' => '«',
                ')' => '»',
                other => other,
            })
            .collect())
    }
}

/// Full-width CJK punctuation to ASCII punctuation plus a space.
#[derive(Debug)]
pub struct CjkPunctuationRule;

impl Rule for CjkPunctuationRule {
    fn name(&self) -> &str {
        "cjk_punctuation"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        let mut result = String::with_capacity(input.len());

        for c in input.chars() {
            match c {
                '、' | '，' => result.push_str(", "),
                '。' => result.push_str(". "),
                '！' => result.push_str("! "),
                '：' => result.push_str(": "),
                '；' => result.push_str("; "),
                '？' => result.push_str("? "),
                _ => result.push(c),
            }
        }

        Ok(result)
    }
}

/// Whitespace cleanup.
///
/// Every whitespace character except newline becomes a space, space runs
/// collapse to one space, and space-only lines between two newlines are
/// emptied. Newlines themselves survive.
#[derive(Debug)]
pub struct WhitespaceRule;

impl Rule for WhitespaceRule {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        let mut collapsed = String::with_capacity(input.len());
        for c in input.chars() {
            let c = if c.is_whitespace() && c != '\n' { ' ' } else { c };
            if c == ' ' && collapsed.ends_with(' ') {
                continue;
            }
            collapsed.push(c);
        }

        let lines: Vec<&str> = collapsed.split('\n').collect();
        let last = lines.len().saturating_sub(1);
        let result = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let interior = i > 0 && i < last;
                if interior && !line.is_empty() && line.chars().all(|c| c == ' ') {
                    ""
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(result)
    }
}

/// Honorific expansion and `etc.` cleanup.
#[derive(Debug)]
pub struct HonorificRule {
    title: Regex,
    etc: Regex,
}

impl HonorificRule {
    pub fn new() -> EncodeResult<Self> {
        Ok(Self {
            title: compile(r"\b(DR|Dr|MRS|Mrs|MR|Mr|MS|Ms)\.")?,
            etc: compile(r"(?i)\betc\.")?,
        })
    }
}

impl Rule for HonorificRule {
    fn name(&self) -> &str {
        "honorifics"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        let text = replace_matches(&self.title, input, |caps, _, after| {
            if !followed_by_capitalized_word(after) {
                return Ok(None);
            }
            let expanded = match &caps[1] {
                "DR" | "Dr" => "Doctor",
                "MRS" | "Mrs" => "Missus",
                "MR" | "Mr" => "Mister",
                _ => "Miss",
            };
            Ok(Some(expanded.to_string()))
        })?;

        // "etc." keeps its period only when it ends a sentence
        replace_matches(&self.etc, &text, |caps, _, after| {
            if followed_by_capitalized_word(after) {
                Ok(None)
            } else {
                Ok(Some(caps[0].trim_end_matches('.').to_string()))
            }
        })
    }
}

/// `yeah`/`yea` spelled so the backend pronounces it.
#[derive(Debug)]
pub struct CasualSpeechRule {
    yeah: Regex,
}

impl CasualSpeechRule {
    pub fn new() -> EncodeResult<Self> {
        Ok(Self {
            yeah: compile(r"(?i)\b(y)eah?\b")?,
        })
    }
}

impl Rule for CasualSpeechRule {
    fn name(&self) -> &str {
        "casual_speech"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        Ok(self.yeah.replace_all(input, "${1}e'a").into_owned())
    }
}

/// Years and clock times, then thousands separators.
#[derive(Debug)]
pub struct NumberRule {
    literal: Regex,
}

impl NumberRule {
    pub fn new() -> EncodeResult<Self> {
        Ok(Self {
            literal: compile(
                r"[0-9]*\.[0-9]+|\b[0-9]{4}s?\b|\b(?:[1-9]|1[0-2]):[0-5][0-9]\b",
            )?,
        })
    }
}

impl Rule for NumberRule {
    fn name(&self) -> &str {
        "numbers"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        let text = replace_matches(&self.literal, input, |caps, before, after| {
            let literal = &caps[0];
            // A clock time must not be part of a longer colon chain
            let chained = before.ends_with(':') || after.starts_with(':');
            if literal.contains(':') && chained {
                return Ok(None);
            }
            split_num(literal).map(Some)
        })?;

        let digit = |c: char| c.is_ascii_digit();
        Ok(replace_char_between(&text, ',', "", digit, |n| {
            n.is_some_and(digit)
        }))
    }
}

/// `$`/`£` amounts to words.
#[derive(Debug)]
pub struct CurrencyRule {
    amount: Regex,
}

impl CurrencyRule {
    pub fn new() -> EncodeResult<Self> {
        Ok(Self {
            amount: compile(
                r"(?i)[$£][0-9]+(?:\.[0-9]+)?(?: hundred| thousand| (?:[bm]|tr)illion)*\b|[$£][0-9]+\.[0-9][0-9]?\b",
            )?,
        })
    }
}

impl Rule for CurrencyRule {
    fn name(&self) -> &str {
        "currency"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        replace_matches(&self.amount, input, |caps, _, _| {
            flip_money(&caps[0]).map(Some)
        })
    }
}

/// Remaining decimals read digit by digit.
#[derive(Debug)]
pub struct DecimalRule {
    decimal: Regex,
}

impl DecimalRule {
    pub fn new() -> EncodeResult<Self> {
        Ok(Self {
            decimal: compile(r"[0-9]*\.[0-9]+")?,
        })
    }
}

impl Rule for DecimalRule {
    fn name(&self) -> &str {
        "decimals"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        Ok(self
            .decimal
            .replace_all(input, |caps: &Captures<'_>| point_num(&caps[0]))
            .into_owned())
    }
}

/// Numeric ranges, plural `S` after digits, and plurals of initialisms.
///
/// `1-5` -> `1 to 5`, `1990S` -> `1990 S`, `TVs` -> `TV'S`, `MAX's` stays.
#[derive(Debug)]
pub struct RangeAndPluralRule {
    plural: Regex,
    x_plural: Regex,
}

impl RangeAndPluralRule {
    pub fn new() -> EncodeResult<Self> {
        Ok(Self {
            plural: compile(r"'?s\b")?,
            x_plural: compile(r"S\b")?,
        })
    }
}

fn is_upper_consonant(c: char) -> bool {
    c.is_ascii_uppercase() && !matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

impl Rule for RangeAndPluralRule {
    fn name(&self) -> &str {
        "ranges_and_plurals"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        let digit = |c: char| c.is_ascii_digit();

        let text = replace_char_between(input, '-', " to ", digit, |n| n.is_some_and(digit));
        let text = replace_char_between(&text, 'S', " S", digit, |_| true);

        let text = replace_matches(&self.plural, &text, |_, before, _| {
            let after_consonant = before.chars().next_back().is_some_and(is_upper_consonant);
            Ok(after_consonant.then(|| "'S".to_string()))
        })?;

        replace_matches(&self.x_plural, &text, |_, before, _| {
            Ok(before.ends_with("X'").then(|| "s".to_string()))
        })
    }
}

/// Dotted initialisms become hyphenated.
#[derive(Debug)]
pub struct AcronymRule {
    dotted: Regex,
}

impl AcronymRule {
    pub fn new() -> EncodeResult<Self> {
        Ok(Self {
            dotted: compile(r"(?:[A-Za-z]\.){2,} [a-z]")?,
        })
    }
}

impl Rule for AcronymRule {
    fn name(&self) -> &str {
        "acronyms"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        let text = self
            .dotted
            .replace_all(input, |caps: &Captures<'_>| caps[0].replace('.', "-"))
            .into_owned();

        let upper = |c: char| c.is_ascii_uppercase();
        Ok(replace_char_between(&text, '.', "-", upper, |n| {
            n.is_some_and(upper)
        }))
    }
}

/// Strip leading and trailing whitespace.
#[derive(Debug)]
pub struct TrimRule;

impl Rule for TrimRule {
    fn name(&self) -> &str {
        "trim"
    }

    fn apply(&self, input: &str) -> EncodeResult<String> {
        Ok(input.trim().to_string())
    }
}
