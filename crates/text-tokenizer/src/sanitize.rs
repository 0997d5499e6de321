//! Fixed corrections applied to backend phoneme output.

use tts_core::Locale;

/// Symbols after which a trailing ` z` is glued to the previous word.
const Z_FOLLOWERS: &str = ";:,.!?¡¿—…\"«»“” ";

type Step = fn(&str) -> String;

/// Corrections for every locale, in application order.
const STEPS: &[(&str, Step)] = &[
    ("kokoro_us", kokoro_us),
    ("kokoro_gb", kokoro_gb),
    ("palatal", palatal),
    ("trill", trill),
    ("velar_fricative", velar_fricative),
    ("lateral_fricative", lateral_fricative),
    ("hundred_spacing", hundred_spacing),
    ("plural_z", plural_z),
];

/// Post-processing of the rejoined phoneme string.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhonemeSanitizer;

impl PhonemeSanitizer {
    pub fn new() -> Self {
        Self
    }

    /// Apply all corrections for `locale` and trim the result.
    pub fn sanitize(&self, phonemes: &str, locale: Locale) -> String {
        let mut text = phonemes.to_string();
        for (_, step) in self.steps(locale) {
            text = step(&text);
        }
        text.trim().to_string()
    }

    /// Names of the corrections that run for `locale`.
    pub fn step_names(&self, locale: Locale) -> Vec<&'static str> {
        self.steps(locale).map(|(name, _)| name).collect()
    }

    fn steps(&self, locale: Locale) -> impl Iterator<Item = (&'static str, Step)> {
        let american: Option<(&'static str, Step)> = match locale {
            Locale::AmericanEnglish => Some(("ninety_flap", ninety_flap as Step)),
            Locale::BritishEnglish => None,
        };
        STEPS.iter().copied().chain(american)
    }
}

/// Replace each `pattern` occurrence for which `accept(before, after)` holds.
fn replace_where(
    input: &str,
    pattern: &str,
    replacement: &str,
    accept: impl Fn(&str, &str) -> bool,
) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for (start, _) in input.match_indices(pattern) {
        let end = start + pattern.len();
        if accept(&input[..start], &input[end..]) {
            out.push_str(&input[last..start]);
            out.push_str(replacement);
            last = end;
        }
    }

    out.push_str(&input[last..]);
    out
}

fn kokoro_us(s: &str) -> String {
    s.replace("kəkˈoːɹoʊ", "kˈoʊkəɹoʊ")
}

fn kokoro_gb(s: &str) -> String {
    s.replace("kəkˈɔːɹəʊ", "kˈəʊkəɹəʊ")
}

fn palatal(s: &str) -> String {
    s.replace('ʲ', "j")
}

fn trill(s: &str) -> String {
    s.replace('r', "ɹ")
}

fn velar_fricative(s: &str) -> String {
    s.replace('x', "k")
}

fn lateral_fricative(s: &str) -> String {
    s.replace('ɬ', "l")
}

fn hundred_spacing(s: &str) -> String {
    replace_where(s, "hˈʌndɹɪd", " hˈʌndɹɪd", |before, _| {
        before
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_lowercase() || c == 'ɹ' || c == 'ː')
    })
}

fn plural_z(s: &str) -> String {
    replace_where(s, " z", "z", |_, after| {
        after.chars().next().is_none_or(|c| Z_FOLLOWERS.contains(c))
    })
}

fn ninety_flap(s: &str) -> String {
    replace_where(s, "nˈaɪnti", "nˈaɪndi", |_, after| !after.starts_with('ː'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us(s: &str) -> String {
        PhonemeSanitizer::new().sanitize(s, Locale::AmericanEnglish)
    }

    fn gb(s: &str) -> String {
        PhonemeSanitizer::new().sanitize(s, Locale::BritishEnglish)
    }

    #[test]
    fn test_brand_name() {
        assert_eq!(us("kəkˈoːɹoʊ"), "kˈoʊkəɹoʊ");
        assert_eq!(gb("kəkˈɔːɹəʊ"), "kˈəʊkəɹəʊ");
    }

    #[test]
    fn test_symbol_substitutions() {
        assert_eq!(us("rʲxɬ"), "ɹjkl");
    }

    #[test]
    fn test_hundred_spacing() {
        assert_eq!(us("tuːhˈʌndɹɪd"), "tuː hˈʌndɹɪd");
        assert_eq!(us("wʌnhˈʌndɹɪd"), "wʌn hˈʌndɹɪd");
        // Already separated
        assert_eq!(us("tuː hˈʌndɹɪd"), "tuː hˈʌndɹɪd");
        assert_eq!(us("hˈʌndɹɪd"), "hˈʌndɹɪd");
    }

    #[test]
    fn test_plural_z() {
        assert_eq!(us("kæts z"), "kætsz");
        assert_eq!(us("dɔɡ z, kæt"), "dɔɡz, kæt");
        assert_eq!(us("ðə zuː"), "ðə zuː");
    }

    #[test]
    fn test_ninety_locale_specific() {
        assert_eq!(us("nˈaɪnti"), "nˈaɪndi");
        assert_eq!(us("nˈaɪntiːn"), "nˈaɪntiːn");
        assert_eq!(gb("nˈaɪnti"), "nˈaɪnti");
    }

    #[test]
    fn test_step_order() {
        let sanitizer = PhonemeSanitizer::new();
        assert_eq!(sanitizer.step_names(Locale::BritishEnglish).len(), 8);
        assert_eq!(
            sanitizer.step_names(Locale::AmericanEnglish).last(),
            Some(&"ninety_flap")
        );
    }

    #[test]
    fn test_trims() {
        assert_eq!(us("  həlˈoʊ "), "həlˈoʊ");
    }
}
