//! Spoken forms for years, clock times, money amounts, and decimals.

use tts_core::{EncodeError, EncodeResult};

/// Rewrite a year, clock time, or decimal literal into speakable chunks.
///
/// - Decimals (anything with `.`) are returned unchanged; `point_num` handles
///   them later.
/// - `H:MM` becomes `H o'clock`, `H oh M`, or `H M`.
/// - Four-digit years (optionally plural) are split into two-digit halves,
///   e.g. `1990s` -> `19 90s`, `1800` -> `18 hundred`, `1905` -> `19 oh 5`.
pub fn split_num(literal: &str) -> EncodeResult<String> {
    if literal.contains('.') {
        return Ok(literal.to_string());
    }

    if let Some((hours, minutes)) = literal.split_once(':') {
        let hours = parse_int(hours)?;
        let minutes = parse_int(minutes)?;
        return Ok(match minutes {
            0 => format!("{hours} o'clock"),
            1..=9 => format!("{hours} oh {minutes}"),
            _ => format!("{hours} {minutes}"),
        });
    }

    let digits = literal.get(..4).ok_or_else(|| {
        EncodeError::normalization(format!("year literal too short: {literal:?}"))
    })?;
    let year = parse_int(digits)?;
    if year < 1100 || year % 1000 < 10 {
        return Ok(literal.to_string());
    }

    let left = &digits[..2];
    let right = parse_int(&digits[2..])?;
    let suffix = if literal.ends_with('s') { "s" } else { "" };

    if (100..=999).contains(&(year % 1000)) {
        if right == 0 {
            return Ok(format!("{left} hundred{suffix}"));
        } else if right < 10 {
            return Ok(format!("{left} oh {right}{suffix}"));
        }
    }

    Ok(format!("{left} {right}{suffix}"))
}

/// Rewrite a `$`/`£` amount into words.
///
/// `$1.50` -> `1 dollar and 50 cents`, `£2.05` -> `2 pounds and 5 pence`,
/// `$5 million` -> `5 million dollars`.
pub fn flip_money(literal: &str) -> EncodeResult<String> {
    let mut chars = literal.chars();
    let symbol = chars
        .next()
        .ok_or_else(|| EncodeError::normalization("empty currency literal"))?;
    let amount = chars.as_str();

    let (bill, coin, coins) = match symbol {
        '$' => ("dollar", "cent", "cents"),
        '£' => ("pound", "penny", "pence"),
        other => {
            return Err(EncodeError::normalization(format!(
                "unknown currency symbol {other:?}"
            )));
        }
    };

    let numeric = !amount.is_empty() && amount.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !numeric {
        // Magnitude words ("5 million") keep the amount verbatim.
        return Ok(format!("{amount} {bill}s"));
    }

    let Some((whole, fraction)) = amount.split_once('.') else {
        let plural = if amount == "1" { "" } else { "s" };
        return Ok(format!("{amount} {bill}{plural}"));
    };

    let padded = format!("{fraction:0<2}");
    let cents = match padded.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    let minor = if cents == "1" { coin } else { coins };
    let plural = if whole == "1" { "" } else { "s" };
    Ok(format!("{whole} {bill}{plural} and {cents} {minor}"))
}

/// Spell a decimal digit by digit after the point: `3.14` -> `3 point 1 4`.
pub fn point_num(literal: &str) -> String {
    let (whole, fraction) = literal.split_once('.').unwrap_or((literal, ""));
    let digits: Vec<String> = fraction.chars().map(String::from).collect();
    format!("{whole} point {}", digits.join(" "))
}

fn parse_int(digits: &str) -> EncodeResult<u64> {
    digits
        .parse::<u64>()
        .map_err(|e| EncodeError::normalization(format!("invalid number {digits:?}: {e}")))
}
