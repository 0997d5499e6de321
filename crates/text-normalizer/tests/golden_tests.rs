//! Golden tests for text normalization.
//!
//! These tests verify that the normalizer produces expected output for a corpus
//! of representative English inputs.

use text_normalizer::Normalizer;
use tts_core::TextNormalizer;

/// Test case structure for golden tests.
struct GoldenTestCase {
    input: &'static str,
    expected: &'static str,
    description: &'static str,
}

const GOLDEN_TESTS: &[GoldenTestCase] = &[
    // Currency
    GoldenTestCase {
        input: "Pay $1.50 now",
        expected: "Pay 1 dollar and 50 cents now",
        description: "Dollars and cents",
    },
    GoldenTestCase {
        input: "It cost £2.05",
        expected: "It cost 2 pounds and 5 pence",
        description: "Pounds and pence",
    },
    GoldenTestCase {
        input: "A budget of $5 million",
        expected: "A budget of 5 million dollars",
        description: "Magnitude word",
    },
    GoldenTestCase {
        input: "He scored $1,000",
        expected: "He scored 1000 dollars",
        description: "Thousands separator before currency",
    },
    // Time
    GoldenTestCase {
        input: "It's 1:05.",
        expected: "It's 1 oh 5.",
        description: "Clock time with leading zero minute",
    },
    GoldenTestCase {
        input: "Dr. Smith arrived at 3:00.",
        expected: "Doctor Smith arrived at 3 o'clock.",
        description: "Honorific and full hour",
    },
    GoldenTestCase {
        input: "It's 10:30:15",
        expected: "It's 10:30:15",
        description: "Colon chains are not clock times",
    },
    // Years
    GoldenTestCase {
        input: "The year 1800s",
        expected: "The year 18 hundreds",
        description: "Plural round century",
    },
    GoldenTestCase {
        input: "The 1990s were loud",
        expected: "The 19 90s were loud",
        description: "Plural decade",
    },
    GoldenTestCase {
        input: "In the 2020s",
        expected: "In the 20 20s",
        description: "Early century decade",
    },
    GoldenTestCase {
        input: "born in 1905",
        expected: "born in 19 oh 5",
        description: "Single-digit year remainder",
    },
    GoldenTestCase {
        input: "It was 2000",
        expected: "It was 2000",
        description: "Round millennium stays numeric",
    },
    // Numbers
    GoldenTestCase {
        input: "pi is 3.14",
        expected: "pi is 3 point 1 4",
        description: "Decimal",
    },
    GoldenTestCase {
        input: "Population: 1,000,000",
        expected: "Population: 1000000",
        description: "Thousands separators",
    },
    GoldenTestCase {
        input: "Pages 10-20",
        expected: "Pages 10 to 20",
        description: "Numeric range",
    },
    // Abbreviations
    GoldenTestCase {
        input: "MR. SMITH and Ms. Jones",
        expected: "Mister SMITH and Miss Jones",
        description: "Honorifics in both cases",
    },
    GoldenTestCase {
        input: "apples, etc. and pears",
        expected: "apples, etc and pears",
        description: "etc mid-sentence",
    },
    GoldenTestCase {
        input: "I love my TVs",
        expected: "I love my TV'S",
        description: "Initialism plural",
    },
    GoldenTestCase {
        input: "J.R.R. tolkien wrote it",
        expected: "J-R-R- tolkien wrote it",
        description: "Dotted initials before lowercase word",
    },
    GoldenTestCase {
        input: "the U.S.A team",
        expected: "the U-S-A team",
        description: "Dotted capitals",
    },
    // Punctuation and spacing
    GoldenTestCase {
        input: "Yeah, I know",
        expected: "Ye'a, I know",
        description: "Casual speech",
    },
    GoldenTestCase {
        input: "\u{201C}Hello\u{201D} (world)",
        expected: "\"Hello\" «world»",
        description: "Quotes and parentheses",
    },
    GoldenTestCase {
        input: "你好，世界。",
        expected: "你好, 世界.",
        description: "CJK punctuation",
    },
    GoldenTestCase {
        input: "Hello \t   world ",
        expected: "Hello world",
        description: "Whitespace collapse and trim",
    },
];

#[test]
fn test_golden_corpus() {
    let normalizer = Normalizer::new().expect("default rules should compile");

    for (i, test) in GOLDEN_TESTS.iter().enumerate() {
        let result = normalizer
            .normalize(test.input)
            .expect("normalization should not fail");

        assert_eq!(
            result,
            test.expected,
            "\nGolden Test #{} FAILED: {}\nInput:    '{}'\nExpected: '{}'\nGot:      '{}'",
            i + 1,
            test.description,
            test.input,
            test.expected,
            result
        );
    }

    println!("All {} golden tests passed!", GOLDEN_TESTS.len());
}

/// Edge cases and regression tests.
#[test]
fn test_edge_cases() {
    let normalizer = Normalizer::new().unwrap();

    // Empty input normalizes to empty
    assert_eq!(normalizer.normalize("").unwrap(), "");

    // Only whitespace - normalizes to empty string
    assert_eq!(normalizer.normalize("   ").unwrap(), "");

    // No normalizable content - should pass through unchanged
    assert_eq!(normalizer.normalize("你好").unwrap(), "你好");

    // Blank line between paragraphs is emptied, newlines are kept
    assert_eq!(
        normalizer.normalize("one\n   \ntwo").unwrap(),
        "one\n\ntwo"
    );

    // Very long digit runs are not years
    assert_eq!(normalizer.normalize("123456").unwrap(), "123456");
}

#[test]
fn test_clock_time_contains_oh() {
    let normalizer = Normalizer::new().unwrap();
    let result = normalizer.normalize("It's 1:05.").unwrap();
    assert!(result.contains("1 oh 5"), "got: {result}");
}
