//! Segment command implementation.

use anyhow::Result;
use text_normalizer::Normalizer;
use text_tokenizer::Segmenter;
use tts_core::{EncoderConfig, SegmentKind, TextNormalizer};

/// Run the segment command.
pub fn run(config: &EncoderConfig, input: &str, normalize: bool) -> Result<()> {
    let text = if normalize {
        Normalizer::new()?.normalize(input)?
    } else {
        input.to_string()
    };

    let segments = Segmenter::with_punctuation(&config.segment_punctuation)?.segment(&text);

    println!("Text: {text}");
    println!("Segments ({}):", segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let kind = match segment.kind {
            SegmentKind::Literal => "literal",
            SegmentKind::Phonemizable => "phonemize",
        };
        let space = if segment.space_before { "+space" } else { "" };
        println!("  [{i:>3}] {kind:<10}{space:<7} {:?}", segment.text);
    }

    Ok(())
}
