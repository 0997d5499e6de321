//! Normalize command implementation.

use anyhow::Result;
use text_normalizer::Normalizer;
use tts_core::TextNormalizer;

/// Run the normalize command.
pub fn run(input: &str, steps: bool) -> Result<()> {
    let normalizer = Normalizer::new()?;

    println!("Input:      {input}");

    if steps {
        println!("Steps:");
        for (rule, text) in normalizer.trace(input)? {
            println!("  {rule:<20} {text:?}");
        }
    }

    let result = normalizer.normalize(input)?;
    println!("Normalized: {result}");

    Ok(())
}
