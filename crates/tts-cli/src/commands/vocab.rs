//! Vocab command implementation.

use anyhow::Result;
use text_tokenizer::Vocabulary;
use tts_core::EncoderConfig;

/// Run the vocab command.
pub fn run(config: &EncoderConfig, symbol: Option<char>) -> Result<()> {
    let vocab = Vocabulary::build(&config.inventory)?;

    if let Some(symbol) = symbol {
        match vocab.id_of(symbol) {
            Some(id) => println!("{symbol:?} -> {id}"),
            None => println!("{symbol:?} is not in the vocabulary"),
        }
        return Ok(());
    }

    println!(
        "Vocabulary ({} symbols, {} ids, pad id {}):",
        vocab.distinct(),
        vocab.len(),
        vocab.pad_id()
    );
    for (id, symbol) in vocab.symbols() {
        println!("  {id:>3}  {symbol:?}  U+{:04X}", symbol as u32);
    }

    Ok(())
}
