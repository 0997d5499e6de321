//! Info command implementation.

use runtime::EspeakBackend;
use text_tokenizer::Vocabulary;
use tts_core::{BackendKind, EncoderConfig};

/// Run the info command.
pub async fn run(config: &EncoderConfig) {
    println!("Kokoro text front-end");
    println!("=====================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();
    println!("Configuration:");
    println!("  Default locale: {}", config.default_locale);
    println!("  Normalize: {}", config.normalize);
    println!("  Max tokens: {}", config.max_tokens);
    match Vocabulary::build(&config.inventory) {
        Ok(vocab) => println!("  Vocabulary: {} symbols, {} ids", vocab.distinct(), vocab.len()),
        Err(e) => println!("  Vocabulary: invalid ({e})"),
    }

    println!();
    println!("Backend:");
    match config.backend.kind {
        BackendKind::Mock => println!("  mock (lower-cases text)"),
        BackendKind::Espeak => {
            let backend = EspeakBackend::new(config.backend.program.clone());
            match backend.probe().await {
                Ok(version) => println!("  {}: {version}", backend.program()),
                Err(e) => println!("  {}: unavailable ({e})", backend.program()),
            }
        }
    }

    println!();
    println!("Crates:");
    println!("  tts-core: Core types, traits, and errors");
    println!("  text-normalizer: Text normalization rules");
    println!("  text-tokenizer: Segmentation, phoneme cleanup, vocabulary");
    println!("  runtime: Encoder pipeline, backends, logging, metrics");
    println!("  tts-cli: This CLI tool");
}
