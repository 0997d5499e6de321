//! Encode command implementation.

use anyhow::{Context, Result};
use runtime::{CancellationToken, Encoder};
use tracing::warn;
use tts_core::{BackendKind, EncoderConfig, Locale};

/// Options for the encode command.
#[derive(Debug)]
pub struct EncodeOptions {
    pub text: String,
    pub locale: Option<Locale>,
    pub no_normalize: bool,
    pub backend: Option<BackendKind>,
    pub json: bool,
}

/// Run the encode command.
pub async fn run(config: &EncoderConfig, options: EncodeOptions) -> Result<()> {
    let mut config = config.clone();
    if let Some(kind) = options.backend {
        config.backend.kind = kind;
    }

    let locale = options.locale.unwrap_or(config.default_locale);
    let normalize = config.normalize && !options.no_normalize;

    let encoder = Encoder::from_config(&config).context("failed to build encoder")?;

    // Ctrl-C cancels outstanding backend calls
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, cancelling encode");
            on_signal.cancel();
        }
    });

    let message = encoder
        .encode_cancellable(&options.text, locale, normalize, &cancel)
        .await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&message)?);
    } else {
        println!("Locale:   {locale} ({})", locale.backend_code());
        println!("Backend:  {}", encoder.backend_name());
        println!("Phonemes: {}", message.phonemes);
        println!("Tokens:   {} {:?}", message.len(), message.tokens);
    }

    Ok(())
}
