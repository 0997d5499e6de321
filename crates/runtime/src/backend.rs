//! Phoneme backends.

use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument};
use tts_core::{BackendConfig, BackendKind, EncodeError, EncodeResult, PhonemeBackend};

/// Phoneme backend that shells out to `espeak-ng`.
///
/// One child process is spawned per segment. The child is killed if the
/// transcription future is dropped.
#[derive(Debug, Clone)]
pub struct EspeakBackend {
    program: String,
}

impl Default for EspeakBackend {
    fn default() -> Self {
        Self::new("espeak-ng")
    }
}

impl EspeakBackend {
    /// Create a backend running `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check that the executable runs; returns its version line.
    pub async fn probe(&self) -> EncodeResult<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(EncodeError::backend(format!(
                "{} --version exited with {}",
                self.program, output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or_default().trim().to_string())
    }

    fn spawn_error(&self, err: std::io::Error) -> EncodeError {
        EncodeError::backend(format!(
            "failed to run {}: {err} (is espeak-ng installed?)",
            self.program
        ))
    }
}

#[async_trait]
impl PhonemeBackend for EspeakBackend {
    #[instrument(skip(self, text), fields(backend = "espeak", text_len = text.len()))]
    async fn transcribe(&self, text: &str, language_code: &str) -> EncodeResult<String> {
        // Text goes through stdin so it can never be read as a flag
        let mut child = Command::new(&self.program)
            .args(["--ipa", "-q", "-v", language_code])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| EncodeError::backend(format!("failed to write to {}: {e}", self.program)))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| EncodeError::backend(format!("{} did not finish: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EncodeError::backend(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| EncodeError::backend(format!("non UTF-8 phoneme output: {e}")))?;
        let phonemes = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        debug!(phonemes_len = phonemes.len(), "segment transcribed");
        Ok(phonemes)
    }

    fn name(&self) -> &str {
        "espeak"
    }
}

/// Deterministic in-process backend: lower-cases its input.
///
/// Lower-case ASCII letters are all vocabulary symbols, so encoded output is
/// predictable without an external program.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBackend;

#[async_trait]
impl PhonemeBackend for MockBackend {
    async fn transcribe(&self, text: &str, _language_code: &str) -> EncodeResult<String> {
        Ok(text.to_lowercase())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Build the backend selected in the configuration.
pub fn build_backend(config: &BackendConfig) -> Arc<dyn PhonemeBackend> {
    match config.kind {
        BackendKind::Espeak => Arc::new(EspeakBackend::new(config.program.clone())),
        BackendKind::Mock => Arc::new(MockBackend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend() {
        let backend = MockBackend;
        assert_eq!(backend.transcribe("Hello World", "en-us").await.unwrap(), "hello world");
        assert_eq!(backend.name(), "mock");
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let backend = EspeakBackend::new("definitely-not-an-espeak-binary");
        let err = backend.transcribe("hello", "en-us").await.unwrap_err();
        assert!(matches!(err, EncodeError::BackendUnavailable(_)));

        assert!(backend.probe().await.is_err());
    }

    #[test]
    fn test_build_backend() {
        let backend = build_backend(&BackendConfig {
            kind: BackendKind::Mock,
            program: String::new(),
        });
        assert_eq!(backend.name(), "mock");

        let backend = build_backend(&BackendConfig::default());
        assert_eq!(backend.name(), "espeak");
    }
}
