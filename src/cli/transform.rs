use crate::algorithm::Algorithm;
use crate::ciphers::{build_cipher, playfair};
use crate::error::{CipherError, Result};
use std::path::PathBuf;

/// Where the text to transform comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
}

/// Options shared by the encrypt and decrypt commands
#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub algorithm: Algorithm,
    pub key: String,
    pub source: TextSource,
    pub output: Option<PathBuf>,
    /// Drop Playfair fillers after decrypting
    pub strip_filler: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Caesar,
            key: String::new(),
            source: TextSource::Inline(String::new()),
            output: None,
            strip_filler: false,
        }
    }
}

impl TransformOptions {
    /// Pick the text source from an inline argument or an input file
    pub fn source_from(text: Option<String>, input: Option<PathBuf>) -> Result<TextSource> {
        match (text, input) {
            (Some(text), None) => Ok(TextSource::Inline(text)),
            (None, Some(path)) => Ok(TextSource::File(path)),
            (Some(_), Some(_)) => Err(CipherError::InvalidInput(
                "give either TEXT or --input, not both".into(),
            )),
            (None, None) => Err(CipherError::MissingKey("text".into())),
        }
    }
}

/// Plaintext files come from editors: one trailing line ending (`\n` or
/// `\r\n`) is not part of the message. Cipher text files are the ones
/// `write_result` produced, so exactly its `\n` is dropped and any other
/// trailing character, including `\r`, is real cipher text.
fn read_source(source: &TextSource, plaintext: bool) -> Result<String> {
    match source {
        TextSource::Inline(text) => Ok(text.clone()),
        TextSource::File(path) => {
            let mut text = std::fs::read_to_string(path)?;
            if plaintext && text.ends_with("\r\n") {
                text.truncate(text.len() - 2);
            } else if text.ends_with('\n') {
                text.pop();
            }
            Ok(text)
        }
    }
}

/// Output files always end with one `\n` on top of the result
fn write_result(result: String, options: &TransformOptions) -> Result<String> {
    if let Some(path) = &options.output {
        std::fs::write(path, format!("{}\n", result))?;
    }
    Ok(result)
}

/// Encrypt the selected text. Returns the cipher text, also written to
/// the output file when one is set.
pub fn encrypt_text(options: &TransformOptions) -> Result<String> {
    let cipher = build_cipher(options.algorithm, &options.key)?;
    let text = read_source(&options.source, true)?;
    log::debug!("encrypting {} chars with {}", text.chars().count(), options.algorithm);
    write_result(cipher.encrypt(&text)?, options)
}

/// Decrypt the selected text
pub fn decrypt_text(options: &TransformOptions) -> Result<String> {
    let cipher = build_cipher(options.algorithm, &options.key)?;
    let text = read_source(&options.source, false)?;
    log::debug!("decrypting {} chars with {}", text.chars().count(), options.algorithm);
    let mut plain = cipher.decrypt(&text)?;
    if options.strip_filler {
        if options.algorithm == Algorithm::Playfair {
            plain = playfair::strip_filler(&plain);
        } else {
            log::warn!("--strip-filler only applies to playfair, ignoring");
        }
    }
    write_result(plain, options)
}
