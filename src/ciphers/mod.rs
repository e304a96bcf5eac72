pub mod caesar;
pub mod playfair;
pub mod rail_fence;
pub mod transposition;
pub mod vigenere;

pub use caesar::Caesar;
pub use playfair::{Playfair, PlayfairMatrix};
pub use rail_fence::RailFence;
pub use transposition::Transposition;
pub use vigenere::Vigenere;

use crate::algorithm::Algorithm;
use crate::error::{CipherError, Result};

/// A cipher with its key already validated
pub trait Cipher: Send + Sync {
    fn algorithm(&self) -> Algorithm;
    fn encrypt(&self, text: &str) -> Result<String>;
    fn decrypt(&self, text: &str) -> Result<String>;
}

/// Build a cipher from an algorithm tag and the key as the caller typed it
pub fn build_cipher(algorithm: Algorithm, key: &str) -> Result<Box<dyn Cipher>> {
    log::debug!("building {} cipher", algorithm);
    let cipher: Box<dyn Cipher> = match algorithm {
        Algorithm::Caesar => Box::new(Caesar::new(parse_integer_key(key, "shift")?)),
        Algorithm::Vigenere => Box::new(Vigenere::new(key)?),
        Algorithm::RailFence => Box::new(RailFence::new(parse_integer_key(key, "rail count")?)?),
        Algorithm::Playfair => Box::new(Playfair::new(key)?),
        Algorithm::Transposition => {
            Box::new(Transposition::new(parse_integer_key(key, "column count")?)?)
        }
    };
    Ok(cipher)
}

/// Parse a whole-number key, tolerating surrounding whitespace
pub fn parse_integer_key(key: &str, what: &str) -> Result<i64> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(CipherError::InvalidKey(format!("{} must not be empty", what)));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| CipherError::InvalidKey(format!("{} must be an integer, got {:?}", what, key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_key() {
        assert_eq!(parse_integer_key("3", "shift").unwrap(), 3);
        assert_eq!(parse_integer_key(" -7 ", "shift").unwrap(), -7);
        assert!(matches!(
            parse_integer_key("3.5", "shift"),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_integer_key("three", "shift"),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(parse_integer_key("  ", "shift"), Err(CipherError::InvalidKey(_))));
    }

    #[test]
    fn test_build_cipher_dispatches() {
        let caesar = build_cipher(Algorithm::Caesar, "1").unwrap();
        assert_eq!(caesar.algorithm(), Algorithm::Caesar);
        assert_eq!(caesar.encrypt("ABC").unwrap(), "BCD");

        let playfair = build_cipher(Algorithm::Playfair, "MONARCHY").unwrap();
        assert_eq!(playfair.encrypt("INSTRUMENTS").unwrap(), "GATLMZCLRQXA");
    }

    #[test]
    fn test_build_cipher_rejects_bad_keys() {
        assert!(matches!(
            build_cipher(Algorithm::Caesar, "abc"),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            build_cipher(Algorithm::RailFence, "0"),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            build_cipher(Algorithm::Vigenere, "42"),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            build_cipher(Algorithm::Transposition, "-1"),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_every_algorithm_roundtrips() {
        let keys = [
            (Algorithm::Caesar, "13"),
            (Algorithm::Vigenere, "LEMON"),
            (Algorithm::RailFence, "4"),
            (Algorithm::Playfair, "PLAYFAIR EXAMPLE"),
            (Algorithm::Transposition, "5"),
        ];
        for (algorithm, key) in keys {
            let cipher = build_cipher(algorithm, key).unwrap();
            // Already digraph-clean, so Playfair gives it back unchanged too
            let text = "HIDETHEGOLDINTHETREXESTUMP";
            let encrypted = cipher.encrypt(text).unwrap();
            assert_eq!(cipher.decrypt(&encrypted).unwrap(), text, "{}", algorithm);
        }
    }
}
