use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cipher algorithm options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Caesar,
    Vigenere,
    #[serde(alias = "rail-fence", alias = "rail_fence")]
    RailFence,
    Playfair,
    #[serde(alias = "columnar")]
    Transposition,
}

/// How an algorithm's key is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Whole number (shift, rail count, column count)
    Integer,
    /// Text containing at least one letter
    Letters,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Caesar,
        Algorithm::Vigenere,
        Algorithm::RailFence,
        Algorithm::Playfair,
        Algorithm::Transposition,
    ];

    /// Canonical lowercase name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Vigenere => "vigenere",
            Self::RailFence => "railfence",
            Self::Playfair => "playfair",
            Self::Transposition => "transposition",
        }
    }

    pub fn key_kind(self) -> KeyKind {
        match self {
            Self::Caesar | Self::RailFence | Self::Transposition => KeyKind::Integer,
            Self::Vigenere | Self::Playfair => KeyKind::Letters,
        }
    }

    /// Short description of what the key means for this algorithm
    pub fn key_description(self) -> &'static str {
        match self {
            Self::Caesar => "integer shift, taken modulo 26",
            Self::Vigenere => "word of letters, repeated over the text",
            Self::RailFence => "number of rails, at least 1",
            Self::Playfair => "keyword seeding the 5x5 key square",
            Self::Transposition => "number of columns, between 1 and the text length",
        }
    }

    /// Field names used in responses, following the original service
    pub(crate) fn response_field(self, operation: Operation) -> &'static str {
        match (self, operation) {
            (Self::Caesar, Operation::Encrypt) => "encrypted_message",
            (Self::Caesar, Operation::Decrypt) => "decrypted_message",
            (_, Operation::Encrypt) => "encrypted_text",
            (_, Operation::Decrypt) => "decrypted_text",
            (_, Operation::CreateMatrix) => "playfair_matrix",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "vigenere" => Ok(Self::Vigenere),
            "railfence" | "rail-fence" | "rail_fence" => Ok(Self::RailFence),
            "playfair" => Ok(Self::Playfair),
            "transposition" | "columnar" => Ok(Self::Transposition),
            _ => Err(CipherError::InvalidInput(format!("unknown algorithm: {}", s))),
        }
    }
}

/// Operations a request can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
    /// Build and return the Playfair key square
    CreateMatrix,
}

impl Operation {
    /// Request field that carries the text for this operation
    pub fn text_field(self) -> Option<&'static str> {
        match self {
            Self::Encrypt => Some("plain_text"),
            Self::Decrypt => Some("cipher_text"),
            Self::CreateMatrix => None,
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "encrypt" => Ok(Self::Encrypt),
            "decrypt" => Ok(Self::Decrypt),
            "creatematrix" | "create-matrix" | "matrix" => Ok(Self::CreateMatrix),
            _ => Err(CipherError::InvalidInput(format!("unknown operation: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_names() {
        assert_eq!("caesar".parse::<Algorithm>().unwrap(), Algorithm::Caesar);
        assert_eq!("Vigenere".parse::<Algorithm>().unwrap(), Algorithm::Vigenere);
        assert_eq!("rail-fence".parse::<Algorithm>().unwrap(), Algorithm::RailFence);
        assert_eq!("columnar".parse::<Algorithm>().unwrap(), Algorithm::Transposition);
        assert!("enigma".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_name_roundtrips_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Algorithm::RailFence).unwrap();
        assert_eq!(json, "\"railfence\"");
        let parsed: Algorithm = serde_json::from_str("\"rail_fence\"").unwrap();
        assert_eq!(parsed, Algorithm::RailFence);
    }

    #[test]
    fn test_key_kinds() {
        assert_eq!(Algorithm::Caesar.key_kind(), KeyKind::Integer);
        assert_eq!(Algorithm::Transposition.key_kind(), KeyKind::Integer);
        assert_eq!(Algorithm::Playfair.key_kind(), KeyKind::Letters);
    }

    #[test]
    fn test_response_fields() {
        assert_eq!(
            Algorithm::Caesar.response_field(Operation::Encrypt),
            "encrypted_message"
        );
        assert_eq!(
            Algorithm::Vigenere.response_field(Operation::Decrypt),
            "decrypted_text"
        );
        assert_eq!(
            Algorithm::Playfair.response_field(Operation::CreateMatrix),
            "playfair_matrix"
        );
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!("creatematrix".parse::<Operation>().unwrap(), Operation::CreateMatrix);
        assert_eq!("DECRYPT".parse::<Operation>().unwrap(), Operation::Decrypt);
        assert_eq!(Operation::Encrypt.text_field(), Some("plain_text"));
        assert!("sign".parse::<Operation>().is_err());
    }
}
