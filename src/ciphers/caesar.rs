use crate::algorithm::Algorithm;
use crate::alphabet::{normalize_shift, Letter};
use crate::ciphers::Cipher;
use crate::error::Result;

/// Caesar shift cipher. Any integer shift is accepted and reduced modulo 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    pub fn new(shift: i64) -> Self {
        Self {
            shift: normalize_shift(shift),
        }
    }

    /// Shift in `0..26` actually applied
    pub fn shift(&self) -> u8 {
        self.shift
    }
}

impl Cipher for Caesar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Caesar
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(text.chars().map(|c| c.shift_letter(self.shift)).collect())
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(text.chars().map(|c| c.unshift_letter(self.shift)).collect())
    }
}

pub fn encrypt(text: &str, shift: i64) -> Result<String> {
    Caesar::new(shift).encrypt(text)
}

pub fn decrypt(text: &str, shift: i64) -> Result<String> {
    Caesar::new(shift).decrypt(text)
}
