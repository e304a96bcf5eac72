use crate::algorithm::Algorithm;
use crate::alphabet::{key_letters, Letter};
use crate::ciphers::Cipher;
use crate::error::Result;

/// Vigenère cipher with a repeating keyword.
///
/// The key cursor only moves on letters, so punctuation and spaces in the
/// text never consume a key letter. Non-letters inside the key are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    shifts: Vec<u8>,
}

impl Vigenere {
    pub fn new(key: &str) -> Result<Self> {
        let shifts = key_letters(key, "vigenere")?
            .into_iter()
            .filter_map(|c| c.alphabet_index())
            .collect();
        Ok(Self { shifts })
    }

    fn transform(&self, text: &str, shift: impl Fn(char, u8) -> char) -> String {
        let mut cursor = self.shifts.iter().cycle();
        text.chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    // cycle over a non-empty key never runs out
                    let by = cursor.next().copied().unwrap_or(0);
                    shift(c, by)
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Cipher for Vigenere {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Vigenere
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(self.transform(text, |c, by| c.shift_letter(by)))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(self.transform(text, |c, by| c.unshift_letter(by)))
    }
}

pub fn encrypt(text: &str, key: &str) -> Result<String> {
    Vigenere::new(key)?.encrypt(text)
}

pub fn decrypt(text: &str, key: &str) -> Result<String> {
    Vigenere::new(key)?.decrypt(text)
}
