//! Latin alphabet arithmetic shared by the substitution ciphers.
//!
//! Only ASCII letters count as alphabetic. Everything else, including
//! accented letters, is treated as punctuation by every cipher.

use crate::error::{CipherError, Result};

pub const ALPHABET_LEN: u8 = 26;

/// Letter-position helpers on `char`.
pub trait Letter: Copy {
    /// Zero-based position in A-Z, ignoring case
    fn alphabet_index(self) -> Option<u8>;

    /// Rotate a letter forward by `by` positions, keeping its case.
    /// Non-letters come back unchanged.
    fn shift_letter(self, by: u8) -> Self;

    /// Rotate a letter backward by `by` positions, keeping its case
    fn unshift_letter(self, by: u8) -> Self {
        self.shift_letter((ALPHABET_LEN - by % ALPHABET_LEN) % ALPHABET_LEN)
    }
}

impl Letter for char {
    fn alphabet_index(self) -> Option<u8> {
        if self.is_ascii_alphabetic() {
            Some(self.to_ascii_uppercase() as u8 - b'A')
        } else {
            None
        }
    }

    fn shift_letter(self, by: u8) -> Self {
        let base = if self.is_ascii_uppercase() {
            b'A'
        } else if self.is_ascii_lowercase() {
            b'a'
        } else {
            return self;
        };
        let offset = (self as u8 - base + by % ALPHABET_LEN) % ALPHABET_LEN;
        (base + offset) as char
    }
}

/// Uppercase letter at a zero-based alphabet position
pub fn letter_at(index: u8) -> char {
    (b'A' + index % ALPHABET_LEN) as char
}

/// Reduce any integer shift into `0..26`
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid is ((shift % 26) + 26) % 26 without the overflow risk
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Uppercase letters of a key, with everything else dropped.
/// Fails when nothing usable remains.
pub fn key_letters(key: &str, what: &str) -> Result<Vec<char>> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey(format!("{} key must not be empty", what)));
    }
    let letters: Vec<char> = key
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if letters.is_empty() {
        return Err(CipherError::InvalidKey(format!(
            "{} key must contain at least one letter",
            what
        )));
    }
    Ok(letters)
}
