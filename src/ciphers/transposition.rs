use crate::algorithm::Algorithm;
use crate::ciphers::Cipher;
use crate::error::{CipherError, Result};

/// Columnar transposition with a ragged last row.
///
/// Text is written row by row into `columns` columns and read back column
/// by column. The last row is never padded, so the output has exactly as
/// many characters as the input and the leftmost `len % columns` columns
/// are one character longer than the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transposition {
    columns: usize,
}

impl Transposition {
    pub fn new(columns: i64) -> Result<Self> {
        if columns < 1 {
            return Err(CipherError::InvalidKey(format!(
                "column count must be at least 1, got {}",
                columns
            )));
        }
        let columns = usize::try_from(columns).map_err(|_| {
            CipherError::InvalidKey(format!("column count {} is too large", columns))
        })?;
        Ok(Self { columns })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn check_fits(&self, len: usize) -> Result<()> {
        if len > 0 && self.columns > len {
            return Err(CipherError::InvalidKey(format!(
                "column count {} exceeds text length {}",
                self.columns, len
            )));
        }
        Ok(())
    }
}

impl Cipher for Transposition {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Transposition
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        self.check_fits(chars.len())?;

        // Never more columns than characters, so empty text costs nothing
        let mut out = String::with_capacity(text.len());
        for column in 0..self.columns.min(chars.len()) {
            out.extend(chars.iter().skip(column).step_by(self.columns));
        }
        Ok(out)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        self.check_fits(len)?;
        if len == 0 {
            return Ok(String::new());
        }

        let short_rows = len / self.columns;
        let long_columns = len % self.columns;

        // Rebuild each column from its slice of the cipher text
        let mut columns = Vec::with_capacity(self.columns);
        let mut start = 0;
        for column in 0..self.columns {
            let height = short_rows + usize::from(column < long_columns);
            columns.push(&chars[start..start + height]);
            start += height;
        }

        let rows = short_rows + usize::from(long_columns > 0);
        let mut plain = String::with_capacity(text.len());
        for row in 0..rows {
            for column in &columns {
                if let Some(&c) = column.get(row) {
                    plain.push(c);
                }
            }
        }
        Ok(plain)
    }
}

pub fn encrypt(text: &str, columns: i64) -> Result<String> {
    Transposition::new(columns)?.encrypt(text)
}

pub fn decrypt(text: &str, columns: i64) -> Result<String> {
    Transposition::new(columns)?.decrypt(text)
}
