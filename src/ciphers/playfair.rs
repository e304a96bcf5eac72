//! Playfair digraph cipher over a 5x5 key square.
//!
//! I and J share a cell: every J is read as I, both in keys and in text.
//! Encryption normalizes the text (uppercase, letters only), splits it into
//! digraphs and inserts a filler between equal letters and at the end of an
//! odd-length text. The filler is `X`, or `Q` when the letter it separates
//! is itself `X`.
//!
//! Decryption keeps those fillers; [`strip_filler`] is a lossy helper for
//! callers that want them removed.

use crate::algorithm::Algorithm;
use crate::alphabet::{key_letters, letter_at, Letter, ALPHABET_LEN};
use crate::ciphers::Cipher;
use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIZE: usize = 5;

const MERGED: char = 'J';
const MERGED_INTO: char = 'I';

/// 5x5 key square with a letter-to-cell index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<char>>", try_from = "Vec<Vec<char>>")]
pub struct PlayfairMatrix {
    cells: [[char; SIZE]; SIZE],
    positions: [Option<(usize, usize)>; ALPHABET_LEN as usize],
}

impl PlayfairMatrix {
    /// Key square for a keyword: key letters first, the rest of the
    /// alphabet after, J folded into I.
    pub fn from_key(key: &str) -> Result<Self> {
        let mut order: Vec<char> = Vec::with_capacity(SIZE * SIZE);
        let alphabet = (0..ALPHABET_LEN).map(letter_at);
        for c in key_letters(key, "playfair")?.into_iter().chain(alphabet) {
            let c = fold(c);
            if !order.contains(&c) {
                order.push(c);
            }
        }

        let mut cells = [[' '; SIZE]; SIZE];
        for (i, &c) in order.iter().take(SIZE * SIZE).enumerate() {
            cells[i / SIZE][i % SIZE] = c;
        }

        Self::from_cells(cells).map_err(|e| {
            CipherError::Processing(format!("key square construction failed: {}", e))
        })
    }

    /// Validate a square supplied as rows. Every letter except J must
    /// appear exactly once.
    pub fn from_cells(cells: [[char; SIZE]; SIZE]) -> Result<Self> {
        let mut positions = [None; ALPHABET_LEN as usize];
        for (row, line) in cells.iter().enumerate() {
            for (col, &c) in line.iter().enumerate() {
                let index = match c.alphabet_index() {
                    Some(index) if c.is_ascii_uppercase() && c != MERGED => index as usize,
                    _ => {
                        return Err(CipherError::InvalidKey(format!(
                            "invalid key square letter {:?} at ({}, {})",
                            c, row, col
                        )))
                    }
                };
                if positions[index].is_some() {
                    return Err(CipherError::InvalidKey(format!(
                        "key square repeats letter {}",
                        c
                    )));
                }
                positions[index] = Some((row, col));
            }
        }
        Ok(Self { cells, positions })
    }

    pub fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row % SIZE][col % SIZE]
    }

    /// Cell of a letter; J resolves to the I cell
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        let index = fold(c.to_ascii_uppercase()).alphabet_index()?;
        self.positions[index as usize]
    }

    fn locate(&self, c: char) -> Result<(usize, usize)> {
        self.position(c).ok_or_else(|| {
            CipherError::Processing(format!("letter {} missing from key square", c))
        })
    }

    fn substitute(&self, pair: (char, char), step: usize) -> Result<(char, char)> {
        let (r1, c1) = self.locate(pair.0)?;
        let (r2, c2) = self.locate(pair.1)?;
        Ok(if r1 == r2 {
            (self.get(r1, c1 + step), self.get(r2, c2 + step))
        } else if c1 == c2 {
            (self.get(r1 + step, c1), self.get(r2 + step, c2))
        } else {
            (self.get(r1, c2), self.get(r2, c1))
        })
    }

    /// Apply the digraph rules to already-prepared digraphs.
    /// Encrypt moves right/down, decrypt left/up.
    fn apply(&self, digraphs: &[(char, char)], encrypt: bool) -> Result<String> {
        // Moving SIZE-1 forward is moving one back, modulo SIZE
        let step = if encrypt { 1 } else { SIZE - 1 };
        let mut out = String::with_capacity(digraphs.len() * 2);
        for &pair in digraphs {
            let (a, b) = self.substitute(pair, step)?;
            out.push(a);
            out.push(b);
        }
        Ok(out)
    }
}

impl From<PlayfairMatrix> for Vec<Vec<char>> {
    fn from(matrix: PlayfairMatrix) -> Self {
        matrix.cells.iter().map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<char>>> for PlayfairMatrix {
    type Error = CipherError;

    fn try_from(rows: Vec<Vec<char>>) -> Result<Self> {
        if rows.len() != SIZE || rows.iter().any(|row| row.len() != SIZE) {
            return Err(CipherError::InvalidKey(format!(
                "key square must be {}x{}",
                SIZE, SIZE
            )));
        }
        let mut cells = [[' '; SIZE]; SIZE];
        for (target, row) in cells.iter_mut().zip(&rows) {
            target.copy_from_slice(row);
        }
        Self::from_cells(cells)
    }
}

impl fmt::Display for PlayfairMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

fn fold(c: char) -> char {
    if c == MERGED {
        MERGED_INTO
    } else {
        c
    }
}

fn filler_for(c: char) -> char {
    if c == 'X' {
        'Q'
    } else {
        'X'
    }
}

/// Uppercase letters of the text with J folded into I; everything else dropped
pub fn normalize(text: &str) -> Vec<char> {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| fold(c.to_ascii_uppercase()))
        .collect()
}

/// Split normalized plaintext into digraphs, inserting fillers
pub fn prepare_digraphs(text: &str) -> Vec<(char, char)> {
    let letters = normalize(text);
    let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                digraphs.push((first, second));
                i += 2;
            }
            // Equal pair or trailing letter: pad and move on by one
            _ => {
                digraphs.push((first, filler_for(first)));
                i += 1;
            }
        }
    }
    log::trace!(
        "prepared {} digraphs from {} letters",
        digraphs.len(),
        letters.len()
    );
    digraphs
}

/// Split cipher text into digraphs without inserting anything
fn cipher_digraphs(text: &str) -> Result<Vec<(char, char)>> {
    let letters = normalize(text);
    if letters.len() % 2 != 0 {
        return Err(CipherError::InvalidInput(format!(
            "playfair cipher text must have an even number of letters, got {}",
            letters.len()
        )));
    }
    letters
        .chunks_exact(2)
        .map(|pair| {
            if pair[0] == pair[1] {
                Err(CipherError::InvalidInput(format!(
                    "playfair cipher text cannot contain the digraph {}{}",
                    pair[0], pair[1]
                )))
            } else {
                Ok((pair[0], pair[1]))
            }
        })
        .collect()
}

/// Remove fillers from decrypted text: one sitting between two equal
/// letters, and a trailing one. Lossy, since genuine X's in those spots
/// are removed too.
pub fn strip_filler(text: &str) -> String {
    let letters: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in letters.iter().enumerate() {
        let is_last = i + 1 == letters.len();
        let between_equal = i > 0
            && i % 2 == 1
            && !is_last
            && letters[i - 1] == letters[i + 1]
            && c == filler_for(letters[i - 1]);
        let trailing = is_last && i % 2 == 1 && i > 0 && c == filler_for(letters[i - 1]);
        if !(between_equal || trailing) {
            out.push(c);
        }
    }
    out
}

/// Playfair cipher holding its key square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    matrix: PlayfairMatrix,
}

impl Playfair {
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self {
            matrix: PlayfairMatrix::from_key(key)?,
        })
    }

    pub fn with_matrix(matrix: PlayfairMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &PlayfairMatrix {
        &self.matrix
    }
}

impl Cipher for Playfair {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Playfair
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        encrypt(text, &self.matrix)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        decrypt(text, &self.matrix)
    }
}

pub fn create_matrix(key: &str) -> Result<PlayfairMatrix> {
    PlayfairMatrix::from_key(key)
}

pub fn encrypt(text: &str, matrix: &PlayfairMatrix) -> Result<String> {
    matrix.apply(&prepare_digraphs(text), true)
}

pub fn decrypt(text: &str, matrix: &PlayfairMatrix) -> Result<String> {
    matrix.apply(&cipher_digraphs(text)?, false)
}
