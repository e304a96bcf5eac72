//! Scytale - classical text ciphers
//!
//! Five pen-and-paper ciphers behind one interface. None of them offers
//! any real secrecy; they exist for teaching, puzzles and games.
//!
//! | Algorithm     | Key                     | Kind                       |
//! |---------------|-------------------------|----------------------------|
//! | Caesar        | integer shift           | monoalphabetic substitution|
//! | Vigenère      | keyword                 | polyalphabetic substitution|
//! | Rail Fence    | number of rails         | zig-zag transposition      |
//! | Transposition | number of columns       | columnar transposition     |
//! | Playfair      | keyword (5x5 square)    | digraph substitution       |
//!
//! ## Text handling
//!
//! - Caesar and Vigenère shift ASCII letters, keep case, and pass every
//!   other character through. Vigenère only advances its key on letters.
//! - Rail Fence and Transposition move every character, letters or not,
//!   and never change the length.
//! - Playfair works on uppercase letters only, folds J into I and inserts
//!   fillers, so its output is the normalized, padded text.
//!
//! ## Example
//!
//! ```
//! use scytale::ciphers::{build_cipher, playfair, vigenere};
//! use scytale::Algorithm;
//!
//! assert_eq!(vigenere::encrypt("HELLO", "KEY").unwrap(), "RIJVS");
//!
//! let matrix = playfair::create_matrix("MONARCHY").unwrap();
//! assert_eq!(playfair::encrypt("INSTRUMENTS", &matrix).unwrap(), "GATLMZCLRQXA");
//!
//! let cipher = build_cipher(Algorithm::RailFence, "3").unwrap();
//! assert_eq!(cipher.encrypt("WEAREDISCOVEREDFLEEATONCE").unwrap(), "WECRLTEERDSOEEFEAOCAIVDEN");
//! ```

pub mod algorithm;
pub mod alphabet;
pub mod ciphers;
pub mod cli;
pub mod error;
pub mod request;

pub use algorithm::{Algorithm, KeyKind, Operation};
pub use ciphers::{build_cipher, Cipher};
pub use error::{CipherError, Result};
