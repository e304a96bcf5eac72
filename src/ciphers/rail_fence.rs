use crate::algorithm::Algorithm;
use crate::ciphers::Cipher;
use crate::error::{CipherError, Result};

/// Rail Fence (zig-zag) transposition over every character of the text.
///
/// One rail is accepted and leaves the text unchanged; zero or negative
/// rail counts are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    pub fn new(rails: i64) -> Result<Self> {
        if rails < 1 {
            return Err(CipherError::InvalidKey(format!(
                "rail count must be at least 1, got {}",
                rails
            )));
        }
        let rails = usize::try_from(rails).map_err(|_| {
            CipherError::InvalidKey(format!("rail count {} is too large", rails))
        })?;
        Ok(Self { rails })
    }

    pub fn rails(&self) -> usize {
        self.rails
    }
}

/// Rail index of each position under the zig-zag walk
pub fn rail_pattern(len: usize, rails: usize) -> Vec<usize> {
    // Rails past the text length are never reached
    let rails = rails.min(len);
    if rails <= 1 {
        return vec![0; len];
    }
    let cycle = 2 * (rails - 1);
    (0..len)
        .map(|i| {
            let phase = i % cycle;
            if phase < rails {
                phase
            } else {
                cycle - phase
            }
        })
        .collect()
}

impl Cipher for RailFence {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RailFence
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        let pattern = rail_pattern(chars.len(), self.rails);

        let mut fence = vec![String::new(); self.rails.min(chars.len().max(1))];
        for (&c, &rail) in chars.iter().zip(&pattern) {
            fence[rail].push(c);
        }
        Ok(fence.concat())
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        let pattern = rail_pattern(chars.len(), self.rails);

        // How many slots each rail holds
        let mut lengths = vec![0usize; self.rails.min(chars.len().max(1))];
        for &rail in &pattern {
            lengths[rail] += 1;
        }

        // Cut the cipher text into rails, in fence order
        let mut rails = Vec::with_capacity(lengths.len());
        let mut start = 0;
        for len in lengths {
            rails.push(chars[start..start + len].iter());
            start += len;
        }

        let mut plain = String::with_capacity(text.len());
        for rail in pattern {
            match rails[rail].next() {
                Some(&c) => plain.push(c),
                None => {
                    return Err(CipherError::Processing(format!(
                        "rail {} ran out of characters",
                        rail
                    )))
                }
            }
        }
        Ok(plain)
    }
}

pub fn encrypt(text: &str, rails: i64) -> Result<String> {
    RailFence::new(rails)?.encrypt(text)
}

pub fn decrypt(text: &str, rails: i64) -> Result<String> {
    RailFence::new(rails)?.decrypt(text)
}
