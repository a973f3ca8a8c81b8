use crate::alphabet::{self, Symbol};
use crate::consts::ALPHABET_LEN;
use crate::error::SubcrackError;
use fastrand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const N: usize = ALPHABET_LEN;

/// A bijection over the 27 symbols, read as a decoding table: position i
/// holds the plaintext symbol for ciphertext symbol i. Moves always build
/// a fresh value; an existing permutation is never edited in place, so
/// anything holding the previous key keeps seeing the previous key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Permutation {
    map: [Symbol; N],
}

impl Permutation {
    pub fn identity() -> Self {
        let mut map = [0u8; N];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as Symbol;
        }
        Self { map }
    }

    /// Uniform random bijection (Fisher-Yates).
    pub fn shuffled(rng: &mut Rng) -> Self {
        let mut p = Self::identity();
        for i in (1..N).rev() {
            let j = rng.usize(0..=i);
            p.map.swap(i, j);
        }
        p
    }

    /// Copy of `self` with positions `i` and `j` exchanged. `i == j` is a
    /// legal draw and returns an equal permutation.
    pub fn transposed(&self, i: usize, j: usize) -> Self {
        let mut next = *self;
        next.map.swap(i, j);
        next
    }

    /// Candidate for the next sampler step: swap two positions drawn
    /// independently and uniformly. The move is symmetric, so a plain
    /// accept rule on the likelihood ratio needs no correction factor.
    pub fn propose(&self, rng: &mut Rng) -> Self {
        let i = rng.usize(0..N);
        let j = rng.usize(0..N);
        self.transposed(i, j)
    }

    #[inline(always)]
    pub fn image(&self, s: Symbol) -> Symbol {
        self.map[s as usize]
    }

    /// Decodes an encoded sequence under this key.
    pub fn apply(&self, seq: &[Symbol]) -> Vec<Symbol> {
        seq.iter().map(|&s| self.image(s)).collect()
    }

    /// The encoding direction of this key.
    pub fn inverse(&self) -> Self {
        let mut map = [0u8; N];
        for (i, &v) in self.map.iter().enumerate() {
            map[v as usize] = i as Symbol;
        }
        Self { map }
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; N];
        for &v in &self.map {
            if (v as usize) >= N || seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        true
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.map {
            write!(f, "{}", alphabet::char_of(s))?;
        }
        Ok(())
    }
}

impl FromStr for Permutation {
    type Err = SubcrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = alphabet::encode(s)
            .map_err(|_| SubcrackError::InvalidKey(format!("unexpected character in {s:?}")))?;
        if symbols.len() != N {
            return Err(SubcrackError::InvalidKey(format!(
                "expected {N} symbols, got {}",
                symbols.len()
            )));
        }
        let mut map = [0u8; N];
        map.copy_from_slice(&symbols);
        let p = Self { map };
        if !p.is_bijection() {
            return Err(SubcrackError::InvalidKey("repeated symbol".into()));
        }
        Ok(p)
    }
}

// Keys travel through JSON as their 27-character string form.

impl Serialize for Permutation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Permutation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
