use crate::consts::{ALPHABET_LEN, SPACE_INDEX};
use crate::error::{ScResult, SubcrackError};

/// Index of a symbol in the cipher alphabet.
/// 0..=25 map to 'a'..='z', 26 is the space.
pub type Symbol = u8;

/// Maps one character to its alphabet index. Characters outside the
/// alphabet are rejected, never dropped or remapped; `position` feeds the
/// error so the caller can point at the offending spot in its input.
pub fn symbol_of(ch: char, position: usize) -> ScResult<Symbol> {
    match ch {
        'a'..='z' => Ok(ch as u8 - b'a'),
        ' ' => Ok(SPACE_INDEX),
        _ => Err(SubcrackError::InvalidSymbol { ch, position }),
    }
}

pub fn char_of(sym: Symbol) -> char {
    debug_assert!((sym as usize) < ALPHABET_LEN);
    if sym == SPACE_INDEX {
        ' '
    } else {
        (b'a' + sym) as char
    }
}

pub fn encode(text: &str) -> ScResult<Vec<Symbol>> {
    text.chars()
        .enumerate()
        .map(|(i, c)| symbol_of(c, i))
        .collect()
}

pub fn decode(seq: &[Symbol]) -> String {
    seq.iter().map(|&s| char_of(s)).collect()
}
