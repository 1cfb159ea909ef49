//! Two-character labels standing in for card pictures.

use crate::fb::Rgb;
use crate::types::SymbolId;

const ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// How many distinct labels the terminal can show.
pub const SYMBOL_COUNT: usize = ALPHABET.len() * ALPHABET.len();

const PALETTE: [Rgb; 8] = [
    Rgb::new(240, 110, 110),
    Rgb::new(110, 210, 120),
    Rgb::new(240, 210, 90),
    Rgb::new(110, 150, 240),
    Rgb::new(210, 120, 220),
    Rgb::new(90, 210, 210),
    Rgb::new(255, 165, 60),
    Rgb::new(230, 230, 230),
];

/// Label for `symbol`.
///
/// The first 36 symbols are a single glyph padded on the left; later ones use
/// two glyphs with a non-blank leading character, so labels never collide.
pub fn symbol_label(symbol: SymbolId) -> [char; 2] {
    let id = symbol as usize % SYMBOL_COUNT;
    let base = ALPHABET.len();
    if id < base {
        [' ', ALPHABET[id]]
    } else {
        [ALPHABET[id / base], ALPHABET[id % base]]
    }
}

/// Foreground color for `symbol`
pub fn symbol_color(symbol: SymbolId) -> Rgb {
    PALETTE[symbol as usize % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<[char; 2]> = (0..SYMBOL_COUNT as SymbolId).map(symbol_label).collect();
        assert_eq!(labels.len(), SYMBOL_COUNT);
    }

    #[test]
    fn small_ids_are_single_glyphs() {
        assert_eq!(symbol_label(0), [' ', 'A']);
        assert_eq!(symbol_label(35), [' ', '9']);
        assert_eq!(symbol_label(36), ['B', 'A']);
    }

    #[test]
    fn largest_preset_fits() {
        // 32x32 grid
        assert!(SYMBOL_COUNT >= 512);
    }
}
