//! EAN-13 symbol tables
//!
//! Digit patterns are stored as 7-bit values read most-significant bit first,
//! where a set bit is a bar module and a clear bit is a space module.

/// Width of one encoded digit in modules
pub const DIGIT_MODULES: usize = 7;

/// Start and end guard: bar, space, bar
pub const SIDE_GUARD: [bool; 3] = [true, false, true];

/// Center guard: space, bar, space, bar, space
pub const CENTER_GUARD: [bool; 5] = [false, true, false, true, false];

/// Left-hand odd parity (L-code)
pub const L_CODES: [u8; 10] = [
    0b0001101, // 0
    0b0011001, // 1
    0b0010011, // 2
    0b0111101, // 3
    0b0100011, // 4
    0b0110001, // 5
    0b0101111, // 6
    0b0111011, // 7
    0b0110111, // 8
    0b0001011, // 9
];

/// Left-hand even parity (G-code), the mirror image of the R-code
pub const G_CODES: [u8; 10] = [
    0b0100111, // 0
    0b0110011, // 1
    0b0011011, // 2
    0b0100001, // 3
    0b0011101, // 4
    0b0111001, // 5
    0b0000101, // 6
    0b0010001, // 7
    0b0001001, // 8
    0b0010111, // 9
];

/// Right-hand code (R-code), the bitwise complement of the L-code
pub const R_CODES: [u8; 10] = [
    0b1110010, // 0
    0b1100110, // 1
    0b1101100, // 2
    0b1000010, // 3
    0b1011100, // 4
    0b1001110, // 5
    0b1010000, // 6
    0b1000100, // 7
    0b1001000, // 8
    0b1110100, // 9
];

/// Code set used for one left-hand digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    L,
    G,
}

use Parity::{G, L};

/// Left-hand parity pattern selected by the leading digit
pub const PARITY_PATTERNS: [[Parity; 6]; 10] = [
    [L, L, L, L, L, L], // 0 (UPC-A)
    [L, L, G, L, G, G], // 1
    [L, L, G, G, L, G], // 2
    [L, L, G, G, G, L], // 3
    [L, G, L, L, G, G], // 4
    [L, G, G, L, L, G], // 5
    [L, G, G, G, L, L], // 6
    [L, G, L, G, L, G], // 7
    [L, G, L, G, G, L], // 8
    [L, G, G, L, G, L], // 9
];

/// Expand a 7-bit digit pattern into modules, leftmost first
pub fn pattern_modules(pattern: u8) -> [bool; DIGIT_MODULES] {
    let mut out = [false; DIGIT_MODULES];
    for (i, m) in out.iter_mut().enumerate() {
        *m = pattern & (1 << (DIGIT_MODULES - 1 - i)) != 0;
    }
    out
}

/// Pattern for a left-hand digit under the given parity
pub fn left_pattern(digit: u8, parity: Parity) -> u8 {
    match parity {
        Parity::L => L_CODES[digit as usize],
        Parity::G => G_CODES[digit as usize],
    }
}
