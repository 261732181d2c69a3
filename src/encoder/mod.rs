//! EAN-13 / UPC-A encoder
//!
//! Turns a validated digit string into the ordered bar/space runs of the
//! symbol. Encoding is pure: no I/O and no rendering concerns.

pub mod checksum;
pub mod tables;

pub use checksum::{append_check_digit, check_digit};

use crate::error::EncodeError;
use tables::{CENTER_GUARD, DIGIT_MODULES, PARITY_PATTERNS, R_CODES, SIDE_GUARD};

/// Total width of an EAN-13 symbol in modules
pub const EAN13_MODULES: u32 = 95;

/// Whether a run of modules is printed or left blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Bar,
    Space,
}

/// A run of adjacent modules of the same kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Module {
    pub kind: ModuleKind,
    /// Width in modules (1 to 4 for EAN-13)
    pub width: u8,
}

/// The immutable bar/space runs of one encoded symbol, left to right
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleSequence {
    digits: [u8; 13],
    modules: Vec<Module>,
}

impl ModuleSequence {
    /// Normalized 13 digits, with a leading zero for UPC-A input
    pub fn digits(&self) -> &[u8; 13] {
        &self.digits
    }

    /// Runs in left-to-right order
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Sum of all run widths, always 95 for a complete symbol
    pub fn total_width(&self) -> u32 {
        self.modules.iter().map(|m| u32::from(m.width)).sum()
    }

    /// Runs paired with their starting module offset
    pub fn with_offsets(&self) -> impl Iterator<Item = (u32, Module)> + '_ {
        self.modules.iter().scan(0u32, |offset, &m| {
            let start = *offset;
            *offset += u32::from(m.width);
            Some((start, m))
        })
    }

    /// One `'1'` per bar module and one `'0'` per space module
    pub fn to_bit_string(&self) -> String {
        let mut out = String::with_capacity(EAN13_MODULES as usize);
        for m in &self.modules {
            let c = match m.kind {
                ModuleKind::Bar => '1',
                ModuleKind::Space => '0',
            };
            out.extend(std::iter::repeat(c).take(m.width as usize));
        }
        out
    }

    fn from_bits(digits: [u8; 13], bits: &[bool]) -> Self {
        let mut modules: Vec<Module> = Vec::with_capacity(59);
        for &bar in bits {
            let kind = if bar { ModuleKind::Bar } else { ModuleKind::Space };
            match modules.last_mut() {
                Some(last) if last.kind == kind => last.width += 1,
                _ => modules.push(Module { kind, width: 1 }),
            }
        }
        Self { digits, modules }
    }
}

impl std::fmt::Display for ModuleSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Check characters and length, normalizing UPC-A to 13 digits.
///
/// The check digit is not validated here.
pub(crate) fn parse_code(input: &str) -> Result<[u8; 13], EncodeError> {
    let parsed = checksum::parse_digits(input)?;
    let mut digits = [0u8; 13];
    match parsed.len() {
        13 => digits.copy_from_slice(&parsed),
        12 => digits[1..].copy_from_slice(&parsed),
        n => return Err(EncodeError::InvalidLength(n)),
    }
    Ok(digits)
}

/// Encode 12 (UPC-A) or 13 (EAN-13) digits into their module sequence.
///
/// The last digit must be a valid check digit; it is never derived.
pub fn encode(input: &str) -> Result<ModuleSequence, EncodeError> {
    let digits = parse_code(input)?;

    let mut data = [0u8; 12];
    data.copy_from_slice(&digits[..12]);
    let expected = check_digit(&data);
    if expected != digits[12] {
        return Err(EncodeError::ChecksumMismatch {
            expected,
            found: digits[12],
        });
    }

    let parity = &PARITY_PATTERNS[digits[0] as usize];
    let mut bits = Vec::with_capacity(EAN13_MODULES as usize);
    bits.extend_from_slice(&SIDE_GUARD);
    for (&d, &p) in digits[1..7].iter().zip(parity.iter()) {
        bits.extend_from_slice(&tables::pattern_modules(tables::left_pattern(d, p)));
    }
    bits.extend_from_slice(&CENTER_GUARD);
    for &d in &digits[7..] {
        bits.extend_from_slice(&tables::pattern_modules(R_CODES[d as usize]));
    }
    bits.extend_from_slice(&SIDE_GUARD);
    debug_assert_eq!(bits.len(), 3 + 12 * DIGIT_MODULES + 5 + 3);

    let sequence = ModuleSequence::from_bits(digits, &bits);
    log::debug!(
        "encoded {} (upc-a: {}, parity {:?}) into {} runs",
        sequence,
        input.len() == 12,
        parity,
        sequence.modules().len()
    );
    Ok(sequence)
}
