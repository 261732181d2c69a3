//! Weighted modulo-10 check digit shared by EAN-13 and UPC-A

use crate::error::EncodeError;

/// Check digit for the 12 data digits of an EAN-13 code.
///
/// Digits at even indices weigh 1 and digits at odd indices weigh 3.
pub fn check_digit(data: &[u8; 12]) -> u8 {
    let sum: u32 = data
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Append the computed check digit to 11 UPC-A or 12 EAN-13 data digits.
///
/// This is a convenience for producing valid codes. `encode` never calls it
/// and always validates the supplied check digit.
pub fn append_check_digit(data: &str) -> Result<String, EncodeError> {
    let digits = parse_digits(data)?;
    let mut padded = [0u8; 12];
    match digits.len() {
        12 => padded.copy_from_slice(&digits),
        11 => padded[1..].copy_from_slice(&digits),
        n => return Err(EncodeError::InvalidLength(n)),
    }
    let check = check_digit(&padded);
    Ok(format!("{data}{check}"))
}

/// Convert ASCII digits to their values, rejecting empty input and anything else
pub(crate) fn parse_digits(input: &str) -> Result<Vec<u8>, EncodeError> {
    if input.is_empty() {
        return Err(EncodeError::InvalidCharacters {
            position: 0,
            found: None,
        });
    }
    input
        .chars()
        .enumerate()
        .map(|(position, c)| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(EncodeError::InvalidCharacters {
                position,
                found: Some(c),
            }),
        })
        .collect()
}
