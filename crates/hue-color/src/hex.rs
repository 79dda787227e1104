// SPDX-License-Identifier: MIT
//
// Hex string parsing and formatting.
//
// Only the six-digit form is accepted: `#RRGGBB` or `RRGGBB`, any case.
// Shorthand (`#RGB`) and alpha (`#RRGGBBAA`) forms are rejected so every
// stored color has exactly one spelling once uppercased.

use crate::color::Rgb;
use crate::error::ColorError;

/// Parse `#RRGGBB` / `RRGGBB` (case-insensitive) into 8-bit RGB.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if the input (after an
/// optional leading `#`) isn't exactly six hex digits.
pub fn parse_hex(s: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidColorFormat(s.to_owned());
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

    if digits.len() != 6 {
        return Err(invalid());
    }

    let r = parse_hex_byte(&digits[0..2]).ok_or_else(invalid)?;
    let g = parse_hex_byte(&digits[2..4]).ok_or_else(invalid)?;
    let b = parse_hex_byte(&digits[4..6]).ok_or_else(invalid)?;
    Ok(Rgb::new(r, g, b))
}

/// Format as uppercase `#RRGGBB`, zero-padded per channel.
#[must_use]
pub fn format_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Whether `s` is a valid six-digit hex color (with or without `#`).
#[must_use]
pub fn is_hex6(s: &str) -> bool {
    parse_hex(s).is_ok()
}

/// Normalize a hex color to its canonical uppercase `#RRGGBB` spelling.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for unparseable input.
pub fn normalize_hex(s: &str) -> Result<String, ColorError> {
    parse_hex(s.trim()).map(format_hex)
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}
