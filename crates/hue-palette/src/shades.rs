// SPDX-License-Identifier: MIT

//! Named shade families — predefined colors with human names.
//!
//! A shade collection is a list of `{name, hex}` pairs. The builtin
//! families seed new collections; [`sanitize_named_color`] is the check
//! every color goes through before it is stored.

use hue_color::{ColorError, ResolvedColor, normalize_hex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color with a display name, e.g. `Crimson` / `#DC143C`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    /// Uppercase `#RRGGBB`.
    pub hex: String,
}

/// Why a named color was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShadeError {
    #[error("color name is empty")]
    MissingName,

    #[error(transparent)]
    Color(#[from] ColorError),
}

impl NamedColor {
    /// Build a named color without validation.
    #[must_use]
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Resolve the hex into every color representation.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] when `hex` is malformed.
    pub fn resolve(&self) -> Result<ResolvedColor, ColorError> {
        ResolvedColor::from_hex(&self.hex)
    }
}

/// Validate and normalize a color before it joins a shade collection.
///
/// The name is trimmed and must not be empty. The hex must be `#RRGGBB`
/// (any case) and comes back uppercased.
///
/// # Errors
///
/// [`ShadeError::MissingName`] for a blank name, [`ShadeError::Color`] for
/// a malformed hex.
pub fn sanitize_named_color(name: &str, hex: &str) -> Result<NamedColor, ShadeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ShadeError::MissingName);
    }
    if !hex.trim_start().starts_with('#') {
        return Err(ColorError::InvalidColorFormat(hex.to_string()).into());
    }
    Ok(NamedColor::new(name, normalize_hex(hex)?))
}

// ---------------------------------------------------------------------------
// Builtin families
// ---------------------------------------------------------------------------

type Family = &'static [(&'static str, &'static str)];

const RED: Family = &[
    ("Pure Red", "#FF0000"),
    ("Crimson", "#DC143C"),
    ("Cherry Red", "#DE3163"),
    ("Fire Engine Red", "#CE2029"),
    ("Cardinal Red", "#C41E3A"),
    ("Scarlet", "#FF2400"),
    ("Ruby Red", "#E0115F"),
    ("Blood Red", "#8B0000"),
    ("Burgundy", "#800020"),
    ("Maroon", "#800000"),
    ("Light Coral", "#F08080"),
    ("Salmon", "#FA8072"),
    ("Indian Red", "#CD5C5C"),
    ("Tomato", "#FF6347"),
    ("Coral", "#FF7F50"),
    ("Hot Pink", "#FF69B4"),
    ("Deep Pink", "#FF1493"),
    ("Watermelon", "#FF7F7F"),
    ("Rose", "#FF007F"),
    ("Pink Red", "#FF0040"),
];

const BLUE: Family = &[
    ("Pure Blue", "#0000FF"),
    ("Navy Blue", "#000080"),
    ("Royal Blue", "#4169E1"),
    ("Sky Blue", "#87CEEB"),
    ("Light Blue", "#ADD8E6"),
    ("Powder Blue", "#B0E0E6"),
    ("Steel Blue", "#4682B4"),
    ("Midnight Blue", "#191970"),
    ("Cornflower Blue", "#6495ED"),
    ("Deep Sky Blue", "#00BFFF"),
];

const GREEN: Family = &[
    ("Pure Green", "#00FF00"),
    ("Forest Green", "#228B22"),
    ("Dark Green", "#006400"),
    ("Lime Green", "#32CD32"),
    ("Spring Green", "#00FF7F"),
    ("Sea Green", "#2E8B57"),
    ("Medium Sea Green", "#3CB371"),
    ("Light Green", "#90EE90"),
    ("Pale Green", "#98FB98"),
    ("Olive Green", "#808000"),
];

const YELLOW: Family = &[
    ("Pure Yellow", "#FFFF00"),
    ("Gold", "#FFD700"),
    ("Light Yellow", "#FFFFE0"),
    ("Lemon Yellow", "#FFF44F"),
    ("Banana Yellow", "#FFE135"),
    ("Canary Yellow", "#FFEF00"),
    ("Amber", "#FFBF00"),
    ("Dark Golden Rod", "#B8860B"),
    ("Khaki", "#F0E68C"),
    ("Pale Golden Rod", "#EEE8AA"),
];

const PURPLE: Family = &[
    ("Purple", "#800080"),
    ("Violet", "#8A2BE2"),
    ("Indigo", "#4B0082"),
    ("Dark Violet", "#9400D3"),
    ("Medium Purple", "#9370DB"),
    ("Lavender", "#E6E6FA"),
    ("Plum", "#DDA0DD"),
    ("Orchid", "#DA70D6"),
    ("Magenta", "#FF00FF"),
    ("Dark Magenta", "#8B008B"),
];

const ORANGE: Family = &[
    ("Orange", "#FFA500"),
    ("Dark Orange", "#FF8C00"),
    ("Orange Red", "#FF4500"),
    ("Light Orange", "#FFE4B5"),
    ("Peach", "#FFCBA4"),
    ("Papaya Whip", "#FFEFD5"),
    ("Moccasin", "#FFE4B5"),
    ("Coral", "#FF7F50"),
    ("Burnt Orange", "#CC5500"),
    ("Tangerine", "#F28500"),
];

/// Look up a builtin shade family by name (case-insensitive).
///
/// Returns `None` if the family is not recognized.
#[must_use]
pub fn builtin_shades(family: &str) -> Option<Vec<NamedColor>> {
    let table = match family.trim().to_lowercase().as_str() {
        "red" => RED,
        "blue" => BLUE,
        "green" => GREEN,
        "yellow" => YELLOW,
        "purple" => PURPLE,
        "orange" => ORANGE,
        _ => return None,
    };
    Some(
        table
            .iter()
            .map(|&(name, hex)| NamedColor::new(name, hex))
            .collect(),
    )
}

/// List all builtin shade family names.
#[must_use]
pub const fn shade_families() -> &'static [&'static str] {
    &["red", "blue", "green", "yellow", "purple", "orange"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
