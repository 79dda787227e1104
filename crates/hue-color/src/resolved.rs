// SPDX-License-Identifier: MIT
//
// ResolvedColor — every representation of one color, computed once.
//
// The palette generator hands these to callers: a UI swatch wants the hex,
// an export card wants RGB and HSL labels, and the color wheel wants the
// originating HSV back so a drag can continue from where it left off.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Hsv, Rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hsv};
use crate::error::ColorError;
use crate::hex::{format_hex, parse_hex};

/// An immutable, fully-resolved color: hex, RGB, HSL and the source HSV.
///
/// Never mutated. When the source HSV changes, resolve a new one.
///
/// ```
/// use hue_color::{Hsv, ResolvedColor};
///
/// let red = ResolvedColor::from_hsv(Hsv::new(0.0, 1.0, 1.0));
/// assert_eq!(red.hex, "#FF0000");
/// assert_eq!(red.rgb_label(), "RGB(255, 0, 0)");
/// assert_eq!(red.hsl_label(), "HSL(0°, 100%, 50%)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColor {
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    /// The originating HSV, clamped into range.
    pub hsv: Hsv,
}

impl ResolvedColor {
    /// Resolve an HSV color. Out-of-range fields are clamped first.
    #[must_use]
    pub fn from_hsv(hsv: Hsv) -> Self {
        let hsv = hsv.clamped();
        let rgb = hsv_to_rgb(hsv);
        Self {
            hex: format_hex(rgb),
            rgb,
            hsl: hsv_to_hsl(hsv),
            hsv,
        }
    }

    /// Resolve a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for malformed input.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let rgb = parse_hex(hex)?;
        let hsv = rgb_to_hsv(rgb);
        Ok(Self {
            hex: format_hex(rgb),
            rgb,
            hsl: hsv_to_hsl(hsv),
            hsv,
        })
    }

    /// `RGB(r, g, b)`, as printed on exported palette cards.
    #[must_use]
    pub fn rgb_label(&self) -> String {
        format!("RGB({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// `HSL(h°, s%, l%)` with every component rounded to an integer.
    #[must_use]
    pub fn hsl_label(&self) -> String {
        format!(
            "HSL({}°, {}%, {}%)",
            self.hsl.h.round(),
            (self.hsl.s * 100.0).round(),
            (self.hsl.l * 100.0).round()
        )
    }
}

impl fmt::Display for ResolvedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl From<Hsv> for ResolvedColor {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(hsv)
    }
}
