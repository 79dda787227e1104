// SPDX-License-Identifier: MIT
//
// hue-color — HSV-native color conversion.
//
// Single-character variable names (r, g, b, h, s, v, l, c, x, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// HSV is the editing space: the color wheel maps hue to an angle and
// saturation to a radius, with value (brightness) as a separate slider.
// Everything downstream (palette schemes, gradient stop suggestions)
// works in HSV and only converts to RGB, HSL or hex for output.
//
// Conversion graph:
//
//   Hsv ──► unit RGB (0.0–1.0) ──► Rgb (u8) ──► #RRGGBB
//    ▲          │                    │
//    │          └──► Hsl             │
//    └───────────────────────────────┘  (rgb_to_hsv)
//
// Every function here is total over finite input. Out-of-range saturation,
// value and alpha are clamped into [0, 1]; hue wraps modulo 360.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::hex::{format_hex, parse_hex};

/// Below this, saturation or lightness spread counts as zero.
const EPS: f64 = 1e-9;

// ─── Hsv ─────────────────────────────────────────────────────────────────────

/// A color in HSV space with alpha.
///
/// This is the canonical representation the palette generator and the
/// gradient tools operate on. Construct with [`Hsv::new`], or parse a hex
/// string with [`hex_to_hsv`].
///
/// ```
/// use hue_color::{Hsv, hsv_to_hex};
///
/// let sky = Hsv::new(210.0, 0.8, 0.8);
/// assert_eq!(hsv_to_hex(sky), "#297ACC");
///
/// // Hue wraps around the wheel.
/// assert_eq!(hsv_to_hex(Hsv::new(370.0, 1.0, 1.0)), hsv_to_hex(Hsv::new(10.0, 1.0, 1.0)));
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue angle in degrees. Any finite value; wrapped to [0, 360) on use.
    pub h: f64,

    /// Saturation: 0.0 (gray) to 1.0 (fully saturated).
    pub s: f64,

    /// Value (brightness): 0.0 (black) to 1.0 (full brightness).
    pub v: f64,

    /// Alpha: 0.0 (transparent) to 1.0 (opaque).
    #[serde(default = "opaque")]
    pub a: f64,
}

const fn opaque() -> f64 {
    1.0
}

impl Hsv {
    /// Create an opaque HSV color.
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v, a: 1.0 }
    }

    /// Create an HSV color with alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(0.0, 0.0, 1.0);

    /// Bring every field into its documented range.
    ///
    /// Hue is wrapped into [0, 360); saturation, value and alpha are clamped
    /// into [0, 1]. Non-finite fields fall back to 0 (alpha to 1).
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: unit(self.s, 0.0),
            v: unit(self.v, 0.0),
            a: unit(self.a, 1.0),
        }
    }

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Set value to an absolute level (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn set_value(self, v: f64) -> Self {
        Self {
            v: unit(v, 0.0),
            ..self
        }
    }

    /// Multiply value by `factor` (result clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn scale_value(self, factor: f64) -> Self {
        self.set_value(self.v * factor)
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        hsv_to_hex(self)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        hsv_to_hsl(self)
    }
}

impl fmt::Debug for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "Hsv({:.1}°, {:.3}, {:.3})", self.h, self.s, self.v)
        } else {
            write!(
                f,
                "Hsv({:.1}°, {:.3}, {:.3}, a={:.2})",
                self.h, self.s, self.v, self.a
            )
        }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Hsv {
    /// Default is opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Add signed offsets to each channel, clamping to [0, 255].
    ///
    /// No wraparound: `255 + 50` stays `255`.
    #[must_use]
    pub fn offset(self, dr: i32, dg: i32, db: i32) -> Self {
        Self {
            r: clamp_channel(i32::from(self.r).saturating_add(dr)),
            g: clamp_channel(i32::from(self.g).saturating_add(dg)),
            b: clamp_channel(i32::from(self.b).saturating_add(db)),
        }
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format_hex(self)
    }

    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    /// CSS `rgba(r, g, b, a)` with alpha clamped to [0, 1].
    #[must_use]
    pub fn to_rgba_css(self, alpha: f64) -> String {
        let a = unit(alpha, 1.0);
        format!("rgba({}, {}, {}, {a})", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(v: i32) -> u8 {
    // Safe: clamp guarantees 0 <= v <= 255 before the cast.
    v.clamp(0, 255) as u8
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space. Saturation and lightness are fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        hsl_to_hsv(self)
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360). Non-finite input maps to 0.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid may round a tiny negative up to exactly 360.
    if h >= 360.0 { 0.0 } else { h }
}

/// Clamp into [0, 1], mapping non-finite input to `fallback`.
#[inline]
fn unit(x: f64, fallback: f64) -> f64 {
    if x.is_finite() { x.clamp(0.0, 1.0) } else { fallback }
}

/// HSV → unit RGB, before quantization.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsv_to_unit_rgb(hsv: Hsv) -> (f64, f64, f64) {
    let h = normalize_hue(hsv.h);
    let s = unit(hsv.s, 0.0);
    let v = unit(hsv.v, 0.0);

    let c = v * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = v - c;

    // Safe: h is in [0, 360), so sector is in [0, 6).
    let (r, g, b) = match sector as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

/// Convert HSV to 8-bit RGB.
///
/// Hue is taken modulo 360. Saturation and value are clamped to [0, 1].
/// Channels are rounded half-up.
#[must_use]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let (r, g, b) = hsv_to_unit_rgb(hsv);
    Rgb::new(to_u8(r), to_u8(g), to_u8(b))
}

/// Convert 8-bit RGB to HSV.
///
/// Achromatic input (`r == g == b`) returns `s = 0` and `h = 0` — hue is
/// undefined for grays, and zero keeps the result free of NaN.
#[must_use]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = f64::from(max) / 255.0;

    if max == min {
        return Hsv::new(0.0, 0.0, v);
    }

    let d = f64::from(max - min);
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));

    let h = if max == r {
        60.0 * ((gf - bf) / d)
    } else if max == g {
        60.0 * ((bf - rf) / d + 2.0)
    } else {
        60.0 * ((rf - gf) / d + 4.0)
    };

    Hsv::new(normalize_hue(h), d / f64::from(max), v)
}

/// Convert HSV to an uppercase `#RRGGBB` string.
#[must_use]
pub fn hsv_to_hex(hsv: Hsv) -> String {
    format_hex(hsv_to_rgb(hsv))
}

/// Parse a `#RRGGBB` / `RRGGBB` string (case-insensitive) into HSV.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for anything that isn't
/// exactly six hex digits with an optional leading `#`.
pub fn hex_to_hsv(hex: &str) -> Result<Hsv, ColorError> {
    parse_hex(hex).map(rgb_to_hsv)
}

/// Convert HSV to HSL.
///
/// Lightness is `(max + min) / 2` over the unquantized RGB channels, and
/// saturation is recomputed relative to that lightness. Hue is carried over
/// (normalized into [0, 360)).
#[must_use]
pub fn hsv_to_hsl(hsv: Hsv) -> Hsl {
    let (r, g, b) = hsv_to_unit_rgb(hsv);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let l = (max + min) * 0.5;

    let denom = 1.0 - 2.0f64.mul_add(l, -1.0).abs();
    let s = if d < EPS || denom < EPS {
        0.0
    } else {
        (d / denom).clamp(0.0, 1.0)
    };

    Hsl::new(normalize_hue(hsv.h), s, l)
}

/// Convert HSL back to HSV.
#[must_use]
pub fn hsl_to_hsv(hsl: Hsl) -> Hsv {
    let s = unit(hsl.s, 0.0);
    let l = unit(hsl.l, 0.0);
    let v = s.mul_add(l.min(1.0 - l), l);
    let sv = if v < EPS { 0.0 } else { 2.0 * (1.0 - l / v) };
    Hsv::new(normalize_hue(hsl.h), sv.clamp(0.0, 1.0), v)
}

/// Convert a fraction (0.0–1.0) to a u8 (0–255), rounding half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
