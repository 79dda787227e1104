// SPDX-License-Identifier: MIT

//! Palette generation — from a base color and a scheme to resolved colors.
//!
//! Hues come from [`Scheme::hues`]. This module decides the brightness of
//! each slot and resolves every HSV value into a [`ResolvedColor`].
//!
//! # Brightness per scheme
//!
//! | Scheme          | Value of slot `i` (of `n`, `t = i / (n-1)`)           |
//! |-----------------|-------------------------------------------------------|
//! | complementary   | `v * (1 - 0.45 * (1 - abs(2t - 1)))` (ends unchanged) |
//! | monochromatic   | evenly spaced from 0.95 down to 0.20                  |
//! | analogous       | `v`                                                   |
//! | triadic         | `v * (1 - 0.3 * (i / 3))`                             |
//! | tetradic        | `v * (1 - 0.3 * (i / 4))`                             |
//!
//! Saturation and alpha always carry over from the base. Output is a pure
//! function of the inputs: the same call returns the same colors, so a UI
//! can regenerate on every slider tick without flicker.

use hue_color::{Hsv, ResolvedColor};

use crate::scheme::Scheme;

/// Smallest palette the generator produces.
pub const MIN_COUNT: usize = 2;

/// Largest palette the generator produces.
pub const MAX_COUNT: usize = 8;

/// How far the middle of a complementary palette dips in value.
const COMPLEMENT_DIP: f64 = 0.45;

/// Brightness range of a monochromatic palette (lightest first).
const MONO_BRIGHTEST: f64 = 0.95;
const MONO_DARKEST: f64 = 0.20;

/// Value lost per pass around the anchors in triadic/tetradic palettes.
const FILL_STEP: f64 = 0.3;

/// Clamp a requested palette size into [`MIN_COUNT`, `MAX_COUNT`].
#[must_use]
pub const fn clamp_count(count: usize) -> usize {
    if count < MIN_COUNT {
        MIN_COUNT
    } else if count > MAX_COUNT {
        MAX_COUNT
    } else {
        count
    }
}

/// Generate a palette of `count` resolved colors.
///
/// `count` is clamped into 2–8 rather than rejected. The base color is
/// clamped into range before any arithmetic.
///
/// ```
/// use hue_color::Hsv;
/// use hue_palette::{Scheme, generate_palette};
///
/// let palette = generate_palette(Hsv::new(0.0, 1.0, 1.0), Scheme::Complementary, 2);
/// assert_eq!(palette[0].hex, "#FF0000");
/// assert_eq!(palette[1].hex, "#00FFFF");
/// ```
#[must_use]
pub fn generate_palette(base: Hsv, scheme: Scheme, count: usize) -> Vec<ResolvedColor> {
    palette_hsv(base, scheme, count)
        .into_iter()
        .map(ResolvedColor::from_hsv)
        .collect()
}

/// Like [`generate_palette`], taking the scheme by name.
///
/// Unknown names fall back to complementary.
#[must_use]
pub fn generate_palette_named(base: Hsv, scheme: &str, count: usize) -> Vec<ResolvedColor> {
    generate_palette(base, Scheme::from_name_or_default(scheme), count)
}

/// The unresolved HSV values behind [`generate_palette`].
#[must_use]
pub fn palette_hsv(base: Hsv, scheme: Scheme, count: usize) -> Vec<Hsv> {
    let n = clamp_count(count);
    if n != count {
        tracing::debug!(requested = count, used = n, "palette size clamped");
    }

    let base = base.clamped();
    scheme
        .hues(base.h, n)
        .into_iter()
        .enumerate()
        .map(|(i, h)| Hsv {
            h,
            v: slot_value(scheme, base.v, i, n),
            ..base
        })
        .collect()
}

/// Brightness of slot `i` in a palette of `n` colors (`n >= 2`).
#[allow(clippy::cast_precision_loss)]
fn slot_value(scheme: Scheme, base_v: f64, i: usize, n: usize) -> f64 {
    let t = i as f64 / (n - 1) as f64;
    let v = match scheme {
        Scheme::Complementary => {
            let dip = 1.0 - 2.0f64.mul_add(t, -1.0).abs();
            base_v * COMPLEMENT_DIP.mul_add(-dip, 1.0)
        }
        Scheme::Monochromatic => (MONO_BRIGHTEST - MONO_DARKEST).mul_add(-t, MONO_BRIGHTEST),
        Scheme::Analogous => base_v,
        Scheme::Triadic | Scheme::Tetradic => {
            let round = (i / scheme.anchors().len()) as f64;
            base_v * FILL_STEP.mul_add(-round, 1.0)
        }
    };
    v.clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
