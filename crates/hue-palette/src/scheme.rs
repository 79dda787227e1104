// SPDX-License-Identifier: MIT

//! Color-theory schemes — pure hue arithmetic.
//!
//! Each scheme maps a base hue and a slot count to one hue per palette slot.
//! The first slot is always the base hue itself. Brightness variation for
//! slots beyond the scheme's natural anchors lives in [`crate::palette`].

use std::fmt;

use hue_color::normalize_hue;
use serde::{Deserialize, Serialize};

/// Hue step between neighbours in an analogous palette.
pub const ANALOGOUS_STEP: f64 = 20.0;

/// The color-theory relationship a palette expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Base hue and its opposite (180°), bridged by brightness.
    #[default]
    Complementary,
    /// One hue, stepped brightness.
    Monochromatic,
    /// Neighbouring hues fanned out around the base.
    Analogous,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart.
    Tetradic,
}

impl Scheme {
    /// Machine name, as used in URLs, config files and the CLI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Monochromatic => "Monochromatic",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
        }
    }

    /// Parse a scheme from its name (case-insensitive, surrounding
    /// whitespace ignored).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// Parse a scheme, falling back to [`Scheme::Complementary`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(scheme = name, "unknown scheme, using complementary");
            Self::default()
        })
    }

    /// All available schemes, in UI order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Monochromatic,
            Self::Analogous,
            Self::Triadic,
            Self::Tetradic,
        ]
    }

    /// Hue offsets (degrees) of the scheme's anchor colors.
    #[must_use]
    pub const fn anchors(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[0.0, 180.0],
            Self::Monochromatic | Self::Analogous => &[0.0],
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::Tetradic => &[0.0, 90.0, 180.0, 270.0],
        }
    }

    /// One hue per slot for a palette of `count` colors.
    ///
    /// The first element is always `base_hue` (normalized). All values are
    /// in [0, 360). `count` is used as given; clamping to the palette range
    /// is the generator's job.
    #[must_use]
    pub fn hues(self, base_hue: f64, count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| normalize_hue(base_hue + self.offset(i, count)))
            .collect()
    }

    /// Hue offset of slot `i` in a palette of `count` colors.
    #[allow(clippy::cast_precision_loss)]
    fn offset(self, i: usize, count: usize) -> f64 {
        match self {
            Self::Complementary => {
                // Slots in the first half keep the base hue; the rest take
                // the complement. The last slot is always the complement.
                let last = count.saturating_sub(1).max(1);
                if 2 * i < last { 0.0 } else { 180.0 }
            }
            Self::Monochromatic => 0.0,
            Self::Analogous => {
                // 0, +s, -s, +2s, -2s, ...
                if i == 0 {
                    0.0
                } else {
                    let ring = i.div_ceil(2) as f64;
                    let sign = if i % 2 == 1 { 1.0 } else { -1.0 };
                    sign * ring * ANALOGOUS_STEP
                }
            }
            Self::Triadic | Self::Tetradic => {
                let anchors = self.anchors();
                anchors[i % anchors.len()]
            }
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
