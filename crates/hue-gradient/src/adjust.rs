// SPDX-License-Identifier: MIT

//! Stop adjustments: RGB preview shuffles and offsets, and the "add stop"
//! suggestion.
//!
//! A preview first reorders each stop's channels, then applies the offset:
//!
//! ```text
//! #RRGGBB ── shuffle_rgb(order) ──► apply_rgb_offset(offset) ──► #RRGGBB
//! ```

use hue_color::{ColorError, Hsv, Rgb, hex_to_hsv, parse_hex};
use serde::{Deserialize, Serialize};

use crate::model::GradientStop;

/// Most stops a text gradient editor allows.
pub const MAX_TEXT_STOPS: usize = 3;

/// Hue step from the last stop to a suggested new one.
const SUGGEST_HUE_STEP: f64 = 30.0;

/// Floors that keep a suggested stop vivid.
const SUGGEST_MIN_S: f64 = 0.75;
const SUGGEST_MIN_V: f64 = 0.85;

/// Gray used when there is no previous stop to derive from.
const SUGGEST_SEED: &str = "#888888";

/// Signed per-channel tweak applied to every stop for previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RgbOffset {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl RgbOffset {
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Which source channel feeds each of R, G and B in a shuffled preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ChannelOrder {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Rgb, Self::Rbg, Self::Grb, Self::Gbr, Self::Brg, Self::Bgr]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rbg => "rbg",
            Self::Grb => "grb",
            Self::Gbr => "gbr",
            Self::Brg => "brg",
            Self::Bgr => "bgr",
        }
    }

    /// Parse an order name, case-insensitively. Anything unknown keeps the
    /// channels as they are.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|o| o.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                tracing::debug!(name, "unknown channel order, keeping rgb");
                Self::Rgb
            })
    }

    #[must_use]
    pub const fn apply(self, rgb: Rgb) -> Rgb {
        let Rgb { r, g, b } = rgb;
        match self {
            Self::Rgb => Rgb::new(r, g, b),
            Self::Rbg => Rgb::new(r, b, g),
            Self::Grb => Rgb::new(g, r, b),
            Self::Gbr => Rgb::new(g, b, r),
            Self::Brg => Rgb::new(b, r, g),
            Self::Bgr => Rgb::new(b, g, r),
        }
    }
}

/// Reorder the channels of `hex`.
///
/// ```
/// use hue_gradient::{ChannelOrder, shuffle_rgb};
///
/// assert_eq!(shuffle_rgb("#112233", ChannelOrder::Bgr).unwrap(), "#332211");
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `hex` isn't `#RRGGBB`.
pub fn shuffle_rgb(hex: &str, order: ChannelOrder) -> Result<String, ColorError> {
    Ok(order.apply(parse_hex(hex)?).to_hex())
}

/// Add `offset` to each channel of `hex`, clamping to [0, 255].
///
/// ```
/// use hue_gradient::{RgbOffset, apply_rgb_offset};
///
/// assert_eq!(apply_rgb_offset("#FFFFFF", RgbOffset::new(50, 0, 0)).unwrap(), "#FFFFFF");
/// assert_eq!(apply_rgb_offset("#102030", RgbOffset::new(-32, 1, 2)).unwrap(), "#002132");
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `hex` isn't `#RRGGBB`.
pub fn apply_rgb_offset(hex: &str, offset: RgbOffset) -> Result<String, ColorError> {
    let rgb = parse_hex(hex)?;
    Ok(rgb.offset(offset.r, offset.g, offset.b).to_hex())
}

/// Apply `offset` to every stop's color.
///
/// # Errors
///
/// Fails on the first stop whose color isn't `#RRGGBB`.
pub fn offset_stops(
    stops: &[GradientStop],
    offset: RgbOffset,
) -> Result<Vec<GradientStop>, ColorError> {
    preview_stops(stops, ChannelOrder::Rgb, offset)
}

/// Shuffle every stop's channels by `order`, then add `offset`.
///
/// # Errors
///
/// Fails on the first stop whose color isn't `#RRGGBB`.
pub fn preview_stops(
    stops: &[GradientStop],
    order: ChannelOrder,
    offset: RgbOffset,
) -> Result<Vec<GradientStop>, ColorError> {
    stops
        .iter()
        .map(|s| {
            let shuffled = order.apply(parse_hex(&s.color)?);
            Ok(GradientStop {
                color: shuffled.offset(offset.r, offset.g, offset.b).to_hex(),
                ..s.clone()
            })
        })
        .collect()
}

/// Whether the text gradient editor would accept another stop.
#[must_use]
pub const fn can_add_stop(stops: &[GradientStop]) -> bool {
    stops.len() < MAX_TEXT_STOPS
}

/// Suggest the next stop to add.
///
/// With exactly two stops the new one goes in the middle (50%). Otherwise
/// it goes 20 points past the furthest stop, capped at 100; with no stops
/// it starts at 0. The color is the last stop's hue rotated 30°, pushed to
/// at least 75% saturation and 85% value so it stands out.
#[must_use]
pub fn next_stop(stops: &[GradientStop]) -> GradientStop {
    let position = match stops.len() {
        0 => 0.0,
        2 => 50.0,
        _ => {
            let furthest = stops
                .iter()
                .map(|s| s.position)
                .fold(f64::NEG_INFINITY, f64::max);
            (furthest + 20.0).min(100.0)
        }
    };

    let last = stops.last().map_or(SUGGEST_SEED, |s| s.color.as_str());
    let last = hex_to_hsv(last).unwrap_or_else(|_| {
        tracing::debug!(color = last, "unparseable stop color, seeding suggestion from gray");
        Hsv::new(0.0, 0.0, 0.5)
    });

    let color = Hsv {
        s: last.s.max(SUGGEST_MIN_S),
        v: last.v.max(SUGGEST_MIN_V),
        ..last
    }
    .shift_hue(SUGGEST_HUE_STEP);

    GradientStop::new(color.to_hex(), position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn offset_clamps_high() {
        assert_eq!(
            apply_rgb_offset("#FFFFFF", RgbOffset { r: 50, ..RgbOffset::default() }).unwrap(),
            "#FFFFFF"
        );
    }

    #[test]
    fn offset_clamps_low() {
        assert_eq!(
            apply_rgb_offset("#000000", RgbOffset::new(-5, 10, 0)).unwrap(),
            "#000A00"
        );
    }

    #[test]
    fn offset_uppercases() {
        assert_eq!(apply_rgb_offset("#ff00aa", RgbOffset::default()).unwrap(), "#FF00AA");
        assert_eq!(apply_rgb_offset("ff00aa", RgbOffset::default()).unwrap(), "#FF00AA");
    }

    #[test]
    fn offset_rejects_garbage() {
        assert!(apply_rgb_offset("not-a-color", RgbOffset::default()).is_err());
        assert!(apply_rgb_offset("#FFF", RgbOffset::new(1, 1, 1)).is_err());
    }

    #[test]
    fn offset_every_stop() {
        let stops = vec![
            GradientStop::new("#101010", 0.0),
            GradientStop::new("#F0F0F0", 100.0).with_opacity(0.5),
        ];
        let shifted = offset_stops(&stops, RgbOffset::new(16, 0, -16)).unwrap();
        assert_eq!(shifted[0].color, "#201000");
        assert_eq!(shifted[1].color, "#FFF0E0");
        assert!((shifted[1].opacity - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_zero() {
        assert!(RgbOffset::default().is_zero());
        assert!(!RgbOffset::new(0, 1, 0).is_zero());
    }

    #[test]
    fn next_stop_between_two() {
        let stops = vec![
            GradientStop::new("#0000FF", 0.0),
            GradientStop::new("#FF0000", 100.0),
        ];
        let stop = next_stop(&stops);
        assert!((stop.position - 50.0).abs() < f64::EPSILON);
        // Red rotated 30° is orange.
        assert_eq!(stop.color, "#FF8000");
        assert!((stop.opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn next_stop_after_one() {
        let stop = next_stop(&[GradientStop::new("#FF0000", 10.0)]);
        assert!((stop.position - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn next_stop_position_capped() {
        let stops = vec![
            GradientStop::new("#000000", 0.0),
            GradientStop::new("#000000", 95.0),
            GradientStop::new("#000000", 40.0),
        ];
        assert!((next_stop(&stops).position - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn next_stop_is_vivid() {
        let stop = next_stop(&[GradientStop::new("#4ECDC4", 0.0)]);
        let hsv = hex_to_hsv(&stop.color).unwrap();
        assert!(hsv.s >= SUGGEST_MIN_S - 0.01, "{hsv:?}");
        assert!(hsv.v >= SUGGEST_MIN_V - 0.01, "{hsv:?}");
    }

    #[test]
    fn next_stop_from_nothing() {
        let stop = next_stop(&[]);
        assert!(stop.position.abs() < f64::EPSILON);
        assert!(parse_hex(&stop.color).is_ok());
    }

    #[test]
    fn every_channel_order() {
        let cases = [
            (ChannelOrder::Rgb, "#112233"),
            (ChannelOrder::Rbg, "#113322"),
            (ChannelOrder::Grb, "#221133"),
            (ChannelOrder::Gbr, "#223311"),
            (ChannelOrder::Brg, "#331122"),
            (ChannelOrder::Bgr, "#332211"),
        ];
        for (order, want) in cases {
            assert_eq!(shuffle_rgb("#112233", order).unwrap(), want, "{}", order.name());
        }
        assert!(shuffle_rgb("#123", ChannelOrder::Gbr).is_err());
    }

    #[test]
    fn channel_order_names() {
        for &order in ChannelOrder::all() {
            assert_eq!(ChannelOrder::from_name(order.name()), order);
        }
        assert_eq!(ChannelOrder::from_name(" GBR "), ChannelOrder::Gbr);
        assert_eq!(ChannelOrder::from_name("xyz"), ChannelOrder::Rgb);
        assert_eq!(ChannelOrder::from_name(""), ChannelOrder::Rgb);
    }

    #[test]
    fn shuffle_runs_before_offset() {
        let stops = vec![GradientStop::new("#F01000", 0.0).with_opacity(0.25)];
        // gbr moves red into blue; the +20 on red then lands on the old green.
        let out = preview_stops(&stops, ChannelOrder::Gbr, RgbOffset::new(20, 0, 0)).unwrap();
        assert_eq!(out[0].color, "#2400F0");
        assert!((out[0].opacity - 0.25).abs() < f64::EPSILON);

        // Offsetting first would have clamped red and given a different color.
        let reversed = shuffle_rgb(
            &apply_rgb_offset("#F01000", RgbOffset::new(20, 0, 0)).unwrap(),
            ChannelOrder::Gbr,
        )
        .unwrap();
        assert_eq!(reversed, "#1000FF");
    }

    #[test]
    fn stop_limit() {
        let two = vec![GradientStop::new("#000000", 0.0); 2];
        let three = vec![GradientStop::new("#000000", 0.0); 3];
        assert!(can_add_stop(&two));
        assert!(!can_add_stop(&three));
    }
}
