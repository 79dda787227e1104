// SPDX-License-Identifier: MIT
//
// hue-color — color-space conversion for hueforge.
//
// The leaf of the workspace: HSV, RGB, HSL and hex, and the conversions
// between them. Everything else (palette schemes, gradients, the CLI)
// builds on these types and never does color math of its own.
//
// All functions are pure and total over finite input. The only failure is
// a malformed hex string, reported as `ColorError::InvalidColorFormat`.

pub mod color;
pub mod error;
pub mod hex;
pub mod resolved;

pub use color::{
    Hsl, Hsv, Rgb, hex_to_hsv, hsl_to_hsv, hsv_to_hex, hsv_to_hsl, hsv_to_rgb, normalize_hue,
    rgb_to_hsv,
};
pub use error::ColorError;
pub use hex::{format_hex, is_hex6, normalize_hex, parse_hex};
pub use resolved::ResolvedColor;
