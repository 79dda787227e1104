// SPDX-License-Identifier: MIT

//! # hue-palette — color-theory palettes
//!
//! Derives a palette of 2 to 8 colors from one base color and a scheme.
//! Pure functions only: the same inputs always produce the same palette.
//!
//! # Architecture
//!
//! ```text
//! base Hsv + Scheme + count
//!     │
//!     ▼
//! scheme.rs:  one hue per slot (wraps at 0/360)
//!     │
//!     ▼
//! palette.rs: brightness per slot, clamp count into 2..=8
//!     │
//!     ▼
//! Vec<ResolvedColor>  (hex, rgb, hsl, hsv)
//! ```
//!
//! `shades.rs` holds the builtin named shade families and the validation
//! a named color passes before it joins a collection.

pub mod palette;
pub mod scheme;
pub mod shades;

pub use palette::{
    MAX_COUNT, MIN_COUNT, clamp_count, generate_palette, generate_palette_named, palette_hsv,
};
pub use scheme::{ANALOGOUS_STEP, Scheme};
pub use shades::{NamedColor, ShadeError, builtin_shades, sanitize_named_color, shade_families};
