// SPDX-License-Identifier: MIT

//! # hue-gradient — CSS gradient composition
//!
//! Turns a [`GradientSpec`] (kind, angle, stops) into CSS, and guards the
//! write path for stored gradients.
//!
//! ```text
//! untrusted JSON ── sanitize.rs ──► GradientRecord ── validate()
//!                                        │
//!                                        ▼ spec()
//! GradientSpec ── css.rs ──► "linear-gradient(90deg, #FF0000 0%, …)"
//!      │                          │
//!      │                          └──► build_tailwind_class: bg-[…]
//!      └── adjust.rs: RGB shuffle/offset previews, next-stop suggestion
//! ```
//!
//! `preset.rs` carries the builtin presets and the category list.

pub mod adjust;
pub mod css;
pub mod error;
pub mod model;
pub mod preset;
pub mod sanitize;

pub use adjust::{
    ChannelOrder, MAX_TEXT_STOPS, RgbOffset, apply_rgb_offset, can_add_stop, next_stop,
    offset_stops, preview_stops, shuffle_rgb,
};
pub use css::{
    build_gradient_css, build_tailwind_class, build_text_gradient_css, clamp_position, css_number,
    hero_gradient,
};
pub use error::GradientError;
pub use model::{DEFAULT_ANGLE, GradientSpec, GradientStop, GradientType};
pub use preset::{GradientCategory, GradientPreset, builtin_presets, gradient_categories, preset};
pub use sanitize::{GradientRecord, MIN_STOPS, sanitize_gradient, slugify};
