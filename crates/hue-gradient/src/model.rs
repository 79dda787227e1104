// SPDX-License-Identifier: MIT

//! Gradient data types: kind, stops, and the full specification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Angle used when none is given (left to right).
pub const DEFAULT_ANGLE: f64 = 90.0;

/// The CSS gradient function a spec renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    /// `linear-gradient(<angle>deg, …)`
    #[default]
    Linear,
    /// `radial-gradient(circle, …)`; the angle is ignored.
    Radial,
    /// `conic-gradient(from <angle>deg, …)`
    Conic,
}

impl GradientType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::Conic => "conic",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Linear, Self::Radial, Self::Conic]
    }

    /// Parse a gradient type leniently (trimmed, case-insensitive).
    ///
    /// Anything unrecognized becomes [`GradientType::Linear`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let lower = name.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|t| t.name() == lower)
            .copied()
            .unwrap_or_else(|| {
                tracing::debug!(kind = name, "unknown gradient type, using linear");
                Self::Linear
            })
    }

    /// Exact match on the lowercase name, no fallback.
    #[must_use]
    pub fn from_exact(name: &str) -> Option<Self> {
        Self::all().iter().find(|t| t.name() == name).copied()
    }
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One color stop: a hex color at a percentage along the gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// `#RRGGBB`. Rendered as given.
    pub color: String,
    /// Percent along the gradient line, clamped to [0, 100] when rendered.
    pub position: f64,
    /// Stop opacity for text gradients, 0 to 1. Omitted from output when
    /// fully opaque.
    #[serde(default = "full_opacity", skip_serializing_if = "is_opaque")]
    pub opacity: f64,
}

const fn full_opacity() -> f64 {
    1.0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_opaque(opacity: &f64) -> bool {
    *opacity >= 1.0
}

impl GradientStop {
    /// An opaque stop.
    #[must_use]
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        Self {
            color: color.into(),
            position,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }
}

/// A complete gradient: kind, angle, and ordered stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    #[serde(rename = "type", default)]
    pub kind: GradientType,
    #[serde(default = "default_angle")]
    pub angle: f64,
    #[serde(default)]
    pub stops: Vec<GradientStop>,
}

const fn default_angle() -> f64 {
    DEFAULT_ANGLE
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            kind: GradientType::Linear,
            angle: DEFAULT_ANGLE,
            stops: Vec::new(),
        }
    }
}

impl GradientSpec {
    #[must_use]
    pub const fn new(kind: GradientType, angle: f64, stops: Vec<GradientStop>) -> Self {
        Self { kind, angle, stops }
    }

    /// A copy with stops ordered by position. Equal positions keep their
    /// original order.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self {
            stops,
            ..self.clone()
        }
    }
}
