// SPDX-License-Identifier: MIT

//! Builtin gradient presets and the category list used to tag gradients.

use serde::Serialize;

use crate::model::{GradientSpec, GradientStop, GradientType};

/// A named, ready-to-use gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientPreset {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(flatten)]
    pub spec: GradientSpec,
}

struct PresetDef {
    id: &'static str,
    name: &'static str,
    kind: GradientType,
    angle: f64,
    stops: &'static [(&'static str, f64)],
}

const PRESETS: &[PresetDef] = &[
    PresetDef {
        id: "left-right",
        name: "Left to Right",
        kind: GradientType::Linear,
        angle: 90.0,
        stops: &[("#FF6B6B", 0.0), ("#4ECDC4", 100.0)],
    },
    PresetDef {
        id: "top-bottom",
        name: "Top to Bottom",
        kind: GradientType::Linear,
        angle: 180.0,
        stops: &[("#667EEA", 0.0), ("#764BA2", 100.0)],
    },
    PresetDef {
        id: "diagonal",
        name: "Diagonal",
        kind: GradientType::Linear,
        angle: 45.0,
        stops: &[("#F093FB", 0.0), ("#F5576C", 100.0)],
    },
    PresetDef {
        id: "radial-center",
        name: "Radial Center",
        kind: GradientType::Radial,
        angle: 0.0,
        stops: &[("#FA8BFF", 0.0), ("#2BD2FF", 50.0), ("#2BFF88", 100.0)],
    },
    PresetDef {
        id: "sunset",
        name: "Sunset",
        kind: GradientType::Linear,
        angle: 90.0,
        stops: &[("#FF9A9E", 0.0), ("#FECFEF", 50.0), ("#FECFEF", 100.0)],
    },
];

impl PresetDef {
    fn build(&self) -> GradientPreset {
        GradientPreset {
            id: self.id,
            name: self.name,
            spec: GradientSpec::new(
                self.kind,
                self.angle,
                self.stops
                    .iter()
                    .map(|&(color, position)| GradientStop::new(color, position))
                    .collect(),
            ),
        }
    }
}

/// All builtin presets, in display order.
#[must_use]
pub fn builtin_presets() -> Vec<GradientPreset> {
    PRESETS.iter().map(PresetDef::build).collect()
}

/// Look up a preset by id. Returns `None` if the id is not recognized.
#[must_use]
pub fn preset(id: &str) -> Option<GradientPreset> {
    PRESETS.iter().find(|p| p.id == id).map(PresetDef::build)
}

/// A tag gradients can be filed under, with its swatch color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradientCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

const fn category(id: &'static str, name: &'static str, color: &'static str) -> GradientCategory {
    GradientCategory { id, name, color }
}

const CATEGORIES: &[GradientCategory] = &[
    category("red", "Red", "#EF4444"),
    category("blue", "Blue", "#3B82F6"),
    category("green", "Green", "#10B981"),
    category("purple", "Purple", "#8B5CF6"),
    category("pink", "Pink", "#EC4899"),
    category("yellow", "Yellow", "#F59E0B"),
    category("orange", "Orange", "#F97316"),
    category("teal", "Teal", "#14B8A6"),
    category("indigo", "Indigo", "#6366F1"),
    category("gray", "Gray", "#6B7280"),
];

#[must_use]
pub const fn gradient_categories() -> &'static [GradientCategory] {
    CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::build_gradient_css;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_presets_are_storable() {
        for p in builtin_presets() {
            assert!(p.spec.stops.len() >= 2, "{}", p.id);
            for stop in &p.spec.stops {
                assert!(hue_color::is_hex6(&stop.color), "{}: {}", p.id, stop.color);
            }
        }
    }

    #[test]
    fn preset_css() {
        let left_right = preset("left-right").unwrap();
        assert_eq!(
            build_gradient_css(&left_right.spec),
            "linear-gradient(90deg, #FF6B6B 0%, #4ECDC4 100%)"
        );
        let radial = preset("radial-center").unwrap();
        assert_eq!(
            build_gradient_css(&radial.spec),
            "radial-gradient(circle, #FA8BFF 0%, #2BD2FF 50%, #2BFF88 100%)"
        );
    }

    #[test]
    fn unknown_preset() {
        assert!(preset("nonexistent").is_none());
    }

    #[test]
    fn preset_ids_are_unique() {
        let presets = builtin_presets();
        for (i, a) in presets.iter().enumerate() {
            assert!(presets[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
    }

    #[test]
    fn preset_serializes_flat() {
        let json = serde_json::to_value(preset("diagonal").unwrap()).unwrap();
        assert_eq!(json["id"], "diagonal");
        assert_eq!(json["type"], "linear");
        assert_eq!(json["angle"], 45.0);
        assert_eq!(json["stops"][1]["color"], "#F5576C");
    }

    #[test]
    fn categories() {
        assert_eq!(gradient_categories().len(), 10);
        assert!(gradient_categories().iter().all(|c| hue_color::is_hex6(c.color)));
        assert_eq!(gradient_categories()[0].id, "red");
    }
}
