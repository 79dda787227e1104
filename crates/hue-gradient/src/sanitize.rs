// SPDX-License-Identifier: MIT

//! Write-path sanitizing for gradient records.
//!
//! Submissions arrive as loosely-typed JSON from forms and bulk uploads.
//! [`sanitize_gradient`] never fails: it coerces what it can, drops what it
//! can't, and returns a [`GradientRecord`]. [`GradientRecord::validate`]
//! then decides whether the record may be stored.
//!
//! Coercion follows the rules a browser form would apply: a missing or
//! falsy title becomes empty, a string position like `"50"` becomes 50,
//! `null` becomes 0, and anything non-numeric drops the stop.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::css::css_number;
use crate::error::GradientError;
use crate::model::{DEFAULT_ANGLE, GradientSpec, GradientStop, GradientType};

/// Fewest stops a stored gradient may have.
pub const MIN_STOPS: usize = 2;

/// Uppercase six-digit hex with `#`. Colors are uppercased before matching.
static STOP_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-F]{6}$").expect("invalid stop color regex"));

static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("invalid slug regex"));

/// A sanitized gradient, ready for validation and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientRecord {
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: GradientType,
    pub angle: f64,
    pub stops: Vec<GradientStop>,
    pub categories: Vec<String>,
}

impl GradientRecord {
    /// Check the write-path invariants: a title, a slug, and at least
    /// [`MIN_STOPS`] stops.
    ///
    /// # Errors
    ///
    /// The first failing check, in that order.
    pub fn validate(&self) -> Result<(), GradientError> {
        if self.title.is_empty() {
            return Err(GradientError::MissingTitle);
        }
        if self.slug.is_empty() {
            return Err(GradientError::MissingSlug);
        }
        if self.stops.len() < MIN_STOPS {
            return Err(GradientError::TooFewStops {
                found: self.stops.len(),
            });
        }
        Ok(())
    }

    /// The renderable part of the record.
    #[must_use]
    pub fn spec(&self) -> GradientSpec {
        GradientSpec::new(self.kind, self.angle, self.stops.clone())
    }
}

/// Coerce an untrusted JSON object into a [`GradientRecord`].
///
/// - `title`, `description`: trimmed; falsy values become empty.
/// - `slug`: trimmed and lowercased.
/// - `type`: exactly `linear`, `radial` or `conic`, else `linear`.
/// - `angle`: must be a JSON number, else 90.
/// - `stops`: colors trimmed and uppercased; stops whose color isn't
///   `#RRGGBB` or whose position doesn't coerce to a finite number are
///   dropped.
/// - `categories`: each stringified and trimmed; empty ones dropped.
///
/// Non-object input yields an empty record (which fails validation).
#[must_use]
pub fn sanitize_gradient(input: &Value) -> GradientRecord {
    let field = |key: &str| input.get(key).unwrap_or(&Value::Null);

    let kind = match field("type") {
        Value::String(s) => GradientType::from_exact(s).unwrap_or_default(),
        _ => GradientType::Linear,
    };

    let angle = field("angle").as_f64().unwrap_or(DEFAULT_ANGLE);

    let stops = match field("stops") {
        Value::Array(items) => items.iter().filter_map(sanitize_stop).collect(),
        _ => Vec::new(),
    };

    let categories = match field("categories") {
        Value::Array(items) => items
            .iter()
            .map(|c| js_string(c).trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    GradientRecord {
        title: truthy_string(field("title")).trim().to_string(),
        slug: truthy_string(field("slug")).trim().to_lowercase(),
        description: truthy_string(field("description")).trim().to_string(),
        kind,
        angle,
        stops,
        categories,
    }
}

fn sanitize_stop(stop: &Value) -> Option<GradientStop> {
    let color = truthy_string(stop.get("color").unwrap_or(&Value::Null))
        .trim()
        .to_uppercase();
    // A missing position is `undefined`, which never coerces to a number.
    let position = stop.get("position").map_or(f64::NAN, js_number);

    if !STOP_COLOR.is_match(&color) || !position.is_finite() {
        tracing::debug!(%color, position, "dropping invalid gradient stop");
        return None;
    }
    Some(GradientStop::new(color, position))
}

/// Lowercase `title` and collapse every run of non-alphanumerics into one
/// dash, with no dash at either end.
///
/// ```
/// assert_eq!(hue_gradient::slugify("  Sunset Glow!! v2 "), "sunset-glow-v2");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    let lower = title.trim().to_lowercase();
    SLUG_SEPARATORS
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

// ─── Loose coercions ─────────────────────────────────────────────────────────

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The value as a string, or empty when falsy.
fn truthy_string(v: &Value) -> String {
    if is_truthy(v) { js_string(v) } else { String::new() }
}

fn js_string(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n
            .as_i64()
            .map_or_else(|| css_number(n.as_f64().unwrap_or(f64::NAN)), |i| i.to_string()),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn js_number(v: &Value) -> f64 {
    match v {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(_) => parse_number(&js_string(v)),
        Value::Object(_) => f64::NAN,
    }
}

/// Parse a numeric string: blank is 0, `0x`/`0o`/`0b` prefixes are
/// honored, and anything else that isn't a decimal literal is NaN.
#[allow(clippy::cast_precision_loss)]
fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.starts_with(['+', '-']) {
            return f64::NAN;
        }
        return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
    }

    match s.trim_start_matches(['+', '-']) {
        "Infinity" => {
            if s.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        }
        rest if rest.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) => {
            s.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn colors(record: &GradientRecord) -> Vec<&str> {
        record.stops.iter().map(|s| s.color.as_str()).collect()
    }

    #[test]
    fn happy_path() {
        let record = sanitize_gradient(&json!({
            "title": "  Sunset  ",
            "slug": " Sunset-Glow ",
            "description": " warm ",
            "type": "radial",
            "angle": 45,
            "stops": [
                {"color": "#ff0000", "position": 0},
                {"color": " #0000ff ", "position": 100}
            ],
            "categories": ["red", " blue "]
        }));
        assert_eq!(
            record,
            GradientRecord {
                title: "Sunset".into(),
                slug: "sunset-glow".into(),
                description: "warm".into(),
                kind: GradientType::Radial,
                angle: 45.0,
                stops: vec![
                    GradientStop::new("#FF0000", 0.0),
                    GradientStop::new("#0000FF", 100.0),
                ],
                categories: vec!["red".into(), "blue".into()],
            }
        );
        assert_eq!(record.validate(), Ok(()));
    }

    #[test]
    fn invalid_color_is_dropped() {
        let record = sanitize_gradient(&json!({
            "stops": [
                {"color": "#FF0000", "position": 0},
                {"color": "not-a-color", "position": 50},
                {"color": "#00F", "position": 60},
                {"color": "0000FF", "position": 70},
                {"color": "#0000FF", "position": 100}
            ]
        }));
        assert_eq!(colors(&record), vec!["#FF0000", "#0000FF"]);
    }

    #[test]
    fn positions_are_coerced() {
        let record = sanitize_gradient(&json!({
            "stops": [
                {"color": "#000001", "position": "50"},
                {"color": "#000002", "position": null},
                {"color": "#000003"},
                {"color": "#000004", "position": "abc"},
                {"color": "#000005", "position": true},
                {"color": "#000006", "position": " 12.5 "},
                {"color": "#000007", "position": {}},
                {"color": "#000008", "position": "0x10"},
                {"color": "#000009", "position": "Infinity"},
                {"color": "#00000A", "position": ""},
                {"color": "#00000B", "position": [30]},
                {"color": "#00000C", "position": "0x+1"}
            ]
        }));
        let kept: Vec<(&str, f64)> = record
            .stops
            .iter()
            .map(|s| (s.color.as_str(), s.position))
            .collect();
        assert_eq!(
            kept,
            vec![
                ("#000001", 50.0),
                ("#000002", 0.0),
                ("#000005", 1.0),
                ("#000006", 12.5),
                ("#000008", 16.0),
                ("#00000A", 0.0),
                ("#00000B", 30.0),
            ]
        );
    }

    #[test]
    fn non_object_stops_are_dropped() {
        let record = sanitize_gradient(&json!({"stops": ["#FF0000", null, 5]}));
        assert!(record.stops.is_empty());
    }

    #[test]
    fn type_must_match_exactly() {
        for bad in [json!("Radial"), json!("diamond"), json!(3), json!(null)] {
            let record = sanitize_gradient(&json!({"type": bad}));
            assert_eq!(record.kind, GradientType::Linear);
        }
        let record = sanitize_gradient(&json!({"type": "conic"}));
        assert_eq!(record.kind, GradientType::Conic);
    }

    #[test]
    fn angle_must_be_a_number() {
        let angle = |v: Value| sanitize_gradient(&json!({"angle": v})).angle;
        assert!((angle(json!("45")) - 90.0).abs() < f64::EPSILON);
        assert!((angle(json!(null)) - 90.0).abs() < f64::EPSILON);
        assert!((angle(json!(45.5)) - 45.5).abs() < f64::EPSILON);
        assert!(angle(json!(0)).abs() < f64::EPSILON);
        assert!((sanitize_gradient(&json!({})).angle - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn title_coercion() {
        let title = |v: Value| sanitize_gradient(&json!({"title": v})).title;
        assert_eq!(title(json!(0)), "");
        assert_eq!(title(json!(false)), "");
        assert_eq!(title(json!(42)), "42");
        assert_eq!(title(json!(true)), "true");
        assert_eq!(title(json!(["a", "b"])), "a,b");
    }

    #[test]
    fn categories_are_trimmed_and_filtered() {
        let record = sanitize_gradient(&json!({
            "categories": [" warm ", "", "   ", null, 3]
        }));
        assert_eq!(record.categories, vec!["warm", "null", "3"]);
    }

    #[test]
    fn non_object_input() {
        let record = sanitize_gradient(&json!([1, 2, 3]));
        assert_eq!(record.title, "");
        assert!(record.stops.is_empty());
        assert_eq!(record.validate(), Err(GradientError::MissingTitle));
    }

    #[test]
    fn validation_order() {
        let mut record = sanitize_gradient(&json!({
            "title": "T",
            "stops": [{"color": "#FFFFFF", "position": 0}]
        }));
        assert_eq!(record.validate(), Err(GradientError::MissingSlug));
        record.slug = "t".into();
        assert_eq!(record.validate(), Err(GradientError::TooFewStops { found: 1 }));
    }

    #[test]
    fn record_renders() {
        let record = sanitize_gradient(&json!({
            "type": "conic",
            "angle": 45,
            "stops": [
                {"color": "#000000", "position": 0},
                {"color": "#ffffff", "position": 100}
            ]
        }));
        assert_eq!(
            crate::build_gradient_css(&record.spec()),
            "conic-gradient(from 45deg, #000000 0%, #FFFFFF 100%)"
        );
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("Ocean Breeze"), "ocean-breeze");
        assert_eq!(slugify("--Hello,  World--"), "hello-world");
        assert_eq!(slugify("Café Crème"), "caf-cr-me");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn number_parsing() {
        assert!((parse_number("1e2") - 100.0).abs() < f64::EPSILON);
        assert!((parse_number("-7") + 7.0).abs() < f64::EPSILON);
        assert!((parse_number(".5") - 0.5).abs() < f64::EPSILON);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("nan").is_nan());
        assert!(parse_number("12px").is_nan());
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!((parse_number("0x1F") - 31.0).abs() < f64::EPSILON);
        assert!(parse_number("0x+1").is_nan());
        assert!(parse_number("0b-1").is_nan());
        assert!(parse_number("0x").is_nan());
    }
}
