// SPDX-License-Identifier: MIT

//! CSS rendering for gradient specs.
//!
//! Numbers are printed the way a browser-side template would print them:
//! `90`, not `90.0`, and `45.5` as is.

use hue_color::{Hsv, parse_hex};

use crate::model::{DEFAULT_ANGLE, GradientSpec, GradientStop, GradientType};

/// Angle of the hero banner gradient.
const HERO_ANGLE: f64 = 135.0;

/// How much darker the far end of the hero gradient is.
const HERO_FADE: f64 = 0.6;

/// Format a number for CSS without a trailing `.0`.
#[must_use]
pub fn css_number(x: f64) -> String {
    // -0 + 0 is +0, so a negative zero never prints as "-0".
    format!("{}", x + 0.0)
}

/// Clamp a stop position into [0, 100]. NaN becomes 0.
#[must_use]
pub fn clamp_position(position: f64) -> f64 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 100.0)
    }
}

fn css_angle(angle: f64) -> String {
    css_number(if angle.is_finite() { angle } else { DEFAULT_ANGLE })
}

fn join_stops(stops: &[GradientStop], color: impl Fn(&GradientStop) -> String) -> String {
    stops
        .iter()
        .map(|s| format!("{} {}%", color(s), css_number(clamp_position(s.position))))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a spec as a CSS `background` value.
///
/// Stops appear in the order given; positions are clamped to [0, 100].
///
/// ```
/// use hue_gradient::{GradientSpec, GradientStop, GradientType, build_gradient_css};
///
/// let spec = GradientSpec::new(
///     GradientType::Linear,
///     90.0,
///     vec![GradientStop::new("#FF0000", 0.0), GradientStop::new("#0000FF", 100.0)],
/// );
/// assert_eq!(
///     build_gradient_css(&spec),
///     "linear-gradient(90deg, #FF0000 0%, #0000FF 100%)"
/// );
/// ```
#[must_use]
pub fn build_gradient_css(spec: &GradientSpec) -> String {
    let stops = join_stops(&spec.stops, |s| s.color.clone());
    match spec.kind {
        GradientType::Conic => format!("conic-gradient(from {}deg, {stops})", css_angle(spec.angle)),
        GradientType::Radial => format!("radial-gradient(circle, {stops})"),
        GradientType::Linear => format!("linear-gradient({}deg, {stops})", css_angle(spec.angle)),
    }
}

/// Escape a CSS value into a Tailwind arbitrary-value class: `bg-[…]`.
#[must_use]
pub fn build_tailwind_class(css: &str) -> String {
    let safe = css
        .replace(' ', "_")
        .replace('(', "\\(")
        .replace(')', "\\)")
        .replace(',', "\\,");
    format!("bg-[{safe}]")
}

/// CSS declarations that paint text with the gradient.
///
/// Stops are sorted by position and rendered as `rgba(...)` with their
/// opacity. Text gradients have no conic form, so conic renders linear.
/// A stop whose color won't parse renders as black.
#[must_use]
pub fn build_text_gradient_css(spec: &GradientSpec) -> String {
    let sorted = spec.sorted();
    let stops = join_stops(&sorted.stops, |s| {
        parse_hex(&s.color)
            .unwrap_or_default()
            .to_rgba_css(s.opacity)
    });
    let gradient = match spec.kind {
        GradientType::Radial => format!("radial-gradient(circle, {stops})"),
        GradientType::Linear | GradientType::Conic => {
            format!("linear-gradient({}deg, {stops})", css_angle(spec.angle))
        }
    };
    let base = spec.stops.first().map_or("#000000", |s| s.color.as_str());

    format!(
        "color: {base};\n\
         background-image: {gradient};\n\
         -webkit-background-clip: text;\n\
         background-clip: text;\n\
         color: transparent;"
    )
}

/// Banner gradient for a picked color: the color fading to 60% of its
/// brightness at 135°.
#[must_use]
pub fn hero_gradient(hsv: Hsv) -> String {
    let hsv = hsv.clamped();
    let start = hsv.to_hex();
    let end = hsv.scale_value(HERO_FADE).to_hex();
    format!(
        "linear-gradient({}deg, {start} 0%, {end} 100%)",
        css_number(HERO_ANGLE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_stops(kind: GradientType, angle: f64, a: &str, b: &str) -> GradientSpec {
        GradientSpec::new(
            kind,
            angle,
            vec![GradientStop::new(a, 0.0), GradientStop::new(b, 100.0)],
        )
    }

    #[test]
    fn linear() {
        let spec = two_stops(GradientType::Linear, 90.0, "#FF0000", "#0000FF");
        assert_eq!(
            build_gradient_css(&spec),
            "linear-gradient(90deg, #FF0000 0%, #0000FF 100%)"
        );
    }

    #[test]
    fn radial_ignores_angle() {
        let spec = two_stops(GradientType::Radial, 270.0, "#FA8BFF", "#2BFF88");
        assert_eq!(
            build_gradient_css(&spec),
            "radial-gradient(circle, #FA8BFF 0%, #2BFF88 100%)"
        );
    }

    #[test]
    fn conic() {
        let spec = two_stops(GradientType::Conic, 45.0, "#000000", "#FFFFFF");
        assert_eq!(
            build_gradient_css(&spec),
            "conic-gradient(from 45deg, #000000 0%, #FFFFFF 100%)"
        );
    }

    #[test]
    fn positions_are_clamped_not_sorted() {
        let spec = GradientSpec::new(
            GradientType::Linear,
            22.5,
            vec![
                GradientStop::new("#111111", 150.0),
                GradientStop::new("#222222", -10.0),
                GradientStop::new("#333333", 33.25),
            ],
        );
        assert_eq!(
            build_gradient_css(&spec),
            "linear-gradient(22.5deg, #111111 100%, #222222 0%, #333333 33.25%)"
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(css_number(90.0), "90");
        assert_eq!(css_number(45.5), "45.5");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(-30.0), "-30");
        assert!((clamp_position(f64::NAN)).abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_angle_uses_default() {
        let spec = two_stops(GradientType::Linear, f64::INFINITY, "#000000", "#FFFFFF");
        assert!(build_gradient_css(&spec).starts_with("linear-gradient(90deg, "));
    }

    #[test]
    fn tailwind_escaping() {
        let css = "linear-gradient(90deg, #FF0000 0%, #0000FF 100%)";
        assert_eq!(
            build_tailwind_class(css),
            r"bg-[linear-gradient\(90deg\,_#FF0000_0%\,_#0000FF_100%\)]"
        );
    }

    #[test]
    fn text_gradient_block() {
        let spec = GradientSpec::new(
            GradientType::Linear,
            90.0,
            vec![
                GradientStop::new("#4ECDC4", 100.0),
                GradientStop::new("#FF6B6B", 0.0).with_opacity(0.5),
            ],
        );
        assert_eq!(
            build_text_gradient_css(&spec),
            "color: #4ECDC4;\n\
             background-image: linear-gradient(90deg, rgba(255, 107, 107, 0.5) 0%, rgba(78, 205, 196, 1) 100%);\n\
             -webkit-background-clip: text;\n\
             background-clip: text;\n\
             color: transparent;"
        );
    }

    #[test]
    fn text_gradient_conic_falls_back_to_linear() {
        let spec = two_stops(GradientType::Conic, 45.0, "#000000", "#FFFFFF");
        let css = build_text_gradient_css(&spec);
        assert!(css.contains("background-image: linear-gradient(45deg, rgba(0, 0, 0, 1) 0%"));
    }

    #[test]
    fn text_gradient_bad_color_is_black() {
        let spec = two_stops(GradientType::Radial, 0.0, "oops", "#FFFFFF");
        let css = build_text_gradient_css(&spec);
        assert!(css.contains("radial-gradient(circle, rgba(0, 0, 0, 1) 0%, rgba(255, 255, 255, 1) 100%)"));
    }

    #[test]
    fn text_gradient_without_stops() {
        let css = build_text_gradient_css(&GradientSpec::default());
        assert!(css.starts_with("color: #000000;\n"));
    }

    #[test]
    fn hero() {
        assert_eq!(
            hero_gradient(Hsv::new(0.0, 1.0, 1.0)),
            "linear-gradient(135deg, #FF0000 0%, #990000 100%)"
        );
    }
}
