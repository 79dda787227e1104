// SPDX-License-Identifier: MIT
//
// hueforge — color palettes, gradients and shade families from the shell.
//
// This is the main binary that wires together the library crates:
//
//   hue-color    → HSV/RGB/HSL/hex conversion, ResolvedColor
//   hue-palette  → scheme palettes, builtin shade families
//   hue-gradient → gradient CSS, sanitizing, presets
//
// Each subcommand resolves its inputs (flags, then config file, then
// defaults), calls into the libraries, and renders the result as text or
// JSON. Rendering returns a String so the commands can be tested without
// touching stdout:
//
//   argv → clap → Config::load → command fn → String → stdout
//                                      └── Err → stderr, exit 1

mod config;
mod logging;

use std::fmt::Write as _;
use std::io::Read as _;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use regex::Regex;
use serde_json::{Value, json};

use hue_color::{Hsv, ResolvedColor, hex_to_hsv, normalize_hex};
use hue_gradient::{
    ChannelOrder, GradientRecord, GradientSpec, GradientStop, GradientType, MAX_TEXT_STOPS,
    RgbOffset, build_gradient_css, build_tailwind_class, build_text_gradient_css,
    builtin_presets, can_add_stop, gradient_categories, hero_gradient, next_stop, preset,
    preview_stops, sanitize_gradient,
};
use hue_palette::{Scheme, builtin_shades, clamp_count, generate_palette, shade_families};

use crate::config::Config;

/// Base color when nothing else is given: a saturated sky blue.
const DEFAULT_BASE: Hsv = Hsv::new(210.0, 0.9, 0.9);

/// `HEX@POS` with optional `%` and `/OPACITY`, e.g. `#FF0000@0` or
/// `00ff00@50%/0.5`.
static STOP_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(#?[0-9A-Fa-f]{6})\s*@\s*(-?\d+(?:\.\d+)?)%?\s*(?:/\s*(\d*\.?\d+))?\s*$")
        .expect("invalid stop regex")
});

// ─── Command line ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "hueforge")]
#[command(about = "Color palettes, gradients and shade families")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, env = "HUEFORGE_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a hex color as RGB, HSL and HSV
    Convert {
        /// Color as #RRGGBB
        hex: String,
    },

    /// Generate a color-theory palette from a base color
    Palette {
        /// Base color as #RRGGBB
        #[arg(long, conflicts_with = "hsv")]
        base: Option<String>,

        /// Base color as H,S,V (degrees, then fractions 0-1)
        #[arg(long, value_parser = parse_hsv, allow_hyphen_values = true)]
        hsv: Option<Hsv>,

        /// complementary, monochromatic, analogous, triadic or tetradic
        #[arg(short, long)]
        scheme: Option<String>,

        /// Number of colors (2-8)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Build CSS for a gradient
    Gradient {
        /// Color stop as HEX@POS[/OPACITY]; repeat for each stop
        #[arg(long = "stop", value_parser = parse_stop, required_unless_present = "preset")]
        stops: Vec<GradientStop>,

        /// Start from a builtin preset (see `presets`)
        #[arg(long, conflicts_with = "stops")]
        preset: Option<String>,

        /// linear, radial or conic
        #[arg(long = "type")]
        kind: Option<String>,

        /// Angle in degrees (linear and conic)
        #[arg(long, allow_hyphen_values = true)]
        angle: Option<f64>,

        /// Reorder every stop's channels: rgb, rbg, grb, gbr, brg or bgr
        #[arg(long)]
        shuffle: Option<String>,

        /// Shift every stop by R,G,B (each may be negative), after any shuffle
        #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
        offset: Option<RgbOffset>,

        /// Append a suggested extra stop (text gradients stop at 3)
        #[arg(long)]
        add_stop: bool,

        /// Also print a Tailwind arbitrary-value class
        #[arg(long)]
        tailwind: bool,

        /// Also print text-gradient CSS
        #[arg(long)]
        text: bool,
    },

    /// Sanitize and validate gradient JSON (one object or an array)
    Sanitize {
        /// JSON file; `-` or nothing reads stdin
        file: Option<PathBuf>,
    },

    /// List builtin shade families, or the colors of one family
    Shades {
        /// red, blue, green, yellow, purple or orange
        family: Option<String>,
    },

    /// List builtin gradient presets
    Presets {
        /// List gradient categories instead
        #[arg(long)]
        categories: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(out) => {
            if !out.is_empty() {
                println!("{out}");
            }
        }
        Err(err) => {
            if let Some(failed) = err.downcast_ref::<ValidationFailed>() {
                println!("{}", failed.report);
            }
            eprintln!("hueforge: {err:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = Config::load(cli.config.as_deref())?;
    let json = cli.json || config.output.json;

    match cli.command {
        Commands::Convert { hex } => convert(&hex, json),
        Commands::Palette {
            base,
            hsv,
            scheme,
            count,
        } => {
            let base = match (base, hsv, config.palette.base.as_deref()) {
                (Some(hex), _, _) => parse_base(&hex)?,
                (None, Some(hsv), _) => hsv,
                (None, None, Some(hex)) => parse_base(hex).context("in [palette] base")?,
                (None, None, None) => DEFAULT_BASE,
            };
            let scheme = scheme.as_deref().unwrap_or(config.palette.scheme.as_str());
            let scheme = Scheme::from_name_or_default(scheme);
            let count = count.unwrap_or(config.palette.count);
            palette(base, scheme, count, json)
        }
        Commands::Gradient {
            stops,
            preset: preset_id,
            kind,
            angle,
            shuffle,
            offset,
            add_stop,
            tailwind,
            text,
        } => {
            let mut spec = match preset_id {
                Some(id) => {
                    let Some(found) = preset(&id) else {
                        bail!("unknown preset {id:?}; run `hueforge presets` for the list");
                    };
                    found.spec
                }
                None => GradientSpec::new(
                    GradientType::from_name(&config.gradient.kind),
                    config.gradient.angle,
                    stops,
                ),
            };
            if let Some(kind) = kind {
                spec.kind = GradientType::from_name(&kind);
            }
            if let Some(angle) = angle {
                spec.angle = angle;
            }
            let order = shuffle
                .as_deref()
                .map_or(ChannelOrder::Rgb, ChannelOrder::from_name);
            if order != ChannelOrder::Rgb || offset.is_some() {
                spec.stops = preview_stops(&spec.stops, order, offset.unwrap_or_default())?;
            }
            if add_stop {
                if text && !can_add_stop(&spec.stops) {
                    tracing::warn!(
                        stops = spec.stops.len(),
                        max = MAX_TEXT_STOPS,
                        "text gradient already has the most stops, not adding one"
                    );
                } else {
                    let suggested = next_stop(&spec.stops);
                    spec.stops.push(suggested);
                }
            }
            gradient(&spec, tailwind, text, json)
        }
        Commands::Sanitize { file } => {
            let input = read_input(file.as_deref())?;
            sanitize(&input, json)
        }
        Commands::Shades { family } => shades(family.as_deref(), json),
        Commands::Presets { categories } => presets(categories, json),
    }
}

// ─── Argument parsers ────────────────────────────────────────────────────────

fn parse_base(hex: &str) -> Result<Hsv> {
    hex_to_hsv(hex.trim()).with_context(|| format!("bad base color {hex:?}"))
}

fn parse_hsv(s: &str) -> Result<Hsv, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [h, sat, v] = parts.as_slice() else {
        return Err(format!("expected H,S,V, got {s:?}"));
    };
    let num = |x: &str| {
        x.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| format!("not a number: {x:?}"))
    };
    Ok(Hsv::new(num(h)?, num(sat)?, num(v)?).clamped())
}

fn parse_stop(s: &str) -> Result<GradientStop, String> {
    let caps = STOP_ARG
        .captures(s)
        .ok_or_else(|| format!("expected HEX@POS[/OPACITY], got {s:?}"))?;
    let color = normalize_hex(&caps[1]).map_err(|e| e.to_string())?;
    let position: f64 = caps[2].parse().map_err(|_| format!("bad position in {s:?}"))?;
    let stop = GradientStop::new(color, position);
    match caps.get(3) {
        Some(m) => {
            let opacity: f64 = m
                .as_str()
                .parse()
                .map_err(|_| format!("bad opacity in {s:?}"))?;
            Ok(stop.with_opacity(opacity.clamp(0.0, 1.0)))
        }
        None => Ok(stop),
    }
}

fn parse_offset(s: &str) -> Result<RgbOffset, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B, got {s:?}"));
    };
    let num = |x: &str| x.parse::<i32>().map_err(|_| format!("not an integer: {x:?}"));
    Ok(RgbOffset::new(num(r)?, num(g)?, num(b)?))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

// ─── Commands ────────────────────────────────────────────────────────────────

fn pretty(value: &impl serde::Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

fn hsv_label(hsv: Hsv) -> String {
    format!(
        "HSV({}°, {}%, {}%)",
        hsv.h.round(),
        (hsv.s * 100.0).round(),
        (hsv.v * 100.0).round()
    )
}

fn color_line(color: &ResolvedColor) -> String {
    format!(
        "{}  {}  {}  {}",
        color.hex,
        color.rgb_label(),
        color.hsl_label(),
        hsv_label(color.hsv)
    )
}

fn convert(hex: &str, json: bool) -> Result<String> {
    let color = ResolvedColor::from_hex(hex.trim())?;
    if json {
        return pretty(&color);
    }
    Ok(format!(
        "{}\n{}\n{}\n{}",
        color.hex,
        color.rgb_label(),
        color.hsl_label(),
        hsv_label(color.hsv)
    ))
}

fn palette(base: Hsv, scheme: Scheme, count: usize, json: bool) -> Result<String> {
    let colors = generate_palette(base, scheme, count);
    let hero = hero_gradient(base);
    if json {
        return pretty(&json!({
            "scheme": scheme,
            "count": colors.len(),
            "colors": colors,
            "hero": hero,
        }));
    }

    let mut out = format!("{} palette, {} colors\n", scheme.label(), clamp_count(count));
    for (i, color) in colors.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", i + 1, color_line(color));
    }
    let _ = write!(out, "hero: {hero}");
    Ok(out)
}

fn gradient(spec: &GradientSpec, tailwind: bool, text: bool, json: bool) -> Result<String> {
    let css = build_gradient_css(spec);
    let class = tailwind.then(|| build_tailwind_class(&css));
    let text_css = text.then(|| build_text_gradient_css(spec));

    if json {
        let mut out = json!({ "spec": spec, "css": css });
        if let Some(class) = class {
            out["tailwind"] = Value::String(class);
        }
        if let Some(text_css) = text_css {
            out["text"] = Value::String(text_css);
        }
        return pretty(&out);
    }

    let mut out = css;
    if let Some(class) = class {
        let _ = write!(out, "\n{class}");
    }
    if let Some(text_css) = text_css {
        let _ = write!(out, "\n\n{text_css}");
    }
    Ok(out)
}

/// Some sanitized records failed validation. The report still goes to
/// stdout before the error.
#[derive(Debug, thiserror::Error)]
#[error("{failed} of {total} gradients failed validation")]
struct ValidationFailed {
    report: String,
    failed: usize,
    total: usize,
}

fn sanitize(input: &str, json: bool) -> Result<String> {
    let value: Value = serde_json::from_str(input).context("Input is not valid JSON")?;
    let records: Vec<GradientRecord> = match &value {
        Value::Array(items) => items.iter().map(sanitize_gradient).collect(),
        single => vec![sanitize_gradient(single)],
    };

    let results: Vec<_> = records.iter().map(GradientRecord::validate).collect();
    let failed = results.iter().filter(|r| r.is_err()).count();

    let out = if json {
        let entries: Vec<Value> = records
            .iter()
            .zip(&results)
            .map(|(record, result)| {
                json!({
                    "record": record,
                    "valid": result.is_ok(),
                    "error": result.as_ref().err().map(ToString::to_string),
                })
            })
            .collect();
        pretty(&entries)?
    } else {
        let mut out = String::new();
        for (record, result) in records.iter().zip(&results) {
            let name = if record.slug.is_empty() {
                "(no slug)"
            } else {
                record.slug.as_str()
            };
            match result {
                Ok(()) => {
                    let _ = writeln!(out, "ok     {name}  {}", build_gradient_css(&record.spec()));
                }
                Err(e) => {
                    let _ = writeln!(out, "error  {name}  {e}");
                }
            }
        }
        out.trim_end().to_string()
    };

    if failed > 0 {
        return Err(ValidationFailed {
            report: out,
            failed,
            total: records.len(),
        }
        .into());
    }
    Ok(out)
}

fn shades(family: Option<&str>, json: bool) -> Result<String> {
    let Some(family) = family else {
        let families: Vec<Value> = shade_families()
            .iter()
            .map(|name| {
                let count = builtin_shades(name).map_or(0, |s| s.len());
                json!({ "family": name, "count": count })
            })
            .collect();
        if json {
            return pretty(&families);
        }
        return Ok(shade_families()
            .iter()
            .map(|name| {
                let count = builtin_shades(name).map_or(0, |s| s.len());
                format!("{name:<8} {count} colors")
            })
            .collect::<Vec<_>>()
            .join("\n"));
    };

    let Some(colors) = builtin_shades(family) else {
        bail!(
            "unknown shade family {family:?}; available: {}",
            shade_families().join(", ")
        );
    };
    if json {
        return pretty(&colors);
    }
    let width = colors.iter().map(|c| c.name.len()).max().unwrap_or(0);
    Ok(colors
        .iter()
        .map(|c| format!("{:<width$}  {}", c.name, c.hex))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn presets(categories: bool, json: bool) -> Result<String> {
    if categories {
        let list = gradient_categories();
        if json {
            return pretty(&list);
        }
        return Ok(list
            .iter()
            .map(|c| format!("{:<8} {:<8} {}", c.id, c.name, c.color))
            .collect::<Vec<_>>()
            .join("\n"));
    }

    let list = builtin_presets();
    if json {
        let entries: Vec<Value> = list
            .iter()
            .map(|p| json!({ "preset": p, "css": build_gradient_css(&p.spec) }))
            .collect();
        return pretty(&entries);
    }
    Ok(list
        .iter()
        .map(|p| format!("{:<14} {:<14} {}", p.id, p.name, build_gradient_css(&p.spec)))
        .collect::<Vec<_>>()
        .join("\n"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
