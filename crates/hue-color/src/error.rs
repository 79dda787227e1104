// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failures from color parsing.
///
/// Numeric conversions never fail (they clamp), so the only error is a
/// string that doesn't look like a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),
}
