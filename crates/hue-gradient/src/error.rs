// SPDX-License-Identifier: MIT

use hue_color::ColorError;
use thiserror::Error;

/// Why a gradient can't be stored or rendered.
///
/// The first three variants are the write-path checks a sanitized
/// [`GradientRecord`](crate::GradientRecord) must pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradientError {
    #[error("gradient title is empty")]
    MissingTitle,

    #[error("gradient slug is empty")]
    MissingSlug,

    #[error("a gradient needs at least 2 valid stops, found {found}")]
    TooFewStops { found: usize },

    #[error(transparent)]
    Color(#[from] ColorError),
}
