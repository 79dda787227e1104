// SPDX-License-Identifier: MIT
//
// Logging setup. Everything goes to stderr so stdout stays clean for CSS
// and JSON. Default level is WARN, DEBUG with --verbose; RUST_LOG wins
// over both.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset.
pub const fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Filter from `RUST_LOG`-style directives, falling back to
/// [`default_level`] when they're empty.
fn build_filter(verbose: bool, directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .parse_lossy(directives)
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbose: bool) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, &directives))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_level(false), Level::WARN);
        assert_eq!(default_level(true), Level::DEBUG);
    }

    #[test]
    fn filter_defaults() {
        assert_eq!(build_filter(false, "").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(build_filter(true, "").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn directives_override_verbose() {
        assert_eq!(build_filter(true, "error").max_level_hint(), Some(LevelFilter::ERROR));
        assert_eq!(build_filter(false, "trace").max_level_hint(), Some(LevelFilter::TRACE));
    }
}
