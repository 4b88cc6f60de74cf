#![forbid(unsafe_code)]

//! Terminal capability detection and diagnostics setup.

use std::io;

use crossterm::style::available_color_count;
use crossterm::tty::IsTty;
use loom::ColorProfile;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the stderr log filter.
pub const LOG_ENV: &str = "LOOM_LOG";

/// Pick a color profile for stdout.
///
/// Piped output gets no escapes at all.
pub fn detect_profile() -> ColorProfile {
    if !io::stdout().is_tty() {
        return ColorProfile::Mono;
    }
    profile_for_color_count(available_color_count())
}

/// Map a reported color count to a profile.
pub fn profile_for_color_count(count: u16) -> ColorProfile {
    ColorProfile::from_flags(count == u16::MAX, count >= 256, false)
}

/// Install the stderr `fmt` subscriber, filtered by [`LOG_ENV`].
///
/// Defaults to warnings only. A second call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
