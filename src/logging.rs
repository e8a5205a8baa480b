// ============================================================================
// Logging
// Subscriber bootstrap for binaries and demos (feature = "logging")
// ============================================================================
//
// The library itself only emits `tracing` events. Applications that want to
// see them either install their own subscriber or call one of these helpers.

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber using an env-filter directive
/// such as `"info"` or `"calculator=trace"`.
///
/// `RUST_LOG`, when set, takes precedence over `directive`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Map a `-v` count to a filter directive: 0 => info, 1 => debug, 2+ => trace.
pub fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a global subscriber at the level implied by a `-v` count.
pub fn init_from_verbosity(verbose: u8) -> bool {
    init(directive_for_verbosity(verbose))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for_verbosity() {
        assert_eq!(directive_for_verbosity(0), "info");
        assert_eq!(directive_for_verbosity(1), "debug");
        assert_eq!(directive_for_verbosity(2), "trace");
        assert_eq!(directive_for_verbosity(9), "trace");
    }

    #[test]
    fn test_second_init_reports_failure() {
        // Other tests may have installed one already; either way the
        // second call in this test cannot succeed.
        let _ = init("debug");
        assert!(!init("debug"));
    }
}
