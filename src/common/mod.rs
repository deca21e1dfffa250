//! Commonly used code.

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

pub mod io;

/// Commonly used command line arguments.
#[derive(Parser, Debug, Default)]
pub struct Args {
    /// Verbosity of the program
    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Args {
    /// The `tracing` level corresponding to the verbosity flags.
    pub fn tracing_level(&self) -> tracing::Level {
        match self.verbose.log_level() {
            Some(level) => match level {
                log::Level::Error => tracing::Level::ERROR,
                log::Level::Warn => tracing::Level::WARN,
                log::Level::Info => tracing::Level::INFO,
                log::Level::Debug => tracing::Level::DEBUG,
                log::Level::Trace => tracing::Level::TRACE,
            },
            None => tracing::Level::INFO,
        }
    }
}

/// The version of `oncokb-query` package.
#[cfg(not(test))]
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// This allows us to override the version to `0.0.0` in tests.
pub fn version() -> &'static str {
    #[cfg(test)]
    return "0.0.0";
    #[cfg(not(test))]
    return VERSION;
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    #[test]
    fn version_is_fixed_in_tests() {
        assert_eq!(super::version(), "0.0.0");
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(super::Args::default().tracing_level(), tracing::Level::INFO);
    }
}
