//! Construction of OncoKB annotation queries and handling of their responses.

pub mod annotate;
pub mod common;
pub mod indicator;
pub mod query;
pub mod server;

/// Information about the build.
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
