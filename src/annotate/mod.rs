//! Batch construction of OncoKB queries and handling of OncoKB responses.

pub mod indicator;
pub mod queries;
