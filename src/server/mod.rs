//! REST API server exposing the query builders.

pub mod run;
pub mod schema;
