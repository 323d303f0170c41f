//! Lookupd Application Layer
//!
//! Use cases orchestrating the domain against the ports implemented by the
//! infrastructure layer.
pub mod errors;
pub mod ports;
pub mod use_cases;

pub use errors::LookupError;
