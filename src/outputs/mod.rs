//! Output generation.
//!
//! - [`json`]: serializes the collected articles as a JSON array for stdout

pub mod json;
