//! Specification document module
//!
//! Finds the specification file on disk and converts YAML documents to the
//! JSON the UI bundle expects.

mod convert;
mod locator;

pub use convert::yaml_to_json;
pub use locator::{locate, locate_default, CANDIDATE_FILES, MAX_SEARCH_DEPTH};
