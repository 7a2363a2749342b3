//! HTTP protocol layer module
//!
//! Response builders, MIME detection and cache validation shared by the
//! index page, the specification endpoint and the static assets.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use cache::CachePolicy;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_error_response,
    build_options_response,
};
