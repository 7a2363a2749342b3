//! Request handler module
//!
//! Routes each request to the index page, the specification endpoint or
//! the embedded asset bundle.

pub mod index;
pub mod router;
pub mod spec_file;
pub mod static_files;

// Re-export main entry point
pub use router::{handle_request, RequestContext};
