//! Embeddable Swagger UI handler
//!
//! Serves a browsable API documentation page from an embedded UI bundle and
//! republishes the specification document as JSON, whether it is stored as
//! JSON or YAML. The handler is meant to be mounted inside a host hyper
//! server:
//!
//! ```no_run
//! use hyper::server::conn::http1;
//! use swagger_ui_handler::SwaggerUi;
//!
//! # async fn run(io: impl hyper::rt::Read + hyper::rt::Write + Unpin + Send + 'static) {
//! let handler = SwaggerUi::from_file("api/swagger.yaml");
//! http1::Builder::new().serve_connection(io, handler).await.ok();
//! # }
//! ```
//!
//! Routes, relative to wherever the host mounts the handler:
//! - `/` renders the index page pointing the UI at the specification URL
//! - `/swagger.json` serves the local specification document as JSON
//! - anything else is looked up in the embedded asset bundle

pub mod assets;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod spec;

pub use crate::config::{HandlerConfig, Settings, SpecFormat, SpecSource};
pub use crate::error::{Error, Result};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::service::Service;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

/// The Swagger UI request handler
///
/// Configuration is fixed at construction and shared between clones, so a
/// single instance can serve any number of concurrent connections.
#[derive(Debug, Clone)]
pub struct SwaggerUi {
    config: Arc<HandlerConfig>,
}

impl SwaggerUi {
    /// Discover a specification file from the working directory, then from
    /// the executable's directory
    ///
    /// When nothing is found the index page still renders, but
    /// `/swagger.json` answers 404.
    pub fn discover() -> Self {
        Self::with_source(crate::config::discovered_source(spec::locate_default()))
    }

    /// Discover a specification file starting at `dir`
    pub fn discover_from(dir: impl AsRef<Path>) -> Self {
        Self::with_source(crate::config::discovered_source(spec::locate(dir.as_ref())))
    }

    /// Serve the given local file (`.yml`/`.yaml` files are converted)
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::with_source(SpecSource::local_file(path))
    }

    /// Point the UI at an external specification URL
    ///
    /// The local `/swagger.json` endpoint is disabled.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::with_source(SpecSource::remote_url(url))
    }

    /// Build a handler from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::from_config(settings.to_handler_config()?))
    }

    pub fn from_config(config: HandlerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    fn with_source(source: SpecSource) -> Self {
        Self::from_config(HandlerConfig::new(source))
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    pub fn source(&self) -> &SpecSource {
        &self.config.source
    }

    /// Handle one request
    pub async fn handle<B>(
        &self,
        req: Request<B>,
    ) -> std::result::Result<Response<Full<Bytes>>, Infallible> {
        let ctx = handler::RequestContext::from_request(&req);
        Ok(handler::handle_request(ctx, &self.config).await)
    }
}

impl<B> Service<Request<B>> for SwaggerUi {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future =
        Pin<Box<dyn Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        let ctx = handler::RequestContext::from_request(&req);
        let config = Arc::clone(&self.config);
        Box::pin(async move { Ok(handler::handle_request(ctx, &config).await) })
    }
}
