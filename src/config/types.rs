// Configuration types module
// Settings loaded from file/environment, and the immutable handler configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Relative URL of the local specification endpoint
pub const LOCAL_SPEC_URL: &str = "./swagger.json";

/// Main settings structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub spec: SpecConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the specification document comes from
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SpecConfig {
    /// Explicit local specification file
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// External URL the UI fetches the specification from
    #[serde(default)]
    pub url: Option<String>,
    /// Starting directory for discovery when neither file nor url is set
    #[serde(default)]
    pub search_dir: Option<PathBuf>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// `max-age` for embedded assets, in seconds
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age: u32,
    #[serde(default)]
    pub enable_cors: bool,
}

#[allow(clippy::missing_const_for_fn)]
fn default_cache_max_age() -> u32 {
    3600
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            cache_max_age: default_cache_max_age(),
            enable_cors: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub access_log: bool,
    /// Access log format (common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "common".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            access_log: false,
            access_log_format: default_access_log_format(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Serialization of a local specification file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
}

impl SpecFormat {
    /// Detect the format from the file extension (`yml`/`yaml` mean YAML)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Source of the specification document, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    /// Nothing configured or discovered; the endpoint always answers 404
    None,
    /// File on disk served through `/swagger.json`
    LocalFile { path: PathBuf, format: SpecFormat },
    /// Document hosted elsewhere; the endpoint is disabled
    RemoteUrl { url: String },
}

impl SpecSource {
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = SpecFormat::from_path(&path);
        Self::LocalFile { path, format }
    }

    pub fn remote_url(url: impl Into<String>) -> Self {
        Self::RemoteUrl { url: url.into() }
    }

    /// URL injected into the index page
    pub fn spec_url(&self) -> &str {
        match self {
            Self::None => "",
            Self::LocalFile { .. } => LOCAL_SPEC_URL,
            Self::RemoteUrl { url } => url,
        }
    }
}

/// Immutable per-handler configuration
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    pub source: SpecSource,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

impl HandlerConfig {
    pub fn new(source: SpecSource) -> Self {
        Self {
            source,
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
