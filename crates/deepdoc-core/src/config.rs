//! Client configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, Result};

/// Service and viewer origin used when nothing else is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Main configuration structure for DeepDoc.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search service settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Document viewer settings.
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Static host settings (native server only).
    #[serde(default)]
    pub server: ServerConfig,
}

/// Search service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Origin of the search service (e.g., "http://localhost:5000").
    #[serde(default = "default_origin")]
    pub base_url: String,
}

/// Viewer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Origin serving `/pdf?file=<path>`.
    #[serde(default = "default_origin")]
    pub base_url: String,
}

/// Static host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_address")]
    pub address: String,

    /// Directory holding the compiled site.
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_origin(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: default_origin(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            site_root: default_site_root(),
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.normalized()
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.normalized()
    }

    /// Load configuration from an optional file layered under
    /// `DEEPDOC__SECTION__KEY` environment variables.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("DEEPDOC").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.normalized()
    }

    /// Configuration baked into the browser build.
    ///
    /// `DEEPDOC_SERVICE_URL` and `DEEPDOC_VIEWER_URL` are read at compile
    /// time. An invalid override falls back to the defaults.
    pub fn compiled() -> Self {
        Self::with_origins(
            option_env!("DEEPDOC_SERVICE_URL"),
            option_env!("DEEPDOC_VIEWER_URL"),
        )
    }

    /// Defaults with the given origins, or plain defaults when either is invalid.
    pub fn with_origins(service: Option<&str>, viewer: Option<&str>) -> Self {
        let mut config = Config::default();
        if let Some(url) = service {
            config.service.base_url = url.to_string();
        }
        if let Some(url) = viewer {
            config.viewer.base_url = url.to_string();
        }

        config.normalized().unwrap_or_else(|err| {
            tracing::warn!("ignoring configured URLs: {err}");
            Config::default()
        })
    }

    /// Validate URLs and strip trailing slashes.
    fn normalized(mut self) -> Result<Self> {
        self.service.base_url = normalize_origin("service.base_url", &self.service.base_url)?;
        self.viewer.base_url = normalize_origin("viewer.base_url", &self.viewer.base_url)?;

        if self.server.site_root.as_os_str().is_empty() {
            return Err(CoreError::config("server.site_root cannot be empty"));
        }

        Ok(self)
    }

    /// Build a service URL for `path` with percent-encoded query parameters.
    pub fn service_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!(
            "{}/{}",
            self.service.base_url,
            path.trim_start_matches('/')
        );
        Url::parse_with_params(&raw, params)
            .map_err(|e| CoreError::config_with_source(format!("Invalid service URL: {raw}"), e))
    }

    /// Viewer link for a document path: `{viewer}/pdf?file=<path>`.
    pub fn viewer_url(&self, path: &str) -> String {
        let raw = format!("{}/pdf", self.viewer.base_url);
        match Url::parse_with_params(&raw, &[("file", path)]) {
            Ok(url) => url.into(),
            Err(_) => format!("{raw}?file={path}"),
        }
    }
}

fn normalize_origin(key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(CoreError::config(format!("{key} cannot be empty")));
    }

    let parsed = Url::parse(value)
        .map_err(|e| CoreError::config_with_source(format!("{key} is not a valid URL"), e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CoreError::config(format!(
            "{key} must use http or https, got {}",
            parsed.scheme()
        )));
    }

    if value.ends_with('/') {
        tracing::warn!("{key} should not have a trailing slash");
    }

    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[service]
base_url = "http://search.internal:5000"

[viewer]
base_url = "https://viewer.example.com/"

[server]
address = "0.0.0.0:8080"
site_root = "dist"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("deepdoc.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.service.base_url, "http://search.internal:5000");
        assert_eq!(config.viewer.base_url, "https://viewer.example.com");
        assert_eq!(config.server.address, "0.0.0.0:8080");
        assert_eq!(config.server.site_root, Path::new("dist"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str("").expect("empty config");

        assert_eq!(config, Config::default());
        assert_eq!(config.service.base_url, "http://localhost:5000");
        assert_eq!(config.viewer.base_url, "http://localhost:5000");
        assert_eq!(config.server.address, "127.0.0.1:3000");
        assert_eq!(config.server.site_root, Path::new("target/site"));
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("deepdoc.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(Some(&config_path)).expect("load config");
        assert_eq!(config.server.site_root, Path::new("dist"));
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("deepdoc.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var("DEEPDOC__SERVICE__BASE_URL", "http://override:9000/") };
        let result = Config::load_with_env(Some(&config_path));
        unsafe { std::env::remove_var("DEEPDOC__SERVICE__BASE_URL") };

        let config = result.expect("load config");
        assert_eq!(config.service.base_url, "http://override:9000");
        assert_eq!(config.viewer.base_url, "https://viewer.example.com");
        assert_eq!(config.server.address, "0.0.0.0:8080");
    }

    #[test]
    fn test_service_url_encodes_query() {
        let config = Config::default();
        let url = config
            .service_url("/search/term", &[("query", "aa,bb")])
            .expect("url");

        assert_eq!(url.path(), "/search/term");
        assert_eq!(url.as_str(), "http://localhost:5000/search/term?query=aa%2Cbb");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("query".to_string(), "aa,bb".to_string())]);
    }

    #[test]
    fn test_service_url_keeps_base_path() {
        let config = Config::from_toml_str(
            r#"
[service]
base_url = "https://example.com/api"
"#,
        )
        .expect("config");

        let url = config
            .service_url("search/tag", &[("query", "geologia & solo")])
            .expect("url");
        assert_eq!(url.path(), "/api/search/tag");
        assert_eq!(url.query(), Some("query=geologia+%26+solo"));
    }

    #[test]
    fn test_viewer_url() {
        let config = Config::default();
        assert_eq!(
            config.viewer_url("docs/relatorio final.pdf"),
            "http://localhost:5000/pdf?file=docs%2Frelatorio+final.pdf"
        );
    }

    #[test]
    fn test_config_validation_empty_url() {
        let result = Config::from_toml_str(
            r#"
[service]
base_url = ""
"#,
        );
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("service.base_url cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_rejects_non_http_scheme() {
        let result = Config::from_toml_str(
            r#"
[viewer]
base_url = "ftp://files.example.com"
"#,
        );
        assert!(result.unwrap_err().to_string().contains("http or https"));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/deepdoc.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_origin_falls_back_to_defaults() {
        let config = Config::with_origins(Some("ftp://x"), Some("https://viewer.example.com"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_valid_origins_are_normalized() {
        let config = Config::with_origins(Some("https://search.example.com/"), None);
        assert_eq!(config.service.base_url, "https://search.example.com");
        assert_eq!(config.viewer.base_url, DEFAULT_ORIGIN);
    }

    #[test]
    fn test_compiled_config_is_valid() {
        let config = Config::compiled();
        assert!(config.service.base_url.starts_with("http"));
        assert!(!config.viewer.base_url.ends_with('/'));
    }
}
