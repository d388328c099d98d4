use std::path::PathBuf;

/// Sheet server configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// JSON workbook file; in-memory workbook when unset
    pub workbook_path: Option<PathBuf>,
    pub environment: String,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8787),
            workbook_path: std::env::var("WORKBOOK_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Use a file-backed workbook at `path`
    pub fn with_workbook_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.workbook_path = Some(path.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
