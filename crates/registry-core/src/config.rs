use std::path::PathBuf;

/// Default directory holding one sub-directory per package version.
pub const DEFAULT_PACKAGES_DIR: &str = "packages";

/// Default host the HTTP server binds to.
pub const DEFAULT_HOST: &str = "localhost";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the registry CLI and server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory containing the package directories.
    pub packages_dir: PathBuf,

    /// Host to bind the HTTP server to.
    pub host: String,

    /// Port to bind the HTTP server to.
    pub port: u16,

    /// Whether to emit JSON logs.
    pub json_logs: bool,

    /// Verbosity level (0 = INFO, 1 = DEBUG, 2+ = TRACE).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages_dir: PathBuf::from(DEFAULT_PACKAGES_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            json_logs: false,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Create a new config serving the given packages directory.
    #[must_use]
    pub fn new(packages_dir: PathBuf) -> Self {
        Self {
            packages_dir,
            ..Default::default()
        }
    }

    /// Set host and port.
    #[must_use]
    pub fn with_listen(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Set verbosity level.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set JSON log output.
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Address string suitable for `TcpListener::bind`.
    ///
    /// `localhost` is mapped to `127.0.0.1` so the result always parses as a
    /// socket address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        let host = if self.host == "localhost" {
            "127.0.0.1"
        } else {
            self.host.as_str()
        };
        format!("{host}:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.packages_dir, PathBuf::from("packages"));
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_bind_addr_maps_localhost() {
        let config = Config::default().with_listen("localhost", 9000);
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");

        let config = Config::default().with_listen("0.0.0.0", 80);
        assert_eq!(config.bind_addr(), "0.0.0.0:80");
    }

    #[test]
    fn test_builder_sets_every_field() {
        let config = Config::new(PathBuf::from("./packages"))
            .with_listen("0.0.0.0", 9090)
            .with_verbosity(2)
            .with_json_logs(true);

        assert_eq!(
            config,
            Config {
                packages_dir: PathBuf::from("./packages"),
                host: "0.0.0.0".to_string(),
                port: 9090,
                json_logs: true,
                verbosity: 2,
            }
        );
    }
}
