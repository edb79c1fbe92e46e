use std::path::PathBuf;

use serde::Deserialize;

const CONFIG_FILE: &str = "aquaweb.yaml";

/// Runtime configuration.
///
/// Read from `aquaweb.yaml` in the working directory when present,
/// defaults otherwise. `AQUAWEB_PORT` overrides the configured port.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Port the listener binds on all interfaces.
    pub port: u16,
    /// Directory the favicon and stylesheet pages read files from.
    pub web_root: PathBuf,
    /// General diagnostics.
    pub debug: bool,
    /// Connection-level diagnostics.
    pub debug_web: bool,
    /// Request/response diagnostics.
    pub debug_http: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            web_root: PathBuf::from("."),
            debug: false,
            debug_web: false,
            debug_http: false,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut cfg: Config = std::fs::read_to_string(CONFIG_FILE)
            .ok()
            .and_then(|text| match serde_yaml::from_str(&text) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    tracing::warn!("ignoring malformed {}: {}", CONFIG_FILE, e);
                    None
                }
            })
            .unwrap_or_default();

        if let Ok(port) = std::env::var("AQUAWEB_PORT") {
            match port.parse() {
                Ok(port) => cfg.port = port,
                Err(_) => tracing::warn!("ignoring non-numeric AQUAWEB_PORT: {}", port),
            }
        }

        cfg
    }

    /// All-interfaces listen address for the configured port.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
