//! Server configuration.
//!
//! Reads an optional TOML file; every section and field has a default, so
//! the server also starts with no file at all.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level server configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ListenConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenConfig {
    /// Listen address (e.g. "0.0.0.0:8000").
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV source table. Unset means `plants.csv` next to the executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Host serving `/models/*.glb`, `/models/*.usdz` and `/images/*.jpg`.
    #[serde(default = "default_asset_base")]
    pub base_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: default_asset_base(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API from a browser.
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_origins(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_asset_base() -> String {
    plants::slug::DEFAULT_ASSET_BASE.to_string()
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://192.168.43.72:3000".to_string(),
    ]
}

impl ServerConfig {
    /// Load config from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// The module-facing subset of this configuration.
    pub fn service_config(&self) -> greenar_core::ServiceConfig {
        greenar_core::ServiceConfig {
            data_file: self.data.csv_path.clone(),
            listen: self.server.listen.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.listen, "0.0.0.0:8000");
        assert!(config.data.csv_path.is_none());
        assert_eq!(config.assets.base_url, "http://192.168.43.72:3000");
        assert_eq!(config.cors.origins.len(), 2);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ServerConfig::parse("").unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:8000");
        assert_eq!(config.cors.origins[0], "http://localhost:3000");
    }

    #[test]
    fn test_parse_full() {
        let config = ServerConfig::parse(
            r#"
[server]
listen = "127.0.0.1:9000"

[data]
csv_path = "/srv/greenar/plants.csv"

[assets]
base_url = "https://cdn.greenar.app"

[cors]
origins = ["https://greenar.app"]
"#,
        )
        .unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:9000");
        assert_eq!(config.data.csv_path, Some(PathBuf::from("/srv/greenar/plants.csv")));
        assert_eq!(config.assets.base_url, "https://cdn.greenar.app");
        assert_eq!(config.cors.origins, ["https://greenar.app"]);

        let svc = config.service_config();
        assert_eq!(svc.listen, "127.0.0.1:9000");
        assert_eq!(svc.resolve_data_file(), PathBuf::from("/srv/greenar/plants.csv"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greenard.toml");
        std::fs::write(&path, "[server]\nlisten = \"127.0.0.1:8100\"\n").unwrap();
        let config = ServerConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:8100");
        assert_eq!(config.assets.base_url, "http://192.168.43.72:3000");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ServerConfig::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ServerConfig::parse("[server\nlisten = 1").is_err());
    }
}
