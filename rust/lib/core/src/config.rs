use std::path::PathBuf;

/// Name of the source table looked up next to the executable.
pub const DEFAULT_DATA_FILE: &str = "plants.csv";

/// Runtime configuration shared by service modules.
///
/// The server binary fills this from its TOML file and CLI flags, then
/// hands it to module initialization.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Path to the CSV source table.
    /// Defaults to `plants.csv` next to the running executable.
    pub data_file: Option<PathBuf>,

    /// Listen address for the HTTP server.
    pub listen: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            listen: "0.0.0.0:8000".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve the source table path, falling back to the executable's directory.
    pub fn resolve_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| Self::exe_dir().join(DEFAULT_DATA_FILE))
    }

    fn exe_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
