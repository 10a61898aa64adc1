//! Bootstrap: startup checks and plant table loading.
//!
//! When greenard starts:
//! 1. Verify the config is usable; refuse to start otherwise.
//! 2. Load the CSV table once and build the plants module around it.

use std::path::Path;

use plants::PlantsModule;
use plants::loader::load_csv;
use plants::service::PlantService;
use plants::slug::AssetBase;
use tracing::info;

use crate::config::ServerConfig;

/// Verify server configuration before anything is loaded.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.server.listen.trim().is_empty() {
        anyhow::bail!("server.listen is empty in configuration.");
    }
    let base = &config.assets.base_url;
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        anyhow::bail!(
            "assets.base_url must be an absolute http(s) URL, got {:?}.",
            base
        );
    }
    if config.cors.origins.iter().any(|o| o.trim().is_empty()) {
        anyhow::bail!("cors.origins contains an empty entry.");
    }
    Ok(())
}

/// Load the plant table and wrap it in the plants module.
pub fn load_plants(csv_path: &Path, config: &ServerConfig) -> anyhow::Result<PlantsModule> {
    let assets = AssetBase::new(config.assets.base_url.as_str());
    let table = load_csv(csv_path, &assets)
        .map_err(|e| anyhow::anyhow!("failed to load plant table: {}", e))?;
    info!("Asset URLs derived under {}", assets.as_str());
    Ok(PlantsModule::new(PlantService::new(table)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_default_config() {
        assert!(verify_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_verify_empty_listen() {
        let mut config = ServerConfig::default();
        config.server.listen = "  ".to_string();
        assert!(verify_config(&config).is_err());
    }

    #[test]
    fn test_verify_relative_asset_base() {
        let mut config = ServerConfig::default();
        config.assets.base_url = "/static".to_string();
        assert!(verify_config(&config).is_err());
    }

    #[test]
    fn test_verify_empty_origin() {
        let mut config = ServerConfig::default();
        config.cors.origins.push(String::new());
        assert!(verify_config(&config).is_err());
    }

    #[test]
    fn test_load_plants() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plants.csv");
        std::fs::write(&path, "Name,City\nNeem Tree,Pune\n").unwrap();

        let module = load_plants(&path, &ServerConfig::default()).unwrap();
        assert_eq!(module.service().count(), 1);
    }

    #[test]
    fn test_load_plants_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_plants(&dir.path().join("plants.csv"), &ServerConfig::default())
            .err()
            .unwrap();
        assert!(err.to_string().contains("failed to load plant table"));
    }
}
