//! Composition root: config, storage, stores, and the API client.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use mechkey_core::KeyValueStorage;
use mechkey_http::{ApiClient, ClientSettings};
use mechkey_store::{AuthStore, CartStore, Config, FileStorage};
use tracing::debug;

use crate::Cli;

/// Everything a command needs, wired once per invocation.
pub struct AppContext {
    /// Effective configuration.
    pub config: Config,
    /// The local cart.
    pub cart: CartStore,
    /// The admin session.
    pub auth: AuthStore,
    /// Storefront API client.
    pub client: ApiClient,
}

impl AppContext {
    /// Builds the context from CLI flags, the config file, and the environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli)?;

        let data_dir = config.data_dir();
        let storage: Arc<dyn KeyValueStorage> = Arc::new(
            FileStorage::open(&data_dir)
                .with_context(|| format!("cannot open data directory {}", data_dir.display()))?,
        );

        let settings = client_settings(&config);
        let client = ApiClient::new(&settings, Arc::clone(&storage))?;

        debug!(
            base_url = %settings.base_url,
            data_dir = %data_dir.display(),
            "Context ready"
        );

        Ok(Self {
            cart: CartStore::load(Arc::clone(&storage)),
            auth: AuthStore::load(storage),
            config,
            client,
        })
    }
}

/// Returns the config file path in effect.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(Config::default_path)
}

/// Loads config, then applies environment and flag overrides.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let path = config_path(cli);
    let mut config = Config::load_from(&path)?;
    config.apply_env_overrides();

    if let Some(url) = &cli.api_url {
        config.api.base_url.clone_from(url);
    }
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    Ok(config)
}

/// Maps config onto client settings.
pub fn client_settings(config: &Config) -> ClientSettings {
    ClientSettings {
        base_url: config.api.base_url.clone(),
        timeout: config.timeout(),
        bypass_tunnel_warning: config.api.bypass_tunnel_warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_settings_from_config() {
        let mut config = Config::default();
        config.api.base_url = "https://shop.example/api".to_string();
        config.api.timeout_secs = 3;
        config.api.bypass_tunnel_warning = false;

        let settings = client_settings(&config);
        assert_eq!(settings.base_url, "https://shop.example/api");
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert!(!settings.bypass_tunnel_warning);
    }
}
