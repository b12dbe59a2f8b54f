use anyhow::Context;
use dex_catalog::CatalogClient;
use dex_config::DexConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: DexConfig,
    pub catalog: CatalogClient,
}

impl AppContext {
    pub fn init(config: DexConfig) -> anyhow::Result<Self> {
        let catalog =
            CatalogClient::from_config(&config.api).context("failed to build catalog HTTP client")?;
        Ok(Self { config, catalog })
    }

    #[must_use]
    pub fn sprite_base_url(&self) -> &str {
        &self.config.api.sprite_base_url
    }
}
