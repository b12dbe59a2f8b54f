use anyhow::Context;
use dex_config::DexConfig;

/// Load layered configuration, reading `.env` from the working directory.
pub fn load_config() -> anyhow::Result<DexConfig> {
    let config = DexConfig::load_with_dotenv().context("failed to load dex configuration")?;
    tracing::debug!(base_url = config.api.base_url(), "configuration loaded");
    Ok(config)
}
