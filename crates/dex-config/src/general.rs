//! General application configuration.

use serde::{Deserialize, Serialize};

/// Page shown when no `--page` is given.
const fn default_page() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page for list/search commands. Values below 1 are treated as 1.
    #[serde(default = "default_page")]
    pub default_page: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn default_page(&self) -> u32 {
        self.default_page.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_page(), 1);
    }

    #[test]
    fn zero_page_clamps_to_one() {
        let config = GeneralConfig { default_page: 0 };
        assert_eq!(config.default_page(), 1);
    }
}
