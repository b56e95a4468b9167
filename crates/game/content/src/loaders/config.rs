//! Rule table loader.

use std::path::Path;

use phrase_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their default values. The result is validated before
    /// it is returned.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid game config: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn overrides_selected_keys() {
        let config = ConfigLoader::parse(
            r#"
            base_strikes = 5
            eliminate_count = 2

            [free_letters]
            "What Are You Doing?" = "ING"
            "Sports" = "S"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_strikes, 5);
        assert_eq!(config.eliminate_count, 2);
        assert_eq!(config.free_letters.len(), 2);
        assert_eq!(config.free_letters_for("Sports").to_text(), "S");
        assert_eq!(config.difficulty_tiers, GameConfig::default().difficulty_tiers);
    }

    #[test]
    fn rejects_invalid_tables() {
        let err = ConfigLoader::parse("base_strikes = 0").unwrap_err();
        assert!(err.to_string().contains("Invalid game config"));

        let err = ConfigLoader::parse("base_strikes = \"three\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
