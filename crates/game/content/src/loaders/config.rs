//! Combat rules loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat rules from TOML files.
///
/// Every table is optional; missing keys keep their [`CombatConfig::default`] value.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_tables_keep_defaults() {
        let config = ConfigLoader::parse(
            r#"
            debug_diagnostics = true

            [flee]
            base_chance = 0.5

            [stances.aggressive]
            attack = 3
            "#,
        )
        .unwrap();

        assert!(config.debug_diagnostics);
        assert_eq!(config.flee.base_chance, 0.5);
        assert_eq!(config.flee.wound_bonus, 0.2);
        assert_eq!(config.stances.aggressive.attack, 3);
        assert_eq!(config.stances.aggressive.defense, 0);
        assert_eq!(config.attack_die, 6);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), CombatConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = ConfigLoader::parse("attack_die = \"six\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
