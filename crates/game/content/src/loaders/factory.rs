//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use combat_core::{
    Catalog, CombatConfig, EnemyTemplate, ItemDefinition, SkillDefinition, SpellDefinition,
};
use tracing::{debug, info};

use crate::Content;
use crate::loaders::{
    ConfigLoader, EnemyLoader, ItemLoader, LoadResult, LootGroupLoader, SkillLoader, SpellLoader,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── items.ron
/// ├── spells.ron
/// ├── skills.ron
/// ├── enemies.ron
/// └── loot_groups.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const ITEMS_FILE: &'static str = "items.ron";
    pub const SPELLS_FILE: &'static str = "spells.ron";
    pub const SKILLS_FILE: &'static str = "skills.ron";
    pub const ENEMIES_FILE: &'static str = "enemies.ron";
    pub const LOOT_GROUPS_FILE: &'static str = "loot_groups.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat rules from `config.toml`, or the defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no rules file, using default combat config");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    pub fn load_items(&self, config: &CombatConfig) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join(Self::ITEMS_FILE), config)
    }

    pub fn load_spells(&self) -> LoadResult<Vec<SpellDefinition>> {
        SpellLoader::load(&self.data_dir.join(Self::SPELLS_FILE))
    }

    pub fn load_skills(&self) -> LoadResult<Vec<SkillDefinition>> {
        SkillLoader::load(&self.data_dir.join(Self::SKILLS_FILE))
    }

    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join(Self::ENEMIES_FILE))
    }

    /// Load every catalog file into one [`Catalog`].
    ///
    /// `config` supplies defaults the records leave out.
    pub fn load_catalog(&self, config: &CombatConfig) -> LoadResult<Catalog> {
        let mut catalog = Catalog::new();
        for item in self.load_items(config)? {
            catalog.insert_item(item);
        }
        for spell in self.load_spells()? {
            catalog.insert_spell(spell);
        }
        for skill in self.load_skills()? {
            catalog.insert_skill(skill);
        }
        let groups = LootGroupLoader::load(&self.data_dir.join(Self::LOOT_GROUPS_FILE))?;
        for (id, entries) in groups {
            catalog.insert_loot_group(id, entries);
        }
        for enemy in self.load_enemies()? {
            catalog.insert_enemy(enemy);
        }
        Ok(catalog)
    }

    /// Load rules and catalog, then report dangling references.
    pub fn load(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let catalog = self.load_catalog(&config)?;
        let content = Content::new(config, catalog);
        let dangling = content.audit();
        info!(
            data_dir = %self.data_dir.display(),
            enemies = content.catalog.enemies().count(),
            dangling,
            "content loaded"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_catalog_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path())
            .load_items(&CombatConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("items.ron"));
    }

    #[test]
    fn missing_rules_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContentFactory::new(dir.path()).load_config().unwrap();
        assert_eq!(config, CombatConfig::default());
    }
}
