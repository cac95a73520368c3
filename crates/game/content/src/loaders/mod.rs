//! Content loaders for reading combat data from files.
//!
//! Each loader reads one RON or TOML file and returns core definitions.
//! Legacy record shapes are converted through [`crate::records`].

pub mod config;
pub mod enemy;
pub mod factory;
pub mod item;
pub mod loot;
pub mod skill;
pub mod spell;

pub use config::ConfigLoader;
pub use enemy::EnemyLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use loot::LootGroupLoader;
pub use skill::SkillLoader;
pub use spell::SpellLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
