//! Data-driven combat content and its loaders.
//!
//! - Legacy record shapes for spells and items ([`records`]) and their
//!   conversion into the core's tagged variants
//! - RON catalogs for items, spells, skills, enemies and loot groups
//! - The TOML rules file overlaying [`combat_core::CombatConfig`]
//! - The shipped data set, embedded at compile time ([`Content::bundled`])
//!
//! Content reaches the engine through the oracles of a
//! [`combat_core::Catalog`]; the engine never sees these file formats.

pub mod audit;
pub mod records;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
mod bundled;

pub use audit::{DanglingReference, MissingRecord, dangling_references};
pub use records::{EffectValue, ItemRecord, RecordError, SpellRecord};

#[cfg(feature = "loaders")]
pub use bundled::Content;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EnemyLoader, ItemLoader, LoadResult, LootGroupLoader,
    SkillLoader, SpellLoader,
};
