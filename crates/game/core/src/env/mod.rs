//! Traits describing read-only combat records.
//!
//! Oracles expose item, spell, skill and loot-group records by identifier.
//! The [`Env`] aggregate bundles them with the rules and the random source so
//! the engine receives everything as explicit, injected context.
mod catalog;
mod enemies;
mod error;
mod items;
mod loot;
mod rng;
mod skills;
mod spells;

pub use catalog::Catalog;
pub use enemies::EnemyOracle;
pub use error::OracleError;
pub use items::{ItemDefinition, ItemEffect, ItemKind, ItemOracle};
pub use loot::LootOracle;
pub use rng::{Dice, FixedRng, PcgRng, RngOracle, Roll, compute_seed};
pub use skills::{SkillDefinition, SkillOracle};
pub use spells::{SecondaryStatus, SpellDefinition, SpellEffect, SpellOracle, SpellTarget};

use crate::config::CombatConfig;

/// Aggregates the read-only context one combat needs.
pub struct Env<'a, I, S, K, L, R>
where
    I: ItemOracle + ?Sized,
    S: SpellOracle + ?Sized,
    K: SkillOracle + ?Sized,
    L: LootOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    items: &'a I,
    spells: &'a S,
    skills: &'a K,
    loot: &'a L,
    rng: &'a R,
    config: &'a CombatConfig,
    seed: u64,
}

pub type CombatEnv<'a> = Env<
    'a,
    dyn ItemOracle + 'a,
    dyn SpellOracle + 'a,
    dyn SkillOracle + 'a,
    dyn LootOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<I, S, K, L, R> Clone for Env<'_, I, S, K, L, R>
where
    I: ItemOracle + ?Sized,
    S: SpellOracle + ?Sized,
    K: SkillOracle + ?Sized,
    L: LootOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, S, K, L, R> Copy for Env<'_, I, S, K, L, R>
where
    I: ItemOracle + ?Sized,
    S: SpellOracle + ?Sized,
    K: SkillOracle + ?Sized,
    L: LootOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<'a, I, S, K, L, R> Env<'a, I, S, K, L, R>
where
    I: ItemOracle + ?Sized,
    S: SpellOracle + ?Sized,
    K: SkillOracle + ?Sized,
    L: LootOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        items: &'a I,
        spells: &'a S,
        skills: &'a K,
        loot: &'a L,
        rng: &'a R,
        config: &'a CombatConfig,
    ) -> Self {
        Self {
            items,
            spells,
            skills,
            loot,
            rng,
            config,
            seed: 0,
        }
    }

    /// Sets the encounter seed every roll is derived from.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn items(&self) -> &'a I {
        self.items
    }

    pub fn spells(&self) -> &'a S {
        self.spells
    }

    pub fn skills(&self) -> &'a K {
        self.skills
    }

    pub fn loot(&self) -> &'a L {
        self.loot
    }

    pub fn rng(&self) -> &'a R {
        self.rng
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<'a> CombatEnv<'a> {
    /// Builds an environment whose records all come from one catalog.
    pub fn from_catalog(
        catalog: &'a Catalog,
        rng: &'a dyn RngOracle,
        config: &'a CombatConfig,
    ) -> Self {
        Self::new(catalog, catalog, catalog, catalog, rng, config)
    }

    /// Seeded roll source for a new encounter.
    pub fn dice(&self) -> Dice<'a> {
        Dice::new(self.rng, self.seed)
    }
}
