//! Turn-based combat rules for a text RPG.
//!
//! `combat-core` resolves one battle between a player [`Combatant`] and an
//! [`EnemyInstance`]: attacks, skills, spells, items, stances, status
//! effects, the enemy's decisions, loot and experience. It performs no I/O.
//! Records come in through the oracles of [`env`], player choices through an
//! [`ActionProvider`], and everything that happens goes out as
//! [`CombatEvent`]s.
//!
//! The usual entry point is [`resolve_combat`], or [`CombatEngine::run`] for
//! the full [`CombatReport`]. All randomness is derived from the encounter
//! seed, so a replay with the same seed and choices is identical.
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod provider;
pub mod state;

pub use action::{ActionOutcome, ActionRejection, EnemyAction, PlayerAction};
pub use ai::EnemyBrain;
pub use combat::{CombatContext, LevelUp, LootReport, ProgressionReport, SideState};
pub use config::CombatConfig;
pub use engine::{
    CombatEngine, CombatEvent, CombatOutcome, CombatReport, CombatState, EnemyAnalysis,
    resolve_combat,
};
pub use env::{
    Catalog, CombatEnv, Dice, Env, FixedRng, ItemDefinition, ItemEffect, ItemKind, OracleError,
    PcgRng, RngOracle, SkillDefinition, SpellDefinition, SpellEffect, SpellTarget,
};
pub use error::{ErrorSeverity, GameError};
pub use provider::{ActionProvider, CombatView, ProviderError, ScriptedProvider};
pub use state::{
    AiTrait, Combatant, EnemyId, EnemyInstance, EnemyTemplate, EquipmentSlot, ItemId,
    LegacyLootTable, LootEntry, LootGroupId, Side, SkillId, SpecialAbility, SpellId, Stance,
    StatusEffect, StatusEffects, StatusKind, StunEffect,
};
