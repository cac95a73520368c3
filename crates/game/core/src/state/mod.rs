//! Combat-facing state representation.
//!
//! These are the records the engine reads and mutates: the caller-owned
//! [`Combatant`], the session-owned [`EnemyInstance`] and the per-side
//! [`StatusEffects`]. Read-only catalog records live in [`crate::env`].
mod combatant;
mod common;
mod enemy;
mod stance;
mod status;

pub use combatant::{Combatant, EquipmentSlot};
pub use common::{EnemyId, ItemId, LootGroupId, Side, SkillId, SpellId};
pub use enemy::{
    AiTrait, EnemyInstance, EnemyTemplate, LegacyLootTable, LootEntry, SpecialAbility, StunEffect,
};
pub use stance::Stance;
pub use status::{StatusEffect, StatusEffects, StatusKind};
