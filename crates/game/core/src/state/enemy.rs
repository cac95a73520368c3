//! Enemy templates and the per-encounter instances spawned from them.
//!
//! A template is read-only catalog data. Every encounter works on its own
//! [`EnemyInstance`], produced by [`EnemyTemplate::spawn`], so ability
//! cooldowns and health never leak between fights.
use std::collections::BTreeSet;

use super::{EnemyId, ItemId, LootGroupId};

/// Chance-based stun attached to a skill or a special ability.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StunEffect {
    pub chance: f64,
    /// Actions the target loses.
    pub duration: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialAbility {
    pub id: String,
    pub name: String,
    pub damage_multiplier: f64,
    pub cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_cooldown: u32,
    /// Probability of the ability firing once the AI picks the special branch.
    pub chance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stun: Option<StunEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl SpecialAbility {
    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }
}

/// One row of a drop table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub item_id: ItemId,
    pub chance: f64,
}

impl LootEntry {
    pub fn new(item_id: impl Into<ItemId>, chance: f64) -> Self {
        Self {
            item_id: item_id.into(),
            chance,
        }
    }
}

/// Drop table format that predates loot groups.
///
/// Both shapes are still honored: a flat list grants every item, a list of
/// entries is rolled per entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LegacyLootTable {
    Weighted(Vec<LootEntry>),
    Guaranteed(Vec<ItemId>),
}

/// Behavior tags that bias the enemy's decision weights.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AiTrait {
    Aggressive,
    Defensive,
}

/// Immutable enemy record from the catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub health: u32,
    pub attack_min: u32,
    pub attack_max: u32,
    pub xp_value: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_abilities: Vec<SpecialAbility>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot_groups: Vec<LootGroupId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unique_loot: Vec<LootEntry>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot_table: Option<LegacyLootTable>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai_traits: BTreeSet<AiTrait>,
}

impl EnemyTemplate {
    /// Produces an independent instance for one encounter.
    ///
    /// Every ability starts off cooldown; nothing is shared with the template.
    pub fn spawn(&self) -> EnemyInstance {
        let special_abilities = self
            .special_abilities
            .iter()
            .cloned()
            .map(|mut ability| {
                ability.current_cooldown = 0;
                ability
            })
            .collect();

        EnemyInstance {
            template: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            health: self.health,
            max_health: self.health,
            attack_min: self.attack_min.min(self.attack_max),
            attack_max: self.attack_max.max(self.attack_min),
            xp_value: self.xp_value,
            special_abilities,
            loot_groups: self.loot_groups.clone(),
            unique_loot: self.unique_loot.clone(),
            loot_table: self.loot_table.clone(),
            ai_traits: self.ai_traits.clone(),
        }
    }
}

/// Mutable enemy exclusively owned by one combat session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInstance {
    pub template: EnemyId,
    pub name: String,
    pub description: String,
    pub health: u32,
    pub max_health: u32,
    pub attack_min: u32,
    pub attack_max: u32,
    pub xp_value: u32,
    pub special_abilities: Vec<SpecialAbility>,
    pub loot_groups: Vec<LootGroupId>,
    pub unique_loot: Vec<LootEntry>,
    pub loot_table: Option<LegacyLootTable>,
    pub ai_traits: BTreeSet<AiTrait>,
}

impl EnemyInstance {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn has_trait(&self, tag: AiTrait) -> bool {
        self.ai_traits.contains(&tag)
    }

    pub fn has_ready_ability(&self) -> bool {
        self.special_abilities.iter().any(SpecialAbility::is_ready)
    }

    /// Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        dealt
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.health));
        self.health += healed;
        healed
    }

    /// Decrements every standing ability cooldown by one, never below zero.
    pub fn tick_cooldowns(&mut self) {
        for ability in &mut self.special_abilities {
            ability.current_cooldown = ability.current_cooldown.saturating_sub(1);
        }
    }
}
