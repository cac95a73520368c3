use std::collections::{BTreeMap, BTreeSet};

use super::{ItemId, SkillId, SpellId};
use crate::config::ProgressionRules;

/// Equipment slot referenced by skill prerequisites.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Shield,
}

/// The player character as seen by the combat engine.
///
/// Owned by the caller between fights and mutated in place while a combat
/// runs. Health and mana are clamped to their maxima by every mutator here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Combatant {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,

    pub equipped_weapon: Option<ItemId>,
    pub equipped_armor: Option<ItemId>,
    pub equipped_shield: Option<ItemId>,

    /// One entry per held unit; duplicates allowed.
    pub inventory: Vec<ItemId>,
    pub known_spells: BTreeSet<SpellId>,
    /// Skills the character may use, in menu order.
    pub known_skills: Vec<SkillId>,
    /// Remaining cooldown turns per skill. Absent means ready.
    pub skill_cooldowns: BTreeMap<SkillId, u32>,

    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
    pub skill_points: u32,
    pub combat_training: u32,
    pub magic_efficiency: u32,

    /// One-shot absorption pool, consumed before armor. `None` once depleted.
    pub temporary_shield: Option<u32>,
}

impl Combatant {
    /// Creates a level 1 character at full health and mana.
    pub fn new(name: impl Into<String>, max_health: u32, max_mana: u32) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            level: 1,
            xp_to_next_level: ProgressionRules::default().threshold_for(1),
            ..Self::default()
        }
    }

    pub fn with_weapon(mut self, item: impl Into<ItemId>) -> Self {
        self.equipped_weapon = Some(item.into());
        self
    }

    pub fn with_armor(mut self, item: impl Into<ItemId>) -> Self {
        self.equipped_armor = Some(item.into());
        self
    }

    pub fn with_shield(mut self, item: impl Into<ItemId>) -> Self {
        self.equipped_shield = Some(item.into());
        self
    }

    pub fn with_item(mut self, item: impl Into<ItemId>, quantity: usize) -> Self {
        let item = item.into();
        self.inventory
            .extend(std::iter::repeat_n(item, quantity));
        self
    }

    pub fn with_spell(mut self, spell: impl Into<SpellId>) -> Self {
        self.known_spells.insert(spell.into());
        self
    }

    pub fn with_skill(mut self, skill: impl Into<SkillId>) -> Self {
        let skill = skill.into();
        if !self.known_skills.contains(&skill) {
            self.known_skills.push(skill);
        }
        self
    }

    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&ItemId> {
        match slot {
            EquipmentSlot::Weapon => self.equipped_weapon.as_ref(),
            EquipmentSlot::Armor => self.equipped_armor.as_ref(),
            EquipmentSlot::Shield => self.equipped_shield.as_ref(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Fraction of health remaining in `[0, 1]`.
    pub fn health_ratio(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        f64::from(self.health.min(self.max_health)) / f64::from(self.max_health)
    }

    /// Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        dealt
    }

    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.health));
        self.health += healed;
        healed
    }

    /// Returns the mana actually restored.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_mana.saturating_sub(self.mana));
        self.mana += restored;
        restored
    }

    /// Deducts `amount` if affordable.
    pub fn spend_mana(&mut self, amount: u32) -> bool {
        if self.mana < amount {
            return false;
        }
        self.mana -= amount;
        true
    }

    /// Soaks up to `amount` with the temporary shield. Returns the absorbed part.
    ///
    /// The pool is removed once it reaches zero.
    pub fn absorb_with_shield(&mut self, amount: u32) -> u32 {
        let Some(pool) = self.temporary_shield else {
            return 0;
        };
        let absorbed = pool.min(amount);
        let left = pool - absorbed;
        self.temporary_shield = (left > 0).then_some(left);
        absorbed
    }

    pub fn add_shield(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        let pool = self.temporary_shield.unwrap_or(0).saturating_add(amount);
        self.temporary_shield = Some(pool);
    }

    pub fn item_count(&self, item: &ItemId) -> usize {
        self.inventory.iter().filter(|held| *held == item).count()
    }

    /// Removes exactly one unit of `item`. Returns false if none is held.
    pub fn remove_item(&mut self, item: &ItemId) -> bool {
        match self.inventory.iter().position(|held| held == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn skill_cooldown(&self, skill: &SkillId) -> u32 {
        self.skill_cooldowns.get(skill).copied().unwrap_or(0)
    }

    pub fn set_skill_cooldown(&mut self, skill: SkillId, turns: u32) {
        self.skill_cooldowns.insert(skill, turns);
    }

    /// Decrements every standing cooldown by one, never below zero.
    pub fn tick_cooldowns(&mut self) {
        for turns in self.skill_cooldowns.values_mut() {
            *turns = turns.saturating_sub(1);
        }
    }
}
