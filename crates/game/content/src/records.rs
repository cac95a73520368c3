//! Legacy record shapes and their conversion into core definitions.
//!
//! Spell and item files keep the loosely typed layout the game has always
//! used: a `type` string plus a handful of numeric fields for spells, and an
//! open `effects` map for items. Conversion happens once at load time so the
//! combat resolver only ever matches on closed enums.
use std::collections::BTreeMap;

use combat_core::env::SecondaryStatus;
use combat_core::{
    CombatConfig, ErrorSeverity, GameError, ItemDefinition, ItemEffect, ItemKind, SpellDefinition,
    SpellEffect, SpellId, SpellTarget, StatusEffect, StatusKind,
};
use tracing::debug;

/// Probability of an offensive spell's rider status landing.
const SECONDARY_CHANCE: f64 = 0.3;

const BURNING: &str = "Burning";
const BURN_PER_TURN: u32 = 2;
const BURN_TURNS: u32 = 3;

const TIME_SLOW: &str = "Time Slow";
const SLOW_TURNS: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("spell '{spell}' has unknown type '{kind}'")]
    UnknownSpellType { spell: SpellId, kind: String },

    #[error("spell '{spell}' has unknown target '{target}'")]
    UnknownTarget { spell: SpellId, target: String },

    #[error("spell '{spell}' of type '{kind}' needs a special effect, found {found:?}")]
    MissingSpecialEffect {
        spell: SpellId,
        kind: String,
        found: Option<String>,
    },

    #[error("spell '{spell}' has negative value {value}")]
    NegativeValue { spell: SpellId, value: i32 },
}

impl GameError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSpellType { .. } => "CONTENT_UNKNOWN_SPELL_TYPE",
            Self::UnknownTarget { .. } => "CONTENT_UNKNOWN_TARGET",
            Self::MissingSpecialEffect { .. } => "CONTENT_MISSING_SPECIAL_EFFECT",
            Self::NegativeValue { .. } => "CONTENT_NEGATIVE_VALUE",
        }
    }
}

/// Spell as written in `spells.ron`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellRecord {
    pub id: SpellId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// `OFFENSE`, `HEAL`, `DEBUFF`, ...
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// `ENEMY`, `SELF` or `ANY`.
    pub target: String,
    pub mana_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_effect: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub school: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: Option<u32>,
}

impl SpellRecord {
    fn special(&self) -> Option<&str> {
        self.special_effect.as_deref()
    }

    fn amount(&self) -> Result<u32, RecordError> {
        u32::try_from(self.value).map_err(|_| RecordError::NegativeValue {
            spell: self.id.clone(),
            value: self.value,
        })
    }

    fn effect(&self) -> Result<SpellEffect, RecordError> {
        let duration = self.duration;
        let effect = match self.kind.to_ascii_uppercase().as_str() {
            "OFFENSE" => SpellEffect::Offense {
                damage: self.amount()?,
                secondary: self.secondary(),
            },
            "HEAL" => SpellEffect::Heal {
                amount: self.amount()?,
            },
            "HEAL_OVER_TIME" => SpellEffect::HealOverTime {
                per_turn: self.amount()?,
                duration,
            },
            "OFFENSE_DOT" => SpellEffect::OffenseDot {
                per_turn: self.amount()?,
                duration,
            },
            "VAMPIRIC" => SpellEffect::Vampiric {
                damage: self.amount()?,
            },
            "DEBUFF" if self.special() == Some("time_manipulation") => {
                SpellEffect::TimeSlow { duration }
            }
            "DEBUFF" => SpellEffect::WeakenAttack {
                magnitude: self.value.unsigned_abs(),
                duration,
            },
            "ATTACK_BUFF" => SpellEffect::AttackBuff {
                magnitude: self.amount()?,
                duration,
                crit_bonus: self.special() == Some("crit_bonus"),
            },
            "DEFENSE_BUFF" if duration == 0 || self.special() == Some("temporary_shield") => {
                SpellEffect::TemporaryShield {
                    amount: self.amount()?,
                }
            }
            "DEFENSE_BUFF" => SpellEffect::DefenseBuff {
                magnitude: self.amount()?,
                duration,
            },
            "UTILITY" => match self.special() {
                Some("dispel") => SpellEffect::Dispel,
                Some("mana_damage") => SpellEffect::PiercingDamage {
                    damage: self.amount()?,
                },
                other => {
                    return Err(RecordError::MissingSpecialEffect {
                        spell: self.id.clone(),
                        kind: self.kind.clone(),
                        found: other.map(str::to_string),
                    });
                }
            },
            _ => {
                return Err(RecordError::UnknownSpellType {
                    spell: self.id.clone(),
                    kind: self.kind.clone(),
                });
            }
        };
        Ok(effect)
    }

    fn secondary(&self) -> Option<SecondaryStatus> {
        let status = match self.special()? {
            "burn_chance" => StatusEffect::new(
                BURNING,
                StatusKind::DamageOverTime,
                BURN_PER_TURN,
                BURN_TURNS,
            ),
            "slow_chance" => StatusEffect::new(
                TIME_SLOW,
                StatusKind::TimeSlow,
                CombatConfig::DEFAULT_TIME_SLOW_PENALTY,
                SLOW_TURNS,
            ),
            other => {
                debug!(spell = %self.id, effect = other, "special effect has no combat rule");
                return None;
            }
        };
        Some(SecondaryStatus {
            chance: SECONDARY_CHANCE,
            status,
        })
    }
}

impl TryFrom<SpellRecord> for SpellDefinition {
    type Error = RecordError;

    fn try_from(record: SpellRecord) -> Result<Self, Self::Error> {
        let target = record
            .target
            .parse::<SpellTarget>()
            .map_err(|_| RecordError::UnknownTarget {
                spell: record.id.clone(),
                target: record.target.clone(),
            })?;
        let effect = record.effect()?;

        Ok(SpellDefinition {
            id: record.id,
            name: record.name,
            description: record.description,
            target,
            mana_cost: record.mana_cost,
            effect,
        })
    }
}

/// Value in an item's `effects` map.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum EffectValue {
    Flag(bool),
    Number(f64),
}

impl EffectValue {
    pub fn number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Flag(_) => None,
        }
    }

    pub fn amount(self) -> Option<u32> {
        self.number()
            .filter(|value| *value >= 0.0)
            .map(|value| value.floor() as u32)
    }

    pub fn is_set(self) -> bool {
        match self {
            Self::Flag(flag) => flag,
            Self::Number(value) => value != 0.0,
        }
    }
}

/// Item as written in `items.ron`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord {
    pub id: combat_core::ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_bonus: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense_bonus: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_usable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: BTreeMap<String, EffectValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: u32,
}

impl ItemRecord {
    /// Keys read as modifiers of other entries, never effects on their own.
    const MODIFIER_KEYS: [&'static str; 2] = ["duration", "ignore_armor"];

    fn item_kind(&self) -> ItemKind {
        match self.kind.to_ascii_lowercase().as_str() {
            "weapon" => ItemKind::Weapon {
                damage_bonus: self.damage_bonus.unwrap_or_default(),
            },
            "armor" => ItemKind::Armor {
                defense_bonus: self.defense_bonus.unwrap_or_default(),
            },
            "shield" => ItemKind::Shield {
                defense_bonus: self.defense_bonus.unwrap_or_default(),
            },
            "consumable" => ItemKind::Consumable,
            other => ItemKind::Misc(other.to_string()),
        }
    }

    fn duration(&self, default_duration: u32) -> u32 {
        self.effects
            .get("duration")
            .and_then(|value| value.amount())
            .unwrap_or(default_duration)
    }

    fn combat_effects(&self, default_duration: u32) -> Vec<ItemEffect> {
        let duration = self.duration(default_duration);
        let ignore_armor = self
            .effects
            .get("ignore_armor")
            .is_some_and(|value| value.is_set());

        self.effects
            .iter()
            .filter(|(key, _)| !Self::MODIFIER_KEYS.contains(&key.as_str()))
            .map(|(key, value)| {
                let effect = match key.as_str() {
                    "heal_hp" => value.amount().map(ItemEffect::HealHp),
                    "restore_mana" => value.amount().map(ItemEffect::RestoreMana),
                    "damage" => value.amount().map(|amount| ItemEffect::Damage {
                        amount,
                        ignore_armor,
                    }),
                    "escape_chance" => value.number().map(ItemEffect::Escape),
                    "buff_attack" => value.amount().map(|magnitude| ItemEffect::BuffAttack {
                        magnitude,
                        duration,
                    }),
                    "buff_defense" => value.amount().map(|magnitude| ItemEffect::BuffDefense {
                        magnitude,
                        duration,
                    }),
                    "debuff_defense" => {
                        value.amount().map(|magnitude| ItemEffect::DebuffDefense {
                            magnitude,
                            duration,
                        })
                    }
                    "spell_power" => value.amount().map(|magnitude| ItemEffect::SpellPower {
                        magnitude,
                        duration,
                    }),
                    _ => None,
                };
                effect.unwrap_or_else(|| ItemEffect::Inert(key.clone()))
            })
            .collect()
    }
}

impl ItemRecord {
    /// Converts the record, giving timed effects without a `duration` key
    /// `default_duration` turns.
    pub fn into_definition(self, default_duration: u32) -> ItemDefinition {
        let kind = self.item_kind();
        let effects = self.combat_effects(default_duration);
        ItemDefinition {
            id: self.id,
            name: self.name,
            description: self.description,
            kind,
            combat_usable: self.combat_usable,
            effects,
        }
    }
}
