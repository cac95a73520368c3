//! Spell records.
//!
//! Data files describe spells with a loose `type` string plus a few numeric
//! fields. The content crate converts them into [`SpellEffect`], so the
//! resolver matches on a closed set of shapes.
use crate::state::{SpellId, StatusEffect};

pub trait SpellOracle: Send + Sync {
    fn spell(&self, id: &SpellId) -> Option<&SpellDefinition>;
}

/// Who a spell may be aimed at.
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
pub enum SpellTarget {
    Enemy,
    #[strum(serialize = "self")]
    Caster,
    /// Caller chooses the side when casting.
    Any,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellDefinition {
    pub id: SpellId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub target: SpellTarget,
    pub mana_cost: u32,
    pub effect: SpellEffect,
}

impl SpellDefinition {
    /// Mana actually paid: `mana_cost - magic_efficiency`, never below 1.
    pub fn cost_for(&self, magic_efficiency: u32) -> u32 {
        self.mana_cost.saturating_sub(magic_efficiency).max(1)
    }
}

/// Status applied on top of an offensive spell's damage with some probability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecondaryStatus {
    pub chance: f64,
    pub status: StatusEffect,
}

/// What a spell does, keyed by its declared type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellEffect {
    Offense {
        damage: u32,
        secondary: Option<SecondaryStatus>,
    },
    Heal {
        amount: u32,
    },
    HealOverTime {
        per_turn: u32,
        duration: u32,
    },
    OffenseDot {
        per_turn: u32,
        duration: u32,
    },
    /// Damages the enemy and heals the caster for half the damage dealt.
    Vampiric {
        damage: u32,
    },
    /// Lowers the enemy's raw attack for a while.
    WeakenAttack {
        magnitude: u32,
        duration: u32,
    },
    TimeSlow {
        duration: u32,
    },
    AttackBuff {
        magnitude: u32,
        duration: u32,
        /// Raises crit chance while active. Named after
        /// [`CritRules::FURY_STATUS`](crate::config::CritRules::FURY_STATUS).
        crit_bonus: bool,
    },
    DefenseBuff {
        magnitude: u32,
        duration: u32,
    },
    /// One-shot absorption pool.
    TemporaryShield {
        amount: u32,
    },
    /// Clears every status on the chosen side.
    Dispel,
    /// Damage that skips the enemy's defense modifiers.
    PiercingDamage {
        damage: u32,
    },
}
