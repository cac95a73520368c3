//! Tunable combat rules.
//!
//! Every numeric constant the resolver, the enemy AI and the progression
//! pass read lives here. `Default` reproduces the shipped balance; the
//! content crate can overlay a `config.toml` on top of it.
use crate::state::Stance;

/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Sides of the die rolled for a plain attack or skill.
    pub attack_die: u32,
    pub crit: CritRules,
    pub power_attack: PowerAttackRules,
    pub flee: FleeRules,
    /// Flat penalty applied to the raw attack roll per active `time_slow` status.
    pub time_slow_penalty: u32,
    pub stances: StanceTable,
    pub ai: AiWeights,
    pub progression: ProgressionRules,
    /// Duration used for timed item statuses whose record does not name one.
    pub item_effect_duration: u32,
    /// Surface skipped references and legacy data as `CombatEvent::Diagnostic`.
    pub debug_diagnostics: bool,
}

impl CombatConfig {
    pub const DEFAULT_ATTACK_DIE: u32 = 6;
    pub const DEFAULT_TIME_SLOW_PENALTY: u32 = 2;
    pub const DEFAULT_ITEM_EFFECT_DURATION: u32 = 3;

    pub fn new() -> Self {
        Self {
            attack_die: Self::DEFAULT_ATTACK_DIE,
            crit: CritRules::default(),
            power_attack: PowerAttackRules::default(),
            flee: FleeRules::default(),
            time_slow_penalty: Self::DEFAULT_TIME_SLOW_PENALTY,
            stances: StanceTable::default(),
            ai: AiWeights::default(),
            progression: ProgressionRules::default(),
            item_effect_duration: Self::DEFAULT_ITEM_EFFECT_DURATION,
            debug_diagnostics: false,
        }
    }

    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.debug_diagnostics = enabled;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Critical hit chance and multiplier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CritRules {
    pub base_chance: f64,
    pub per_momentum: f64,
    pub per_training: f64,
    /// Extra chance while a status named [`CritRules::FURY_STATUS`] is active.
    pub fury_bonus: f64,
    pub multiplier: f64,
    /// Momentum gained on a critical hit (a normal hit grants 1).
    pub momentum_on_crit: u32,
}

impl CritRules {
    pub const FURY_STATUS: &'static str = "Battle Fury";
}

impl Default for CritRules {
    fn default() -> Self {
        Self {
            base_chance: 0.05,
            per_momentum: 0.02,
            per_training: 0.01,
            fury_bonus: 0.15,
            multiplier: 1.5,
            momentum_on_crit: 2,
        }
    }
}

/// Momentum-gated heavy strike.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerAttackRules {
    pub momentum_cost: u32,
    pub roll_min: u32,
    pub roll_max: u32,
    pub flat_bonus: u32,
}

impl Default for PowerAttackRules {
    fn default() -> Self {
        Self {
            momentum_cost: 3,
            roll_min: 3,
            roll_max: 10,
            flat_bonus: 3,
        }
    }
}

/// Escape probability: `base + (1 - health_ratio) * wound_bonus`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleeRules {
    pub base_chance: f64,
    pub wound_bonus: f64,
}

impl Default for FleeRules {
    fn default() -> Self {
        Self {
            base_chance: 0.7,
            wound_bonus: 0.2,
        }
    }
}

/// Attack, defense and crit modifiers granted by a stance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StanceModifiers {
    pub attack: i32,
    pub defense: i32,
    pub crit_bonus: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StanceTable {
    pub balanced: StanceModifiers,
    pub aggressive: StanceModifiers,
    pub defensive: StanceModifiers,
}

impl StanceTable {
    pub fn modifiers(&self, stance: Stance) -> StanceModifiers {
        match stance {
            Stance::Balanced => self.balanced,
            Stance::Aggressive => self.aggressive,
            Stance::Defensive => self.defensive,
        }
    }
}

impl Default for StanceTable {
    fn default() -> Self {
        Self {
            balanced: StanceModifiers::default(),
            aggressive: StanceModifiers {
                attack: 2,
                defense: -1,
                crit_bonus: 0.10,
            },
            defensive: StanceModifiers {
                attack: -1,
                defense: 2,
                crit_bonus: 0.0,
            },
        }
    }
}

/// Weights of the enemy's two-branch decision.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiWeights {
    pub basic: i32,
    pub special: i32,
    /// Player momentum required before the special branch is considered.
    pub special_momentum: u32,
    /// Added to the special weight while the player is below `finisher_ratio` health.
    pub finisher_bonus: i32,
    pub finisher_ratio_percent: u32,
    pub aggressive_special_bonus: i32,
    pub defensive_basic_bonus: i32,
    pub defensive_special_penalty: i32,
    /// Player momentum drained by a special attack.
    pub special_momentum_cost: u32,
}

impl Default for AiWeights {
    fn default() -> Self {
        Self {
            basic: 60,
            special: 40,
            special_momentum: 2,
            finisher_bonus: 30,
            finisher_ratio_percent: 30,
            aggressive_special_bonus: 20,
            defensive_basic_bonus: 20,
            defensive_special_penalty: 10,
            special_momentum_cost: 2,
        }
    }
}

/// Experience curve and per-level rewards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionRules {
    pub base_xp: u32,
    pub xp_multiplier: f64,
    pub health_per_level: u32,
    pub mana_per_level: u32,
    pub skill_points_per_level: u32,
    /// Player momentum at the end of combat that earns the performance bonus.
    pub momentum_bonus_threshold: u32,
    pub momentum_bonus_percent: u32,
}

impl ProgressionRules {
    /// Experience needed to leave `level`: `floor(base_xp * multiplier^(level - 1))`.
    pub fn threshold_for(&self, level: u32) -> u32 {
        let exponent = level.saturating_sub(1) as i32;
        let value = f64::from(self.base_xp) * self.xp_multiplier.powi(exponent);
        if value >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            (value.floor() as u32).max(1)
        }
    }
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            base_xp: 50,
            xp_multiplier: 1.5,
            health_per_level: 10,
            mana_per_level: 5,
            skill_points_per_level: 1,
            momentum_bonus_threshold: 5,
            momentum_bonus_percent: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_follow_curve() {
        let rules = ProgressionRules::default();
        assert_eq!(rules.threshold_for(1), 50);
        assert_eq!(rules.threshold_for(2), 75);
        assert_eq!(rules.threshold_for(3), 112);
        assert_eq!(rules.threshold_for(4), 168);
    }

    #[test]
    fn stance_table_defaults() {
        let table = StanceTable::default();
        assert_eq!(table.modifiers(Stance::Balanced), StanceModifiers::default());
        assert_eq!(table.modifiers(Stance::Aggressive).attack, 2);
        assert_eq!(table.modifiers(Stance::Defensive).defense, 2);
    }
}
