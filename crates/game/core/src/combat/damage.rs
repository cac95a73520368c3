//! Attack, defense and probability formulas.
//!
//! The pure functions at the top take plain numbers so they can be checked
//! in isolation; the `*_for` helpers gather the inputs from a live context.
//!
//! # Player attack power
//!
//! ```text
//! power = d(attack_die) + weapon + stance.attack
//!       + buff_attack - debuff_attack - time_slow * penalty
//! power = max(power, 1)
//! ```
//!
//! # Damage taken by the player
//!
//! ```text
//! raw     = U[attack_min, attack_max] + buff_attack - debuff_attack
//!           - time_slow * penalty                                        (min 1)
//! left    = raw - temporary_shield
//! taken   = max(left - (armor + shield + stance.defense + buff_defense - debuff_defense), 0)
//! ```
use crate::config::{CritRules, FleeRules};
use crate::env::Roll;
use crate::state::{Side, StatusEffects, StatusKind};

use super::CombatContext;

/// Critical hit chance, clamped to `[0, 1]`.
pub fn crit_chance(
    rules: &CritRules,
    stance_bonus: f64,
    momentum: u32,
    combat_training: u32,
    fury: bool,
) -> f64 {
    let mut chance = rules.base_chance
        + stance_bonus
        + f64::from(momentum) * rules.per_momentum
        + f64::from(combat_training) * rules.per_training;
    if fury {
        chance += rules.fury_bonus;
    }
    chance.clamp(0.0, 1.0)
}

/// Escape probability for a given health ratio.
///
/// Non-decreasing as the ratio drops; within `[base, base + wound_bonus]`.
pub fn flee_chance(rules: &FleeRules, health_ratio: f64) -> f64 {
    let ratio = if health_ratio.is_nan() {
        0.0
    } else {
        health_ratio.clamp(0.0, 1.0)
    };
    rules.base_chance + (1.0 - ratio) * rules.wound_bonus
}

/// `floor(damage * multiplier)`, never negative.
pub fn scale(damage: u32, multiplier: f64) -> u32 {
    let scaled = (f64::from(damage) * multiplier).floor();
    if scaled <= 0.0 {
        0
    } else if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    }
}

/// Subtracts a signed defense total; negative defense increases damage.
pub fn mitigate(raw: u32, defense: i64) -> u32 {
    (i64::from(raw) - defense).clamp(0, i64::from(u32::MAX)) as u32
}

/// Net attack modifier from a side's own statuses.
pub fn attack_modifier(statuses: &StatusEffects, time_slow_penalty: u32) -> i64 {
    i64::from(statuses.total(StatusKind::BuffAttack))
        - i64::from(statuses.total(StatusKind::DebuffAttack))
        - i64::from(statuses.count(StatusKind::TimeSlow)) * i64::from(time_slow_penalty)
}

/// Net defense modifier from a side's own statuses.
pub fn defense_modifier(statuses: &StatusEffects) -> i64 {
    i64::from(statuses.total(StatusKind::BuffDefense))
        - i64::from(statuses.total(StatusKind::DebuffDefense))
}

fn floor_one(value: i64) -> u32 {
    value.clamp(1, i64::from(u32::MAX)) as u32
}

/// Damage bonus of the equipped weapon, zero when bare-handed.
pub fn weapon_bonus_for(ctx: &CombatContext<'_>) -> u32 {
    ctx.combatant
        .equipped_weapon
        .as_ref()
        .and_then(|id| ctx.env.items().item(id))
        .map_or(0, |item| item.damage_bonus())
}

/// Rolls the player's base attack power (used by attacks and skills).
pub fn roll_player_power(ctx: &mut CombatContext<'_>) -> u32 {
    let config = ctx.config();
    let roll = ctx
        .dice
        .range(Side::Player, Roll::AttackDamage, 1, config.attack_die.max(1));
    let stance = config.stances.modifiers(ctx.stance);
    let total = i64::from(roll)
        + i64::from(weapon_bonus_for(ctx))
        + i64::from(stance.attack)
        + attack_modifier(&ctx.player.statuses, config.time_slow_penalty);
    floor_one(total)
}

/// Crit chance for the player's next attack.
pub fn player_crit_chance(ctx: &CombatContext<'_>) -> f64 {
    let config = ctx.config();
    crit_chance(
        &config.crit,
        config.stances.modifiers(ctx.stance).crit_bonus,
        ctx.momentum,
        ctx.combatant.combat_training,
        ctx.player.statuses.has_named(CritRules::FURY_STATUS),
    )
}

/// Rolls the enemy's raw attack before the player's defenses.
pub fn roll_enemy_raw(ctx: &mut CombatContext<'_>) -> u32 {
    let config = ctx.config();
    let roll = ctx.dice.range(
        Side::Enemy,
        Roll::AttackDamage,
        ctx.enemy.attack_min,
        ctx.enemy.attack_max,
    );
    floor_one(i64::from(roll) + attack_modifier(&ctx.foe.statuses, config.time_slow_penalty))
}

/// Player's total defense: armor, shield, stance and statuses.
pub fn player_defense_for(ctx: &CombatContext<'_>) -> i64 {
    let items = ctx.env.items();
    let armor = ctx
        .combatant
        .equipped_armor
        .as_ref()
        .and_then(|id| items.item(id))
        .map_or(0, |item| item.defense_bonus_as_armor());
    let shield = ctx
        .combatant
        .equipped_shield
        .as_ref()
        .and_then(|id| items.item(id))
        .map_or(0, |item| item.defense_bonus_as_shield());
    let stance = ctx.config().stances.modifiers(ctx.stance).defense;

    i64::from(armor)
        + i64::from(shield)
        + i64::from(stance)
        + defense_modifier(&ctx.player.statuses)
}

/// Damage the player takes from a raw enemy hit, after the shield pool and defenses.
///
/// Returns `(absorbed, taken)`.
pub fn hit_player(ctx: &mut CombatContext<'_>, raw: u32) -> (u32, u32) {
    let absorbed = ctx.combatant.absorb_with_shield(raw);
    let taken = mitigate(raw - absorbed, player_defense_for(ctx));
    ctx.combatant.take_damage(taken);
    (absorbed, taken)
}

/// Damage the enemy takes from a player attack, skill or spell.
///
/// `piercing` skips the enemy's defense statuses. Returns the damage landed.
pub fn hit_enemy(ctx: &mut CombatContext<'_>, amount: u32, piercing: bool) -> u32 {
    let landed = if piercing {
        amount
    } else {
        mitigate(amount, defense_modifier(&ctx.foe.statuses))
    };
    ctx.enemy.take_damage(landed);
    landed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusEffect;

    #[test]
    fn crit_chance_sums_sources() {
        let rules = CritRules::default();
        let chance = crit_chance(&rules, 0.10, 3, 2, false);
        assert!((chance - (0.05 + 0.10 + 0.06 + 0.02)).abs() < 1e-9);

        let fury = crit_chance(&rules, 0.0, 0, 0, true);
        assert!((fury - 0.20).abs() < 1e-9);
    }

    #[test]
    fn flee_chance_bounds() {
        let rules = FleeRules::default();
        assert!((flee_chance(&rules, 1.0) - 0.7).abs() < 1e-9);
        assert!((flee_chance(&rules, 0.0) - 0.9).abs() < 1e-9);
        assert!((flee_chance(&rules, 0.5) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn scale_floors() {
        assert_eq!(scale(7, 1.5), 10);
        assert_eq!(scale(5, 0.5), 2);
        assert_eq!(scale(1, 0.5), 0);
    }

    #[test]
    fn negative_defense_adds_damage() {
        assert_eq!(mitigate(5, 3), 2);
        assert_eq!(mitigate(5, 9), 0);
        assert_eq!(mitigate(5, -1), 6);
    }

    #[test]
    fn time_slow_stacks_per_status() {
        let mut statuses = StatusEffects::new();
        statuses.add(StatusEffect::new("Time Slow", StatusKind::TimeSlow, 0, 3));
        statuses.add(StatusEffect::new("Frost", StatusKind::TimeSlow, 0, 2));
        statuses.add(StatusEffect::new("Weakness", StatusKind::DebuffAttack, 3, 4));
        assert_eq!(attack_modifier(&statuses, 2), -7);
    }
}
