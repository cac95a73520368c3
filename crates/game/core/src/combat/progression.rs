//! Experience and leveling after a won combat.
use tracing::info;

use crate::config::ProgressionRules;
use crate::engine::CombatEvent;
use crate::state::Combatant;

use super::CombatContext;

/// One level gained during a progression pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub max_health: u32,
    pub max_mana: u32,
    pub xp_to_next_level: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressionReport {
    pub xp_gained: u32,
    /// Part of `xp_gained` that came from the momentum bonus.
    pub bonus: u32,
    pub level_ups: Vec<LevelUp>,
}

/// Experience for defeating an enemy, returned as `(total, bonus)`.
pub fn victory_experience(rules: &ProgressionRules, xp_value: u32, momentum: u32) -> (u32, u32) {
    let bonus = if momentum >= rules.momentum_bonus_threshold {
        (u64::from(xp_value) * u64::from(rules.momentum_bonus_percent) / 100) as u32
    } else {
        0
    };
    (xp_value.saturating_add(bonus), bonus)
}

/// Adds experience and processes every level-up it pays for.
///
/// Excess experience carries over, so a large grant can raise several levels
/// in one call.
pub fn grant_experience(
    combatant: &mut Combatant,
    rules: &ProgressionRules,
    amount: u32,
) -> Vec<LevelUp> {
    let mut level_ups = Vec::new();
    if amount == 0 {
        return level_ups;
    }
    if combatant.level == 0 {
        combatant.level = 1;
    }
    if combatant.xp_to_next_level == 0 {
        combatant.xp_to_next_level = rules.threshold_for(combatant.level);
    }

    combatant.xp = combatant.xp.saturating_add(amount);
    while combatant.xp >= combatant.xp_to_next_level {
        combatant.xp -= combatant.xp_to_next_level;
        combatant.level += 1;
        combatant.xp_to_next_level = rules.threshold_for(combatant.level);

        combatant.max_health += rules.health_per_level;
        combatant.heal(rules.health_per_level);
        combatant.max_mana += rules.mana_per_level;
        combatant.restore_mana(rules.mana_per_level);
        combatant.skill_points += rules.skill_points_per_level;

        level_ups.push(LevelUp {
            level: combatant.level,
            max_health: combatant.max_health,
            max_mana: combatant.max_mana,
            xp_to_next_level: combatant.xp_to_next_level,
        });
    }
    level_ups
}

/// Awards the defeated enemy's experience and reports level-ups.
pub fn award_victory(ctx: &mut CombatContext<'_>) -> ProgressionReport {
    let rules = &ctx.config().progression;
    let (xp_gained, bonus) = victory_experience(rules, ctx.enemy.xp_value, ctx.momentum);
    if xp_gained == 0 {
        return ProgressionReport::default();
    }

    ctx.emit(CombatEvent::ExperienceGained {
        amount: xp_gained,
        bonus,
    });
    let level_ups = grant_experience(ctx.combatant, rules, xp_gained);
    for level_up in &level_ups {
        info!(level = level_up.level, "level up");
        ctx.emit(CombatEvent::LevelUp {
            level: level_up.level,
            max_health: level_up.max_health,
            max_mana: level_up.max_mana,
            xp_to_next_level: level_up.xp_to_next_level,
        });
    }

    ProgressionReport {
        xp_gained,
        bonus,
        level_ups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_bonus_adds_twenty_percent() {
        let rules = ProgressionRules::default();
        assert_eq!(victory_experience(&rules, 50, 5), (60, 10));
        assert_eq!(victory_experience(&rules, 50, 4), (50, 0));
    }

    #[test]
    fn single_grant_processes_multiple_levels() {
        let rules = ProgressionRules::default();
        let mut hero = Combatant::new("Rynn", 30, 10);
        hero.take_damage(15);

        let level_ups = grant_experience(&mut hero, &rules, 200);

        assert_eq!(level_ups.len(), 2);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.xp, 75);
        assert_eq!(hero.xp_to_next_level, 112);
        assert_eq!(hero.max_health, 50);
        assert_eq!(hero.health, 35);
        assert_eq!(hero.max_mana, 20);
        assert_eq!(hero.mana, 20);
        assert_eq!(hero.skill_points, 2);
    }

    #[test]
    fn below_threshold_only_accumulates() {
        let rules = ProgressionRules::default();
        let mut hero = Combatant::new("Rynn", 30, 10);
        assert!(grant_experience(&mut hero, &rules, 49).is_empty());
        assert_eq!(hero.xp, 49);
        assert_eq!(hero.level, 1);
    }
}
