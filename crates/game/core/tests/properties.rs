use combat_core::combat::damage::{flee_chance, mitigate, scale};
use combat_core::combat::grant_experience;
use combat_core::config::{FleeRules, ProgressionRules};
use combat_core::{Combatant, SkillId};
use proptest::prelude::*;

proptest! {
    #[test]
    fn flee_chance_stays_in_band(ratio in 0.0f64..=1.0) {
        let chance = flee_chance(&FleeRules::default(), ratio);
        prop_assert!((0.7 - 1e-9..=0.9 + 1e-9).contains(&chance));
    }

    #[test]
    fn flee_chance_grows_as_health_drops(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let rules = FleeRules::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(flee_chance(&rules, low) >= flee_chance(&rules, high));
    }

    #[test]
    fn cooldowns_tick_by_one_and_floor_at_zero(start in 0u32..10, ticks in 0u32..20) {
        let skill = SkillId::from("power_attack");
        let mut combatant = Combatant::new("Hero", 30, 10);
        combatant.set_skill_cooldown(skill.clone(), start);
        for _ in 0..ticks {
            combatant.tick_cooldowns();
        }
        prop_assert_eq!(combatant.skill_cooldown(&skill), start.saturating_sub(ticks));
    }

    #[test]
    fn large_grants_carry_the_remainder(amount in 0u32..5_000) {
        let rules = ProgressionRules::default();
        let mut combatant = Combatant::new("Hero", 30, 10);
        let level_ups = grant_experience(&mut combatant, &rules, amount);

        // Replay the thresholds by hand.
        let mut level = 1;
        let mut left = amount;
        while left >= rules.threshold_for(level) {
            left -= rules.threshold_for(level);
            level += 1;
        }
        prop_assert_eq!(combatant.level, level);
        prop_assert_eq!(combatant.xp, left);
        prop_assert!(combatant.xp < combatant.xp_to_next_level);
        prop_assert_eq!(level_ups.len() as u32, level - 1);
        prop_assert_eq!(combatant.skill_points, level - 1);
    }

    #[test]
    fn mitigation_never_goes_negative(raw in 0u32..1_000, defense in -50i64..50) {
        let taken = mitigate(raw, defense);
        prop_assert!(i64::from(taken) >= i64::from(raw) - defense);
        prop_assert!(defense < 0 || taken <= raw);
    }

    #[test]
    fn crit_scaling_is_floored(damage in 0u32..10_000) {
        prop_assert_eq!(scale(damage, 1.5), damage * 3 / 2);
    }
}

#[test]
fn two_hundred_xp_reaches_level_three() {
    let mut combatant = Combatant::new("Hero", 30, 10);
    let level_ups = grant_experience(&mut combatant, &ProgressionRules::default(), 200);

    assert_eq!(level_ups.len(), 2);
    assert_eq!(combatant.level, 3);
    assert_eq!(combatant.xp, 75);
    assert_eq!(combatant.xp_to_next_level, 112);
}
