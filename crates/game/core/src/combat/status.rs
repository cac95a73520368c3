//! Turn-start pass over one side's status effects.
use tracing::debug;

use crate::engine::CombatEvent;
use crate::state::{Side, StatusEffects, StatusKind};

use super::CombatContext;

/// Applies damage/heal-over-time, counts every effect down by one turn and
/// drops the ones that ran out.
///
/// Modifier kinds (attack, defense, time slow, spell power) only count down
/// here; the resolver reads their magnitudes when they matter.
pub fn tick_statuses(ctx: &mut CombatContext<'_>, side: Side) {
    let effects = ctx.side_mut(side).statuses.drain();
    let mut remaining = StatusEffects::new();

    for mut effect in effects {
        match effect.kind {
            StatusKind::DamageOverTime => {
                let amount = ctx.damage(side, effect.magnitude);
                ctx.emit(CombatEvent::StatusTicked {
                    side,
                    status: effect.name.clone(),
                    kind: effect.kind,
                    amount,
                });
            }
            StatusKind::HealOverTime => {
                let amount = ctx.heal(side, effect.magnitude);
                ctx.emit(CombatEvent::StatusTicked {
                    side,
                    status: effect.name.clone(),
                    kind: effect.kind,
                    amount,
                });
            }
            _ => {}
        }

        effect.remaining = effect.remaining.saturating_sub(1);
        if effect.remaining == 0 {
            debug!(%side, status = %effect.name, "status expired");
            ctx.emit(CombatEvent::StatusExpired {
                side,
                status: effect.name,
            });
        } else {
            remaining.add(effect);
        }
    }

    ctx.side_mut(side).statuses = remaining;
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::config::CombatConfig;
    use crate::env::{Catalog, CombatEnv, FixedRng};
    use crate::state::{Combatant, EnemyId, EnemyTemplate, StatusEffect};

    fn sand_crab() -> EnemyTemplate {
        EnemyTemplate {
            id: EnemyId::from("giant_sand_crab"),
            name: "Giant Sand Crab".into(),
            description: String::new(),
            health: 50,
            attack_min: 3,
            attack_max: 6,
            xp_value: 25,
            special_abilities: Vec::new(),
            loot_groups: Vec::new(),
            unique_loot: Vec::new(),
            loot_table: None,
            ai_traits: BTreeSet::new(),
        }
    }

    fn expired(ctx: &CombatContext<'_>, side: Side) -> usize {
        ctx.events()
            .iter()
            .filter(|event| match event {
                CombatEvent::StatusExpired { side: owner, .. } => *owner == side,
                _ => false,
            })
            .count()
    }

    #[test]
    fn damage_over_time_ticks_then_expires() {
        let catalog = Catalog::new();
        let config = CombatConfig::default();
        let rng = FixedRng(0);
        let mut hero = Combatant::new("Hero", 30, 10);
        let env = CombatEnv::from_catalog(&catalog, &rng, &config);
        let mut ctx = CombatContext::new(env, &mut hero, sand_crab().spawn());
        ctx.foe
            .statuses
            .add(StatusEffect::new("Burning", StatusKind::DamageOverTime, 3, 2));

        tick_statuses(&mut ctx, Side::Enemy);
        assert_eq!(ctx.enemy.health, 47);
        assert_eq!(ctx.foe.statuses.len(), 1);
        assert_eq!(expired(&ctx, Side::Enemy), 0);

        tick_statuses(&mut ctx, Side::Enemy);
        assert_eq!(ctx.enemy.health, 44);
        assert!(ctx.foe.statuses.is_empty());
        assert_eq!(expired(&ctx, Side::Enemy), 1);

        tick_statuses(&mut ctx, Side::Enemy);
        assert_eq!(ctx.enemy.health, 44);
    }

    #[test]
    fn heal_over_time_stops_at_max_health() {
        let catalog = Catalog::new();
        let config = CombatConfig::default();
        let rng = FixedRng(0);
        let mut hero = Combatant::new("Hero", 30, 10);
        hero.health = 27;
        let env = CombatEnv::from_catalog(&catalog, &rng, &config);
        let mut ctx = CombatContext::new(env, &mut hero, sand_crab().spawn());
        ctx.player
            .statuses
            .add(StatusEffect::new("Regeneration", StatusKind::HealOverTime, 5, 3));

        tick_statuses(&mut ctx, Side::Player);

        assert_eq!(ctx.combatant.health, 30);
        assert!(ctx.events().contains(&CombatEvent::StatusTicked {
            side: Side::Player,
            status: "Regeneration".into(),
            kind: StatusKind::HealOverTime,
            amount: 3,
        }));
        assert_eq!(ctx.player.statuses.iter().next().map(|s| s.remaining), Some(2));
    }

    #[test]
    fn modifiers_only_count_down() {
        let catalog = Catalog::new();
        let config = CombatConfig::default();
        let rng = FixedRng(0);
        let mut hero = Combatant::new("Hero", 30, 10);
        let env = CombatEnv::from_catalog(&catalog, &rng, &config);
        let mut ctx = CombatContext::new(env, &mut hero, sand_crab().spawn());
        ctx.player
            .statuses
            .add(StatusEffect::new("Stone Skin", StatusKind::BuffDefense, 4, 1));
        ctx.player
            .statuses
            .add(StatusEffect::new("Weakness", StatusKind::DebuffAttack, 2, 3));

        tick_statuses(&mut ctx, Side::Player);

        assert_eq!(ctx.combatant.health, 30);
        assert_eq!(ctx.player.statuses.total(StatusKind::BuffDefense), 0);
        assert_eq!(ctx.player.statuses.total(StatusKind::DebuffAttack), 2);
        assert_eq!(expired(&ctx, Side::Player), 1);
    }

    #[test]
    fn damage_over_time_can_bring_health_to_zero() {
        let catalog = Catalog::new();
        let config = CombatConfig::default();
        let rng = FixedRng(0);
        let mut hero = Combatant::new("Hero", 30, 10);
        hero.health = 2;
        let env = CombatEnv::from_catalog(&catalog, &rng, &config);
        let mut ctx = CombatContext::new(env, &mut hero, sand_crab().spawn());
        ctx.player
            .statuses
            .add(StatusEffect::new("Poison", StatusKind::DamageOverTime, 4, 3));

        tick_statuses(&mut ctx, Side::Player);

        assert_eq!(ctx.combatant.health, 0);
        assert!(!ctx.combatant.is_alive());
    }
}
