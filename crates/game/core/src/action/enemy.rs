//! The enemy's side of a round.
use tracing::debug;

use crate::combat::CombatContext;
use crate::combat::damage::{hit_player, roll_enemy_raw, scale};
use crate::engine::CombatEvent;
use crate::env::Roll;
use crate::state::Side;

/// What the enemy does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyAction {
    BasicAttack,
    /// Index into the instance's `special_abilities`.
    Special(usize),
}

/// Resolves the enemy's action against the player.
///
/// A special attack drains the player's momentum and puts the ability on
/// cooldown.
pub fn resolve_enemy_action(ctx: &mut CombatContext<'_>, action: EnemyAction) {
    let ability = match action {
        EnemyAction::Special(index) => ctx.enemy.special_abilities.get(index).cloned(),
        EnemyAction::BasicAttack => None,
    };

    let raw = roll_enemy_raw(ctx);
    let raw = match &ability {
        Some(ability) => scale(raw, ability.damage_multiplier),
        None => raw,
    };
    let (absorbed, damage) = hit_player(ctx, raw);
    debug!(raw, absorbed, damage, special = ability.is_some(), "enemy attack resolved");

    let enemy = ctx.enemy.name.clone();
    ctx.emit(CombatEvent::EnemyAttack {
        enemy,
        ability: ability.as_ref().map(|ability| ability.name.clone()),
        raw,
        absorbed,
        damage,
    });

    let Some(ability) = ability else {
        return;
    };

    if let Some(stun) = ability.stun
        && ctx.combatant.is_alive()
        && ctx.dice.chance(Side::Enemy, Roll::Stun, stun.chance)
    {
        ctx.stun(Side::Player, stun.duration);
    }
    if let EnemyAction::Special(index) = action
        && let Some(slot) = ctx.enemy.special_abilities.get_mut(index)
    {
        slot.current_cooldown = slot.cooldown;
    }
    let cost = ctx.config().ai.special_momentum_cost;
    ctx.spend_momentum(cost);
}
