//! Using items in combat.
//!
//! Only items flagged as combat-usable and carrying effects are offered.
//! Every successful use removes exactly one unit, even when an escape roll
//! fails or no effect is recognized.
use tracing::debug;

use crate::combat::CombatContext;
use crate::combat::damage::hit_enemy;
use crate::engine::CombatEvent;
use crate::env::{CombatEnv, ItemDefinition, ItemEffect, Roll};
use crate::state::{Combatant, ItemId, Side, StatusEffect, StatusKind};

use super::{ActionOutcome, ActionRejection};

/// Distinct combat-usable items held, with their counts, in inventory order.
pub fn combat_items<'a>(
    env: &CombatEnv<'a>,
    combatant: &Combatant,
) -> Vec<(&'a ItemDefinition, usize)> {
    let items = env.items();
    let mut offered: Vec<(&'a ItemDefinition, usize)> = Vec::new();
    for id in &combatant.inventory {
        if let Some(entry) = offered.iter_mut().find(|(item, _)| &item.id == id) {
            entry.1 += 1;
            continue;
        }
        if let Some(item) = items.item(id)
            && item.is_offered_in_combat()
        {
            offered.push((item, 1));
        }
    }
    offered
}

pub fn use_item(
    ctx: &mut CombatContext<'_>,
    id: &ItemId,
) -> Result<ActionOutcome, ActionRejection> {
    if combat_items(&ctx.env, ctx.combatant).is_empty() {
        return Err(ActionRejection::NoUsableItem);
    }
    if ctx.combatant.item_count(id) == 0 {
        return Err(ActionRejection::ItemNotHeld(id.clone()));
    }
    let Some(item) = ctx.env.items().item(id) else {
        ctx.diagnostic(format!("item '{id}' not found"));
        return Err(ActionRejection::ItemNotUsable(id.clone()));
    };
    if !item.is_offered_in_combat() {
        return Err(ActionRejection::ItemNotUsable(id.clone()));
    }

    ctx.combatant.remove_item(id);
    ctx.emit(CombatEvent::ItemUsed {
        item: item.name.clone(),
    });

    let mut escaped = false;
    for effect in &item.effects {
        escaped |= apply_effect(ctx, item, effect);
    }
    if !item.effects.iter().any(ItemEffect::is_recognized) {
        ctx.emit(CombatEvent::ItemHadNoEffect {
            item: item.name.clone(),
        });
    }

    if escaped && ctx.enemy.is_alive() {
        ctx.emit(CombatEvent::Fled);
        return Ok(ActionOutcome::Fled);
    }
    Ok(ActionOutcome::TurnTaken)
}

/// Applies one effect entry. Returns true if it got the player away.
fn apply_effect(ctx: &mut CombatContext<'_>, item: &ItemDefinition, effect: &ItemEffect) -> bool {
    let timed = |kind: StatusKind, magnitude: u32, duration: u32| {
        StatusEffect::new(item.name.clone(), kind, magnitude, duration)
            .with_description(item.description.clone())
    };

    match effect {
        ItemEffect::HealHp(amount) => {
            let amount = ctx.heal(Side::Player, *amount);
            ctx.emit(CombatEvent::Healed {
                side: Side::Player,
                source: item.name.clone(),
                amount,
            });
        }
        ItemEffect::RestoreMana(amount) => {
            let amount = ctx.combatant.restore_mana(*amount);
            ctx.emit(CombatEvent::ManaRestored {
                source: item.name.clone(),
                amount,
            });
        }
        ItemEffect::Damage {
            amount,
            ignore_armor,
        } => {
            let amount = hit_enemy(ctx, *amount, *ignore_armor);
            ctx.emit(CombatEvent::DamageDealt {
                target: Side::Enemy,
                source: item.name.clone(),
                amount,
            });
        }
        ItemEffect::Escape(chance) => {
            if ctx.dice.chance(Side::Player, Roll::Escape, *chance) {
                return true;
            }
            ctx.emit(CombatEvent::EscapeFailed {
                source: item.name.clone(),
            });
        }
        ItemEffect::BuffAttack {
            magnitude,
            duration,
        } => ctx.apply_status(
            Side::Player,
            timed(StatusKind::BuffAttack, *magnitude, *duration),
        ),
        ItemEffect::BuffDefense {
            magnitude,
            duration,
        } => ctx.apply_status(
            Side::Player,
            timed(StatusKind::BuffDefense, *magnitude, *duration),
        ),
        ItemEffect::DebuffDefense {
            magnitude,
            duration,
        } => ctx.apply_status(
            Side::Enemy,
            timed(StatusKind::DebuffDefense, *magnitude, *duration),
        ),
        ItemEffect::SpellPower {
            magnitude,
            duration,
        } => ctx.apply_status(
            Side::Player,
            timed(StatusKind::SpellPower, *magnitude, *duration),
        ),
        ItemEffect::Inert(key) => debug!(item = %item.id, key, "unrecognized item effect"),
    }
    false
}
