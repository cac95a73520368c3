//! Spell casting.
//!
//! Mana is paid up front at the discounted cost; the effect then resolves
//! according to the spell's [`SpellEffect`] variant. Offensive damage is
//! boosted by the caster's active `spell_power` statuses.
use crate::combat::CombatContext;
use crate::combat::damage::hit_enemy;
use crate::config::CritRules;
use crate::engine::CombatEvent;
use crate::env::{CombatEnv, Roll, SpellDefinition, SpellEffect, SpellTarget};
use crate::state::{Combatant, Side, SpellId, StatusEffect, StatusKind};

use super::{ActionOutcome, ActionRejection};

/// Known spells the combatant can currently afford, in id order.
pub fn castable_spells<'a>(env: &CombatEnv<'a>, combatant: &Combatant) -> Vec<&'a SpellDefinition> {
    let spells = env.spells();
    combatant
        .known_spells
        .iter()
        .filter_map(|id| spells.spell(id))
        .filter(|spell| spell.cost_for(combatant.magic_efficiency) <= combatant.mana)
        .collect()
}

pub fn cast_spell(
    ctx: &mut CombatContext<'_>,
    id: &SpellId,
    target: Option<Side>,
) -> Result<ActionOutcome, ActionRejection> {
    if castable_spells(&ctx.env, ctx.combatant).is_empty() {
        return Err(ActionRejection::NoCastableSpell);
    }
    if !ctx.combatant.known_spells.contains(id) {
        return Err(ActionRejection::UnknownSpell(id.clone()));
    }
    let Some(spell) = ctx.env.spells().spell(id) else {
        ctx.diagnostic(format!("spell '{id}' not found"));
        return Err(ActionRejection::UnknownSpell(id.clone()));
    };

    let cost = spell.cost_for(ctx.combatant.magic_efficiency);
    if !ctx.combatant.spend_mana(cost) {
        return Err(ActionRejection::InsufficientMana {
            spell: id.clone(),
            cost,
            available: ctx.combatant.mana,
        });
    }
    ctx.emit(CombatEvent::SpellCast {
        spell: spell.name.clone(),
        mana_spent: cost,
    });

    let side = match spell.target {
        SpellTarget::Enemy => Side::Enemy,
        SpellTarget::Caster => Side::Player,
        SpellTarget::Any => target.unwrap_or(Side::Enemy),
    };
    apply_effect(ctx, spell, side);
    Ok(ActionOutcome::TurnTaken)
}

fn apply_effect(ctx: &mut CombatContext<'_>, spell: &SpellDefinition, side: Side) {
    let power = ctx.player.statuses.total(StatusKind::SpellPower);
    let name = spell.name.clone();

    match &spell.effect {
        SpellEffect::Offense { damage, secondary } => {
            let amount = hit_enemy(ctx, damage + power, false);
            ctx.emit(CombatEvent::DamageDealt {
                target: Side::Enemy,
                source: name,
                amount,
            });
            if let Some(secondary) = secondary
                && ctx.enemy.is_alive()
                && ctx
                    .dice
                    .chance(Side::Player, Roll::SpellSecondary, secondary.chance)
            {
                ctx.apply_status(Side::Enemy, secondary.status.clone());
            }
        }
        SpellEffect::Heal { amount } => {
            let amount = ctx.heal(Side::Player, *amount);
            ctx.emit(CombatEvent::Healed {
                side: Side::Player,
                source: name,
                amount,
            });
        }
        SpellEffect::HealOverTime { per_turn, duration } => {
            let status = StatusEffect::new(name, StatusKind::HealOverTime, *per_turn, *duration)
                .with_description(spell.description.clone());
            ctx.apply_status(Side::Player, status);
        }
        SpellEffect::OffenseDot { per_turn, duration } => {
            let status = StatusEffect::new(
                name,
                StatusKind::DamageOverTime,
                per_turn + power,
                *duration,
            )
            .with_description(spell.description.clone());
            ctx.apply_status(Side::Enemy, status);
        }
        SpellEffect::Vampiric { damage } => {
            let before = ctx.enemy.health;
            let amount = hit_enemy(ctx, damage + power, false);
            ctx.emit(CombatEvent::DamageDealt {
                target: Side::Enemy,
                source: name.clone(),
                amount,
            });
            // Only health the enemy actually lost feeds the drain.
            let drained = before - ctx.enemy.health;
            let healed = ctx.heal(Side::Player, drained / 2);
            ctx.emit(CombatEvent::Healed {
                side: Side::Player,
                source: name,
                amount: healed,
            });
        }
        SpellEffect::WeakenAttack {
            magnitude,
            duration,
        } => {
            let status = StatusEffect::new(name, StatusKind::DebuffAttack, *magnitude, *duration)
                .with_description(spell.description.clone());
            ctx.apply_status(Side::Enemy, status);
        }
        SpellEffect::TimeSlow { duration } => {
            let penalty = ctx.config().time_slow_penalty;
            let status = StatusEffect::new(name, StatusKind::TimeSlow, penalty, *duration)
                .with_description(spell.description.clone());
            ctx.apply_status(Side::Enemy, status);
        }
        SpellEffect::AttackBuff {
            magnitude,
            duration,
            crit_bonus,
        } => {
            let status_name = if *crit_bonus {
                CritRules::FURY_STATUS.to_string()
            } else {
                name
            };
            let status =
                StatusEffect::new(status_name, StatusKind::BuffAttack, *magnitude, *duration)
                    .with_description(spell.description.clone());
            ctx.apply_status(Side::Player, status);
        }
        SpellEffect::DefenseBuff {
            magnitude,
            duration,
        } => {
            let status = StatusEffect::new(name, StatusKind::BuffDefense, *magnitude, *duration)
                .with_description(spell.description.clone());
            ctx.apply_status(Side::Player, status);
        }
        SpellEffect::TemporaryShield { amount } => {
            ctx.combatant.add_shield(*amount);
            ctx.emit(CombatEvent::ShieldRaised {
                source: name,
                amount: *amount,
            });
        }
        SpellEffect::Dispel => {
            let count = ctx.side_mut(side).statuses.clear();
            ctx.emit(CombatEvent::StatusesCleared { side, count });
        }
        SpellEffect::PiercingDamage { damage } => {
            let amount = hit_enemy(ctx, *damage, true);
            ctx.emit(CombatEvent::DamageDealt {
                target: Side::Enemy,
                source: name,
                amount,
            });
        }
    }
}
