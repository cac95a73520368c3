//! Weapon attacks, skills, stance, analysis and fleeing.
use tracing::debug;

use crate::combat::CombatContext;
use crate::combat::damage::{
    flee_chance, hit_enemy, player_crit_chance, roll_player_power, scale, weapon_bonus_for,
};
use crate::engine::{CombatEvent, EnemyAnalysis};
use crate::env::{ItemKind, Roll};
use crate::state::{EquipmentSlot, Side, SkillId, Stance};

use super::{ActionOutcome, ActionRejection};

/// Plain weapon (or bare-handed) attack.
///
/// A critical multiplies the damage and builds extra momentum.
pub fn attack(ctx: &mut CombatContext<'_>) -> ActionOutcome {
    let power = roll_player_power(ctx);
    let chance = player_crit_chance(ctx);
    let critical = ctx.dice.chance(Side::Player, Roll::Critical, chance);

    let crit = &ctx.config().crit;
    let damage = if critical {
        ctx.gain_momentum(crit.momentum_on_crit);
        scale(power, crit.multiplier)
    } else {
        ctx.gain_momentum(1);
        power
    };
    let landed = hit_enemy(ctx, damage, false);
    debug!(power, chance, critical, landed, "attack resolved");

    let weapon = ctx.weapon_name();
    let momentum = ctx.momentum;
    ctx.emit(CombatEvent::Attack {
        weapon,
        damage: landed,
        critical,
        momentum,
    });
    ActionOutcome::TurnTaken
}

/// Momentum-fuelled strike that always lands as a critical.
pub fn power_attack(ctx: &mut CombatContext<'_>) -> Result<ActionOutcome, ActionRejection> {
    let config = ctx.config();
    let rules = &config.power_attack;
    if ctx.momentum < rules.momentum_cost {
        return Err(ActionRejection::NotEnoughMomentum {
            required: rules.momentum_cost,
            available: ctx.momentum,
        });
    }

    let roll = ctx
        .dice
        .range(Side::Player, Roll::PowerAttack, rules.roll_min, rules.roll_max);
    let base = roll + weapon_bonus_for(ctx) + rules.flat_bonus;
    let damage = scale(base, config.crit.multiplier);
    ctx.spend_momentum(rules.momentum_cost);
    let landed = hit_enemy(ctx, damage, false);

    let momentum = ctx.momentum;
    ctx.emit(CombatEvent::PowerAttack {
        damage: landed,
        momentum,
    });
    Ok(ActionOutcome::TurnTaken)
}

/// Whether the item in `slot` exists and is of the matching kind.
fn slot_filled(ctx: &CombatContext<'_>, slot: EquipmentSlot) -> bool {
    let Some(item) = ctx
        .combatant
        .equipped(slot)
        .and_then(|id| ctx.env.items().item(id))
    else {
        return false;
    };
    matches!(
        (slot, &item.kind),
        (EquipmentSlot::Weapon, ItemKind::Weapon { .. })
            | (EquipmentSlot::Armor, ItemKind::Armor { .. })
            | (EquipmentSlot::Shield, ItemKind::Shield { .. })
    )
}

/// Cooldown-gated skill from the skill records.
pub fn use_skill(
    ctx: &mut CombatContext<'_>,
    id: &SkillId,
) -> Result<ActionOutcome, ActionRejection> {
    if !ctx.combatant.known_skills.contains(id) {
        return Err(ActionRejection::UnknownSkill(id.clone()));
    }
    let Some(skill) = ctx.env.skills().skill(id) else {
        ctx.diagnostic(format!("skill '{id}' not found"));
        return Err(ActionRejection::UnknownSkill(id.clone()));
    };

    let turns = ctx.combatant.skill_cooldown(id);
    if turns > 0 {
        return Err(ActionRejection::SkillOnCooldown {
            skill: id.clone(),
            turns,
        });
    }
    if let Some(slot) = skill.requires
        && !slot_filled(ctx, slot)
    {
        return Err(ActionRejection::MissingEquipment {
            skill: id.clone(),
            slot,
        });
    }

    let power = roll_player_power(ctx);
    let damage = scale(power, skill.damage_multiplier);
    let landed = hit_enemy(ctx, damage, false);
    ctx.emit(CombatEvent::SkillUsed {
        skill: skill.name.clone(),
        damage: landed,
    });

    if let Some(stun) = skill.stun
        && ctx.enemy.is_alive()
        && ctx.dice.chance(Side::Player, Roll::Stun, stun.chance)
    {
        ctx.stun(Side::Enemy, stun.duration);
    }

    ctx.combatant.set_skill_cooldown(id.clone(), skill.cooldown);
    Ok(ActionOutcome::TurnTaken)
}

pub fn change_stance(ctx: &mut CombatContext<'_>, stance: Stance) -> ActionOutcome {
    ctx.stance = stance;
    ctx.emit(CombatEvent::StanceChanged { stance });
    ActionOutcome::Free
}

pub fn analyze(ctx: &mut CombatContext<'_>) -> ActionOutcome {
    let enemy = &ctx.enemy;
    let analysis = EnemyAnalysis {
        name: enemy.name.clone(),
        description: enemy.description.clone(),
        health: enemy.health,
        max_health: enemy.max_health,
        attack_min: enemy.attack_min,
        attack_max: enemy.attack_max,
        abilities: enemy
            .special_abilities
            .iter()
            .map(|ability| (ability.name.clone(), ability.current_cooldown))
            .collect(),
        statuses: ctx
            .foe
            .statuses
            .iter()
            .map(|status| format!("{} ({} turns)", status.name, status.remaining))
            .collect(),
    };
    ctx.emit(CombatEvent::EnemyAnalyzed(analysis));
    ActionOutcome::Free
}

/// Escape attempt; more likely the more wounded the player is.
pub fn flee(ctx: &mut CombatContext<'_>) -> ActionOutcome {
    let chance = flee_chance(&ctx.config().flee, ctx.combatant.health_ratio());
    if ctx.dice.chance(Side::Player, Roll::Flee, chance) {
        ctx.emit(CombatEvent::Fled);
        ActionOutcome::Fled
    } else {
        ctx.emit(CombatEvent::FleeFailed);
        ActionOutcome::TurnTaken
    }
}
