//! Player and enemy actions.
//!
//! # Module Structure
//!
//! - `error`: [`ActionRejection`], the guarded "choose again" branches
//! - `player`: attack, power attack, skills, stance, analyze, flee
//! - `spell`: casting and the spell effect union
//! - `item`: combat item use
//! - `enemy`: the enemy's basic and special attacks
//!
//! Every player action resolves to an [`ActionOutcome`]. Rejections and free
//! actions leave the turn with the player; everything else hands it over.
pub mod enemy;
pub mod error;
pub mod item;
pub mod player;
pub mod spell;

pub use enemy::{EnemyAction, resolve_enemy_action};
pub use error::ActionRejection;
pub use item::combat_items;
pub use spell::castable_spells;

use tracing::debug;

use crate::combat::CombatContext;
use crate::state::{ItemId, Side, SkillId, SpellId, Stance};

/// What the player chose to do this turn.
#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PlayerAction {
    Attack,
    PowerAttack,
    UseSkill(SkillId),
    /// `target` is only consulted by spells that may hit either side.
    CastSpell {
        spell: SpellId,
        target: Option<Side>,
    },
    UseItem(ItemId),
    ChangeStance(Stance),
    Analyze,
    Flee,
}

/// Result of resolving one player action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action resolved and the turn passes to the enemy.
    TurnTaken,
    /// The action resolved without spending the turn.
    Free,
    /// The player left the combat.
    Fled,
    /// Nothing happened; the player must choose again.
    Rejected(ActionRejection),
}

/// Resolves one player action against the live combat.
pub fn resolve_player_action(ctx: &mut CombatContext<'_>, action: &PlayerAction) -> ActionOutcome {
    debug!(action = action.as_ref(), round = ctx.round, "resolving player action");

    let result = match action {
        PlayerAction::Attack => Ok(player::attack(ctx)),
        PlayerAction::PowerAttack => player::power_attack(ctx),
        PlayerAction::UseSkill(skill) => player::use_skill(ctx, skill),
        PlayerAction::CastSpell { spell, target } => spell::cast_spell(ctx, spell, *target),
        PlayerAction::UseItem(item) => item::use_item(ctx, item),
        PlayerAction::ChangeStance(stance) => Ok(player::change_stance(ctx, *stance)),
        PlayerAction::Analyze => Ok(player::analyze(ctx)),
        PlayerAction::Flee => Ok(player::flee(ctx)),
    };

    result.unwrap_or_else(|rejection| {
        debug!(%rejection, "action rejected");
        ActionOutcome::Rejected(rejection)
    })
}
