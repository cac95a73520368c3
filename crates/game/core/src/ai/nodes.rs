//! Leaf actions of the enemy decision tree.
use behavior_tree::{Behavior, Status};

use super::AiContext;
use crate::action::EnemyAction;

/// Always succeeds with a plain attack.
pub struct BasicAttack;

impl Behavior<AiContext> for BasicAttack {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.decision = Some(EnemyAction::BasicAttack);
        Status::Success
    }
}

/// Commits to the first ready ability whose own chance roll succeeds.
pub struct PickSpecial;

impl Behavior<AiContext> for PickSpecial {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        match ctx.abilities.iter().find(|ability| ability.fires()) {
            Some(ability) => {
                ctx.decision = Some(EnemyAction::Special(ability.index));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}
