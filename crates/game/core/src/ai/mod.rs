//! Enemy decision making.
//!
//! Each enemy turn the live combat is condensed into an owned [`AiContext`]
//! blackboard, with every random draw the decision may need taken up front
//! from the encounter dice. A behavior tree then picks the action:
//!
//! ```text
//! Selector
//! ├── WeightedSelector
//! │   ├── BasicAttack                       (basic weight)
//! │   └── Sequence                          (special weight)
//! │       ├── Condition: special available
//! │       └── PickSpecial
//! └── BasicAttack                           (fallback)
//! ```
//!
//! The fallback covers both an all-zero weight total and a special branch
//! whose abilities all failed their own chance roll.
mod blackboard;
mod nodes;

pub use blackboard::{AbilityOption, AiContext, basic_weight, special_weight};
pub use nodes::{BasicAttack, PickSpecial};

use behavior_tree::{Behavior, builder};
use tracing::debug;

use crate::action::EnemyAction;
use crate::combat::CombatContext;

type Weigh = Box<dyn Fn(&AiContext) -> u32 + Send + Sync>;

/// Holds the enemy's decision tree.
///
/// The tree is stateless; one brain can serve any number of encounters.
pub struct EnemyBrain {
    root: Box<dyn Behavior<AiContext>>,
}

impl EnemyBrain {
    pub fn new() -> Self {
        let special_branch = builder::sequence(vec![
            builder::condition(AiContext::special_available),
            Box::new(PickSpecial),
        ]);
        let basic: Box<dyn Behavior<AiContext>> = Box::new(BasicAttack);
        let choice = builder::weighted(vec![
            (basic, Box::new(basic_weight) as Weigh),
            (special_branch, Box::new(special_weight) as Weigh),
        ]);
        let root = builder::selector(vec![choice, Box::new(BasicAttack)]);
        Self { root }
    }

    /// Chooses the enemy's action for this turn, drawing from the combat dice.
    pub fn decide(&self, ctx: &mut CombatContext<'_>) -> EnemyAction {
        let blackboard = AiContext::observe(ctx);
        self.evaluate(blackboard)
    }

    /// Runs the tree against an already prepared blackboard.
    pub fn evaluate(&self, mut blackboard: AiContext) -> EnemyAction {
        self.root.tick(&mut blackboard);
        let action = blackboard.decision.unwrap_or(EnemyAction::BasicAttack);
        debug!(
            ?action,
            basic = basic_weight(&blackboard),
            special = special_weight(&blackboard),
            momentum = blackboard.momentum,
            "enemy decided"
        );
        action
    }
}

impl Default for EnemyBrain {
    fn default() -> Self {
        Self::new()
    }
}
