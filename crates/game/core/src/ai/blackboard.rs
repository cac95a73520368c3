use behavior_tree::WeightedRoll;

use crate::action::EnemyAction;
use crate::combat::CombatContext;
use crate::config::AiWeights;
use crate::env::Roll;
use crate::state::{AiTrait, Side};

/// One special ability as the decision sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct AbilityOption {
    /// Index into the instance's `special_abilities`.
    pub index: usize,
    pub ready: bool,
    pub chance: f64,
    /// Pre-drawn uniform value; the ability fires when `roll < chance`.
    pub roll: f64,
}

impl AbilityOption {
    pub fn fires(&self) -> bool {
        self.ready && self.roll < self.chance
    }
}

/// Owned snapshot the enemy decision tree reads and writes.
#[derive(Clone, Debug, PartialEq)]
pub struct AiContext {
    pub player_health_ratio: f64,
    /// The player's momentum; specials need it built up.
    pub momentum: u32,
    pub aggressive: bool,
    pub defensive: bool,
    pub abilities: Vec<AbilityOption>,
    /// Raw draw reduced into `[1, total]` by [`WeightedRoll`].
    pub weight_draw: u32,
    pub weights: AiWeights,
    pub decision: Option<EnemyAction>,
}

impl AiContext {
    /// Snapshots the combat and draws the rolls the decision may consume.
    pub fn observe(ctx: &mut CombatContext<'_>) -> Self {
        let weight_draw = ctx.dice.raw(Side::Enemy, Roll::AiBranch);
        let mut abilities = Vec::with_capacity(ctx.enemy.special_abilities.len());
        for (index, ability) in ctx.enemy.special_abilities.iter().enumerate() {
            let ready = ability.is_ready();
            let roll = if ready {
                ctx.dice.unit(Side::Enemy, Roll::AbilityChance)
            } else {
                1.0
            };
            abilities.push(AbilityOption {
                index,
                ready,
                chance: ability.chance,
                roll,
            });
        }

        Self {
            player_health_ratio: ctx.combatant.health_ratio(),
            momentum: ctx.momentum,
            aggressive: ctx.enemy.has_trait(AiTrait::Aggressive),
            defensive: ctx.enemy.has_trait(AiTrait::Defensive),
            abilities,
            weight_draw,
            weights: ctx.config().ai.clone(),
            decision: None,
        }
    }

    /// A ready special ability exists and enough momentum has built up.
    pub fn special_available(&self) -> bool {
        self.momentum >= self.weights.special_momentum
            && self.abilities.iter().any(|ability| ability.ready)
    }

    fn finishing(&self) -> bool {
        self.player_health_ratio < f64::from(self.weights.finisher_ratio_percent) / 100.0
    }
}

impl WeightedRoll for AiContext {
    fn roll_weight(&mut self, total: u32) -> u32 {
        1 + self.weight_draw % total.max(1)
    }
}

/// Weight of the basic attack branch.
pub fn basic_weight(ctx: &AiContext) -> u32 {
    let mut weight = ctx.weights.basic;
    if ctx.defensive {
        weight += ctx.weights.defensive_basic_bonus;
    }
    weight.max(0) as u32
}

/// Weight of the special attack branch; zero while no special is available.
pub fn special_weight(ctx: &AiContext) -> u32 {
    if !ctx.special_available() {
        return 0;
    }
    let weights = &ctx.weights;
    let mut weight = weights.special;
    if ctx.finishing() {
        weight += weights.finisher_bonus;
    }
    if ctx.aggressive {
        weight += weights.aggressive_special_bonus;
    }
    if ctx.defensive {
        weight -= weights.defensive_special_penalty;
    }
    weight.max(0) as u32
}
