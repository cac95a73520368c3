//! Where the player's choices come from.
//!
//! The engine blocks on [`ActionProvider::provide_action`] once per player
//! decision and streams every [`CombatEvent`] through
//! [`ActionProvider::observe`] before asking, so an interactive client can
//! render the fight as it happens.
use std::collections::VecDeque;

use crate::action::{PlayerAction, castable_spells, combat_items};
use crate::combat::{CombatContext, SideState};
use crate::engine::CombatEvent;
use crate::env::{CombatEnv, ItemDefinition, SkillDefinition, SpellDefinition};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Combatant, EnemyInstance, Stance};

/// The player-input source failed. Ends the combat with the `error` outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("player input closed")]
    InputClosed,

    #[error("no scripted action left for round {round}")]
    ScriptExhausted { round: u32 },

    #[error("player input failed: {0}")]
    Io(String),
}

impl GameError for ProviderError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InputClosed => "PROVIDER_INPUT_CLOSED",
            Self::ScriptExhausted { .. } => "PROVIDER_SCRIPT_EXHAUSTED",
            Self::Io(_) => "PROVIDER_IO",
        }
    }
}

/// Supplies player actions to a running combat.
pub trait ActionProvider {
    /// Blocks until the player has chosen. Sub-menus that are backed out of
    /// should be handled inside the provider; only a final choice is returned.
    fn provide_action(&mut self, view: &CombatView<'_>) -> Result<PlayerAction, ProviderError>;

    /// Called once for every event, in order, before the next decision.
    fn observe(&mut self, _event: &CombatEvent) {}
}

/// Read-only view of the live combat handed to the provider.
pub struct CombatView<'v> {
    pub env: CombatEnv<'v>,
    pub combatant: &'v Combatant,
    pub enemy: &'v EnemyInstance,
    pub stance: Stance,
    pub player: &'v SideState,
    pub foe: &'v SideState,
    pub round: u32,
    momentum: u32,
}

impl<'v> CombatView<'v> {
    pub fn new(ctx: &'v CombatContext<'_>) -> Self {
        Self {
            env: ctx.env,
            combatant: &*ctx.combatant,
            enemy: &ctx.enemy,
            stance: ctx.stance,
            player: &ctx.player,
            foe: &ctx.foe,
            round: ctx.round,
            momentum: ctx.momentum,
        }
    }

    pub fn momentum(&self) -> u32 {
        self.momentum
    }

    /// Known spells the player can pay for right now.
    pub fn castable_spells(&self) -> Vec<&'v SpellDefinition> {
        castable_spells(&self.env, self.combatant)
    }

    /// Distinct usable items with the number held.
    pub fn combat_items(&self) -> Vec<(&'v ItemDefinition, usize)> {
        combat_items(&self.env, self.combatant)
    }

    /// Known skills with their remaining cooldown. Unknown records are left out.
    pub fn skills(&self) -> Vec<(&'v SkillDefinition, u32)> {
        let skills = self.env.skills();
        self.combatant
            .known_skills
            .iter()
            .filter_map(|id| skills.skill(id))
            .map(|skill| (skill, self.combatant.skill_cooldown(&skill.id)))
            .collect()
    }
}

/// Replays a fixed list of actions, then fails.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    actions: VecDeque<PlayerAction>,
    seen: Vec<CombatEvent>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            seen: Vec::new(),
        }
    }

    /// Repeats one action `times` times.
    pub fn repeat(action: PlayerAction, times: usize) -> Self {
        Self::new(std::iter::repeat_n(action, times))
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }

    /// Events observed so far.
    pub fn seen(&self) -> &[CombatEvent] {
        &self.seen
    }
}

impl ActionProvider for ScriptedProvider {
    fn provide_action(&mut self, view: &CombatView<'_>) -> Result<PlayerAction, ProviderError> {
        self.actions
            .pop_front()
            .ok_or(ProviderError::ScriptExhausted { round: view.round })
    }

    fn observe(&mut self, event: &CombatEvent) {
        self.seen.push(event.clone());
    }
}
