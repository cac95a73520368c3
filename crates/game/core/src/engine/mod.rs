//! Combat session controller.
//!
//! [`CombatEngine`] owns one encounter: it runs rounds until a terminal
//! state, asks the [`ActionProvider`] for the player's choices, lets the
//! enemy brain answer, and pays out loot and experience on a win.
//!
//! Each round:
//! 1. tick statuses on both sides (player first)
//! 2. player turn, repeated until an action actually spends it
//! 3. enemy turn, if the fight is still on
//! 4. cooldowns on both sides drop by one
//!
//! Health is checked after every step, so a kill ends the combat at once.
mod events;
mod state;

pub use events::{CombatEvent, EnemyAnalysis};
pub use state::{CombatOutcome, CombatState};

use tracing::{debug, info, warn};

use crate::action::{ActionOutcome, resolve_enemy_action, resolve_player_action};
use crate::ai::EnemyBrain;
use crate::combat::{
    CombatContext, LootReport, ProgressionReport, award_victory, resolve_loot, tick_statuses,
};
use crate::env::CombatEnv;
use crate::provider::{ActionProvider, CombatView, ProviderError};
use crate::state::{Combatant, EnemyInstance, Side};

/// Everything a finished combat produced.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatReport {
    pub outcome: CombatOutcome,
    pub rounds: u32,
    pub enemy_health: u32,
    /// Present only on a win.
    pub loot: Option<LootReport>,
    /// Present only on a win.
    pub progression: Option<ProgressionReport>,
    /// Why the combat ended in `error`.
    pub failure: Option<ProviderError>,
    pub events: Vec<CombatEvent>,
}

pub struct CombatEngine<'a> {
    ctx: CombatContext<'a>,
    brain: EnemyBrain,
    state: CombatState,
    /// Events already handed to the provider.
    observed: usize,
}

impl<'a> CombatEngine<'a> {
    /// Starts a session. The enemy instance is owned by it; the combatant is
    /// updated in place and reflects the final state once `run` returns.
    pub fn new(env: CombatEnv<'a>, combatant: &'a mut Combatant, enemy: EnemyInstance) -> Self {
        Self {
            ctx: CombatContext::new(env, combatant, enemy),
            brain: EnemyBrain::new(),
            state: CombatState::Active,
            observed: 0,
        }
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn context(&self) -> &CombatContext<'a> {
        &self.ctx
    }

    /// Plays the encounter to its end.
    pub fn run<P>(mut self, provider: &mut P) -> CombatReport
    where
        P: ActionProvider + ?Sized,
    {
        info!(
            enemy = %self.ctx.enemy.name,
            seed = self.ctx.env.seed(),
            "combat started"
        );
        let enemy = self.ctx.enemy.name.clone();
        let description = self.ctx.enemy.description.clone();
        self.ctx.emit(CombatEvent::CombatStarted { enemy, description });

        let mut failure = None;
        while self.state == CombatState::Active {
            if let Err(error) = self.play_round(provider) {
                warn!(%error, round = self.ctx.round, "action provider failed");
                failure = Some(error);
                self.state = CombatState::Error;
            }
        }

        let mut loot = None;
        let mut progression = None;
        if self.state == CombatState::WonResolving {
            loot = Some(resolve_loot(&mut self.ctx));
            progression = Some(award_victory(&mut self.ctx));
            self.state = CombatState::Won;
        }
        self.flush(provider);

        let outcome = self.state.outcome().unwrap_or(CombatOutcome::Error);
        info!(
            %outcome,
            rounds = self.ctx.round,
            health = self.ctx.combatant.health,
            "combat finished"
        );

        CombatReport {
            outcome,
            rounds: self.ctx.round,
            enemy_health: self.ctx.enemy.health,
            loot,
            progression,
            failure,
            events: self.ctx.into_events(),
        }
    }

    fn play_round<P>(&mut self, provider: &mut P) -> Result<(), ProviderError>
    where
        P: ActionProvider + ?Sized,
    {
        self.ctx.round += 1;
        let round = self.ctx.round;
        self.ctx.emit(CombatEvent::RoundStarted { round });

        tick_statuses(&mut self.ctx, Side::Player);
        tick_statuses(&mut self.ctx, Side::Enemy);
        if self.settle() {
            return Ok(());
        }

        self.player_turn(provider)?;
        if self.state != CombatState::Active || self.settle() {
            return Ok(());
        }

        self.enemy_turn();
        if self.settle() {
            return Ok(());
        }

        self.ctx.combatant.tick_cooldowns();
        self.ctx.enemy.tick_cooldowns();
        Ok(())
    }

    fn player_turn<P>(&mut self, provider: &mut P) -> Result<(), ProviderError>
    where
        P: ActionProvider + ?Sized,
    {
        if self.ctx.player.stunned > 0 {
            self.ctx.player.stunned -= 1;
            self.ctx.emit(CombatEvent::TurnSkipped { side: Side::Player });
            return Ok(());
        }

        loop {
            self.flush(provider);
            let action = provider.provide_action(&CombatView::new(&self.ctx))?;
            match resolve_player_action(&mut self.ctx, &action) {
                ActionOutcome::TurnTaken => return Ok(()),
                ActionOutcome::Fled => {
                    self.state = CombatState::Fled;
                    return Ok(());
                }
                ActionOutcome::Free => {}
                ActionOutcome::Rejected(rejection) => {
                    self.ctx.emit(CombatEvent::Rejected(rejection));
                }
            }
        }
    }

    fn enemy_turn(&mut self) {
        if self.ctx.foe.stunned > 0 {
            self.ctx.foe.stunned -= 1;
            self.ctx.emit(CombatEvent::TurnSkipped { side: Side::Enemy });
            return;
        }
        let action = self.brain.decide(&mut self.ctx);
        resolve_enemy_action(&mut self.ctx, action);
    }

    /// Moves to a terminal state if either side is down. Enemy death wins ties.
    fn settle(&mut self) -> bool {
        if !self.ctx.enemy.is_alive() {
            debug!(round = self.ctx.round, "enemy defeated");
            let enemy = self.ctx.enemy.name.clone();
            self.ctx.emit(CombatEvent::EnemyDefeated { enemy });
            self.state = CombatState::WonResolving;
            true
        } else if !self.ctx.combatant.is_alive() {
            debug!(round = self.ctx.round, "player defeated");
            self.ctx.emit(CombatEvent::PlayerDefeated);
            self.state = CombatState::Lost;
            true
        } else {
            false
        }
    }

    fn flush<P>(&mut self, provider: &mut P)
    where
        P: ActionProvider + ?Sized,
    {
        let events = self.ctx.events();
        for event in &events[self.observed..] {
            provider.observe(event);
        }
        self.observed = events.len();
    }
}

/// Runs one encounter and returns only its outcome.
pub fn resolve_combat<P>(
    env: CombatEnv<'_>,
    combatant: &mut Combatant,
    enemy: EnemyInstance,
    provider: &mut P,
) -> CombatOutcome
where
    P: ActionProvider + ?Sized,
{
    CombatEngine::new(env, combatant, enemy).run(provider).outcome
}
