use tracing::{debug, warn};

use crate::config::CombatConfig;
use crate::engine::CombatEvent;
use crate::env::{CombatEnv, Dice, ItemKind};
use crate::state::{Combatant, EnemyInstance, Side, Stance, StatusEffect, StatusEffects};

/// Per-side bookkeeping that only lives as long as the combat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SideState {
    pub statuses: StatusEffects,
    /// Actions this side still has to sit out.
    pub stunned: u32,
}

/// Everything an action needs while it resolves.
///
/// Borrowed read-only records come through `env`; the two combatants and the
/// per-side state are mutated in place.
pub struct CombatContext<'a> {
    pub env: CombatEnv<'a>,
    pub dice: Dice<'a>,
    pub combatant: &'a mut Combatant,
    pub enemy: EnemyInstance,
    pub stance: Stance,
    pub player: SideState,
    pub foe: SideState,
    /// The player's momentum. Built by attacking, spent by power attacks and
    /// by the enemy's special attacks.
    pub momentum: u32,
    pub round: u32,
    events: Vec<CombatEvent>,
}

impl<'a> CombatContext<'a> {
    pub fn new(env: CombatEnv<'a>, combatant: &'a mut Combatant, enemy: EnemyInstance) -> Self {
        Self {
            dice: env.dice(),
            env,
            combatant,
            enemy,
            stance: Stance::default(),
            player: SideState::default(),
            foe: SideState::default(),
            momentum: 0,
            round: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.env.config()
    }

    pub fn gain_momentum(&mut self, amount: u32) {
        self.momentum = self.momentum.saturating_add(amount);
    }

    pub fn spend_momentum(&mut self, amount: u32) {
        self.momentum = self.momentum.saturating_sub(amount);
    }

    pub fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub(crate) fn into_events(self) -> Vec<CombatEvent> {
        self.events
    }

    /// Records a skipped reference or a legacy-data notice.
    ///
    /// Always logged; surfaced as an event only in diagnostic mode.
    pub fn diagnostic(&mut self, message: String) {
        if self.config().debug_diagnostics {
            warn!(target: "combat::data", "{message}");
            self.events.push(CombatEvent::Diagnostic(message));
        } else {
            debug!(target: "combat::data", "{message}");
        }
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.foe,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.foe,
        }
    }

    pub fn health(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.combatant.health,
            Side::Enemy => self.enemy.health,
        }
    }

    /// Removes health without any mitigation. Returns the health actually lost.
    pub fn damage(&mut self, side: Side, amount: u32) -> u32 {
        match side {
            Side::Player => self.combatant.take_damage(amount),
            Side::Enemy => self.enemy.take_damage(amount),
        }
    }

    /// Returns the health actually restored.
    pub fn heal(&mut self, side: Side, amount: u32) -> u32 {
        match side {
            Side::Player => self.combatant.heal(amount),
            Side::Enemy => self.enemy.heal(amount),
        }
    }

    /// Attaches a status and reports it.
    pub fn apply_status(&mut self, side: Side, status: StatusEffect) {
        let name = status.name.clone();
        let turns = status.remaining;
        if self.side_mut(side).statuses.add(status) {
            self.emit(CombatEvent::StatusApplied {
                side,
                status: name,
                turns,
            });
        }
    }

    pub fn stun(&mut self, side: Side, turns: u32) {
        if turns == 0 {
            return;
        }
        let state = self.side_mut(side);
        state.stunned = state.stunned.saturating_add(turns);
        self.emit(CombatEvent::Stunned { side, turns });
    }

    /// Display name of the equipped weapon, if it is a known weapon record.
    pub fn weapon_name(&self) -> Option<String> {
        let id = self.combatant.equipped_weapon.as_ref()?;
        let item = self.env.items().item(id)?;
        matches!(item.kind, ItemKind::Weapon { .. }).then(|| item.name.clone())
    }
}
