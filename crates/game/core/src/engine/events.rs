//! Structured record of everything that happens in a combat.
//!
//! The engine never prints. Each step emits a [`CombatEvent`]; the caller
//! decides how to render it (`Display` gives a plain-text line).
use std::fmt;

use crate::action::ActionRejection;
use crate::state::{Side, Stance, StatusKind};

/// Snapshot shown by the free "analyze" action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyAnalysis {
    pub name: String,
    pub description: String,
    pub health: u32,
    pub max_health: u32,
    pub attack_min: u32,
    pub attack_max: u32,
    /// Ability names with their remaining cooldown.
    pub abilities: Vec<(String, u32)>,
    pub statuses: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CombatEvent {
    CombatStarted {
        enemy: String,
        description: String,
    },
    RoundStarted {
        round: u32,
    },
    /// A damage- or heal-over-time status acted on its owner.
    StatusTicked {
        side: Side,
        status: String,
        kind: StatusKind,
        amount: u32,
    },
    StatusApplied {
        side: Side,
        status: String,
        turns: u32,
    },
    StatusExpired {
        side: Side,
        status: String,
    },
    StatusesCleared {
        side: Side,
        count: usize,
    },
    Attack {
        weapon: Option<String>,
        damage: u32,
        critical: bool,
        momentum: u32,
    },
    PowerAttack {
        damage: u32,
        momentum: u32,
    },
    SkillUsed {
        skill: String,
        damage: u32,
    },
    Stunned {
        side: Side,
        turns: u32,
    },
    TurnSkipped {
        side: Side,
    },
    SpellCast {
        spell: String,
        mana_spent: u32,
    },
    /// Damage from a spell or an item.
    DamageDealt {
        target: Side,
        source: String,
        amount: u32,
    },
    Healed {
        side: Side,
        source: String,
        amount: u32,
    },
    ManaRestored {
        source: String,
        amount: u32,
    },
    ShieldRaised {
        source: String,
        amount: u32,
    },
    ItemUsed {
        item: String,
    },
    ItemHadNoEffect {
        item: String,
    },
    EscapeFailed {
        source: String,
    },
    StanceChanged {
        stance: Stance,
    },
    EnemyAnalyzed(EnemyAnalysis),
    FleeFailed,
    Fled,
    EnemyAttack {
        enemy: String,
        ability: Option<String>,
        raw: u32,
        absorbed: u32,
        damage: u32,
    },
    Rejected(ActionRejection),
    EnemyDefeated {
        enemy: String,
    },
    PlayerDefeated,
    LootGranted {
        items: Vec<String>,
    },
    NothingOfInterest,
    ExperienceGained {
        amount: u32,
        bonus: u32,
    },
    LevelUp {
        level: u32,
        max_health: u32,
        max_mana: u32,
        xp_to_next_level: u32,
    },
    /// Skipped references and legacy data, only in diagnostic mode.
    Diagnostic(String),
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Player => "you",
        Side::Enemy => "the enemy",
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CombatEvent::*;
        match self {
            CombatStarted { enemy, description } => {
                write!(f, "A {enemy} appears!")?;
                if !description.is_empty() {
                    write!(f, " {description}")?;
                }
                Ok(())
            }
            RoundStarted { round } => write!(f, "--- Round {round} ---"),
            StatusTicked {
                side,
                status,
                kind: StatusKind::HealOverTime,
                amount,
            } => write!(f, "{status} heals {} for {amount}.", side_name(*side)),
            StatusTicked {
                side,
                status,
                amount,
                ..
            } => write!(f, "{status} deals {amount} damage to {}.", side_name(*side)),
            StatusApplied {
                side,
                status,
                turns,
            } => write!(f, "{status} takes hold of {} for {turns} turn(s).", side_name(*side)),
            StatusExpired { side, status } => {
                write!(f, "{status} wears off from {}.", side_name(*side))
            }
            StatusesCleared { side, count } => write!(
                f,
                "{count} effect(s) dispelled from {}.",
                side_name(*side)
            ),
            Attack {
                weapon,
                damage,
                critical,
                momentum,
            } => {
                if *critical {
                    write!(f, "Critical hit! ")?;
                }
                match weapon {
                    Some(weapon) => write!(f, "You strike with your {weapon} for {damage} damage")?,
                    None => write!(f, "You punch for {damage} damage")?,
                }
                write!(f, " (momentum {momentum}).")
            }
            PowerAttack { damage, momentum } => write!(
                f,
                "POWER ATTACK! You unleash {damage} damage (momentum {momentum})."
            ),
            SkillUsed { skill, damage } => write!(f, "You use {skill} for {damage} damage."),
            Stunned { side, turns } => match side {
                Side::Player => write!(f, "You are stunned for {turns} turn(s)!"),
                Side::Enemy => write!(f, "The enemy is stunned for {turns} turn(s)!"),
            },
            TurnSkipped { side } => match side {
                Side::Player => write!(f, "You are stunned and cannot act!"),
                Side::Enemy => write!(f, "The enemy is stunned and cannot attack!"),
            },
            SpellCast { spell, mana_spent } => {
                write!(f, "You cast {spell} ({mana_spent} mana).")
            }
            DamageDealt {
                target,
                source,
                amount,
            } => write!(f, "{source} deals {amount} damage to {}.", side_name(*target)),
            Healed {
                side,
                source,
                amount,
            } => write!(f, "{source} heals {} for {amount}.", side_name(*side)),
            ManaRestored { source, amount } => write!(f, "{source} restores {amount} mana."),
            ShieldRaised { source, amount } => {
                write!(f, "{source} surrounds you with a {amount} point shield.")
            }
            ItemUsed { item } => write!(f, "You use the {item}."),
            ItemHadNoEffect { item } => write!(f, "The {item} has no effect."),
            EscapeFailed { source } => write!(f, "The {source} fails to get you away!"),
            StanceChanged { stance } => write!(f, "You shift into a {stance} stance."),
            EnemyAnalyzed(analysis) => {
                write!(
                    f,
                    "{}: {}/{} HP, attacks for {}-{}",
                    analysis.name,
                    analysis.health,
                    analysis.max_health,
                    analysis.attack_min,
                    analysis.attack_max
                )?;
                if !analysis.abilities.is_empty() {
                    let abilities: Vec<String> = analysis
                        .abilities
                        .iter()
                        .map(|(name, cooldown)| match cooldown {
                            0 => name.clone(),
                            turns => format!("{name} (cooldown {turns})"),
                        })
                        .collect();
                    write!(f, "; abilities: {}", abilities.join(", "))?;
                }
                if !analysis.statuses.is_empty() {
                    write!(f, "; affected by: {}", analysis.statuses.join(", "))?;
                }
                Ok(())
            }
            FleeFailed => write!(f, "You fail to escape!"),
            Fled => write!(f, "You escape from combat!"),
            EnemyAttack {
                enemy,
                ability,
                absorbed,
                damage,
                ..
            } => {
                match ability {
                    Some(ability) => {
                        write!(f, "The {enemy} uses {ability} and deals {damage} damage")?
                    }
                    None => write!(f, "The {enemy} attacks you for {damage} damage")?,
                }
                if *absorbed > 0 {
                    write!(f, " ({absorbed} absorbed by your shield)")?;
                }
                write!(f, ".")
            }
            Rejected(rejection) => write!(f, "You can't do that: {rejection}."),
            EnemyDefeated { enemy } => write!(f, "You defeated the {enemy}!"),
            PlayerDefeated => write!(f, "You have been defeated."),
            LootGranted { items } => write!(f, "The enemy dropped: {}.", items.join(", ")),
            NothingOfInterest => write!(f, "The enemy dropped nothing of interest."),
            ExperienceGained { amount, bonus } => {
                write!(f, "You gained {amount} XP")?;
                if *bonus > 0 {
                    write!(f, " (including a {bonus} XP momentum bonus)")?;
                }
                write!(f, ".")
            }
            LevelUp {
                level,
                max_health,
                max_mana,
                xp_to_next_level,
            } => write!(
                f,
                "LEVEL UP! You are now level {level} (max health {max_health}, \
                 max mana {max_mana}, next level in {xp_to_next_level} XP)."
            ),
            Diagnostic(message) => write!(f, "[debug] {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_loot_lines() {
        let event = CombatEvent::LootGranted {
            items: vec!["Shiny Pebble".into(), "Goblin Ear".into()],
        };
        assert_eq!(event.to_string(), "The enemy dropped: Shiny Pebble, Goblin Ear.");
        assert_eq!(
            CombatEvent::NothingOfInterest.to_string(),
            "The enemy dropped nothing of interest."
        );
    }

    #[test]
    fn renders_shield_absorption() {
        let event = CombatEvent::EnemyAttack {
            enemy: "Goblin Scout".into(),
            ability: None,
            raw: 5,
            absorbed: 3,
            damage: 2,
        };
        assert_eq!(
            event.to_string(),
            "The Goblin Scout attacks you for 2 damage (3 absorbed by your shield)."
        );
    }
}
