//! Plain-text rendering of combat state and results.
use std::io::{self, Write};

use combat_core::{CombatOutcome, CombatReport, CombatView, Combatant, StatusEffects};

/// Two status lines shown above every menu.
pub fn status_lines(view: &CombatView<'_>) -> [String; 2] {
    let hero = view.combatant;
    let mut player = format!(
        "{}  HP {}/{}  MP {}/{}  Momentum {}  Stance {}",
        hero.name,
        hero.health,
        hero.max_health,
        hero.mana,
        hero.max_mana,
        view.momentum(),
        view.stance
    );
    if let Some(shield) = hero.temporary_shield {
        player.push_str(&format!("  Shield {}", shield));
    }
    if !view.player.statuses.is_empty() {
        player.push_str(&format!("  [{}]", effect_list(&view.player.statuses)));
    }

    let enemy = view.enemy;
    let mut foe = format!("{}  HP {}/{}", enemy.name, enemy.health, enemy.max_health);
    if !view.foe.statuses.is_empty() {
        foe.push_str(&format!("  [{}]", effect_list(&view.foe.statuses)));
    }

    [player, foe]
}

fn effect_list(statuses: &StatusEffects) -> String {
    statuses
        .iter()
        .map(|effect| format!("{} {}", effect.name, effect.remaining))
        .collect::<Vec<_>>()
        .join(", ")
}

fn outcome_line(outcome: CombatOutcome) -> &'static str {
    match outcome {
        CombatOutcome::Won => "Victory!",
        CombatOutcome::Lost => "You have been defeated.",
        CombatOutcome::Fled => "You got away.",
        CombatOutcome::Error => "The combat was interrupted.",
    }
}

/// End-of-combat summary: outcome, loot and experience.
pub fn write_summary(
    out: &mut impl Write,
    report: &CombatReport,
    hero: &Combatant,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {} ===", outcome_line(report.outcome))?;
    writeln!(out, "Rounds fought: {}", report.rounds)?;

    if let Some(failure) = &report.failure {
        writeln!(out, "Reason: {}", failure)?;
    }

    if let Some(loot) = &report.loot {
        if loot.is_empty() {
            writeln!(out, "The enemy dropped nothing.")?;
        } else {
            writeln!(out, "Loot: {}", loot.names.join(", "))?;
        }
    }

    if let Some(progression) = &report.progression {
        write!(out, "Experience gained: {}", progression.xp_gained)?;
        if progression.bonus > 0 {
            write!(out, " (includes {} momentum bonus)", progression.bonus)?;
        }
        writeln!(out)?;
        for level_up in &progression.level_ups {
            writeln!(
                out,
                "Level up! You are now level {} ({} HP, {} MP).",
                level_up.level, level_up.max_health, level_up.max_mana
            )?;
        }
    }

    writeln!(
        out,
        "{}: level {}, {}/{} XP, {}/{} HP",
        hero.name, hero.level, hero.xp, hero.xp_to_next_level, hero.health, hero.max_health
    )
}
