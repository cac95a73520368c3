use std::io::{BufRead, Write};

use combat_core::{
    ActionProvider, CombatEvent, CombatView, PlayerAction, ProviderError, Side, SpellDefinition,
    SpellTarget, Stance,
};

use super::menu::{Choice, Prompt};
use crate::presentation::status_lines;

const MAIN_MENU: &str = "Choose your action:";

/// Action provider that reads menu choices from a terminal.
///
/// Sub-menus offer `0) Back`, which returns to the main menu without
/// spending the turn.
pub struct TerminalProvider<R, W> {
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> TerminalProvider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompt: Prompt::new(input, output),
        }
    }

    fn main_menu(&mut self, view: &CombatView<'_>) -> Result<PlayerAction, ProviderError> {
        let power_cost = view.env.config().power_attack.momentum_cost;

        loop {
            self.prompt.say("")?;
            for line in status_lines(view) {
                self.prompt.say(line)?;
            }

            let options = [
                "Attack".to_string(),
                format!("Power Attack ({}/{} momentum)", view.momentum(), power_cost),
                "Skills".to_string(),
                "Spells".to_string(),
                "Items".to_string(),
                "Change Stance".to_string(),
                "Analyze Enemy".to_string(),
                "Flee".to_string(),
            ];

            let picked = match self.prompt.choose(MAIN_MENU, &options, false)? {
                Choice::Option(0) => Some(PlayerAction::Attack),
                Choice::Option(1) => Some(PlayerAction::PowerAttack),
                Choice::Option(2) => self.skill_menu(view)?,
                Choice::Option(3) => self.spell_menu(view)?,
                Choice::Option(4) => self.item_menu(view)?,
                Choice::Option(5) => self.stance_menu(view)?,
                Choice::Option(6) => Some(PlayerAction::Analyze),
                Choice::Option(_) => Some(PlayerAction::Flee),
                Choice::Back => None,
            };

            if let Some(action) = picked {
                return Ok(action);
            }
        }
    }

    fn skill_menu(&mut self, view: &CombatView<'_>) -> Result<Option<PlayerAction>, ProviderError> {
        let skills = view.skills();
        if skills.is_empty() {
            self.prompt.say("You don't know any skills.")?;
            return Ok(None);
        }

        let options: Vec<String> = skills
            .iter()
            .map(|(skill, cooldown)| match cooldown {
                0 => format!("{} (ready)", skill.name),
                turns => format!("{} (cooldown {})", skill.name, turns),
            })
            .collect();

        Ok(match self.prompt.choose("Skills:", &options, true)? {
            Choice::Option(index) => Some(PlayerAction::UseSkill(skills[index].0.id.clone())),
            Choice::Back => None,
        })
    }

    fn spell_menu(&mut self, view: &CombatView<'_>) -> Result<Option<PlayerAction>, ProviderError> {
        let spells = view.castable_spells();
        if spells.is_empty() {
            self.prompt.say("You have no spells you can cast right now.")?;
            return Ok(None);
        }

        let efficiency = view.combatant.magic_efficiency;
        let options: Vec<String> = spells
            .iter()
            .map(|spell| {
                format!(
                    "{} ({} mana) - {}",
                    spell.name,
                    spell.cost_for(efficiency),
                    spell.description
                )
            })
            .collect();

        loop {
            let spell = match self.prompt.choose("Spells:", &options, true)? {
                Choice::Option(index) => spells[index],
                Choice::Back => return Ok(None),
            };
            if let Some(target) = self.spell_target(spell)? {
                return Ok(Some(PlayerAction::CastSpell {
                    spell: spell.id.clone(),
                    target,
                }));
            }
        }
    }

    /// `Some(None)` when the spell needs no target, `None` when the player backed out.
    #[allow(clippy::option_option)]
    fn spell_target(
        &mut self,
        spell: &SpellDefinition,
    ) -> Result<Option<Option<Side>>, ProviderError> {
        if spell.target != SpellTarget::Any {
            return Ok(Some(None));
        }

        let options = ["The enemy".to_string(), "Yourself".to_string()];
        let title = format!("Cast {} on:", spell.name);
        Ok(match self.prompt.choose(&title, &options, true)? {
            Choice::Option(0) => Some(Some(Side::Enemy)),
            Choice::Option(_) => Some(Some(Side::Player)),
            Choice::Back => None,
        })
    }

    fn item_menu(&mut self, view: &CombatView<'_>) -> Result<Option<PlayerAction>, ProviderError> {
        let items = view.combat_items();
        if items.is_empty() {
            self.prompt.say("You have no items usable in combat.")?;
            return Ok(None);
        }

        let options: Vec<String> = items
            .iter()
            .map(|(item, count)| format!("{} x{}", item.name, count))
            .collect();

        Ok(match self.prompt.choose("Items:", &options, true)? {
            Choice::Option(index) => Some(PlayerAction::UseItem(items[index].0.id.clone())),
            Choice::Back => None,
        })
    }

    fn stance_menu(
        &mut self,
        view: &CombatView<'_>,
    ) -> Result<Option<PlayerAction>, ProviderError> {
        let stances: Vec<Stance> = Stance::all().collect();
        let table = &view.env.config().stances;
        let options: Vec<String> = stances
            .iter()
            .map(|stance| {
                let modifiers = table.modifiers(*stance);
                let current = if *stance == view.stance { " (current)" } else { "" };
                format!(
                    "{} (attack {:+}, defense {:+}){}",
                    stance, modifiers.attack, modifiers.defense, current
                )
            })
            .collect();

        Ok(match self.prompt.choose("Stance:", &options, true)? {
            Choice::Option(index) => Some(PlayerAction::ChangeStance(stances[index])),
            Choice::Back => None,
        })
    }
}

impl<R: BufRead, W: Write> ActionProvider for TerminalProvider<R, W> {
    fn provide_action(&mut self, view: &CombatView<'_>) -> Result<PlayerAction, ProviderError> {
        let action = self.main_menu(view)?;
        tracing::debug!(action = action.as_ref(), round = view.round, "player chose");
        Ok(action)
    }

    fn observe(&mut self, event: &CombatEvent) {
        if let Err(e) = self.prompt.say(event) {
            tracing::warn!("Failed to print combat event: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::io::Cursor;

    use combat_core::{
        Catalog, CombatConfig, CombatContext, CombatEnv, Combatant, EnemyId, EnemyTemplate,
        FixedRng, ItemDefinition, ItemEffect, ItemKind, SkillDefinition, SpellEffect,
    };

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_item(
                ItemDefinition::new(
                    "healing_salve_minor",
                    "Minor Healing Salve",
                    ItemKind::Consumable,
                )
                .usable_in_combat(vec![ItemEffect::HealHp(15)]),
            )
            .with_skill(SkillDefinition {
                id: "power_attack".into(),
                name: "Power Attack".into(),
                description: String::new(),
                cooldown: 2,
                damage_multiplier: 1.5,
                requires: None,
                stun: None,
            })
            .with_spell(SpellDefinition {
                id: "dispel_magic".into(),
                name: "Dispel Magic".into(),
                description: String::new(),
                target: SpellTarget::Any,
                mana_cost: 4,
                effect: SpellEffect::Dispel,
            })
            .with_spell(SpellDefinition {
                id: "firebolt".into(),
                name: "Firebolt".into(),
                description: String::new(),
                target: SpellTarget::Enemy,
                mana_cost: 3,
                effect: SpellEffect::Offense {
                    damage: 8,
                    secondary: None,
                },
            })
    }

    fn goblin() -> EnemyTemplate {
        EnemyTemplate {
            id: EnemyId::from("goblin_scout"),
            name: "Goblin Scout".into(),
            description: String::new(),
            health: 15,
            attack_min: 2,
            attack_max: 5,
            xp_value: 10,
            special_abilities: Vec::new(),
            loot_groups: Vec::new(),
            unique_loot: Vec::new(),
            loot_table: None,
            ai_traits: BTreeSet::new(),
        }
    }

    fn hero() -> Combatant {
        Combatant::new("Hero", 30, 10)
            .with_item("healing_salve_minor", 2)
            .with_spell("dispel_magic")
            .with_spell("firebolt")
            .with_skill("power_attack")
    }

    /// Runs one decision against a fresh combat with the given keystrokes.
    fn decide(input: &str) -> (Result<PlayerAction, ProviderError>, String) {
        let catalog = catalog();
        let config = CombatConfig::default();
        let rng = FixedRng(0);
        let env = CombatEnv::from_catalog(&catalog, &rng, &config);
        let mut combatant = hero();
        let ctx = CombatContext::new(env, &mut combatant, goblin().spawn());
        let view = CombatView::new(&ctx);

        let mut output = Vec::new();
        let result = {
            let mut provider = TerminalProvider::new(Cursor::new(input.to_string()), &mut output);
            provider.provide_action(&view)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn plain_attack() {
        let (action, text) = decide("1\n");
        assert_eq!(action.unwrap(), PlayerAction::Attack);
        assert!(text.contains("Hero  HP 30/30  MP 10/10  Momentum 0  Stance balanced"));
        assert!(text.contains("Power Attack (0/3 momentum)"));
    }

    #[test]
    fn back_from_sub_menu_returns_to_main_menu() {
        let (action, _) = decide("3\n0\n8\n");
        assert_eq!(action.unwrap(), PlayerAction::Flee);
    }

    #[test]
    fn skill_choice_shows_readiness() {
        let (action, text) = decide("3\n1\n");
        assert_eq!(action.unwrap(), PlayerAction::UseSkill("power_attack".into()));
        assert!(text.contains("Power Attack (ready)"));
    }

    #[test]
    fn any_target_spell_asks_for_side() {
        let (action, text) = decide("4\n1\n2\n");
        assert_eq!(
            action.unwrap(),
            PlayerAction::CastSpell {
                spell: "dispel_magic".into(),
                target: Some(Side::Player),
            }
        );
        assert!(text.contains("Cast Dispel Magic on:"));
    }

    #[test]
    fn backing_out_of_target_returns_to_spell_list() {
        let (action, _) = decide("4\n1\n0\n2\n");
        assert_eq!(
            action.unwrap(),
            PlayerAction::CastSpell {
                spell: "firebolt".into(),
                target: None,
            }
        );
    }

    #[test]
    fn items_are_grouped_with_counts() {
        let (action, text) = decide("5\n1\n");
        assert_eq!(action.unwrap(), PlayerAction::UseItem("healing_salve_minor".into()));
        assert!(text.contains("Minor Healing Salve x2"));
    }

    #[test]
    fn stance_menu_marks_current() {
        let (action, text) = decide("6\n2\n");
        assert_eq!(action.unwrap(), PlayerAction::ChangeStance(Stance::Aggressive));
        assert!(text.contains("balanced (attack +0, defense +0) (current)"));
        assert!(text.contains("aggressive (attack +2, defense -1)"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (action, _) = decide("3\n");
        assert_eq!(action.unwrap_err(), ProviderError::InputClosed);
    }

    #[test]
    fn observed_events_are_printed() {
        let mut output = Vec::new();
        {
            let mut provider = TerminalProvider::new(Cursor::new(String::new()), &mut output);
            provider.observe(&CombatEvent::FleeFailed);
        }
        assert_eq!(String::from_utf8(output).unwrap(), "You fail to escape!\n");
    }
}
