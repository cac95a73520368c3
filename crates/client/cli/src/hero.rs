//! Starting character for a one-off encounter.
use combat_core::Combatant;

pub const STARTING_HEALTH: u32 = 30;
pub const STARTING_MANA: u32 = 15;

/// A level-1 character with a basic kit and one of every kind of action.
pub fn starter(name: &str) -> Combatant {
    Combatant::new(name, STARTING_HEALTH, STARTING_MANA)
        .with_weapon("rusty_dagger")
        .with_armor("leather_scraps")
        .with_shield("wooden_shield_round")
        .with_item("healing_potion_lesser", 2)
        .with_item("herbal_poultice", 1)
        .with_item("fire_flask", 1)
        .with_item("smoke_bomb", 1)
        .with_spell("firebolt")
        .with_spell("minor_heal")
        .with_spell("arcane_shield")
        .with_skill("power_attack")
        .with_skill("shield_bash")
}

#[cfg(test)]
mod tests {
    use combat_content::{Content, dangling_references};
    use combat_core::env::{ItemOracle, SkillOracle, SpellOracle};

    use super::*;

    #[test]
    fn starter_kit_exists_in_bundled_content() {
        let content = Content::bundled().unwrap();
        assert!(dangling_references(&content.catalog).is_empty());

        let hero = starter("Tester");
        let items = hero
            .inventory
            .iter()
            .chain(&hero.equipped_weapon)
            .chain(&hero.equipped_armor)
            .chain(&hero.equipped_shield);
        for item in items {
            assert!(content.catalog.item(item).is_some(), "missing item {item}");
        }
        for spell in &hero.known_spells {
            assert!(content.catalog.spell(spell).is_some(), "missing spell {spell}");
        }
        for skill in &hero.known_skills {
            assert!(content.catalog.skill(skill).is_some(), "missing skill {skill}");
        }
    }
}
