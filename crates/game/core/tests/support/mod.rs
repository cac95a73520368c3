#![allow(dead_code)]

use std::collections::BTreeSet;

use combat_core::{
    Catalog, CombatConfig, CombatEnv, Combatant, EnemyId, EnemyTemplate, EquipmentSlot,
    ItemDefinition, ItemEffect, ItemKind, LootEntry, RngOracle, SkillDefinition, SpecialAbility,
    SpellDefinition, SpellEffect, SpellTarget, StunEffect,
};

pub const JUNK: [&str; 2] = ["bent_nail", "torn_rag"];
pub const CRUDE_WEAPONS: [&str; 2] = ["rusty_dagger", "crude_club"];

fn weapon(id: &str, name: &str, damage_bonus: u32) -> ItemDefinition {
    ItemDefinition::new(id, name, ItemKind::Weapon { damage_bonus })
}

fn junk(id: &str, name: &str) -> ItemDefinition {
    ItemDefinition::new(id, name, ItemKind::Misc("junk".into()))
}

pub fn goblin_scout() -> EnemyTemplate {
    EnemyTemplate {
        id: EnemyId::from("goblin_scout"),
        name: "Goblin Scout".into(),
        description: "A wiry goblin with a sharp eye.".into(),
        health: 15,
        attack_min: 2,
        attack_max: 5,
        xp_value: 10,
        special_abilities: Vec::new(),
        loot_groups: vec!["goblin_common_junk".into(), "goblin_weaponry_crude".into()],
        unique_loot: vec![LootEntry::new("spear_common", 0.25)],
        loot_table: None,
        ai_traits: BTreeSet::new(),
    }
}

/// Plain brawler: no abilities, no loot.
pub fn brawler(health: u32, attack_min: u32, attack_max: u32) -> EnemyTemplate {
    EnemyTemplate {
        id: EnemyId::from("brawler"),
        name: "Brawler".into(),
        description: String::new(),
        health,
        attack_min,
        attack_max,
        xp_value: 0,
        special_abilities: Vec::new(),
        loot_groups: Vec::new(),
        unique_loot: Vec::new(),
        loot_table: None,
        ai_traits: BTreeSet::new(),
    }
}

pub fn crushing_blow() -> SpecialAbility {
    SpecialAbility {
        id: "crushing_blow".into(),
        name: "Crushing Blow".into(),
        damage_multiplier: 2.0,
        cooldown: 3,
        current_cooldown: 0,
        chance: 1.0,
        stun: Some(StunEffect {
            chance: 1.0,
            duration: 1,
        }),
        description: String::new(),
    }
}

pub fn catalog() -> Catalog {
    Catalog::new()
        .with_item(weapon("rusty_dagger", "Rusty Dagger", 2))
        .with_item(weapon("crude_club", "Crude Club", 3))
        .with_item(weapon("spear_common", "Common Spear", 3))
        .with_item(junk("bent_nail", "Bent Nail"))
        .with_item(junk("torn_rag", "Torn Rag"))
        .with_item(ItemDefinition::new(
            "wooden_shield",
            "Wooden Shield",
            ItemKind::Shield { defense_bonus: 1 },
        ))
        .with_item(
            ItemDefinition::new("health_potion", "Health Potion", ItemKind::Consumable)
                .usable_in_combat(vec![ItemEffect::HealHp(10)]),
        )
        .with_item(
            ItemDefinition::new("smoke_bomb", "Smoke Bomb", ItemKind::Consumable)
                .usable_in_combat(vec![ItemEffect::Escape(0.5)]),
        )
        .with_item(
            ItemDefinition::new("odd_charm", "Odd Charm", ItemKind::Consumable)
                .usable_in_combat(vec![ItemEffect::Inert("luck".into())]),
        )
        .with_loot_group(
            "goblin_common_junk",
            JUNK.iter().map(|id| LootEntry::new(*id, 0.5)).collect(),
        )
        .with_loot_group(
            "goblin_weaponry_crude",
            CRUDE_WEAPONS.iter().map(|id| LootEntry::new(*id, 0.2)).collect(),
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
        .with_skill(SkillDefinition {
            id: "shield_bash".into(),
            name: "Shield Bash".into(),
            description: String::new(),
            cooldown: 3,
            damage_multiplier: 0.5,
            requires: Some(EquipmentSlot::Shield),
            stun: Some(StunEffect {
                chance: 0.3,
                duration: 1,
            }),
        })
        .with_spell(SpellDefinition {
            id: "mend".into(),
            name: "Mend".into(),
            description: String::new(),
            target: SpellTarget::Caster,
            mana_cost: 3,
            effect: SpellEffect::Heal { amount: 8 },
        })
        .with_spell(SpellDefinition {
            id: "firebolt".into(),
            name: "Firebolt".into(),
            description: String::new(),
            target: SpellTarget::Enemy,
            mana_cost: 5,
            effect: SpellEffect::Offense {
                damage: 8,
                secondary: None,
            },
        })
        .with_enemy(goblin_scout())
}

pub fn hero() -> Combatant {
    Combatant::new("Hero", 30, 10)
}

pub fn env<'a>(
    catalog: &'a Catalog,
    rng: &'a dyn RngOracle,
    config: &'a CombatConfig,
    seed: u64,
) -> CombatEnv<'a> {
    CombatEnv::from_catalog(catalog, rng, config).with_seed(seed)
}
