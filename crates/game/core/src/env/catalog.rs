//! In-memory record store backing every oracle.
//!
//! The content crate fills a [`Catalog`] from data files; tests build one by
//! hand with the `with_*` builders.
use std::collections::BTreeMap;

use super::{
    EnemyOracle, ItemDefinition, ItemOracle, LootOracle, SkillDefinition, SkillOracle,
    SpellDefinition, SpellOracle,
};
use crate::state::{EnemyId, EnemyTemplate, ItemId, LootEntry, LootGroupId, SkillId, SpellId};

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: BTreeMap<ItemId, ItemDefinition>,
    spells: BTreeMap<SpellId, SpellDefinition>,
    skills: BTreeMap<SkillId, SkillDefinition>,
    loot_groups: BTreeMap<LootGroupId, Vec<LootEntry>>,
    enemies: BTreeMap<EnemyId, EnemyTemplate>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_item(&mut self, item: ItemDefinition) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn insert_spell(&mut self, spell: SpellDefinition) {
        self.spells.insert(spell.id.clone(), spell);
    }

    pub fn insert_skill(&mut self, skill: SkillDefinition) {
        self.skills.insert(skill.id.clone(), skill);
    }

    pub fn insert_loot_group(&mut self, id: LootGroupId, entries: Vec<LootEntry>) {
        self.loot_groups.insert(id, entries);
    }

    pub fn insert_enemy(&mut self, enemy: EnemyTemplate) {
        self.enemies.insert(enemy.id.clone(), enemy);
    }

    pub fn with_item(mut self, item: ItemDefinition) -> Self {
        self.insert_item(item);
        self
    }

    pub fn with_spell(mut self, spell: SpellDefinition) -> Self {
        self.insert_spell(spell);
        self
    }

    pub fn with_skill(mut self, skill: SkillDefinition) -> Self {
        self.insert_skill(skill);
        self
    }

    pub fn with_loot_group(mut self, id: impl Into<LootGroupId>, entries: Vec<LootEntry>) -> Self {
        self.insert_loot_group(id.into(), entries);
        self
    }

    pub fn with_enemy(mut self, enemy: EnemyTemplate) -> Self {
        self.insert_enemy(enemy);
        self
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    pub fn spells(&self) -> impl Iterator<Item = &SpellDefinition> {
        self.spells.values()
    }

    pub fn skills(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.values()
    }

    pub fn enemies(&self) -> impl Iterator<Item = &EnemyTemplate> {
        self.enemies.values()
    }

    pub fn loot_group_ids(&self) -> impl Iterator<Item = &LootGroupId> {
        self.loot_groups.keys()
    }
}

impl ItemOracle for Catalog {
    fn item(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.get(id)
    }
}

impl SpellOracle for Catalog {
    fn spell(&self, id: &SpellId) -> Option<&SpellDefinition> {
        self.spells.get(id)
    }
}

impl SkillOracle for Catalog {
    fn skill(&self, id: &SkillId) -> Option<&SkillDefinition> {
        self.skills.get(id)
    }
}

impl LootOracle for Catalog {
    fn loot_group(&self, id: &LootGroupId) -> Option<&[LootEntry]> {
        self.loot_groups.get(id).map(Vec::as_slice)
    }
}

impl EnemyOracle for Catalog {
    fn template(&self, id: &EnemyId) -> Option<&EnemyTemplate> {
        self.enemies.get(id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::env::{ItemKind, OracleError};

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
            loot_groups: vec![LootGroupId::from("goblin_common_junk")],
            unique_loot: Vec::new(),
            loot_table: None,
            ai_traits: BTreeSet::new(),
        }
    }

    #[test]
    fn lookups_by_id() {
        let catalog = Catalog::new()
            .with_item(ItemDefinition::new(
                "pebble_shiny",
                "Shiny Pebble",
                ItemKind::Misc("junk".into()),
            ))
            .with_loot_group("goblin_common_junk", vec![LootEntry::new("pebble_shiny", 0.8)])
            .with_enemy(goblin());

        assert!(catalog.item(&ItemId::from("pebble_shiny")).is_some());
        assert_eq!(
            catalog
                .loot_group(&LootGroupId::from("goblin_common_junk"))
                .map(<[LootEntry]>::len),
            Some(1)
        );
        assert!(catalog.spell(&SpellId::from("firebolt")).is_none());
    }

    #[test]
    fn spawn_enemy_reports_missing_template() {
        let catalog = Catalog::new().with_enemy(goblin());
        let enemy = catalog.spawn_enemy(&EnemyId::from("goblin_scout")).unwrap();
        assert_eq!(enemy.health, 15);

        let missing = catalog.spawn_enemy(&EnemyId::from("dragon"));
        assert!(matches!(missing, Err(OracleError::EnemyNotFound(_))));
    }
}
