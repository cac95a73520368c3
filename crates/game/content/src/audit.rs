//! Cross-record reference checks.
//!
//! The engine skips missing items and loot groups during a combat. Running
//! this after loading surfaces the same gaps up front.
use std::fmt;

use combat_core::env::{ItemOracle, LootOracle};
use combat_core::{Catalog, ItemId, LegacyLootTable, LootGroupId};

/// A record naming another record the catalog does not contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingReference {
    /// Record holding the reference, e.g. `enemy goblin_scout`.
    pub owner: String,
    pub missing: MissingRecord,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissingRecord {
    Item(ItemId),
    LootGroup(LootGroupId),
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.missing {
            MissingRecord::Item(id) => write!(f, "{} references unknown item '{}'", self.owner, id),
            MissingRecord::LootGroup(id) => {
                write!(f, "{} references unknown loot group '{}'", self.owner, id)
            }
        }
    }
}

/// Lists every reference from enemies and loot groups that resolves to nothing.
pub fn dangling_references(catalog: &Catalog) -> Vec<DanglingReference> {
    let mut found = Vec::new();
    let mut check_item = |owner: &str, id: &ItemId| {
        if catalog.item(id).is_none() {
            found.push(DanglingReference {
                owner: owner.to_string(),
                missing: MissingRecord::Item(id.clone()),
            });
        }
    };

    for group in catalog.loot_group_ids() {
        let owner = format!("loot group {}", group);
        for entry in catalog.loot_group(group).unwrap_or_default() {
            check_item(&owner, &entry.item_id);
        }
    }

    let mut missing_groups = Vec::new();
    for enemy in catalog.enemies() {
        let owner = format!("enemy {}", enemy.id);
        for entry in &enemy.unique_loot {
            check_item(&owner, &entry.item_id);
        }
        match &enemy.loot_table {
            Some(LegacyLootTable::Weighted(entries)) => {
                for entry in entries {
                    check_item(&owner, &entry.item_id);
                }
            }
            Some(LegacyLootTable::Guaranteed(items)) => {
                for id in items {
                    check_item(&owner, id);
                }
            }
            None => {}
        }
        for group in &enemy.loot_groups {
            if catalog.loot_group(group).is_none() {
                missing_groups.push(DanglingReference {
                    owner: owner.clone(),
                    missing: MissingRecord::LootGroup(group.clone()),
                });
            }
        }
    }

    found.extend(missing_groups);
    found
}
