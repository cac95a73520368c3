//! Victory drops.
//!
//! Three sources are rolled independently and their results concatenated:
//! the shared loot groups named by the enemy, the enemy's own unique table,
//! and the legacy `loot_table` (a flat list grants everything, a list of
//! entries is rolled like the others). Missing records are skipped.
use tracing::info;

use crate::engine::CombatEvent;
use crate::env::Roll;
use crate::state::{ItemId, LegacyLootTable, LootEntry, Side};

use super::CombatContext;

/// Items granted by one loot pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LootReport {
    pub items: Vec<ItemId>,
    /// Display names, parallel to `items`.
    pub names: Vec<String>,
    /// Rolled successfully but missing from the item records.
    pub skipped: Vec<ItemId>,
}

impl LootReport {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Returns true when a draw in `[0, 1]` lands at or under `chance`.
pub fn entry_drops(roll: f64, chance: f64) -> bool {
    roll <= chance
}

/// Rolls every loot source of the defeated enemy and appends the drops to the
/// player's inventory.
pub fn resolve_loot(ctx: &mut CombatContext<'_>) -> LootReport {
    let mut report = LootReport::default();
    let loot = ctx.env.loot();

    for group in ctx.enemy.loot_groups.clone() {
        match loot.loot_group(&group) {
            Some(entries) => {
                for entry in entries {
                    roll_entry(ctx, entry, &mut report);
                }
            }
            None => ctx.diagnostic(format!("loot group '{group}' not found")),
        }
    }

    for entry in ctx.enemy.unique_loot.clone() {
        roll_entry(ctx, &entry, &mut report);
    }

    match ctx.enemy.loot_table.clone() {
        Some(LegacyLootTable::Guaranteed(items)) => {
            ctx.diagnostic(format!(
                "enemy '{}' still uses a flat loot_table; every entry drops",
                ctx.enemy.template
            ));
            for item in items {
                grant(ctx, item, &mut report);
            }
        }
        Some(LegacyLootTable::Weighted(entries)) => {
            for entry in &entries {
                roll_entry(ctx, entry, &mut report);
            }
        }
        None => {}
    }

    if report.is_empty() {
        ctx.emit(CombatEvent::NothingOfInterest);
    } else {
        info!(items = ?report.items, "loot granted");
        ctx.emit(CombatEvent::LootGranted {
            items: report.names.clone(),
        });
    }
    report
}

fn roll_entry(ctx: &mut CombatContext<'_>, entry: &LootEntry, report: &mut LootReport) {
    let roll = ctx.dice.unit(Side::Player, Roll::Loot);
    if entry_drops(roll, entry.chance) {
        grant(ctx, entry.item_id.clone(), report);
    }
}

fn grant(ctx: &mut CombatContext<'_>, item: ItemId, report: &mut LootReport) {
    match ctx.env.items().item(&item) {
        Some(definition) => {
            report.names.push(definition.name.clone());
            ctx.combatant.inventory.push(item.clone());
            report.items.push(item);
        }
        None => {
            ctx.diagnostic(format!("loot item '{item}' not found"));
            report.skipped.push(item);
        }
    }
}
