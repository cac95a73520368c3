use crate::state::{LootEntry, LootGroupId};

/// Shared drop tables referenced by enemy templates.
pub trait LootOracle: Send + Sync {
    fn loot_group(&self, id: &LootGroupId) -> Option<&[LootEntry]>;
}
