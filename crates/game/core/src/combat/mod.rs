//! Combat resolution building blocks.
//!
//! - [`CombatContext`]: the live state an action resolves against
//! - [`damage`]: attack, defense, crit and flee formulas
//! - [`status`]: the turn-start status pass
//! - [`loot`] / [`progression`]: what a victory pays out
pub mod damage;
pub mod loot;
pub mod progression;
pub mod status;

mod context;

pub use context::{CombatContext, SideState};
pub use damage::{crit_chance, flee_chance, mitigate, scale};
pub use loot::{LootReport, resolve_loot};
pub use progression::{LevelUp, ProgressionReport, award_victory, grant_experience};
pub use status::tick_statuses;
