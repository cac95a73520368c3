//! Catalog lookup errors.
//!
//! During a combat, missing records are skipped rather than raised. These
//! errors only surface from explicit lookups made outside the turn loop,
//! such as spawning an enemy by id.
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EnemyId, ItemId, LootGroupId, SkillId, SpellId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("item '{0}' not found")]
    ItemNotFound(ItemId),

    #[error("spell '{0}' not found")]
    SpellNotFound(SpellId),

    #[error("skill '{0}' not found")]
    SkillNotFound(SkillId),

    #[error("loot group '{0}' not found")]
    LootGroupNotFound(LootGroupId),

    #[error("enemy template '{0}' not found")]
    EnemyNotFound(EnemyId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Records referenced from other records: broken content.
            LootGroupNotFound(_) => ErrorSeverity::Internal,
            ItemNotFound(_) | SpellNotFound(_) | SkillNotFound(_) | EnemyNotFound(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            SpellNotFound(_) => "ORACLE_SPELL_NOT_FOUND",
            SkillNotFound(_) => "ORACLE_SKILL_NOT_FOUND",
            LootGroupNotFound(_) => "ORACLE_LOOT_GROUP_NOT_FOUND",
            EnemyNotFound(_) => "ORACLE_ENEMY_NOT_FOUND",
        }
    }
}
