//! Guarded branches that send the player back to the action menu.
//!
//! A rejection never consumes the turn and never changes state.
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EquipmentSlot, ItemId, SkillId, SpellId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionRejection {
    #[error("not enough momentum (need {required}, have {available})")]
    NotEnoughMomentum { required: u32, available: u32 },

    #[error("skill '{0}' is not known")]
    UnknownSkill(SkillId),

    #[error("skill '{skill}' is on cooldown for {turns} more turn(s)")]
    SkillOnCooldown { skill: SkillId, turns: u32 },

    #[error("skill '{skill}' requires an equipped {slot}")]
    MissingEquipment { skill: SkillId, slot: EquipmentSlot },

    #[error("no known spell can be cast with the current mana")]
    NoCastableSpell,

    #[error("spell '{0}' is not known")]
    UnknownSpell(SpellId),

    #[error("spell '{spell}' costs {cost} mana (have {available})")]
    InsufficientMana {
        spell: SpellId,
        cost: u32,
        available: u32,
    },

    #[error("no item usable in combat")]
    NoUsableItem,

    #[error("item '{0}' is not in the inventory")]
    ItemNotHeld(ItemId),

    #[error("item '{0}' cannot be used in combat")]
    ItemNotUsable(ItemId),
}

impl GameError for ActionRejection {
    fn severity(&self) -> ErrorSeverity {
        use ActionRejection::*;
        match self {
            NotEnoughMomentum { .. } | SkillOnCooldown { .. } | InsufficientMana { .. } => {
                ErrorSeverity::Recoverable
            }
            UnknownSkill(_)
            | MissingEquipment { .. }
            | NoCastableSpell
            | UnknownSpell(_)
            | NoUsableItem
            | ItemNotHeld(_)
            | ItemNotUsable(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionRejection::*;
        match self {
            NotEnoughMomentum { .. } => "ACTION_NOT_ENOUGH_MOMENTUM",
            UnknownSkill(_) => "ACTION_UNKNOWN_SKILL",
            SkillOnCooldown { .. } => "ACTION_SKILL_ON_COOLDOWN",
            MissingEquipment { .. } => "ACTION_MISSING_EQUIPMENT",
            NoCastableSpell => "ACTION_NO_CASTABLE_SPELL",
            UnknownSpell(_) => "ACTION_UNKNOWN_SPELL",
            InsufficientMana { .. } => "ACTION_INSUFFICIENT_MANA",
            NoUsableItem => "ACTION_NO_USABLE_ITEM",
            ItemNotHeld(_) => "ACTION_ITEM_NOT_HELD",
            ItemNotUsable(_) => "ACTION_ITEM_NOT_USABLE",
        }
    }
}
