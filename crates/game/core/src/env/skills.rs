use crate::state::{EquipmentSlot, SkillId, StunEffect};

pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: &SkillId) -> Option<&SkillDefinition>;
}

/// Cooldown-gated player ability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Turns the skill stays unavailable after use.
    pub cooldown: u32,
    /// Applied to the base attack power.
    pub damage_multiplier: f64,
    /// Slot that must hold an item for the skill to be usable.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires: Option<EquipmentSlot>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stun: Option<StunEffect>,
}
