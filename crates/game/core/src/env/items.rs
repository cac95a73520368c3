use crate::state::ItemId;

pub trait ItemOracle: Send + Sync {
    fn item(&self, id: &ItemId) -> Option<&ItemDefinition>;
}

/// Item record with common fields and type-specific data.
///
/// - `kind` carries equipment bonuses
/// - `effects` is what happens when the item is used in combat
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_usable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<ItemEffect>,
}

impl ItemDefinition {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            combat_usable: false,
            effects: Vec::new(),
        }
    }

    pub fn usable_in_combat(mut self, effects: Vec<ItemEffect>) -> Self {
        self.combat_usable = true;
        self.effects = effects;
        self
    }

    /// Only flagged items with at least one effect entry show up in the item menu.
    pub fn is_offered_in_combat(&self) -> bool {
        self.combat_usable && !self.effects.is_empty()
    }

    /// Damage added to attacks when wielded. Zero unless this is a weapon.
    pub fn damage_bonus(&self) -> u32 {
        match self.kind {
            ItemKind::Weapon { damage_bonus } => damage_bonus,
            _ => 0,
        }
    }

    /// Defense granted in the armor slot. Zero on a kind mismatch.
    pub fn defense_bonus_as_armor(&self) -> u32 {
        match self.kind {
            ItemKind::Armor { defense_bonus } => defense_bonus,
            _ => 0,
        }
    }

    pub fn defense_bonus_as_shield(&self) -> u32 {
        match self.kind {
            ItemKind::Shield { defense_bonus } => defense_bonus,
            _ => 0,
        }
    }
}

/// Item category with type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon { damage_bonus: u32 },
    Armor { defense_bonus: u32 },
    Shield { defense_bonus: u32 },
    Consumable,
    /// Anything else (junk, materials, books, quest items).
    Misc(String),
}

/// Recognized combat effect of an item.
///
/// Unrecognized keys from older records are kept as [`ItemEffect::Inert`]:
/// using such an item still costs the turn and the unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    HealHp(u32),
    RestoreMana(u32),
    Damage { amount: u32, ignore_armor: bool },
    /// Chance of ending the combat as fled.
    Escape(f64),
    BuffAttack { magnitude: u32, duration: u32 },
    BuffDefense { magnitude: u32, duration: u32 },
    DebuffDefense { magnitude: u32, duration: u32 },
    SpellPower { magnitude: u32, duration: u32 },
    Inert(String),
}

impl ItemEffect {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Inert(_))
    }
}
