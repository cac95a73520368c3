//! Timed modifiers attached to one side of a combat.
//!
//! Effects of the same kind stack additively; nothing is deduplicated by
//! name. Attack and defense modifiers are read by the resolver whenever they
//! are relevant, while damage/heal-over-time effects are applied by the tick
//! pass in [`crate::combat::status`].

/// Category of a status effect.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusKind {
    DamageOverTime,
    HealOverTime,
    BuffAttack,
    DebuffAttack,
    BuffDefense,
    DebuffDefense,
    TimeSlow,
    SpellPower,
}

impl StatusKind {
    /// Returns true for kinds that act at the owner's turn start.
    pub const fn ticks(self) -> bool {
        matches!(self, Self::DamageOverTime | Self::HealOverTime)
    }
}

/// A single timed modifier.
///
/// `magnitude` is always non-negative; the kind decides whether it helps or
/// hurts its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub name: String,
    pub kind: StatusKind,
    /// Turns left before the effect is removed.
    pub remaining: u32,
    pub magnitude: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl StatusEffect {
    pub fn new(name: impl Into<String>, kind: StatusKind, magnitude: u32, remaining: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            remaining,
            magnitude,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Active status effects on one side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: Vec<StatusEffect>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an effect. Effects with no remaining turns are dropped.
    ///
    /// Returns true if the effect was attached.
    pub fn add(&mut self, effect: StatusEffect) -> bool {
        if effect.remaining == 0 {
            return false;
        }
        self.effects.push(effect);
        true
    }

    /// Removes every effect, returning how many were cleared.
    pub fn clear(&mut self) -> usize {
        let count = self.effects.len();
        self.effects.clear();
        count
    }

    /// Sum of magnitudes of all active effects of `kind`.
    pub fn total(&self, kind: StatusKind) -> u32 {
        self.effects
            .iter()
            .filter(|effect| effect.kind == kind)
            .map(|effect| effect.magnitude)
            .sum()
    }

    pub fn count(&self, kind: StatusKind) -> u32 {
        self.effects.iter().filter(|effect| effect.kind == kind).count() as u32
    }

    pub fn has_named(&self, name: &str) -> bool {
        self.effects.iter().any(|effect| effect.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Takes every effect out, leaving the list empty. Used by the tick pass.
    pub(crate) fn drain(&mut self) -> Vec<StatusEffect> {
        std::mem::take(&mut self.effects)
    }
}
