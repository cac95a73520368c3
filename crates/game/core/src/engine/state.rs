//! Session states and terminal outcomes.

/// Where a combat session currently stands.
///
/// ```text
/// Active ──enemy at 0──▶ WonResolving ──loot + xp──▶ Won
///   │ ──player at 0──▶ Lost
///   │ ──escape──▶ Fled
///   └ ──input failed──▶ Error
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CombatState {
    #[default]
    Active,
    /// Enemy is down; rewards still have to be paid out.
    WonResolving,
    Won,
    Lost,
    Fled,
    Error,
}

impl CombatState {
    pub fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }

    /// The outcome this state ends the combat with, if it is terminal.
    pub fn outcome(self) -> Option<CombatOutcome> {
        match self {
            Self::Active | Self::WonResolving => None,
            Self::Won => Some(CombatOutcome::Won),
            Self::Lost => Some(CombatOutcome::Lost),
            Self::Fled => Some(CombatOutcome::Fled),
            Self::Error => Some(CombatOutcome::Error),
        }
    }
}

/// Result handed back to the caller: `won`, `lost`, `fled` or `error`.
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
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CombatOutcome {
    Won,
    Lost,
    Fled,
    Error,
}
