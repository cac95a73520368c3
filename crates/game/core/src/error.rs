//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (e.g. [`ActionRejection`](crate::action::ActionRejection),
//! [`OracleError`](crate::env::OracleError)) live next to the code that
//! produces them. They all implement [`GameError`] so callers can classify a
//! failure without matching on every variant.
//!
//! Expected control flow (insufficient mana, a skill on cooldown, an empty
//! item filter) is never an error that escapes the engine: those cases are
//! returned as rejections and the player is simply asked again.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed later (e.g. a cooldown expires)
/// - **Validation**: the request itself is wrong and must change
/// - **Internal**: an inconsistency in records or wiring that deserves a look
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Retry later or pick another action.
    ///
    /// Examples: skill on cooldown, not enough momentum
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown spell, item not held
    Validation,

    /// Unexpected inconsistency in the injected records.
    ///
    /// Examples: loot group referenced by an enemy but missing from the catalog
    Internal,

    /// Session cannot continue.
    ///
    /// Examples: the player input source is gone
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and assertions in tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
