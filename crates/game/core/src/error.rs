//! Common error infrastructure for phrase-core.
//!
//! Domain-specific errors (`GuessError`, `PurchaseError`, ...) live beside the
//! operations that produce them. None of them is fatal: every engine entry
//! point rejects an invalid intent and leaves state untouched, and the host
//! decides whether to surface the rejection.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same intent may succeed later (e.g. after earning money)
/// - **Validation**: the intent is invalid as issued and should not be retried unchanged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed once the session state changes.
    ///
    /// Examples: insufficient funds, prerequisite not yet owned
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: non-letter guess, letter already guessed, unknown catalog id
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all phrase-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Give every variant a stable `error_code` for hosts and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
