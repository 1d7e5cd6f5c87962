//! Error taxonomy for configuration operations
//!
//! The taxonomy is deliberately narrow:
//! - [`ActionError::NotFound`] - an action id was run without a registered handler
//! - [`ActionError::Host`] - a host capability call failed; the failure propagates
//!   to the caller unchanged
//! - [`ActionError::Failed`] - the handler's own logic failed
//!
//! A missing host precondition (for example no current page when a dock command
//! fires) is handled by silently returning, not by surfacing an error. No layer
//! here retries anything; transient-failure handling belongs to the handler that
//! owns the operation.

use thiserror::Error;

/// Opaque failure from a host capability call (export, file I/O, settings).
///
/// The host engine is a closed collaborator, so its failures carry no structure
/// we can act on - they are wrapped and passed through.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct HostError(#[from] anyhow::Error);

impl HostError {
    /// Build a host error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        HostError(anyhow::Error::msg(message.into()))
    }
}

/// Failure modes of [`ActionRegistry::run`](crate::actions::ActionRegistry::run).
#[derive(Debug, Error)]
pub enum ActionError {
    /// No handler is registered for the requested action id.
    #[error("no action registered for `{0}`")]
    NotFound(String),

    /// A host capability call made by the handler failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// The handler itself failed (bad arguments, handler-specific errors).
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl ActionError {
    /// Convenience for handler-side failures with a plain message.
    pub fn failed(message: impl Into<String>) -> Self {
        ActionError::Failed(anyhow::Error::msg(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let err = ActionError::NotFound("missing".to_string());
        assert_eq!(err.to_string(), "no action registered for `missing`");
    }

    #[test]
    fn host_error_passes_message_through() {
        let err: ActionError = HostError::msg("export rejected").into();
        assert_eq!(err.to_string(), "export rejected");
        assert!(matches!(err, ActionError::Host(_)));
    }
}
