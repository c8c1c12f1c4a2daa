//! Common error types used across the workspace.
//!
//! Runtime command and registry operations signal failure through booleans
//! (or `Option` for lookups) — those paths never surface an error type.
//! `Result` appears only at construction time (invariant validation) and at
//! serialization boundaries.

/// Top-level error for fallible domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum HomeCtlError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// Serializing a status record failed.
    #[error("status serialization failed")]
    Serialize(#[from] serde_json::Error),
}

/// Violations of domain invariants, raised when building devices.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The device id must be a non-empty string.
    #[error("device id must not be empty")]
    EmptyDeviceId,
    /// The device name must be a non-empty string.
    #[error("device name must not be empty")]
    EmptyName,
    /// A device cannot be built without a kind.
    #[error("device kind must be provided")]
    MissingKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_homectl_error() {
        let err: HomeCtlError = ValidationError::EmptyDeviceId.into();
        assert!(matches!(
            err,
            HomeCtlError::Validation(ValidationError::EmptyDeviceId)
        ));
    }

    #[test]
    fn should_display_human_readable_message() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "device name must not be empty"
        );
    }
}
