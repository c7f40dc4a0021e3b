/// Convenience result type used across Snapwall.
pub type SnapwallResult<T> = Result<T, SnapwallError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SnapwallError {
    /// Camera stream acquisition was refused.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// No frame or render surface was available at capture time.
    #[error("capture error: {0}")]
    Capture(String),

    /// Invalid user-provided data or a broken collection invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnapwallError {
    /// Build a [`SnapwallError::PermissionDenied`] value.
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    /// Build a [`SnapwallError::Capture`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build a [`SnapwallError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
