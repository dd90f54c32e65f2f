#![forbid(unsafe_code)]

//! Error types.
//!
//! Gesture handling itself never fails: inconsistencies are downgraded to a
//! cancelled gesture. Errors exist only where a caller can act on them
//! (configuration) or where a surface reports capture plumbing failures that
//! the controller tolerates and logs.

/// Errors that can occur when loading or validating a [`crate::ReorderConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// One entry per violated constraint.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Pointer-capture failures reported by a [`crate::Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// The pointer is not (or no longer) captured by this surface.
    #[error("pointer {pointer_id} is not captured")]
    NotCaptured { pointer_id: u32 },
    /// The surface revoked capture before the release request.
    #[error("capture for pointer {pointer_id} was already lost")]
    Lost { pointer_id: u32 },
    /// The target item cannot take capture (e.g. it was unmounted).
    #[error("item {index} cannot capture pointer {pointer_id}")]
    Unavailable { index: usize, pointer_id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_joins_entries() {
        let err = ConfigError::Validation(vec!["a must be > 0".into(), "b must be > 0".into()]);
        assert_eq!(err.to_string(), "validation errors: a must be > 0; b must be > 0");
    }

    #[test]
    fn capture_error_display() {
        let err = CaptureError::Unavailable {
            index: 3,
            pointer_id: 7,
        };
        assert_eq!(err.to_string(), "item 3 cannot capture pointer 7");
        assert_eq!(
            CaptureError::Lost { pointer_id: 1 }.to_string(),
            "capture for pointer 1 was already lost"
        );
    }
}
