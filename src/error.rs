//! Crate error type
//!
//! The simulation step itself never fails; errors only come from building
//! entities with bad arguments or loading configuration.

/// Errors raised at construction/configuration time
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid size {width}x{height}: dimensions must be positive and finite")]
    InvalidSize { width: f32, height: f32 },

    #[error("unknown platform kind tag {0} (expected 0..=3)")]
    UnknownPlatformKind(u8),

    #[error("invalid tuning value for `{field}`: {reason}")]
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
