use crate::input::SurfaceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BounceError {
    /// A setter or event argument was rejected. Prior state is unchanged, so
    /// the caller may simply correct the value and retry.
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },
    /// An event referenced a different surface than the one this instance is
    /// bound to. One instance cannot track two surfaces; this is a usage
    /// error, not a runtime condition to recover from.
    IllegalBinding {
        bound: SurfaceId,
        offered: SurfaceId,
    },
}

impl std::fmt::Display for BounceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BounceError::InvalidArgument { field, reason } => {
                write!(f, "invalid {field}: {reason}")
            }
            BounceError::IllegalBinding { bound, offered } => {
                write!(
                    f,
                    "already bound to surface {bound}; got event for surface {offered}"
                )
            }
        }
    }
}

impl std::error::Error for BounceError {}
