//! Error type shared by point sets, selection, and graph builders.

use std::fmt;

/// Failure reported synchronously by every fallible operation in the crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Caller supplied an input outside the operation's domain
    /// (empty set, out-of-range `k` or axis, non-positive epsilon, ragged rows).
    InvalidArgument { reason: String },
    /// The requested combination exists as a named variant but is not implemented
    /// (projective space, approximate/randomized/landmarking strategies).
    NotSupported { reason: String },
}

impl GraphError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::NotSupported {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    #[inline]
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported { .. })
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::NotSupported { reason } => write!(f, "not supported: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_kind() {
        let e = GraphError::invalid("epsilon must be positive");
        assert_eq!(e.to_string(), "invalid argument: epsilon must be positive");
        assert!(e.is_invalid_argument());
        let u = GraphError::unsupported("projective space");
        assert_eq!(u.to_string(), "not supported: projective space");
        assert!(u.is_not_supported());
    }
}
