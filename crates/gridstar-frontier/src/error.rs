use std::fmt;

use gridstar_core::Coordinate;

/// Errors raised by [`FrontierState`](crate::FrontierState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontierError {
    /// A required argument was missing at construction time.
    InvalidArgument(&'static str),
    /// A strict close was asked for a coordinate that is not open.
    NotOpen(Coordinate),
}

impl fmt::Display for FrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "frontier: invalid argument: {what}"),
            Self::NotOpen(loc) => write!(f, "frontier: cannot close {loc}, it is not open"),
        }
    }
}

impl std::error::Error for FrontierError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            FrontierError::InvalidArgument("grid cannot be absent").to_string(),
            "frontier: invalid argument: grid cannot be absent"
        );
        assert_eq!(
            FrontierError::NotOpen(Coordinate::new(2, 3)).to_string(),
            "frontier: cannot close (2, 3), it is not open"
        );
    }
}
