//! Policies for the edge cases the open/closed bookkeeping leaves to its
//! owner: [`FrontierConfig`].

/// What [`FrontierState::admit_open`](crate::FrontierState::admit_open) does
/// with a candidate whose coordinate is already closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClosedAdmission {
    /// Refuse the candidate. Closed coordinates stay final.
    #[default]
    Reject,
    /// Move the coordinate back to open if the candidate is strictly cheaper
    /// than the node it was closed with (or it was closed without one).
    /// Needed for inconsistent heuristics.
    Reopen,
}

/// What [`FrontierState::close_coordinate`](crate::FrontierState::close_coordinate)
/// does with a coordinate that is not open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClosePolicy {
    /// Record the coordinate as closed with no node attached.
    #[default]
    Lenient,
    /// Fail with [`FrontierError::NotOpen`](crate::FrontierError::NotOpen)
    /// and leave the state untouched.
    Strict,
}

/// Configuration for a [`FrontierState`](crate::FrontierState) and the
/// [`AstarSearch`](crate::AstarSearch) driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrontierConfig {
    pub closed_admission: ClosedAdmission,
    pub close_policy: ClosePolicy,
    /// Stop the driver after this many expansions. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl FrontierConfig {
    pub fn with_closed_admission(mut self, policy: ClosedAdmission) -> Self {
        self.closed_admission = policy;
        self
    }

    pub fn with_close_policy(mut self, policy: ClosePolicy) -> Self {
        self.close_policy = policy;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = FrontierConfig::default()
            .with_close_policy(ClosePolicy::Strict)
            .with_max_expansions(500);
        let json = serde_json::to_string(&c).unwrap();
        let back: FrontierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let c: FrontierConfig = serde_json::from_str(r#"{"max_expansions":3}"#).unwrap();
        assert_eq!(c, FrontierConfig::default().with_max_expansions(3));
    }
}
