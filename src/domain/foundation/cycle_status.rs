//! CycleStatus enum for the five-stage scholarship cycle lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a scholarship cycle.
///
/// Cycles progress `Configuration -> ApplicationsOpen -> ApplicationsClosed
/// -> Active -> Closed`, with one escape valve: `ApplicationsClosed ->
/// ApplicationsOpen` (reopen). Closed is terminal; a closed cycle is a
/// read-only historical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    #[default]
    Configuration,
    ApplicationsOpen,
    ApplicationsClosed,
    Active,
    Closed,
}

impl CycleStatus {
    /// Returns true if the cycle can still be modified.
    pub fn is_modifiable(&self) -> bool {
        !matches!(self, CycleStatus::Closed)
    }

    /// Returns true if candidates may currently apply.
    pub fn accepts_applications(&self) -> bool {
        matches!(self, CycleStatus::ApplicationsOpen)
    }

    /// Returns true if the cycle is in its operational (scholars working) phase.
    pub fn is_operational(&self) -> bool {
        matches!(self, CycleStatus::Active)
    }

    /// Returns true if the cycle has been closed out.
    pub fn is_closed(&self) -> bool {
        matches!(self, CycleStatus::Closed)
    }

    /// Validates a transition from this status to another.
    pub fn can_transition_to(&self, target: &CycleStatus) -> bool {
        use CycleStatus::*;
        matches!(
            (self, target),
            (Configuration, ApplicationsOpen)
                | (ApplicationsOpen, ApplicationsClosed)
                | (ApplicationsClosed, ApplicationsOpen)
                | (ApplicationsClosed, Active)
                | (Active, Closed)
        )
    }

    /// Returns all valid target states from the current state.
    pub fn valid_transitions(&self) -> Vec<CycleStatus> {
        use CycleStatus::*;
        match self {
            Configuration => vec![ApplicationsOpen],
            ApplicationsOpen => vec![ApplicationsClosed],
            ApplicationsClosed => vec![ApplicationsOpen, Active],
            Active => vec![Closed],
            Closed => vec![],
        }
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CycleStatus::Configuration => "Configuration",
            CycleStatus::ApplicationsOpen => "ApplicationsOpen",
            CycleStatus::ApplicationsClosed => "ApplicationsClosed",
            CycleStatus::Active => "Active",
            CycleStatus::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CycleStatus; 5] = [
        CycleStatus::Configuration,
        CycleStatus::ApplicationsOpen,
        CycleStatus::ApplicationsClosed,
        CycleStatus::Active,
        CycleStatus::Closed,
    ];

    #[test]
    fn default_is_configuration() {
        assert_eq!(CycleStatus::default(), CycleStatus::Configuration);
    }

    #[test]
    fn only_closed_is_not_modifiable() {
        for status in ALL {
            assert_eq!(status.is_modifiable(), status != CycleStatus::Closed);
        }
    }

    #[test]
    fn only_applications_open_accepts_applications() {
        for status in ALL {
            assert_eq!(
                status.accepts_applications(),
                status == CycleStatus::ApplicationsOpen
            );
        }
    }

    #[test]
    fn only_active_is_operational() {
        for status in ALL {
            assert_eq!(status.is_operational(), status == CycleStatus::Active);
        }
    }

    #[test]
    fn transition_matrix_is_exact() {
        let allowed = [
            (CycleStatus::Configuration, CycleStatus::ApplicationsOpen),
            (CycleStatus::ApplicationsOpen, CycleStatus::ApplicationsClosed),
            (CycleStatus::ApplicationsClosed, CycleStatus::ApplicationsOpen),
            (CycleStatus::ApplicationsClosed, CycleStatus::Active),
            (CycleStatus::Active, CycleStatus::Closed),
        ];

        for from in ALL {
            for to in ALL {
                let expected = allowed.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(&to),
                    expected,
                    "transition {:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn closed_has_no_outgoing_transitions() {
        assert!(CycleStatus::Closed.valid_transitions().is_empty());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in ALL {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&CycleStatus::ApplicationsOpen).unwrap(),
            "\"applications_open\""
        );
        assert_eq!(
            serde_json::to_string(&CycleStatus::Configuration).unwrap(),
            "\"configuration\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let status: CycleStatus = serde_json::from_str("\"applications_closed\"").unwrap();
        assert_eq!(status, CycleStatus::ApplicationsClosed);
    }
}
