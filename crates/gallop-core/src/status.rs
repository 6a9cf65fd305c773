//! Race lifecycle status and the primary race control

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level lifecycle state of a race engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RaceStatus {
    /// No schedule has been generated yet
    #[default]
    NotInitiated,
    /// A round is loaded and waiting to start
    NotStarted,
    /// The driver should be ticking
    InProgress,
    /// Every participant of the current round has finished
    Finished,
    /// Ticking suspended mid-round
    Paused,
}

impl RaceStatus {
    /// Whether the driver should keep calling `tick()`
    pub fn is_running(&self) -> bool {
        matches!(self, RaceStatus::InProgress)
    }

    /// Whether moving to `next` is one of the transitions callers are
    /// expected to request
    ///
    /// The engine does not enforce this; `set_status` assigns
    /// unconditionally.
    pub fn can_transition_to(&self, next: RaceStatus) -> bool {
        use RaceStatus::*;
        matches!(
            (self, next),
            (NotStarted, InProgress)
                | (Paused, InProgress)
                | (InProgress, Paused)
                | (InProgress, Finished)
                | (Finished, InProgress)
                | (_, NotStarted)
        )
    }

    /// Snake-case name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            RaceStatus::NotInitiated => "not_initiated",
            RaceStatus::NotStarted => "not_started",
            RaceStatus::InProgress => "in_progress",
            RaceStatus::Finished => "finished",
            RaceStatus::Paused => "paused",
        }
    }
}

impl fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What pressing the single start/pause/next button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    Start,
    Pause,
    Resume,
    NextRound,
    /// Last round finished; nothing left to run
    Complete,
}

impl ControlAction {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            ControlAction::Start => "Start Race",
            ControlAction::Pause => "Pause Race",
            ControlAction::Resume => "Resume Race",
            ControlAction::NextRound => "Next Round",
            ControlAction::Complete => "Race Complete",
        }
    }
}

/// State of the primary race control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceControl {
    pub action: ControlAction,
    pub enabled: bool,
}

impl RaceControl {
    /// Control for the given status
    ///
    /// ```
    /// use gallop_core::{ControlAction, RaceControl, RaceStatus};
    ///
    /// let control = RaceControl::for_status(RaceStatus::InProgress, false);
    /// assert_eq!(control.action, ControlAction::Pause);
    /// assert_eq!(control.label(), "Pause Race");
    /// assert!(control.enabled);
    /// ```
    pub fn for_status(status: RaceStatus, is_last_round: bool) -> Self {
        let action = match status {
            RaceStatus::InProgress => ControlAction::Pause,
            RaceStatus::Paused => ControlAction::Resume,
            RaceStatus::Finished if is_last_round => ControlAction::Complete,
            RaceStatus::Finished => ControlAction::NextRound,
            RaceStatus::NotInitiated | RaceStatus::NotStarted => ControlAction::Start,
        };
        let enabled = !matches!(status, RaceStatus::NotInitiated)
            && action != ControlAction::Complete;
        Self { action, enabled }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        self.action.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status() {
        assert_eq!(RaceStatus::default(), RaceStatus::NotInitiated);
        assert!(!RaceStatus::default().is_running());
        assert!(RaceStatus::InProgress.is_running());
    }

    #[test]
    fn test_serde_names() {
        let text = ron::to_string(&RaceStatus::InProgress).unwrap();
        assert_eq!(text, "in_progress");
        let status: RaceStatus = ron::from_str("not_initiated").unwrap();
        assert_eq!(status, RaceStatus::NotInitiated);
        assert_eq!(RaceStatus::Paused.to_string(), "paused");
    }

    #[test]
    fn test_transitions() {
        use RaceStatus::*;
        assert!(NotStarted.can_transition_to(InProgress));
        assert!(Paused.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Paused));
        assert!(Finished.can_transition_to(InProgress));
        assert!(Finished.can_transition_to(NotStarted));
        assert!(!NotInitiated.can_transition_to(InProgress));
        assert!(!NotStarted.can_transition_to(Paused));
        assert!(!Paused.can_transition_to(Finished));
    }

    #[test]
    fn test_control_labels() {
        let cases = [
            (RaceStatus::NotInitiated, false, ControlAction::Start, false),
            (RaceStatus::NotStarted, false, ControlAction::Start, true),
            (RaceStatus::InProgress, false, ControlAction::Pause, true),
            (RaceStatus::Paused, true, ControlAction::Resume, true),
            (RaceStatus::Finished, false, ControlAction::NextRound, true),
            (RaceStatus::Finished, true, ControlAction::Complete, false),
        ];
        for (status, last, action, enabled) in cases {
            let control = RaceControl::for_status(status, last);
            assert_eq!(control.action, action, "{status}");
            assert_eq!(control.enabled, enabled, "{status}");
        }
        assert_eq!(ControlAction::NextRound.label(), "Next Round");
    }
}
