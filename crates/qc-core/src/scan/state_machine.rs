//! Scan workflow state machine.
//!
//! Defines a pure state transition function for the scan → validate → result
//! flow. Side effects are returned as [`ScanAction`]s for the orchestrator to
//! execute, in order.

use serde::{Deserialize, Serialize};

use crate::feedback::Polarity;
use crate::validation::{Outcome, ValidationResult};
use crate::view::ResultCard;

/// The two screens of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Scanner,
    Result,
}

/// Workflow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScanState {
    /// Scanner screen, no active session.
    Idle,
    /// Scanner screen, session active.
    Scanning,
    /// Result screen with the interim card; request in flight.
    Validating { payload: String },
    /// Result screen with the final card.
    ShowingResult { card: ResultCard },
}

impl ScanState {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Idle | Self::Scanning => Screen::Scanner,
            Self::Validating { .. } | Self::ShowingResult { .. } => Screen::Result,
        }
    }

    /// Card to render on the result screen, if any.
    pub fn card(&self) -> Option<ResultCard> {
        match self {
            Self::Validating { .. } => Some(ResultCard::Validating),
            Self::ShowingResult { card } => Some(card.clone()),
            Self::Idle | Self::Scanning => None,
        }
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self, Self::Scanning)
    }
}

/// Why a validation produced no classifiable response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ValidationFailure {
    /// No endpoint saved; no request was made.
    NotConfigured,
    /// Transport or body-parse failure.
    Connection { detail: String },
}

/// Events that drive the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanEvent {
    /// User asks to start scanning.
    StartRequested,
    /// User asks to stop scanning.
    StopRequested,
    /// The scanner could not be started.
    ScannerFailed,
    /// The decode stream ended on its own.
    SessionEnded,
    /// A payload was decoded.
    Decoded { payload: String },
    /// The service answered.
    ValidationCompleted { result: ValidationResult },
    /// The service could not be asked or did not answer intelligibly.
    ValidationFailed { failure: ValidationFailure },
    /// User dismisses the result card.
    Acknowledged,
}

/// Side effects produced by transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanAction {
    StartScanner,
    StopScanner,
    /// Ask the validation service. Always preceded by `StopScanner`.
    Validate { payload: String },
    RecordOutcome { outcome: Outcome },
    PlayFeedback { polarity: Polarity },
}

/// Pure scan state machine: no side effects.
pub struct ScanStateMachine;

impl ScanStateMachine {
    pub fn transition(state: ScanState, event: ScanEvent) -> (ScanState, Vec<ScanAction>) {
        match (state, event) {
            (ScanState::Idle, ScanEvent::StartRequested) => {
                (ScanState::Scanning, vec![ScanAction::StartScanner])
            }
            // At most one active session.
            (ScanState::Scanning, ScanEvent::StartRequested) => (ScanState::Scanning, Vec::new()),
            (ScanState::Scanning, ScanEvent::ScannerFailed) => (ScanState::Idle, Vec::new()),
            (ScanState::Scanning, ScanEvent::StopRequested)
            | (ScanState::Scanning, ScanEvent::SessionEnded) => {
                (ScanState::Idle, vec![ScanAction::StopScanner])
            }
            (ScanState::Scanning, ScanEvent::Decoded { payload }) => (
                ScanState::Validating {
                    payload: payload.clone(),
                },
                vec![ScanAction::StopScanner, ScanAction::Validate { payload }],
            ),
            (ScanState::Validating { .. }, ScanEvent::ValidationCompleted { result }) => {
                let outcome = Outcome::classify(&result);
                let card = ResultCard::from_result(outcome, &result);
                (
                    ScanState::ShowingResult { card },
                    vec![
                        ScanAction::RecordOutcome { outcome },
                        ScanAction::PlayFeedback {
                            polarity: outcome.polarity(),
                        },
                    ],
                )
            }
            (ScanState::Validating { .. }, ScanEvent::ValidationFailed { failure }) => {
                let card = match failure {
                    ValidationFailure::NotConfigured => ResultCard::NotConfigured,
                    ValidationFailure::Connection { detail } => {
                        ResultCard::ConnectionError { detail }
                    }
                };
                (ScanState::ShowingResult { card }, Vec::new())
            }
            // The scanner is not restarted; the user starts it again.
            (ScanState::ShowingResult { .. }, ScanEvent::Acknowledged) => {
                (ScanState::Idle, Vec::new())
            }
            (state, _event) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?state, ?_event, "scan event ignored in current state");
                (state, Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationStatus;

    fn valid_result() -> ValidationResult {
        ValidationResult {
            success: true,
            status: ValidationStatus::Valid,
            guest_name: Some("Ana".into()),
            message: Some("Mesa 3".into()),
            scanned_at: None,
        }
    }

    #[test]
    fn start_from_idle_starts_scanner() {
        let (state, actions) =
            ScanStateMachine::transition(ScanState::Idle, ScanEvent::StartRequested);
        assert_eq!(state, ScanState::Scanning);
        assert_eq!(actions, vec![ScanAction::StartScanner]);
    }

    #[test]
    fn second_start_is_a_no_op() {
        let (state, actions) =
            ScanStateMachine::transition(ScanState::Scanning, ScanEvent::StartRequested);
        assert_eq!(state, ScanState::Scanning);
        assert!(actions.is_empty());
    }

    #[test]
    fn scanner_failure_reverts_to_idle() {
        let (state, actions) =
            ScanStateMachine::transition(ScanState::Scanning, ScanEvent::ScannerFailed);
        assert_eq!(state, ScanState::Idle);
        assert!(actions.is_empty());
    }

    #[test]
    fn decode_stops_scanner_before_validating() {
        let (state, actions) = ScanStateMachine::transition(
            ScanState::Scanning,
            ScanEvent::Decoded {
                payload: "TICKET-1".into(),
            },
        );

        assert_eq!(
            state,
            ScanState::Validating {
                payload: "TICKET-1".into()
            }
        );
        assert_eq!(state.screen(), Screen::Result);
        assert_eq!(state.card(), Some(ResultCard::Validating));
        assert_eq!(
            actions,
            vec![
                ScanAction::StopScanner,
                ScanAction::Validate {
                    payload: "TICKET-1".into()
                }
            ]
        );
    }

    #[test]
    fn decode_outside_scanning_is_ignored() {
        for state in [
            ScanState::Idle,
            ScanState::Validating {
                payload: "a".into(),
            },
            ScanState::ShowingResult {
                card: ResultCard::NotConfigured,
            },
        ] {
            let (next, actions) = ScanStateMachine::transition(
                state.clone(),
                ScanEvent::Decoded {
                    payload: "b".into(),
                },
            );
            assert_eq!(next, state);
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn completed_validation_records_and_plays_feedback() {
        let (state, actions) = ScanStateMachine::transition(
            ScanState::Validating {
                payload: "x".into(),
            },
            ScanEvent::ValidationCompleted {
                result: valid_result(),
            },
        );

        assert_eq!(
            state,
            ScanState::ShowingResult {
                card: ResultCard::Welcome {
                    guest_name: Some("Ana".into()),
                    message: Some("Mesa 3".into()),
                }
            }
        );
        assert_eq!(
            actions,
            vec![
                ScanAction::RecordOutcome {
                    outcome: Outcome::Valid
                },
                ScanAction::PlayFeedback {
                    polarity: Polarity::Positive
                },
            ]
        );
    }

    #[test]
    fn failed_validation_records_nothing() {
        let (state, actions) = ScanStateMachine::transition(
            ScanState::Validating {
                payload: "x".into(),
            },
            ScanEvent::ValidationFailed {
                failure: ValidationFailure::Connection {
                    detail: "timeout".into(),
                },
            },
        );

        assert_eq!(
            state,
            ScanState::ShowingResult {
                card: ResultCard::ConnectionError {
                    detail: "timeout".into()
                }
            }
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn missing_endpoint_shows_configuration_card() {
        let (state, _) = ScanStateMachine::transition(
            ScanState::Validating {
                payload: "x".into(),
            },
            ScanEvent::ValidationFailed {
                failure: ValidationFailure::NotConfigured,
            },
        );
        assert_eq!(state.card(), Some(ResultCard::NotConfigured));
    }

    #[test]
    fn acknowledge_returns_to_idle_scanner_screen() {
        let (state, actions) = ScanStateMachine::transition(
            ScanState::ShowingResult {
                card: ResultCard::NotConfigured,
            },
            ScanEvent::Acknowledged,
        );
        assert_eq!(state, ScanState::Idle);
        assert_eq!(state.screen(), Screen::Scanner);
        assert!(actions.is_empty());
    }

    #[test]
    fn pending_card_cannot_be_acknowledged() {
        let validating = ScanState::Validating {
            payload: "x".into(),
        };
        let (state, _) = ScanStateMachine::transition(validating.clone(), ScanEvent::Acknowledged);
        assert_eq!(state, validating);
    }

    #[test]
    fn stop_and_session_end_release_the_scanner() {
        for event in [ScanEvent::StopRequested, ScanEvent::SessionEnded] {
            let (state, actions) = ScanStateMachine::transition(ScanState::Scanning, event);
            assert_eq!(state, ScanState::Idle);
            assert_eq!(actions, vec![ScanAction::StopScanner]);
        }
    }
}
