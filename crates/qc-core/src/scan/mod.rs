//! Scanning: capture parameters, the decode session, and the workflow state machine.

mod config;
mod session;
mod state_machine;

pub use config::{CameraFacing, ScanConfig};
pub use session::ScanSession;
pub use state_machine::{
    Screen, ScanAction, ScanEvent, ScanState, ScanStateMachine, ValidationFailure,
};
