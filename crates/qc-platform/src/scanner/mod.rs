//! Scanner adapters.
//!
//! Both adapters deliver whole lines: hand-held QR readers decode on the
//! device and type the payload followed by a line terminator, either into a
//! serial/HID character device or into whatever has keyboard focus.

mod dedup;
mod line_device;
mod wedge;

pub use dedup::{payload_from_line, DuplicateFilter};
pub use line_device::LineDeviceScanner;
pub use wedge::{FeedResult, KeyboardWedgeScanner};

/// Decoded payloads buffered between the reader and the workflow.
const SESSION_BUFFER: usize = 16;
