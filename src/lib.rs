//! Keeps a Linux machine awake by periodically repositioning a virtual
//! pointer through /dev/uinput, so the idle-sleep timer never elapses.
//!
//! The pointer alternates between (0, 0) and (1, 1) once a minute by
//! default. To the idle timer these events are indistinguishable from real
//! user input.

mod device;
pub mod error;
mod jiggle;
mod pointer;
mod shutdown;
mod sleep;
pub mod telemetry;

pub use device::AXIS_MAX;
pub use error::{Error, Result};
pub use jiggle::{Jiggler, PositionToggle, DEFAULT_AMPLITUDE, DEFAULT_INTERVAL};
pub use pointer::{Pointer, VirtualPointer};
pub use shutdown::{install_signal_handler, ShutdownFlag};
pub use sleep::{Sleeper, SystemSleeper};
