//! Cooperative shutdown signaling
//!
//! A shared atomic flag set by the signal-handler thread and polled by the
//! wait between pointer moves.

use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::info;

/// Cloneable handle to the process-wide shutdown request
#[derive(Clone, Debug, Default)]
pub struct ShutdownFlag {
    requested: Arc<AtomicBool>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown
    pub fn request(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }

    /// Check whether shutdown was requested
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }
}

/// Install a SIGINT/SIGTERM handler that requests shutdown
///
/// The first signal requests a clean stop; the loop finishes its current
/// wait slice and returns. A second signal exits immediately for the case
/// where the clean path is stuck.
pub fn install_signal_handler(flag: ShutdownFlag) -> std::io::Result<()> {
    let mut signals = Signals::new([SIGINT, SIGTERM])?;

    thread::Builder::new()
        .name("signal-handler".to_string())
        .spawn(move || {
            let mut shutdown_initiated = false;
            for sig in signals.forever() {
                if shutdown_initiated {
                    info!(signal = sig, "received second signal, exiting now");
                    std::process::exit(130);
                }
                shutdown_initiated = true;
                info!(signal = sig, "received signal, shutting down");
                flag.request();
            }
        })?;

    Ok(())
}
