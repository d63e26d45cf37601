use std::thread;
use std::time::{Duration, Instant};

use crate::shutdown::ShutdownFlag;

/// A blocking pause between pointer moves
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Wall-clock sleeper that can be cut short by a shutdown request
///
/// Sleeps in short slices and rechecks the flag between them, so a signal
/// never has to wait out a full interval before the process can exit.
pub struct SystemSleeper {
    shutdown: ShutdownFlag,
}

/// How often the wait rechecks the shutdown flag
const POLL_SLICE: Duration = Duration::from_millis(50);

impl SystemSleeper {
    pub fn new(shutdown: ShutdownFlag) -> Self {
        Self { shutdown }
    }
}

impl Sleeper for SystemSleeper {
    fn sleep(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while !self.shutdown.is_requested() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep((deadline - now).min(POLL_SLICE));
        }
    }
}
