//! The idle-prevention loop
//!
//! Alternates the pointer between two positions on a fixed cadence so the
//! system's idle timer never elapses. Each move is a real, user-visible
//! input event, not a power-management hint.

use std::time::Duration;
use tracing::debug;

use crate::error::Result;
use crate::pointer::Pointer;
use crate::shutdown::ShutdownFlag;
use crate::sleep::Sleeper;

/// Default pause between pointer moves
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Default distance of the alternate position from the origin, in device units
pub const DEFAULT_AMPLITUDE: i32 = 1;

/// The single bit of position state, alternating between 0 and 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionToggle(i32);

impl PositionToggle {
    pub fn new() -> Self {
        Self(0)
    }

    /// Current value, always 0 or 1
    pub fn value(self) -> i32 {
        self.0
    }

    /// Flip between 0 and 1
    pub fn flip(&mut self) {
        self.0 ^= 1;
    }
}

/// Moves a pointer back and forth between (0, 0) and (amplitude, amplitude),
/// pausing one interval between moves, until shutdown is requested.
pub struct Jiggler<P: Pointer, S: Sleeper> {
    pointer: P,
    sleeper: S,
    shutdown: ShutdownFlag,
    interval: Duration,
    amplitude: i32,
    toggle: PositionToggle,
}

impl<P: Pointer, S: Sleeper> Jiggler<P, S> {
    pub fn new(
        pointer: P,
        sleeper: S,
        shutdown: ShutdownFlag,
        interval: Duration,
        amplitude: i32,
    ) -> Self {
        Self {
            pointer,
            sleeper,
            shutdown,
            interval,
            amplitude,
            toggle: PositionToggle::new(),
        }
    }

    /// Run the loop until shutdown is requested or a pointer emit fails
    ///
    /// Every iteration moves to `(v, v)` for the current toggle value scaled
    /// by the amplitude, then waits one interval. The shutdown check sits
    /// after the wait so a signal delivered mid-sleep ends the loop without
    /// another move.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let v = self.toggle.value() * self.amplitude;
            self.pointer.move_to(v, v)?;
            debug!(x = v, y = v, "moved pointer");

            self.sleeper.sleep(self.interval);
            if self.shutdown.is_requested() {
                return Ok(());
            }

            self.toggle.flip();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Records every requested target instead of touching a device
    struct RecordingPointer {
        moves: Arc<Mutex<Vec<(i32, i32)>>>,
    }

    impl RecordingPointer {
        fn new() -> (Self, Arc<Mutex<Vec<(i32, i32)>>>) {
            let moves = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    moves: moves.clone(),
                },
                moves,
            )
        }
    }

    impl Pointer for RecordingPointer {
        fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
            self.moves.lock().unwrap().push((x, y));
            Ok(())
        }
    }

    /// Fails every move, as an emit on a vanished device would
    struct FailingPointer;

    impl Pointer for FailingPointer {
        fn move_to(&mut self, _x: i32, _y: i32) -> Result<()> {
            Err(Error::Emit(std::io::Error::from(
                std::io::ErrorKind::BrokenPipe,
            )))
        }
    }

    /// Counts sleeps and requests shutdown after a fixed number of them
    struct StopAfterSleeper {
        remaining: AtomicUsize,
        calls: AtomicUsize,
        durations: Mutex<Vec<Duration>>,
        shutdown: ShutdownFlag,
    }

    impl StopAfterSleeper {
        fn new(sleeps: usize, shutdown: ShutdownFlag) -> Self {
            Self {
                remaining: AtomicUsize::new(sleeps),
                calls: AtomicUsize::new(0),
                durations: Mutex::new(Vec::new()),
                shutdown,
            }
        }
    }

    impl Sleeper for &StopAfterSleeper {
        fn sleep(&self, duration: Duration) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.durations.lock().unwrap().push(duration);
            if self.remaining.fetch_sub(1, Ordering::SeqCst) == 1 {
                self.shutdown.request();
            }
        }
    }

    fn run_iterations(sleeps: usize, amplitude: i32) -> Vec<(i32, i32)> {
        let shutdown = ShutdownFlag::new();
        let sleeper = StopAfterSleeper::new(sleeps, shutdown.clone());
        let (pointer, moves) = RecordingPointer::new();

        let mut jiggler = Jiggler::new(
            pointer,
            &sleeper,
            shutdown,
            Duration::from_secs(60),
            amplitude,
        );
        jiggler.run().expect("loop should stop cleanly");

        let recorded = moves.lock().unwrap().clone();
        recorded
    }

    #[test]
    fn toggle_starts_at_zero() {
        assert_eq!(PositionToggle::new().value(), 0);
    }

    #[test]
    fn toggle_alternates_with_period_two() {
        let mut toggle = PositionToggle::new();
        for i in 0..100 {
            // Value before iteration i is i mod 2
            assert_eq!(toggle.value(), i % 2);
            let before = toggle.value();
            toggle.flip();
            assert_ne!(toggle.value(), before);
        }
    }

    #[test]
    fn toggle_value_stays_in_range() {
        let mut toggle = PositionToggle::new();
        for _ in 0..100 {
            assert!(toggle.value() == 0 || toggle.value() == 1);
            toggle.flip();
        }
    }

    #[test]
    fn one_more_move_than_sleeps() {
        let moves = run_iterations(3, 1);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn targets_alternate_between_origin_and_amplitude() {
        let moves = run_iterations(5, 1);
        assert_eq!(
            moves,
            vec![(0, 0), (1, 1), (0, 0), (1, 1), (0, 0), (1, 1)]
        );
    }

    #[test]
    fn x_always_equals_y() {
        let moves = run_iterations(7, 3);
        for (x, y) in moves {
            assert_eq!(x, y);
        }
    }

    #[test]
    fn every_second_target_repeats() {
        let moves = run_iterations(6, 1);
        for window in moves.windows(2) {
            assert_ne!(window[0], window[1], "consecutive targets should differ");
        }
        for i in 0..moves.len() - 2 {
            assert_eq!(moves[i], moves[i + 2], "targets should cycle with period 2");
        }
    }

    #[test]
    fn amplitude_scales_the_alternate_position() {
        let moves = run_iterations(3, 5);
        assert_eq!(moves, vec![(0, 0), (5, 5), (0, 0), (5, 5)]);
    }

    #[test]
    fn waits_one_full_interval_between_moves() {
        let shutdown = ShutdownFlag::new();
        let sleeper = StopAfterSleeper::new(4, shutdown.clone());
        let (pointer, _moves) = RecordingPointer::new();

        let interval = Duration::from_secs(60);
        let mut jiggler = Jiggler::new(pointer, &sleeper, shutdown, interval, 1);
        jiggler.run().expect("loop should stop cleanly");

        let durations = sleeper.durations.lock().unwrap();
        assert_eq!(durations.len(), 4);
        assert!(durations.iter().all(|d| *d == interval));
    }

    #[test]
    fn stops_after_wait_once_shutdown_requested() {
        let shutdown = ShutdownFlag::new();
        shutdown.request();
        let sleeper = StopAfterSleeper::new(usize::MAX, shutdown.clone());
        let (pointer, moves) = RecordingPointer::new();

        let mut jiggler =
            Jiggler::new(pointer, &sleeper, shutdown, Duration::from_secs(60), 1);
        jiggler.run().expect("loop should stop cleanly");

        // The move already in flight completes, then the loop exits
        assert_eq!(moves.lock().unwrap().len(), 1);
    }

    #[test]
    fn emit_failure_ends_the_loop_before_any_wait() {
        let shutdown = ShutdownFlag::new();
        let sleeper = StopAfterSleeper::new(usize::MAX, shutdown.clone());

        let mut jiggler = Jiggler::new(
            FailingPointer,
            &sleeper,
            shutdown,
            Duration::from_secs(60),
            1,
        );
        let result = jiggler.run();

        assert!(matches!(result, Err(Error::Emit(_))));
        assert_eq!(sleeper.calls.load(Ordering::SeqCst), 0);
    }
}
