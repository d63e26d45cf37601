use evdev::uinput::VirtualDevice;
use evdev::{AbsoluteAxisType, EventType, InputEvent};

use crate::device::{self, AXIS_MAX};
use crate::error::{Error, Result};

/// Something that can place the pointer at an absolute position.
///
/// The production implementation is [`VirtualPointer`]; tests substitute
/// their own so the loop can run without /dev/uinput.
pub trait Pointer {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()>;
}

/// Virtual absolute pointer backed by a uinput device
pub struct VirtualPointer {
    device: VirtualDevice,
}

impl VirtualPointer {
    /// Create the underlying uinput device
    ///
    /// Note: This takes ~1 second as the kernel needs time to recognize the
    /// device. Requires access to /dev/uinput (typically root or input group
    /// membership).
    pub fn new() -> Result<Self> {
        let device = device::create_pointer_device()?;
        Ok(Self { device })
    }
}

impl Pointer for VirtualPointer {
    /// Move the pointer to absolute coordinates, clamped to the axis range
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        let x = x.clamp(0, AXIS_MAX);
        let y = y.clamp(0, AXIS_MAX);
        let events = [
            InputEvent::new_now(EventType::ABSOLUTE, AbsoluteAxisType::ABS_X.0, x),
            InputEvent::new_now(EventType::ABSOLUTE, AbsoluteAxisType::ABS_Y.0, y),
            InputEvent::new_now(EventType::SYNCHRONIZATION, 0, 0), // SYN_REPORT
        ];
        self.device.emit(&events).map_err(Error::Emit)?;
        Ok(())
    }
}
