use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AbsInfo, AbsoluteAxisType, AttributeSet, Key, UinputAbsSetup};
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};

/// Axis range of the virtual pointer, in device units.
///
/// The compositor scales device units onto the screen, so coordinates near
/// zero always land in the top-left corner regardless of resolution.
pub const AXIS_MAX: i32 = 65535;

/// Creates and configures a virtual absolute pointer device
///
/// The device registers absolute X/Y axes and a left button so the kernel
/// recognizes it as a pointing device. Requires access to /dev/uinput
/// (typically root or input group membership).
pub fn create_pointer_device() -> Result<VirtualDevice> {
    // A pointing device needs at least one button to be classified as one
    let mut keys = AttributeSet::<Key>::new();
    keys.insert(Key::BTN_LEFT);

    let abs_info = AbsInfo::new(0, 0, AXIS_MAX, 0, 0, 0);
    let abs_x = UinputAbsSetup::new(AbsoluteAxisType::ABS_X, abs_info);
    let abs_y = UinputAbsSetup::new(AbsoluteAxisType::ABS_Y, abs_info);

    let device = VirtualDeviceBuilder::new()
        .map_err(Error::DeviceCreation)?
        .name("wakectl virtual pointer")
        .with_keys(&keys)
        .map_err(Error::DeviceCreation)?
        .with_absolute_axis(&abs_x)
        .map_err(Error::DeviceCreation)?
        .with_absolute_axis(&abs_y)
        .map_err(Error::DeviceCreation)?
        .build()
        .map_err(Error::DeviceCreation)?;

    // Wait for the kernel to fully recognize the device
    // Without this delay, initial events may be lost
    thread::sleep(Duration::from_secs(1));

    Ok(device)
}
