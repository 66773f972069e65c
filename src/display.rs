use std::io::Write;

use thiserror::Error;

use crate::types::{DispChange, DisplayDevice, DisplayMode, Resolution};

/// Error type for the display module
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Error when calling the Windows API: {0}")]
    WinAPI(String),
    #[error("Display {0} has no settings")]
    NoSettings(String),
}

pub type Result<T = ()> = std::result::Result<T, DisplayError>;

/// Whether a mode change is only tested or actually applied
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Ask the OS if the mode would work, without changing anything
    Test,
    /// Apply the mode immediately
    Apply,
}

/// The OS primitives the toggler is built on
pub trait DisplayBackend {
    /// Returns the device at `index`, or `None` once `index` is past the last device
    fn display_device(&self, index: u32) -> Result<Option<DisplayDevice>>;

    /// Reads the current resolution of the device called `name`
    fn current_settings(&self, name: &str) -> Result<Resolution>;

    /// Tests or applies `mode` on the device called `name`
    fn change_settings(&self, name: &str, mode: &DisplayMode, kind: ChangeKind) -> DispChange;
}

impl<B: DisplayBackend + ?Sized> DisplayBackend for &B {
    fn display_device(&self, index: u32) -> Result<Option<DisplayDevice>> {
        (**self).display_device(index)
    }

    fn current_settings(&self, name: &str) -> Result<Resolution> {
        (**self).current_settings(name)
    }

    fn change_settings(&self, name: &str, mode: &DisplayMode, kind: ChangeKind) -> DispChange {
        (**self).change_settings(name, mode, kind)
    }
}

/// Returns the names of all active display devices, in enumeration order.
pub fn enumerate_active_devices<B: DisplayBackend>(backend: &B) -> Vec<String> {
    let mut result = Vec::new();
    let mut dev_num: u32 = 0;

    loop {
        let device = match backend.display_device(dev_num) {
            Ok(Some(device)) => device,
            Ok(None) => break,
            Err(err) => {
                log::warn!("Stopped enumerating displays at index {}: {}", dev_num, err);
                break;
            }
        };

        log::debug!("{}: {}", dev_num, device);

        if device.active {
            result.push(device.name);
        } else {
            log::debug!("Skipping inactive display {}", device.name);
        }

        dev_num += 1; // advance to next display device
    }

    result
}

/// Returns the current resolution of the display `name`, or `None` if the OS can't report it.
pub fn current_resolution<B: DisplayBackend>(backend: &B, name: &str) -> Option<Resolution> {
    match backend.current_settings(name) {
        Ok(resolution) => Some(resolution),
        Err(err) => {
            log::debug!("Querying settings of {} failed: {}", name, err);
            None
        }
    }
}

/// Changes the resolution of display `name` to `target`.
///
/// The mode is tested first and only applied if the OS accepts it. Failures are written to
/// `err` together with the returned status code. Returns whether the change went through.
pub fn change_resolution<B: DisplayBackend, E: Write>(
    backend: &B,
    name: &str,
    target: Resolution,
    err: &mut E,
) -> bool {
    let mode = DisplayMode::new(target);

    let status = backend.change_settings(name, &mode, ChangeKind::Test);
    log::debug!("Testing {} on {} returned {}", target, name, status);
    if !status.is_successful() {
        report!(err, "Error testing resolution for {}: {}", name, status);
        return false;
    }

    let status = backend.change_settings(name, &mode, ChangeKind::Apply);
    log::debug!("Applying {} on {} returned {}", target, name, status);
    if !status.is_successful() {
        report!(err, "Error changing resolution for {}: {}", name, status);
        return false;
    }

    true
}
