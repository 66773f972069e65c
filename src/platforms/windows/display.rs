use winsafe::{DEVMODE, DISPLAY_DEVICE, EnumDisplayDevices, GmidxEnum, co, prelude::NativeBitflag};

use crate::{
    display::{ChangeKind, DisplayBackend, DisplayError, Result},
    types::{DispChange, DisplayDevice, DisplayMode, Resolution},
};

/// Display backend talking to the Windows API through `winsafe`
#[derive(Debug, Default, Clone, Copy)]
pub struct WinsafeBackend;

impl WinsafeBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayBackend for WinsafeBackend {
    fn display_device(&self, index: u32) -> Result<Option<DisplayDevice>> {
        let mut display_device = DISPLAY_DEVICE::default();

        let is_good = EnumDisplayDevices(None, index, &mut display_device, co::EDD::NoValue)
            .map_err(|err| DisplayError::WinAPI(err.to_string()))?;

        if !is_good {
            return Ok(None);
        }

        Ok(Some(DisplayDevice::new(
            display_device.DeviceName(),
            display_device.StateFlags.has(co::DISPLAY_DEVICE::ACTIVE),
        )))
    }

    fn current_settings(&self, name: &str) -> Result<Resolution> {
        let mut devmode = DEVMODE::default();
        let found = winsafe::EnumDisplaySettings(
            Some(name),
            GmidxEnum::Enum(co::ENUM_SETTINGS::CURRENT),
            &mut devmode,
        )
        .map_err(|err| DisplayError::WinAPI(format!("{} ({})", err, name)))?;

        current_mode(found, &devmode, name)
    }

    fn change_settings(&self, name: &str, mode: &DisplayMode, kind: ChangeKind) -> DispChange {
        let mut devmode = DEVMODE::from_display_mode(mode);

        let flags = match kind {
            ChangeKind::Test => co::CDS::TEST,
            ChangeKind::Apply => co::CDS::DYNAMICALLY,
        };

        // RESTART comes back as `Ok`, so both arms carry the raw code
        match winsafe::ChangeDisplaySettingsEx(Some(name), Some(&mut devmode), flags) {
            Ok(code) | Err(code) => DispChange(i32::from(code)),
        }
    }
}

/// Reads the resolution out of a `DEVMODE` filled by `EnumDisplaySettings`.
///
/// `found` is false when the call failed without a Win32 error; `devmode` is still zeroed then.
fn current_mode(found: bool, devmode: &DEVMODE, name: &str) -> Result<Resolution> {
    if !found {
        return Err(DisplayError::NoSettings(name.to_string()));
    }

    Ok(Resolution::new(devmode.dmPelsWidth, devmode.dmPelsHeight))
}

/// Builds a `winsafe::DEVMODE` that only selects the fields of a `DisplayMode`
trait FromDisplayMode {
    fn set_resolution(&mut self, resolution: Resolution);

    fn from_display_mode(mode: &DisplayMode) -> DEVMODE {
        let mut devmode = DEVMODE::default();
        devmode.set_resolution(mode.resolution);
        devmode
    }
}

impl FromDisplayMode for DEVMODE {
    fn set_resolution(&mut self, resolution: Resolution) {
        self.dmPelsWidth = resolution.width;
        self.dmPelsHeight = resolution.height;
        self.dmFields |= co::DM::PELSWIDTH | co::DM::PELSHEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_current_mode_is_an_error() {
        let devmode = DEVMODE::default();
        assert!(matches!(
            current_mode(false, &devmode, "DISPLAY2"),
            Err(DisplayError::NoSettings(name)) if name == "DISPLAY2"
        ));
    }

    #[test]
    fn found_current_mode_is_read() {
        let devmode = DEVMODE::from_display_mode(&DisplayMode::new(Resolution::new(3840, 2160)));
        assert_eq!(
            current_mode(true, &devmode, "DISPLAY1").unwrap(),
            Resolution::new(3840, 2160)
        );
    }
}
