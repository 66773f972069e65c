//! A library to toggle Windows displays between 1080p and 2160p.
//!
//! The OS calls sit behind [`DisplayBackend`]. On Windows, `WinsafeBackend` implements it on
//! top of `EnumDisplayDevices`, `EnumDisplaySettings` and `ChangeDisplaySettingsEx`.

/// Writes one report line to `$dst`.
///
/// A stream that can't be written to is logged and otherwise ignored, so it never stops a run.
macro_rules! report {
    ($dst:expr, $($arg:tt)*) => {
        if let Err(err) = writeln!($dst, $($arg)*) {
            log::warn!("Failed to write report line: {}", err);
        }
    };
}

mod display;
#[cfg(target_os = "windows")]
mod platforms;
mod toggle;
mod types;

pub use display::*;
#[cfg(target_os = "windows")]
pub use platforms::*;
pub use toggle::*;
pub use types::*;
