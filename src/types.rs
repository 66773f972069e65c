use core::fmt;

/// Contains the resolution of a display
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One of the two resolutions a display is toggled between
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 1920x1080
    P1080,
    /// 3840x2160
    P2160,
}

impl Preset {
    /// Returns the preset matching `resolution` exactly, if any
    pub fn from_resolution(resolution: Resolution) -> Option<Self> {
        match (resolution.width, resolution.height) {
            (1920, 1080) => Some(Preset::P1080),
            (3840, 2160) => Some(Preset::P2160),
            _ => None,
        }
    }

    pub fn resolution(self) -> Resolution {
        match self {
            Preset::P1080 => Resolution::new(1920, 1080),
            Preset::P2160 => Resolution::new(3840, 2160),
        }
    }

    /// The preset a display at `self` gets switched to
    pub fn toggled(self) -> Self {
        match self {
            Preset::P1080 => Preset::P2160,
            Preset::P2160 => Preset::P1080,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::P1080 => "1080p",
            Preset::P2160 => "2160p",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.resolution(), self.label())
    }
}

/// A display device as reported by the OS at a given enumeration index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDevice {
    /// Platform-assigned name, e.g. `\\.\DISPLAY1`
    pub name: String,
    pub active: bool,
}

impl DisplayDevice {
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }
}

impl fmt::Display for DisplayDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Display {{ name: {}, active: {} }}", self.name, self.active)
    }
}

/// The mode handed to the OS when changing a display's resolution.
///
/// Only width and height are ever set; every other mode field is left to the OS.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayMode {
    pub resolution: Resolution,
}

impl DisplayMode {
    pub fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }
}

/// Raw status code returned by a display mode change
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DispChange(pub i32);

impl DispChange {
    pub const SUCCESSFUL: DispChange = DispChange(0);
    pub const RESTART: DispChange = DispChange(1);
    pub const FAILED: DispChange = DispChange(-1);
    pub const BADMODE: DispChange = DispChange(-2);

    pub fn is_successful(self) -> bool {
        self == Self::SUCCESSFUL
    }
}

impl fmt::Display for DispChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
