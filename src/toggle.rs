//! Toggles every active display between 1080p and 2160p.
use std::io::Write;

use crate::{
    display::{DisplayBackend, change_resolution, current_resolution, enumerate_active_devices},
    types::{Preset, Resolution},
};

/// What happened to a single display during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceOutcome {
    /// The current resolution could not be read
    QueryFailed { name: String },
    /// The display is at neither preset and was left alone
    Unchanged { name: String, current: Resolution },
    /// The display was switched to the other preset
    Changed { name: String, from: Preset, to: Preset },
    /// Switching to the other preset failed
    ChangeFailed { name: String, from: Preset, to: Preset },
}

impl DeviceOutcome {
    pub fn name(&self) -> &str {
        match self {
            DeviceOutcome::QueryFailed { name }
            | DeviceOutcome::Unchanged { name, .. }
            | DeviceOutcome::Changed { name, .. }
            | DeviceOutcome::ChangeFailed { name, .. } => name,
        }
    }
}

/// Runs the toggle over all displays of a backend
#[derive(Debug, Clone)]
pub struct Toggler<B> {
    backend: B,
}

impl<B: DisplayBackend> Toggler<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Toggles every active display, writing progress to `out` and failures to `err`.
    ///
    /// A failing display never stops the others, and neither does a stream that can't be
    /// written to.
    pub fn run<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Vec<DeviceOutcome> {
        let names = enumerate_active_devices(&self.backend);
        log::debug!("Active displays: {:?}", names);

        let mut outcomes = Vec::with_capacity(names.len());
        for name in names {
            let outcome = self.toggle_device(name, out, err);
            log::debug!("{}: {:?}", outcome.name(), outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    fn toggle_device<O: Write, E: Write>(
        &self,
        name: String,
        out: &mut O,
        err: &mut E,
    ) -> DeviceOutcome {
        let Some(current) = current_resolution(&self.backend, &name) else {
            report!(err, "Failed to get the current resolution for {}", name);
            return DeviceOutcome::QueryFailed { name };
        };

        report!(out, "Current resolution for {}: {}", name, current);

        let Some(from) = Preset::from_resolution(current) else {
            report!(
                out,
                "Current resolution for {} is neither 1080p nor 2160p. No change made.",
                name
            );
            return DeviceOutcome::Unchanged { name, current };
        };

        let to = from.toggled();
        if change_resolution(&self.backend, &name, to.resolution(), err) {
            report!(out, "Resolution changed to {} for {}", to, name);
            DeviceOutcome::Changed { name, from, to }
        } else {
            report!(err, "Failed to change to {} for {}", to, name);
            DeviceOutcome::ChangeFailed { name, from, to }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::{
        display::{ChangeKind, DisplayError, Result},
        types::{DispChange, DisplayDevice, DisplayMode},
    };

    #[derive(Default)]
    struct Fake {
        devices: Vec<DisplayDevice>,
        modes: HashMap<String, Resolution>,
        changes: RefCell<Vec<(String, Resolution, ChangeKind)>>,
    }

    impl Fake {
        fn with(mut self, name: &str, mode: Option<Resolution>) -> Self {
            self.devices.push(DisplayDevice::new(name, true));
            if let Some(mode) = mode {
                self.modes.insert(name.to_string(), mode);
            }
            self
        }
    }

    impl DisplayBackend for Fake {
        fn display_device(&self, index: u32) -> Result<Option<DisplayDevice>> {
            Ok(self.devices.get(index as usize).cloned())
        }

        fn current_settings(&self, name: &str) -> Result<Resolution> {
            self.modes
                .get(name)
                .copied()
                .ok_or_else(|| DisplayError::NoSettings(name.to_string()))
        }

        fn change_settings(&self, name: &str, mode: &DisplayMode, kind: ChangeKind) -> DispChange {
            self.changes
                .borrow_mut()
                .push((name.to_string(), mode.resolution, kind));
            DispChange::SUCCESSFUL
        }
    }

    fn run(backend: &Fake) -> (Vec<DeviceOutcome>, String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let outcomes = Toggler::new(backend).run(&mut out, &mut err);
        (
            outcomes,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn mixed_displays_are_handled_independently() {
        let backend = Fake::default()
            .with("DISPLAY1", Some(Resolution::new(3840, 2160)))
            .with("DISPLAY2", None)
            .with("DISPLAY3", Some(Resolution::new(2560, 1440)));

        let (outcomes, out, err) = run(&backend);

        assert_eq!(
            outcomes,
            vec![
                DeviceOutcome::Changed {
                    name: "DISPLAY1".to_string(),
                    from: Preset::P2160,
                    to: Preset::P1080,
                },
                DeviceOutcome::QueryFailed {
                    name: "DISPLAY2".to_string()
                },
                DeviceOutcome::Unchanged {
                    name: "DISPLAY3".to_string(),
                    current: Resolution::new(2560, 1440),
                },
            ]
        );
        assert_eq!(
            out,
            "Current resolution for DISPLAY1: 3840x2160\n\
             Resolution changed to 1920x1080 (1080p) for DISPLAY1\n\
             Current resolution for DISPLAY3: 2560x1440\n\
             Current resolution for DISPLAY3 is neither 1080p nor 2160p. No change made.\n"
        );
        assert_eq!(err, "Failed to get the current resolution for DISPLAY2\n");
    }

    #[test]
    fn test_runs_before_apply() {
        let backend = Fake::default().with("DISPLAY1", Some(Resolution::new(1920, 1080)));

        run(&backend);

        let target = Resolution::new(3840, 2160);
        assert_eq!(
            *backend.changes.borrow(),
            vec![
                ("DISPLAY1".to_string(), target, ChangeKind::Test),
                ("DISPLAY1".to_string(), target, ChangeKind::Apply),
            ]
        );
    }

    #[test]
    fn no_displays_no_output() {
        let (outcomes, out, err) = run(&Fake::default());
        assert!(outcomes.is_empty());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn outcome_name() {
        let outcome = DeviceOutcome::QueryFailed {
            name: "DISPLAY4".to_string(),
        };
        assert_eq!(outcome.name(), "DISPLAY4");
    }
}
