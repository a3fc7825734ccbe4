//! Global library settings.
//!
//! [`Settings`] is a process-wide singleton accessed via a
//! `std::sync::OnceLock`. It holds the knobs that are not part of any single
//! integration call: the relative tolerance used to flag non-uniform
//! sampling, and the number of decimals used when rendering reports.
//!
//! Thread safety: values live behind a `Mutex` so they can be changed from
//! any thread. Tests that change a value should use [`ScopedSettings`] so the
//! previous value comes back when the guard is dropped.

use std::sync::{Mutex, OnceLock, PoisonError};

/// Default relative tolerance for the uniform-spacing check.
pub const DEFAULT_SPACING_TOLERANCE: f64 = 1e-8;

/// Default number of decimals in rendered results.
pub const DEFAULT_REPORT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Values {
    spacing_tolerance: f64,
    report_precision: usize,
}

impl Default for Values {
    fn default() -> Self {
        Self {
            spacing_tolerance: DEFAULT_SPACING_TOLERANCE,
            report_precision: DEFAULT_REPORT_PRECISION,
        }
    }
}

/// Process-wide settings used by the quadrature-rs library.
pub struct Settings {
    values: Mutex<Values>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            values: Mutex::new(Values::default()),
        })
    }

    fn read(&self) -> Values {
        *self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, f: impl FnOnce(&mut Values)) {
        f(&mut self.values.lock().unwrap_or_else(PoisonError::into_inner));
    }

    /// Relative tolerance on the gap between consecutive abscissae.
    ///
    /// A sample set whose gaps deviate from its step size by more than
    /// `tolerance * step_size` is still accepted, but a warning is logged.
    pub fn spacing_tolerance(&self) -> f64 {
        self.read().spacing_tolerance
    }

    /// Set the relative spacing tolerance.
    pub fn set_spacing_tolerance(&self, tolerance: f64) {
        self.update(|v| v.spacing_tolerance = tolerance);
    }

    /// Number of decimals used for results in rendered reports.
    pub fn report_precision(&self) -> usize {
        self.read().report_precision
    }

    /// Set the report precision.
    pub fn set_report_precision(&self, decimals: usize) {
        self.update(|v| v.report_precision = decimals);
    }

    /// Restore every setting to its default.
    pub fn reset(&self) {
        self.update(|v| *v = Values::default());
    }
}

/// RAII guard that snapshots the current settings and restores them on drop.
pub struct ScopedSettings {
    saved: Values,
}

impl ScopedSettings {
    /// Snapshot the current settings.
    pub fn new() -> Self {
        Self {
            saved: Settings::instance().read(),
        }
    }
}

impl Default for ScopedSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedSettings {
    fn drop(&mut self) {
        let saved = self.saved;
        Settings::instance().update(|v| *v = saved);
    }
}
