//! Error analysis against a known exact integral.
//!
//! When the samples come from an analytic integrand the true value is
//! available, so the actual error can be reported next to the Richardson
//! estimate and the two compared.

use std::fmt;

use quad_core::{
    utilities::{format_percent, format_real},
    Real, Settings,
};

/// Actual and (optionally) estimated error of a numerical integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorAnalysis {
    /// Exact integral.
    pub exact: Real,
    /// Numerical result being assessed.
    pub result: Real,
    /// `|exact - result|`.
    pub absolute_error: Real,
    /// Absolute error as a percentage of `|exact|`; `None` when `exact` is 0.
    pub relative_error_percent: Option<Real>,
    /// Richardson estimate of the error, if one was supplied.
    pub estimated_error: Option<Real>,
}

impl ErrorAnalysis {
    /// Compare `result` with the `exact` integral.
    pub fn new(exact: Real, result: Real) -> Self {
        let absolute_error = (exact - result).abs();
        let relative_error_percent = if exact == 0.0 {
            None
        } else {
            Some(absolute_error / exact.abs() * 100.0)
        };
        Self {
            exact,
            result,
            absolute_error,
            relative_error_percent,
            estimated_error: None,
        }
    }

    /// Attach an estimated error (e.g. from
    /// [`estimate_error`](super::richardson::estimate_error)).
    pub fn with_estimate(mut self, estimated_error: Real) -> Self {
        self.estimated_error = Some(estimated_error);
        self
    }

    /// How well the estimate matches the actual error, in percent:
    /// `(1 - |estimated - actual| / actual) · 100`.
    ///
    /// `None` without an estimate or when the actual error is zero.
    pub fn estimation_accuracy_percent(&self) -> Option<Real> {
        let estimated = self.estimated_error?;
        if self.absolute_error == 0.0 {
            return None;
        }
        Some((1.0 - (estimated - self.absolute_error).abs() / self.absolute_error) * 100.0)
    }
}

/// Renders one line per quantity. The formatter precision (`{:.3}`) sets the
/// decimals; without one, [`Settings::report_precision`] is used. Lines for a
/// missing estimate are left out.
impl fmt::Display for ErrorAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f
            .precision()
            .unwrap_or_else(|| Settings::instance().report_precision());
        writeln!(f, "Error analysis")?;
        writeln!(f, "Exact value: {}", format_real(self.exact, decimals))?;
        writeln!(f, "Numerical result: {}", format_real(self.result, decimals))?;
        writeln!(
            f,
            "Absolute error: {}",
            format_real(self.absolute_error, decimals)
        )?;
        match self.relative_error_percent {
            Some(percent) => writeln!(
                f,
                "Relative error: {}",
                format_percent(percent / 100.0, decimals)
            )?,
            None => writeln!(f, "Relative error: n/a")?,
        }
        if let Some(estimated) = self.estimated_error {
            writeln!(f, "Estimated error: {}", format_real(estimated, decimals))?;
        }
        if let Some(accuracy) = self.estimation_accuracy_percent() {
            writeln!(
                f,
                "Estimation accuracy: {}",
                format_percent(accuracy / 100.0, decimals)
            )?;
        }
        Ok(())
    }
}
