//! Richardson error estimate for the composite 1/3 rule.
//!
//! Simpson's rule has an `O(h⁴)` error term, so halving the resolution
//! multiplies the error by roughly `2⁴ = 16`. With `S_h` the fine result and
//! `S_2h` the result over every other sample,
//!
//! $$E_h \approx \frac{|S_{2h} - S_h|}{2^4 - 1}.$$
//!
//! The half-resolution set is a private copy; the input is never touched.

use quad_core::{
    ensure,
    errors::{check_finite, Error, Result},
    Real, Rule,
};
use tracing::debug;

use super::{sample_set::SampleSet, simpson::simpson13};

const RICHARDSON_DENOMINATOR: Real = 15.0;

/// Fine and coarse results plus the derived error estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RichardsonEstimate {
    /// 1/3-rule result over all samples.
    pub fine: Real,
    /// 1/3-rule result over every other sample.
    pub coarse: Real,
    /// Estimated error of `fine`.
    pub error: Real,
    /// `fine + (fine - coarse) / 15`, the extrapolated integral.
    pub extrapolated: Real,
}

fn coarse_result(samples: &SampleSet) -> Result<Real> {
    let n = samples.interval_count();
    ensure!(
        n >= 4,
        Error::InsufficientData {
            required: 4,
            intervals: n,
        }
    );
    ensure!(
        n % 2 == 0,
        Error::InapplicableRule {
            rule: Rule::Simpson13,
            intervals: n,
        }
    );
    simpson13(&samples.every_other()?)
}

/// Estimate the error of `fine`, a 1/3-rule result over `samples`.
///
/// # Errors
/// [`Error::InsufficientData`] for fewer than four intervals,
/// [`Error::InapplicableRule`] if the interval count (or half of it) is odd.
pub fn estimate_error(samples: &SampleSet, fine: Real) -> Result<Real> {
    let coarse = coarse_result(samples)?;
    let error = (coarse - fine).abs() / RICHARDSON_DENOMINATOR;
    debug!(fine, coarse, error, "richardson error estimate");
    check_finite(error, "Richardson error estimate")
}

/// Compute the 1/3-rule result over `samples` together with its Richardson
/// error estimate and extrapolated value.
///
/// # Errors
/// Same as [`estimate_error`].
pub fn richardson(samples: &SampleSet) -> Result<RichardsonEstimate> {
    let coarse = coarse_result(samples)?;
    let fine = simpson13(samples)?;
    let delta = fine - coarse;
    Ok(RichardsonEstimate {
        fine,
        coarse,
        error: check_finite(delta.abs() / RICHARDSON_DENOMINATOR, "Richardson error estimate")?,
        extrapolated: check_finite(fine + delta / RICHARDSON_DENOMINATOR, "Richardson extrapolation")?,
    })
}
