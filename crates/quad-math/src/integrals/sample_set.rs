//! Sampled integrands.
//!
//! A [`SampleSet`] is an immutable, ordered collection of `(x, f(x))` pairs
//! with strictly increasing abscissae. The rules assume the samples are
//! equally spaced and derive a single step size from the end points:
//!
//! $$h = \frac{x_n - x_0}{n}.$$
//!
//! Spacing is not enforced. A gap that strays from `h` by more than
//! [`Settings::spacing_tolerance`] is logged as a warning and the set is
//! accepted anyway.

use quad_core::{
    ensure,
    errors::{Error, Result},
    utilities::parse_columns,
    Real, Settings, Size,
};
use tracing::warn;

use crate::comparison::within_relative;

/// Ordered `(x, f(x))` samples of an integrand.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x: Vec<Real>,
    y: Vec<Real>,
    step: Real,
}

impl SampleSet {
    /// Build a sample set from abscissae `x` and ordinates `y`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if the lengths differ, fewer than two
    /// points are given, any `x` is not finite, or `x` is not strictly
    /// increasing.
    pub fn new(x: impl Into<Vec<Real>>, y: impl Into<Vec<Real>>) -> Result<Self> {
        let (x, y) = (x.into(), y.into());
        ensure!(
            x.len() == y.len(),
            Error::InvalidInput(format!(
                "x and y must have the same length (got {} and {})",
                x.len(),
                y.len()
            ))
        );
        ensure!(
            x.len() >= 2,
            Error::InvalidInput(format!("need at least 2 points, got {}", x.len()))
        );
        if let Some(i) = x.iter().position(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!("x[{i}] is not finite")));
        }
        if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::InvalidInput(format!(
                "x must be strictly increasing: x[{}] = {} follows x[{i}] = {}",
                i + 1,
                x[i + 1],
                x[i]
            )));
        }

        let set = Self::from_validated(x, y);
        set.warn_on_uneven_spacing();
        Ok(set)
    }

    /// Sample `f` on `intervals` equal sub-intervals of `[a, b]`.
    ///
    /// The abscissae are `a + i·h` for `i = 0..=intervals`, with
    /// `h = (b - a) / intervals`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `intervals` is zero, the bounds are
    /// not finite, or `a >= b`.
    pub fn from_fn<F: Fn(Real) -> Real>(f: F, a: Real, b: Real, intervals: Size) -> Result<Self> {
        ensure!(
            intervals >= 1,
            Error::InvalidInput("intervals must be > 0".into())
        );
        ensure!(
            a.is_finite() && b.is_finite() && a < b,
            Error::InvalidInput(format!("invalid integration range [{a}, {b}]"))
        );
        let h = (b - a) / intervals as Real;
        let x: Vec<Real> = (0..=intervals).map(|i| a + i as Real * h).collect();
        let y = x.iter().map(|&xi| f(xi)).collect::<Vec<_>>();
        Self::new(x, y)
    }

    /// Parse two-column `x f(x)` text into a sample set.
    ///
    /// Either every line is read and the set validates, or nothing is
    /// returned.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for malformed lines or data that fails
    /// [`SampleSet::new`].
    pub fn parse(text: &str) -> Result<Self> {
        let (x, y) = parse_columns(text)?;
        Self::new(x, y)
    }

    fn from_validated(x: Vec<Real>, y: Vec<Real>) -> Self {
        let n = x.len() - 1;
        let step = (x[n] - x[0]) / n as Real;
        Self { x, y, step }
    }

    fn warn_on_uneven_spacing(&self) {
        let tolerance = Settings::instance().spacing_tolerance();
        if let Some(i) = self
            .x
            .windows(2)
            .position(|w| !within_relative(w[1] - w[0], self.step, tolerance))
        {
            warn!(
                index = i,
                gap = self.x[i + 1] - self.x[i],
                step = self.step,
                "samples are not equally spaced; Simpson rules assume a uniform step"
            );
        }
    }

    /// Abscissae.
    pub fn x(&self) -> &[Real] {
        &self.x
    }

    /// Ordinates, `y[i] = f(x[i])`.
    pub fn y(&self) -> &[Real] {
        &self.y
    }

    /// Number of sample points.
    pub fn len(&self) -> Size {
        self.x.len()
    }

    /// Always `false`: a sample set holds at least two points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of sub-intervals, one less than the number of points.
    pub fn interval_count(&self) -> Size {
        self.x.len() - 1
    }

    /// Uniform step size derived from the end points.
    pub fn step_size(&self) -> Real {
        self.step
    }

    /// First abscissa.
    pub fn x_min(&self) -> Real {
        self.x[0]
    }

    /// Last abscissa.
    pub fn x_max(&self) -> Real {
        self.x[self.x.len() - 1]
    }

    /// Iterate over `(x, f(x))` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Copy the samples at indices `start..=end` into a new, independent set.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] unless `start < end < len()`.
    pub fn slice(&self, start: Size, end: Size) -> Result<Self> {
        ensure!(
            start < end && end < self.len(),
            Error::InvalidInput(format!(
                "slice [{start}, {end}] is not a valid range of {} points",
                self.len()
            ))
        );
        Ok(Self::from_validated(
            self.x[start..=end].to_vec(),
            self.y[start..=end].to_vec(),
        ))
    }

    /// Copy every other sample (indices 0, 2, 4, …) into a new set at half
    /// the resolution.
    ///
    /// # Errors
    /// Returns [`Error::InsufficientData`] if fewer than two intervals exist,
    /// and [`Error::InvalidInput`] if the interval count is odd, since the
    /// last point would be dropped and the halved set would cover a shorter
    /// range.
    pub fn every_other(&self) -> Result<Self> {
        let n = self.interval_count();
        ensure!(
            n >= 2,
            Error::InsufficientData {
                required: 2,
                intervals: n,
            }
        );
        ensure!(
            n % 2 == 0,
            Error::InvalidInput(format!("cannot halve an odd interval count ({n})"))
        );
        let x = self.x.iter().copied().step_by(2).collect();
        let y = self.y.iter().copied().step_by(2).collect();
        Ok(Self::from_validated(x, y))
    }
}
