//! Simpson-family rules on sampled data.
//!
//! * [`simpson13`]: composite 1/3 rule, even interval counts.
//! * [`simpson38`]: 3/8 rule, exactly three intervals.
//! * [`combined_simpson`]: an even-length 1/3-rule prefix followed by one
//!   3/8-rule tail, for odd interval counts.
//!
//! [`integrate`] picks one of them from the interval count unless the caller
//! asks for a specific rule. All rules are exact for cubics.

use quad_core::{
    ensure,
    errors::{check_finite, Error, Result},
    fail, Real, Rule,
};
use tracing::{debug, trace};

use super::sample_set::SampleSet;

/// The value of an integral together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult {
    /// Approximate integral over `[x_min, x_max]`.
    pub value: Real,
    /// Rule that was applied.
    pub rule: Rule,
}

/// Composite Simpson 1/3 rule.
///
/// $$\frac{h}{3}\Big[y_0 + 4\sum_{i\ \mathrm{odd}} y_i
///   + 2\sum_{0<i<n,\ i\ \mathrm{even}} y_i + y_n\Big]$$
///
/// # Errors
/// [`Error::InapplicableRule`] if the interval count is odd;
/// [`Error::NumericOverflow`] if the result is not finite.
pub fn simpson13(samples: &SampleSet) -> Result<Real> {
    let n = samples.interval_count();
    ensure!(
        n % 2 == 0,
        Error::InapplicableRule {
            rule: Rule::Simpson13,
            intervals: n,
        }
    );
    let y = samples.y();
    let mut sum = y[0] + y[n];
    for i in (1..n).step_by(2) {
        sum += 4.0 * y[i];
    }
    for i in (2..n).step_by(2) {
        sum += 2.0 * y[i];
    }
    trace!(intervals = n, sum, "simpson 1/3 weighted sum");
    check_finite(samples.step_size() / 3.0 * sum, "Simpson's 1/3 Rule")
}

/// Simpson 3/8 rule on exactly four points.
///
/// $$\frac{3h}{8}\big(y_0 + 3y_1 + 3y_2 + y_3\big)$$
///
/// # Errors
/// [`Error::InsufficientData`] for fewer than three intervals,
/// [`Error::InapplicableRule`] for more, and [`Error::NumericOverflow`] if
/// the result is not finite.
pub fn simpson38(samples: &SampleSet) -> Result<Real> {
    let n = samples.interval_count();
    ensure!(
        n >= 3,
        Error::InsufficientData {
            required: 3,
            intervals: n,
        }
    );
    ensure!(
        n == 3,
        Error::InapplicableRule {
            rule: Rule::Simpson38,
            intervals: n,
        }
    );
    let y = samples.y();
    let sum = y[0] + 3.0 * y[1] + 3.0 * y[2] + y[3];
    trace!(sum, "simpson 3/8 weighted sum");
    check_finite(3.0 * samples.step_size() / 8.0 * sum, "Simpson's 3/8 Rule")
}

/// Simpson's rule for any interval count that admits a partition.
///
/// Even counts delegate to [`simpson13`] over the whole set and a count of
/// three is a single [`simpson38`] panel. Any other odd count `n` is split
/// into the 1/3-rule prefix `0..=n-3` and the 3/8-rule tail `n-3..=n`;
/// the two pieces share only the point `x[n-3]`, so their sum covers every
/// interval exactly once.
///
/// # Errors
/// [`Error::UnsupportedPartition`] for a single interval, plus anything the
/// underlying rules report.
pub fn combined_simpson(samples: &SampleSet) -> Result<Real> {
    let n = samples.interval_count();
    if n % 2 == 0 {
        return simpson13(samples);
    }
    match n {
        1 => fail!(Error::UnsupportedPartition { intervals: n }),
        3 => simpson38(samples),
        _ => {
            let split = n - 3;
            debug!(intervals = n, split, "1/3 prefix plus 3/8 tail");
            let head = simpson13(&samples.slice(0, split)?)?;
            let tail = simpson38(&samples.slice(split, n)?)?;
            check_finite(head + tail, "Combined Simpson's Rule")
        }
    }
}

/// Integrate `samples`, optionally forcing a specific rule.
///
/// Without a hint the rule follows the interval count: even uses the 1/3
/// rule, three uses the 3/8 rule, anything else the combined rule.
///
/// # Errors
/// Whatever the selected rule reports.
pub fn integrate(samples: &SampleSet, hint: Option<Rule>) -> Result<QuadratureResult> {
    let n = samples.interval_count();
    let rule = hint.unwrap_or_else(|| Rule::select(n));
    debug!(intervals = n, %rule, forced = hint.is_some(), "integrating samples");
    let value = match rule {
        Rule::Simpson13 => simpson13(samples)?,
        Rule::Simpson38 => simpson38(samples)?,
        Rule::Combined => combined_simpson(samples)?,
    };
    Ok(QuadratureResult { value, rule })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cubic(intervals: usize) -> SampleSet {
        SampleSet::from_fn(|x| x * x * x, 0.0, 2.0, intervals).unwrap()
    }

    #[test]
    fn simpson13_exact_for_cubic() {
        // ∫₀² x³ dx = 4
        let result = simpson13(&cubic(4)).unwrap();
        assert_abs_diff_eq!(result, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson13_quadratic_table() {
        let s = SampleSet::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 5.0, 10.0, 17.0])
            .unwrap();
        // ∫₀⁴ (x² + 1) dx = 64/3 + 4
        assert_abs_diff_eq!(simpson13(&s).unwrap(), 76.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson13_rejects_odd_count() {
        assert_eq!(
            simpson13(&cubic(3)),
            Err(Error::InapplicableRule {
                rule: Rule::Simpson13,
                intervals: 3
            })
        );
    }

    #[test]
    fn simpson38_exact_for_quadratic() {
        // ∫₀³ x² dx = 9
        let s = SampleSet::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
        assert_abs_diff_eq!(simpson38(&s).unwrap(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson38_requires_three_intervals() {
        assert_eq!(
            simpson38(&cubic(2)),
            Err(Error::InsufficientData {
                required: 3,
                intervals: 2
            })
        );
        assert_eq!(
            simpson38(&cubic(5)),
            Err(Error::InapplicableRule {
                rule: Rule::Simpson38,
                intervals: 5
            })
        );
    }

    #[test]
    fn combined_delegates_on_even_counts() {
        for n in [2, 4, 6, 10] {
            let s = SampleSet::from_fn(|x| x.sin(), 0.0, 1.0, n).unwrap();
            assert_eq!(combined_simpson(&s), simpson13(&s));
        }
    }

    #[test]
    fn combined_exact_for_cubic_on_odd_counts() {
        for n in [3, 5, 7, 9] {
            let result = combined_simpson(&cubic(n)).unwrap();
            assert_abs_diff_eq!(result, 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn combined_splits_prefix_and_tail() {
        let s = SampleSet::from_fn(|x| x.exp(), 0.0, 1.0, 7).unwrap();
        let head = simpson13(&s.slice(0, 4).unwrap()).unwrap();
        let tail = simpson38(&s.slice(4, 7).unwrap()).unwrap();
        assert_eq!(combined_simpson(&s).unwrap(), head + tail);
    }

    #[test]
    fn combined_single_interval_has_no_partition() {
        let s = SampleSet::new(vec![0.0, 1.0], vec![1.0, 1.0]).unwrap();
        assert_eq!(
            combined_simpson(&s),
            Err(Error::UnsupportedPartition { intervals: 1 })
        );
    }

    #[test]
    fn integrate_auto_selects_rule() {
        assert_eq!(integrate(&cubic(4), None).unwrap().rule, Rule::Simpson13);
        assert_eq!(integrate(&cubic(3), None).unwrap().rule, Rule::Simpson38);
        assert_eq!(integrate(&cubic(5), None).unwrap().rule, Rule::Combined);
    }

    #[test]
    fn integrate_honours_hint() {
        let r = integrate(&cubic(4), Some(Rule::Combined)).unwrap();
        assert_eq!(r.rule, Rule::Combined);
        assert_abs_diff_eq!(r.value, 4.0, epsilon = 1e-12);
        assert!(matches!(
            integrate(&cubic(4), Some(Rule::Simpson38)),
            Err(Error::InapplicableRule { .. })
        ));
    }

    #[test]
    fn non_finite_samples_surface_as_overflow() {
        let s = SampleSet::new(vec![0.0, 1.0, 2.0], vec![1.0, f64::INFINITY, 1.0]).unwrap();
        assert!(matches!(simpson13(&s), Err(Error::NumericOverflow(_))));
        let s = SampleSet::new(vec![0.0, 1.0, 2.0], vec![1.0, f64::MAX, f64::MAX]).unwrap();
        assert!(matches!(simpson13(&s), Err(Error::NumericOverflow(_))));
    }
}
