//! Error types for quadrature-rs.
//!
//! Every failure the engine can report is a variant of a single
//! `thiserror`-derived enum. Rule preconditions are checked with the
//! `ensure!` macro and unconditional failures use `fail!`, both defined
//! here.

use thiserror::Error;

use crate::rule::Rule;

/// The top-level error type used throughout quadrature-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A sample set could not be built from the supplied data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A rule was invoked on data whose interval count it cannot handle.
    #[error("{rule} is not applicable to {intervals} interval(s)")]
    InapplicableRule {
        /// The rule that was requested.
        rule: Rule,
        /// Interval count of the offending sample set.
        intervals: usize,
    },

    /// Too few intervals for the requested computation.
    #[error("insufficient data: need at least {required} interval(s), got {intervals}")]
    InsufficientData {
        /// Minimum number of intervals required.
        required: usize,
        /// Interval count actually available.
        intervals: usize,
    },

    /// No even-prefix / 3/8-tail split exists for the interval count.
    #[error("cannot partition {intervals} interval(s) into a 1/3 prefix and a 3/8 tail")]
    UnsupportedPartition {
        /// Interval count of the offending sample set.
        intervals: usize,
    },

    /// A computation produced NaN or an infinity.
    #[error("numeric overflow: {0}")]
    NumericOverflow(String),
}

/// Shorthand `Result` type used throughout quadrature-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` unless `$cond` holds.
///
/// # Example
/// ```
/// use quad_core::{ensure, errors::Error};
/// fn positive(x: f64) -> quad_core::errors::Result<f64> {
///     ensure!(x > 0.0, Error::InvalidInput(format!("x must be positive, got {x}")));
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return `Err($err)` immediately.
///
/// # Example
/// ```
/// use quad_core::{fail, errors::Error};
/// fn always_err() -> quad_core::errors::Result<()> {
///     fail!(Error::UnsupportedPartition { intervals: 1 });
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return Err($err)
    };
}

/// Pass `value` through if it is finite, otherwise report which
/// computation overflowed.
pub fn check_finite(value: f64, what: &str) -> Result<f64> {
    ensure!(
        value.is_finite(),
        Error::NumericOverflow(format!("{what} produced {value}"))
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = Error::InapplicableRule {
            rule: Rule::Simpson13,
            intervals: 5,
        };
        assert_eq!(
            e.to_string(),
            "Simpson's 1/3 Rule is not applicable to 5 interval(s)"
        );
        let e = Error::InsufficientData {
            required: 4,
            intervals: 2,
        };
        assert_eq!(
            e.to_string(),
            "insufficient data: need at least 4 interval(s), got 2"
        );
    }

    #[test]
    fn check_finite_rejects_nan_and_inf() {
        assert_eq!(check_finite(1.5, "sum"), Ok(1.5));
        assert!(matches!(
            check_finite(f64::NAN, "sum"),
            Err(Error::NumericOverflow(_))
        ));
        assert!(matches!(
            check_finite(f64::NEG_INFINITY, "sum"),
            Err(Error::NumericOverflow(_))
        ));
    }
}
