//! # quadrature
//!
//! Definite integrals of functions known only through equally spaced
//! samples, using Simpson-family rules.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than on `quad-core` / `quad-math` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use quadrature::{integrate, estimate_error, Rule, SampleSet};
//!
//! // f(x) = x² + 1 on [0, 4]
//! let samples = SampleSet::new(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0],
//!     vec![1.0, 2.0, 5.0, 10.0, 17.0],
//! )?;
//! let result = integrate(&samples, None)?;
//! assert_eq!(result.rule, Rule::Simpson13);
//! assert!((result.value - 76.0 / 3.0).abs() < 1e-12);
//!
//! let error = estimate_error(&samples, result.value)?;
//! assert!(error < 1e-12);
//! # Ok::<(), quadrature::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, error definitions, and settings.
pub use quad_core as core;

/// Quadrature rules, sample sets, error estimation, and reports.
pub use quad_math as math;

pub use quad_core::{Error, Real, Result, Rule, ScopedSettings, Settings, Size};
pub use quad_math::{
    combined_simpson, estimate_error, integrate, richardson, simpson13, simpson38, ErrorAnalysis,
    IntegrationReport, QuadratureResult, RichardsonEstimate, SampleSet,
};
