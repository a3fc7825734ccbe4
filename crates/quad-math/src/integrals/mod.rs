//! Numerical integration of sampled data.
//!
//! A [`SampleSet`](sample_set::SampleSet) holds equally spaced `(x, f(x))`
//! pairs. The rules in [`simpson`] integrate it; [`richardson`] compares the
//! result against a half-resolution copy to estimate the error, and
//! [`analysis`] compares against a known exact value.

pub mod analysis;
pub mod richardson;
pub mod sample_set;
pub mod simpson;
