//! # quad-core
//!
//! Core types, error definitions, and settings for quadrature-rs.
//!
//! This crate provides the building blocks shared by the rest of the
//! workspace – type aliases, the error enum with its `ensure!` / `fail!`
//! macros, process-wide `Settings`, and small text helpers used when
//! reading and reporting sampled data.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Simpson-family rule identifiers.
pub mod rule;

/// Global library settings (spacing tolerance, report precision).
pub mod settings;

/// Text parsing and formatting helpers.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use rule::Rule;
pub use settings::{ScopedSettings, Settings};
