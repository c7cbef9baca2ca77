//! Synthetic spectral fields for the test suite and benchmarks.

pub mod generators;

pub use generators::{constant_field, radial_field, ramp_field, smooth_field};
