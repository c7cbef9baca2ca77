//! Multi-level iso-contour extraction for dense 2D scalar fields.
//!
//! Designed for spectral intensity maps (e.g. NMR planes) that are contoured
//! at hundreds of levels per draw. The extractor runs marching squares with
//! pre-linked vertex pairs, so polylines assemble in a single walk with no
//! segment-matching pass, and carries above-level bands from one level to the
//! next so that later levels scan only the columns that can still cross.
//!
//! Entry points:
//!
//! - [`contour`]: extract polylines for a monotonic level list;
//! - [`flatten`]: merge spectrum planes pixel-wise, keeping signed extremes;
//! - [`SpectrumField`] / [`OwnedSpectrumField`]: validated field views.

mod arena;
mod cell;
mod chain;
mod region;

pub mod error;
pub mod extract;
pub mod field;
pub mod flatten;

pub use chain::Polyline;
pub use error::{ContourError, Result};
pub use extract::contour;
pub use field::{OwnedSpectrumField, SpectrumField};
pub use flatten::flatten;
