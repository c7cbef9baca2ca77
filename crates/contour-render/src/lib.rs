//! Packing of contour polylines into GPU-ready line-segment buffers.
//!
//! [`GlBufferBuilder`] accumulates polylines from any number of levels into a
//! single interleaved set of vertex, index and colour buffers suitable for a
//! `GL_LINES` draw call. [`pack_planes`] drives the whole pipeline for a set
//! of spectrum planes: optional plane flattening, positive and negative level
//! extraction, then packing.

pub mod pack;

pub use pack::{pack_planes, ContourBuffers, GlBufferBuilder, Rgba};
