//! Borrowed views over row-major 2D sample data.
//!
//! A spectrum plane arrives as a flat `&[f32]` in row-major order: the row
//! index is the slow axis (caller-facing y), the column index the fast axis
//! (x). `SpectrumField` pairs the buffer with its shape and validates the two
//! against each other once, so the hot scan loops can index without checks.

use crate::error::{ContourError, Result};

/// A borrowed, immutable 2D field of 32-bit float samples.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumField<'a> {
    data: &'a [f32],
    rows: usize,
    cols: usize,
}

impl<'a> SpectrumField<'a> {
    /// Wrap a row-major sample buffer of shape `(rows, cols)`.
    ///
    /// Fails with [`ContourError::InvalidShape`] when the buffer length does
    /// not equal `rows * cols`.
    pub fn from_slice(data: &'a [f32], rows: usize, cols: usize) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| ContourError::invalid_shape(format!("{rows} x {cols} overflows")))?;
        if data.len() != expected {
            return Err(ContourError::invalid_shape(format!(
                "buffer holds {} samples, shape {rows} x {cols} needs {expected}",
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Sample at row `r`, column `c`.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> f32 {
        debug_assert!(r < self.rows && c < self.cols);
        self.data[r * self.cols + c]
    }

    /// Number of rows (slow axis).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (fast axis).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The underlying row-major buffer.
    pub fn data(&self) -> &'a [f32] {
        self.data
    }
}

/// An owned sample field, decoded from raw bytes.
#[derive(Debug, Clone)]
pub struct OwnedSpectrumField {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl OwnedSpectrumField {
    /// Decode a little-endian IEEE-754 float32 byte buffer of shape
    /// `(rows, cols)`.
    ///
    /// Fails with [`ContourError::InvalidDtype`] when the byte length is not
    /// a multiple of 4, and [`ContourError::InvalidShape`] when the sample
    /// count does not match the shape.
    pub fn from_bytes(bytes: &[u8], rows: usize, cols: usize) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(ContourError::invalid_dtype(format!(
                "{} bytes is not a whole number of float32 samples",
                bytes.len()
            )));
        }
        let data: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        SpectrumField::from_slice(&data, rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    /// Borrow as a [`SpectrumField`] view.
    pub fn field(&self) -> SpectrumField<'_> {
        SpectrumField {
            data: &self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}
