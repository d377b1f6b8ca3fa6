//! Encoding and decoding of the (23, 12, 7) standard Golay code.

extern crate binfield_matrix;
extern crate num;

pub mod coding;
pub mod error;
pub mod stats;
