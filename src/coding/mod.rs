//! Encoding and decoding of the error correction coding scheme applied to transmitted
//! words.

pub mod golay;
