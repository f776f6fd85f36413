//! Conversion of positional text into grid dimensions
//!
//! Two parsers are provided: a loose one that mirrors C's `atoi` and never
//! fails, and a strict one that rejects anything but a plain non-negative
//! decimal. [`DimensionPolicy`] picks between them.

pub mod dimension;

pub use dimension::{parse_dimension, parse_leading_int, DimensionPolicy};
