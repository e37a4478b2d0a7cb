//! Exact rational arithmetic on 64-bit integers.
//!
//! See [`fraction::Fraction`] for the value type and its operations.

pub mod fraction;

pub use fraction::{Fraction, FractionError};
