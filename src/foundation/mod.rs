//! Shared primitives: virtual time, geometry, colors, errors and the seeded generator.

pub mod core;
pub mod error;
pub mod math;
