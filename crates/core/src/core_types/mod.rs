//! Core types and utilities

pub mod slab;
pub mod units;

pub use slab::{DerivedQuantities, LineInputs, ModelParameters, SlabConditions, Temperatures};
pub use units::Kelvin;
