//! Gas-phase metal abundances
//!
//! Asplund et al. (2009) solar values, scaled linearly with metallicity.

use crate::constants::{SOLAR_CARBON_ABUNDANCE, SOLAR_OXYGEN_ABUNDANCE};

/// Oxygen abundance by number relative to hydrogen at metallicity `metallicity` (solar units)
#[inline]
pub fn oxygen_abundance(metallicity: f64) -> f64 {
    SOLAR_OXYGEN_ABUNDANCE * metallicity
}

/// Carbon abundance by number relative to hydrogen at metallicity `metallicity` (solar units)
#[inline]
pub fn carbon_abundance(metallicity: f64) -> f64 {
    SOLAR_CARBON_ABUNDANCE * metallicity
}
