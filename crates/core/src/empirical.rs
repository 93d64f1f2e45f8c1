//! Empirical [CII]-SFR relations
//!
//! # References
//! - De Looze, I. et al. (2014). "The applicability of far-infrared fine-structure
//!   lines as star formation rate tracers over wide ranges of metallicities and galaxy
//!   types." A&A 568, A62.

use serde::{Deserialize, Serialize};

use crate::microphysics::EmpiricalRelation;

/// Power law `log Σ_SFR = intercept + slope × log Σ_[CII]`, inverted for Σ_[CII]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLawRelation {
    pub intercept: f64,
    pub slope: f64,
}

/// Spatially resolved fit over the full De Looze et al. (2014) sample
pub const DE_LOOZE_2014_RESOLVED: PowerLawRelation = PowerLawRelation {
    intercept: -6.99,
    slope: 0.93,
};

impl PowerLawRelation {
    /// `log10` of the [CII] surface brightness (L☉/kpc²) at `sigma_sfr`
    pub fn log_surface_brightness(&self, sigma_sfr: f64) -> f64 {
        (sigma_sfr.log10() - self.intercept) / self.slope
    }
}

impl EmpiricalRelation for PowerLawRelation {
    fn surface_brightness(&self, sigma_sfr: f64) -> f64 {
        10f64.powf(self.log_surface_brightness(sigma_sfr))
    }
}
