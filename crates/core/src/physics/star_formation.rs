//! Gas properties derived from the star-formation-rate surface density
//!
//! # Formulas
//! ```text
//! Σ_g    = (Σ_SFR / (k × 10⁻¹²))^(1/n)        Kennicutt-Schmidt, inverted
//! U      = 1.7×10¹⁴ × Σ_SFR / Σ_g²            Ferrara et al. (2019) eq. 38
//! N_H    = Σ_g × 10²² / 7.5×10⁷
//! ```
//!
//! Units: `Σ_SFR` in M☉/yr/kpc², `Σ_g` in M☉/kpc², `N_H` in cm⁻².
//! Non-physical inputs are not rejected; they come back as NaN or infinity.

use crate::constants::{
    GAS_SURFACE_DENSITY_PER_COLUMN, IONIZATION_PARAMETER_NORMALISATION, KS_NORMALISATION,
    REFERENCE_COLUMN,
};

/// Gas surface density from the Kennicutt-Schmidt relation with burstiness `burstiness`
///
/// # Arguments
/// * `sigma_sfr` - SFR surface density (M☉/yr/kpc²)
/// * `burstiness` - Upward deviation `k` from the Kennicutt-Schmidt relation
/// * `ks_index` - Kennicutt-Schmidt index (1.4 in the fiducial model)
pub fn gas_surface_density(sigma_sfr: f64, burstiness: f64, ks_index: f64) -> f64 {
    ((burstiness * KS_NORMALISATION).recip() * sigma_sfr).powf(ks_index.recip())
}

/// Ionization parameter from the SFR and gas surface densities
pub fn ionization_parameter(sigma_sfr: f64, gas_surface_density: f64) -> f64 {
    IONIZATION_PARAMETER_NORMALISATION * (sigma_sfr / (gas_surface_density * gas_surface_density))
}

/// Hydrogen column density (cm⁻²) of a slab with gas surface density `gas_surface_density`
pub fn column_density(gas_surface_density: f64) -> f64 {
    (gas_surface_density * REFERENCE_COLUMN) / GAS_SURFACE_DENSITY_PER_COLUMN
}
