//! Physical constants and fixed model tables
//!
//! Everything is in cgs units unless stated otherwise.

/// Boltzmann constant (erg/K)
pub const K_BOLTZMANN: f64 = 1.38065e-16;

/// Electron volt to erg conversion (erg/eV)
pub const EV_TO_ERG: f64 = 1.602e-12;

// ============================================================================
// SOLAR ABUNDANCES (Asplund et al. 2009)
// ============================================================================

/// Solar oxygen abundance by number relative to hydrogen
pub const SOLAR_OXYGEN_ABUNDANCE: f64 = 4.90e-4;

/// Solar carbon abundance by number relative to hydrogen
pub const SOLAR_CARBON_ABUNDANCE: f64 = 2.7e-4;

// ============================================================================
// STAR FORMATION SCALINGS
// ============================================================================

/// Default Kennicutt-Schmidt index
pub const KS_INDEX: f64 = 1.4;

/// Kennicutt-Schmidt normalisation (`Σ_SFR = k × 1e-12 × Σ_g^n`)
pub const KS_NORMALISATION: f64 = 1e-12;

/// Ionization parameter normalisation, Ferrara et al. (2019) eq. 38
pub const IONIZATION_PARAMETER_NORMALISATION: f64 = 1.7e14;

/// Hydrogen column (cm⁻²) corresponding to `GAS_SURFACE_DENSITY_PER_COLUMN`
pub const REFERENCE_COLUMN: f64 = 1e22;

/// Gas surface density (M☉/kpc²) that carries `REFERENCE_COLUMN`
pub const GAS_SURFACE_DENSITY_PER_COLUMN: f64 = 7.5e7;

// ============================================================================
// [CII] 158µm TRANSITION
// ============================================================================

/// Statistical weight of the upper level (²P₃/₂)
pub const CII_G_UPPER: f64 = 4.0;

/// Statistical weight of the lower level (²P₁/₂)
pub const CII_G_LOWER: f64 = 2.0;

/// Transition energy (eV)
pub const CII_TRANSITION_ENERGY_EV: f64 = 0.0079;

/// Transition energy (erg)
pub const CII_TRANSITION_ENERGY: f64 = EV_TO_ERG * CII_TRANSITION_ENERGY_EV;

/// Einstein A coefficient (s⁻¹)
pub const CII_EINSTEIN_A: f64 = 2.4e-6;

/// Density (cm⁻³) above which level populations are taken to be in LTE.
/// Densities equal to the threshold still use the collisional rates.
pub const CII_LTE_DENSITY_THRESHOLD: f64 = 3300.0;

// ============================================================================
// LAYER TEMPERATURES
// ============================================================================

/// Neutral (PDR) layer temperature (K)
pub const PDR_TEMPERATURE: f64 = 100.0;

/// Ionized layer temperature (K)
pub const HII_TEMPERATURE: f64 = 1e4;

// ============================================================================
// [OIII] IONIZATION CORRECTION
// ============================================================================

/// `log10(U)` anchor points of the O⁺⁺ fraction table
pub const OIII_LOG_U_ANCHORS: [f64; 3] = [-3.5, -2.5, -1.5];

/// O⁺⁺ fraction of the ionized-layer oxygen at each anchor
pub const OIII_FRACTION_ANCHORS: [f64; 3] = [0.10994503, 0.73298314, 0.96966708];

// ============================================================================
// OUTPUT UNITS
// ============================================================================

/// Emergent flux (erg s⁻¹ cm⁻²) to surface brightness (L☉/kpc²)
pub const SURFACE_BRIGHTNESS_CONVERSION: f64 = 2.474e9;
