//! Inputs and derived quantities of the slab model

use serde::{Deserialize, Serialize};

use crate::constants::{HII_TEMPERATURE, KS_INDEX, PDR_TEMPERATURE};
use crate::core_types::units::Kelvin;
use crate::physics::star_formation::{column_density, gas_surface_density, ionization_parameter};

/// Temperatures of the two emitting layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperatures {
    /// Neutral / photo-dissociation region layer
    pub pdr: Kelvin,
    /// Ionized (HII) layer
    pub ionized: Kelvin,
}

impl Temperatures {
    /// 100 K neutral gas, 10⁴ K ionized gas
    pub const FIDUCIAL: Temperatures = Temperatures {
        pdr: Kelvin::new(PDR_TEMPERATURE),
        ionized: Kelvin::new(HII_TEMPERATURE),
    };
}

impl Default for Temperatures {
    fn default() -> Self {
        Self::FIDUCIAL
    }
}

/// Model configuration shared by every surface-brightness call
///
/// The plain entry points (`sigma_cii158`, `sigma_oiii88`, ...) always use
/// [`ModelParameters::FIDUCIAL`]; the `*_with` variants accept an explicit set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParameters {
    /// Kennicutt-Schmidt index `n` in `Σ_SFR ∝ Σ_g^n`
    pub ks_index: f64,
    /// Layer temperatures
    pub temperatures: Temperatures,
}

impl ModelParameters {
    pub const FIDUCIAL: ModelParameters = ModelParameters {
        ks_index: KS_INDEX,
        temperatures: Temperatures::FIDUCIAL,
    };
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self::FIDUCIAL
    }
}

/// One point of the model parameter space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineInputs {
    /// `log10` of the hydrogen density (cm⁻³)
    pub log_density: f64,
    /// Metallicity in solar units
    pub metallicity: f64,
    /// Burstiness parameter `k` of the Kennicutt-Schmidt relation
    pub burstiness: f64,
    /// Star-formation-rate surface density (M☉/yr/kpc²)
    pub sigma_sfr: f64,
}

impl LineInputs {
    pub fn new(log_density: f64, metallicity: f64, burstiness: f64, sigma_sfr: f64) -> Self {
        Self {
            log_density,
            metallicity,
            burstiness,
            sigma_sfr,
        }
    }

    /// Linear hydrogen density (cm⁻³)
    #[inline]
    pub fn density(&self) -> f64 {
        10f64.powf(self.log_density)
    }
}

/// Quantities derived from the star-formation rate surface density
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedQuantities {
    /// Gas surface density `Σ_g` (M☉/kpc²)
    pub gas_surface_density: f64,
    /// Ionization parameter `U`
    pub ionization_parameter: f64,
    /// Total hydrogen column of the slab (cm⁻²)
    pub column: f64,
}

impl DerivedQuantities {
    /// Derive `Σ_g`, `U` and the slab column from `Σ_SFR` and the burstiness.
    ///
    /// Every surface-brightness function goes through here, so two calls with the
    /// same arguments always see identical numbers.
    pub fn from_star_formation(sigma_sfr: f64, burstiness: f64, ks_index: f64) -> Self {
        let gas_surface_density = gas_surface_density(sigma_sfr, burstiness, ks_index);
        Self {
            gas_surface_density,
            ionization_parameter: ionization_parameter(sigma_sfr, gas_surface_density),
            column: column_density(gas_surface_density),
        }
    }
}

/// Physical conditions of the emitting slab, as seen by the flux integrators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabConditions {
    /// Hydrogen density (cm⁻³)
    pub density: f64,
    /// Metallicity in solar units
    pub metallicity: f64,
    /// Ionization parameter `U`
    pub ionization_parameter: f64,
    /// Total hydrogen column of the slab (cm⁻²)
    pub column: f64,
    /// Layer temperatures
    pub temperatures: Temperatures,
}

impl SlabConditions {
    /// Slab for one parameter point, using the temperatures in `params`
    pub fn from_inputs(
        inputs: &LineInputs,
        derived: &DerivedQuantities,
        params: &ModelParameters,
    ) -> Self {
        Self {
            density: inputs.density(),
            metallicity: inputs.metallicity,
            ionization_parameter: derived.ionization_parameter,
            column: derived.column,
            temperatures: params.temperatures,
        }
    }

    /// Same slab with a different total column
    #[must_use]
    pub fn with_column(self, column: f64) -> Self {
        Self { column, ..self }
    }
}
