//! Line surface brightness for a point in (density, metallicity, burstiness, Σ_SFR)
//!
//! Every function here follows the same recipe: derive `Σ_g`, `U` and the slab
//! column from `Σ_SFR`, evaluate the flux integrator with the layer temperatures
//! (100 K neutral, 10⁴ K ionized) and convert the flux to L☉/kpc².
//!
//! # Example
//! ```
//! use fir_lines_core::microphysics::{AtomicData, CoolingRates, IonStructure, OiiiTransition};
//! use fir_lines_core::surface_brightness::sigma_cii158;
//!
//! struct Toy;
//! impl IonStructure for Toy {
//!     fn ionized_column_density(&self, u: f64, _z: f64) -> f64 { 1e24 * u }
//!     fn front_column_density(&self, u: f64, z: f64) -> f64 { 1e24 * u + 1e22 / z }
//!     fn ionized_layer_column_integral(&self, u: f64, _z: f64) -> f64 { 5e23 * u }
//!     fn density_bounded_column_integral(&self, _u: f64, _z: f64, column: f64) -> f64 {
//!         0.5 * column
//!     }
//! }
//! impl CoolingRates for Toy {
//!     fn neutral_cooling_rate(&self, _t: f64) -> f64 { 1e-23 }
//!     fn ionized_cooling_rate(&self, _t: f64) -> f64 { 5e-24 }
//! }
//!
//! let sigma = sigma_cii158(&Toy, 2.0, 1.0, 1.0, 1.0);
//! assert!(sigma > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::SURFACE_BRIGHTNESS_CONVERSION;
use crate::core_types::{DerivedQuantities, LineInputs, ModelParameters, SlabConditions};
use crate::error::{BrightnessOrigin, ModelError, ModelResult};
use crate::microphysics::{AtomicData, CoolingRates, EmpiricalRelation, IonStructure, Microphysics};
use crate::physics::cii::{
    fcii_density_bounded, fcii_for_regime, fcii_ionization_bounded_n0,
    fcii_ionization_bounded_nf,
};
use crate::physics::oiii::{foiii52, foiii88};
use crate::physics::regime::CiiRegime;

/// Emergent flux (erg s⁻¹ cm⁻²) to surface brightness (L☉/kpc²)
#[inline]
pub fn flux_to_surface_brightness(flux: f64) -> f64 {
    flux * SURFACE_BRIGHTNESS_CONVERSION
}

/// Derived quantities and [CII] slab for one parameter point
fn cii_slab(inputs: &LineInputs, params: &ModelParameters) -> (DerivedQuantities, SlabConditions) {
    let derived =
        DerivedQuantities::from_star_formation(inputs.sigma_sfr, inputs.burstiness, params.ks_index);
    let slab = SlabConditions::from_inputs(inputs, &derived, params);
    (derived, slab)
}

// ============================================================================
// [CII] 158µm
// ============================================================================

/// [CII] regime of one parameter point
pub fn cii_regime<I>(ions: &I, inputs: &LineInputs, params: &ModelParameters) -> CiiRegime
where
    I: IonStructure + ?Sized,
{
    let (derived, _) = cii_slab(inputs, params);
    CiiRegime::classify(
        ions,
        derived.ionization_parameter,
        inputs.metallicity,
        derived.column,
    )
}

/// [CII] surface brightness, dispatching on the regime of the slab
/// (Ferrara et al. 2019, eq. 35)
pub fn sigma_cii158<M>(
    physics: &M,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
) -> f64
where
    M: IonStructure + CoolingRates + ?Sized,
{
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    sigma_cii158_with(physics, &ModelParameters::FIDUCIAL, &inputs)
}

/// [`sigma_cii158`] with explicit model parameters
pub fn sigma_cii158_with<M>(physics: &M, params: &ModelParameters, inputs: &LineInputs) -> f64
where
    M: IonStructure + CoolingRates + ?Sized,
{
    let (derived, slab) = cii_slab(inputs, params);
    let regime = CiiRegime::classify(
        physics,
        derived.ionization_parameter,
        inputs.metallicity,
        derived.column,
    );
    flux_to_surface_brightness(fcii_for_regime(physics, &slab, regime))
}

/// [CII] surface brightness assuming a density-bounded slab
pub fn sigma_cii_density_bounded<M>(
    physics: &M,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
) -> f64
where
    M: IonStructure + CoolingRates + ?Sized,
{
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    let (_, slab) = cii_slab(&inputs, &ModelParameters::FIDUCIAL);
    flux_to_surface_brightness(fcii_density_bounded(physics, &slab))
}

/// [CII] surface brightness assuming the neutral layer reaches the slab edge
pub fn sigma_cii_ionization_bounded_n0<M>(
    physics: &M,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
) -> f64
where
    M: IonStructure + CoolingRates + ?Sized,
{
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    let (_, slab) = cii_slab(&inputs, &ModelParameters::FIDUCIAL);
    flux_to_surface_brightness(fcii_ionization_bounded_n0(physics, &slab))
}

/// [CII] surface brightness assuming the neutral layer stops at the front
pub fn sigma_cii_ionization_bounded_nf<M>(
    physics: &M,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
) -> f64
where
    M: IonStructure + CoolingRates + ?Sized,
{
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    let (_, slab) = cii_slab(&inputs, &ModelParameters::FIDUCIAL);
    flux_to_surface_brightness(fcii_ionization_bounded_nf(physics, &slab))
}

// ============================================================================
// [OIII] 88µm AND 52µm
// ============================================================================

/// [OIII] 88µm surface brightness (Vallini et al. 2021)
pub fn sigma_oiii88<M>(
    physics: &M,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
) -> f64
where
    M: IonStructure + AtomicData + ?Sized,
{
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    sigma_oiii88_with(physics, &ModelParameters::FIDUCIAL, &inputs)
}

/// [`sigma_oiii88`] with explicit model parameters
pub fn sigma_oiii88_with<M>(physics: &M, params: &ModelParameters, inputs: &LineInputs) -> f64
where
    M: IonStructure + AtomicData + ?Sized,
{
    let (_, slab) = cii_slab(inputs, params);
    flux_to_surface_brightness(foiii88(
        physics,
        slab.density,
        slab.metallicity,
        slab.ionization_parameter,
        *slab.temperatures.ionized,
    ))
}

/// [OIII] 52µm surface brightness (Vallini et al. 2021)
pub fn sigma_oiii52<M>(
    physics: &M,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
) -> f64
where
    M: IonStructure + AtomicData + ?Sized,
{
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    sigma_oiii52_with(physics, &ModelParameters::FIDUCIAL, &inputs)
}

/// [`sigma_oiii52`] with explicit model parameters
pub fn sigma_oiii52_with<M>(physics: &M, params: &ModelParameters, inputs: &LineInputs) -> f64
where
    M: IonStructure + AtomicData + ?Sized,
{
    let (_, slab) = cii_slab(inputs, params);
    flux_to_surface_brightness(foiii52(
        physics,
        slab.density,
        slab.metallicity,
        slab.ionization_parameter,
        *slab.temperatures.ionized,
    ))
}

// ============================================================================
// COMBINED PREDICTION
// ============================================================================

/// All three lines for one parameter point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrediction {
    pub inputs: LineInputs,
    pub derived: DerivedQuantities,
    pub regime: CiiRegime,
    /// [CII] 158µm (L☉/kpc²)
    pub sigma_cii158: f64,
    /// [OIII] 88µm (L☉/kpc²)
    pub sigma_oiii88: f64,
    /// [OIII] 52µm (L☉/kpc²)
    pub sigma_oiii52: f64,
}

impl LinePrediction {
    /// [OIII] 88µm / [CII] 158µm surface brightness ratio
    pub fn oiii88_to_cii_ratio(&self) -> f64 {
        self.sigma_oiii88 / self.sigma_cii158
    }
}

/// Predict all three lines at the fiducial model parameters
pub fn predict_lines<M: Microphysics + ?Sized>(physics: &M, inputs: &LineInputs) -> LinePrediction {
    predict_lines_with(physics, &ModelParameters::FIDUCIAL, inputs)
}

/// [`predict_lines`] with explicit model parameters
pub fn predict_lines_with<M: Microphysics + ?Sized>(
    physics: &M,
    params: &ModelParameters,
    inputs: &LineInputs,
) -> LinePrediction {
    let (derived, _) = cii_slab(inputs, params);
    LinePrediction {
        inputs: *inputs,
        derived,
        regime: cii_regime(physics, inputs, params),
        sigma_cii158: sigma_cii158_with(physics, params, inputs),
        sigma_oiii88: sigma_oiii88_with(physics, params, inputs),
        sigma_oiii52: sigma_oiii52_with(physics, params, inputs),
    }
}

// ============================================================================
// COMPARISON WITH EMPIRICAL RELATIONS
// ============================================================================

fn checked_log10(origin: BrightnessOrigin, value: f64) -> ModelResult<f64> {
    if value > 0.0 {
        Ok(value.log10())
    } else {
        let err = ModelError::non_positive(origin, value);
        debug!(%err, "Cannot compare surface brightness in log space");
        Err(err)
    }
}

/// `log10(Σ_[CII] model) − log10(Σ_[CII] empirical)` at the same `Σ_SFR`
///
/// # Errors
///
/// Returns [`ModelError::NonPositiveSurfaceBrightness`] if either surface brightness
/// is zero, negative or NaN.
pub fn delta<M, R>(
    physics: &M,
    relation: &R,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
) -> ModelResult<f64>
where
    M: IonStructure + CoolingRates + ?Sized,
    R: EmpiricalRelation + ?Sized,
{
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    delta_with(physics, relation, &ModelParameters::FIDUCIAL, &inputs)
}

/// [`delta`] with explicit model parameters
///
/// # Errors
///
/// Returns [`ModelError::NonPositiveSurfaceBrightness`] if either surface brightness
/// is zero, negative or NaN.
pub fn delta_with<M, R>(
    physics: &M,
    relation: &R,
    params: &ModelParameters,
    inputs: &LineInputs,
) -> ModelResult<f64>
where
    M: IonStructure + CoolingRates + ?Sized,
    R: EmpiricalRelation + ?Sized,
{
    let modeled = checked_log10(
        BrightnessOrigin::Model,
        sigma_cii158_with(physics, params, inputs),
    )?;
    let empirical = checked_log10(
        BrightnessOrigin::Empirical,
        relation.surface_brightness(inputs.sigma_sfr),
    )?;
    Ok(modeled - empirical)
}
