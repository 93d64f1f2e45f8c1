//! C ABI for the far-infrared line model
//!
//! Every function returns a `FirLinesErrorCode` and writes its result through an
//! out-pointer. Collaborators (ionic structure, cooling rates, atomic data and
//! empirical relations) are passed in as callback tables, so drivers written in
//! C, C++ or Python (ctypes/cffi) can plug in their own solvers.

mod callbacks;
mod error;
mod helpers;

pub use callbacks::{
    ColumnCallback, ColumnIntegralCallback, EmissivityCallback, FirLinesEmpiricalRelation,
    FirLinesMicrophysics, FirLinesOiiiTransition, PopulationsCallback, RateCallback,
    RelationCallback, FIR_LINES_MAX_LEVELS,
};
pub use error::{fir_lines_get_last_error, fir_lines_get_last_error_code, FirLinesErrorCode};

use callbacks::{CallbackPhysics, CallbackRelation};
use error::DefaultFirLinesError;
use fir_lines_core::{
    surface_brightness::{cii_regime, sigma_cii158_with, sigma_oiii52_with, sigma_oiii88_with},
    CiiRegime, LineInputs, ModelParameters, DE_LOOZE_2014_RESOLVED,
};
use helpers::{track_error, write_success};

/// [CII] emission regime as seen from C
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirLinesCiiRegime {
    /// Fully ionized slab
    DensityBounded = 0,
    /// Neutral layer reaches the slab edge
    IonizationBoundedN0 = 1,
    /// Neutral layer stops at the photo-dissociation front
    IonizationBoundedNF = 2,
}

impl From<CiiRegime> for FirLinesCiiRegime {
    fn from(regime: CiiRegime) -> Self {
        match regime {
            CiiRegime::DensityBounded => FirLinesCiiRegime::DensityBounded,
            CiiRegime::IonizationBoundedN0 => FirLinesCiiRegime::IonizationBoundedN0,
            CiiRegime::IonizationBoundedNF => FirLinesCiiRegime::IonizationBoundedNF,
        }
    }
}

/// Validate the callback table and output pointer shared by every entry point.
///
/// # Safety
/// `physics` must be null or point to a valid `FirLinesMicrophysics`.
unsafe fn checked_physics<T>(
    physics: *const FirLinesMicrophysics,
    out: *mut T,
    out_name: &str,
) -> Result<CallbackPhysics, DefaultFirLinesError> {
    if out.is_null() {
        return Err(DefaultFirLinesError::null_pointer(out_name));
    }
    let Some(table) = physics.as_ref() else {
        return Err(DefaultFirLinesError::null_pointer("physics"));
    };
    CallbackPhysics::try_from(table)
}

/// Evaluate a surface-brightness function at one parameter point.
///
/// # Safety
/// Pointers as for the public entry points.
unsafe fn surface_brightness_entry(
    physics: *const FirLinesMicrophysics,
    inputs: &LineInputs,
    out_value: *mut f64,
    evaluate: impl FnOnce(&CallbackPhysics, &LineInputs) -> f64,
) -> FirLinesErrorCode {
    match checked_physics(physics, out_value, "out_value") {
        Ok(physics) => write_success(out_value, evaluate(&physics, inputs)),
        Err(err) => track_error(&err),
    }
}

/// [CII] 158µm surface brightness (L☉/kpc²), dispatching on the slab regime.
///
/// # Returns
/// - `Ok` on success, with `out_value` set
/// - `NullPointer` if `physics` or `out_value` is null
/// - `MissingCallback` if a required callback is null
///
/// Non-physical inputs give NaN or infinity in `out_value`, not an error.
///
/// # Safety
/// `physics` must point to a valid callback table and `out_value` to writable memory.
#[no_mangle]
pub unsafe extern "C" fn fir_lines_sigma_cii158(
    physics: *const FirLinesMicrophysics,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
    out_value: *mut f64,
) -> FirLinesErrorCode {
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    surface_brightness_entry(physics, &inputs, out_value, |physics, inputs| {
        sigma_cii158_with(physics, &ModelParameters::FIDUCIAL, inputs)
    })
}

/// [OIII] 88µm surface brightness (L☉/kpc²).
///
/// # Safety
/// `physics` must point to a valid callback table and `out_value` to writable memory.
#[no_mangle]
pub unsafe extern "C" fn fir_lines_sigma_oiii88(
    physics: *const FirLinesMicrophysics,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
    out_value: *mut f64,
) -> FirLinesErrorCode {
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    surface_brightness_entry(physics, &inputs, out_value, |physics, inputs| {
        sigma_oiii88_with(physics, &ModelParameters::FIDUCIAL, inputs)
    })
}

/// [OIII] 52µm surface brightness (L☉/kpc²).
///
/// # Safety
/// `physics` must point to a valid callback table and `out_value` to writable memory.
#[no_mangle]
pub unsafe extern "C" fn fir_lines_sigma_oiii52(
    physics: *const FirLinesMicrophysics,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
    out_value: *mut f64,
) -> FirLinesErrorCode {
    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    surface_brightness_entry(physics, &inputs, out_value, |physics, inputs| {
        sigma_oiii52_with(physics, &ModelParameters::FIDUCIAL, inputs)
    })
}

/// [CII] emission regime of the slab. The regime does not depend on density.
///
/// # Safety
/// `physics` must point to a valid callback table and `out_regime` to writable memory.
#[no_mangle]
pub unsafe extern "C" fn fir_lines_classify_regime(
    physics: *const FirLinesMicrophysics,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
    out_regime: *mut FirLinesCiiRegime,
) -> FirLinesErrorCode {
    match checked_physics(physics, out_regime, "out_regime") {
        Ok(physics) => {
            let inputs = LineInputs::new(0.0, metallicity, burstiness, sigma_sfr);
            let regime = cii_regime(&physics, &inputs, &ModelParameters::FIDUCIAL);
            write_success(out_regime, regime.into())
        }
        Err(err) => track_error(&err),
    }
}

/// `log10(Σ_[CII] model) − log10(Σ_[CII] empirical)` with a caller-supplied relation.
///
/// # Returns
/// - `Ok` on success, with `out_value` set
/// - `NullPointer` if any pointer is null
/// - `MissingCallback` if a required callback is null
/// - `DomainError` if either surface brightness is not positive
///
/// # Safety
/// `physics` and `relation` must point to valid callback tables and `out_value` to
/// writable memory.
#[no_mangle]
pub unsafe extern "C" fn fir_lines_delta(
    physics: *const FirLinesMicrophysics,
    relation: *const FirLinesEmpiricalRelation,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
    out_value: *mut f64,
) -> FirLinesErrorCode {
    let physics = match checked_physics(physics, out_value, "out_value") {
        Ok(physics) => physics,
        Err(err) => return track_error(&err),
    };
    let Some(relation) = relation.as_ref() else {
        return track_error(&DefaultFirLinesError::null_pointer("relation"));
    };
    let relation = match CallbackRelation::try_from(relation) {
        Ok(relation) => relation,
        Err(err) => return track_error(&err),
    };

    let inputs = LineInputs::new(log_density, metallicity, burstiness, sigma_sfr);
    match fir_lines_core::surface_brightness::delta_with(
        &physics,
        &relation,
        &ModelParameters::FIDUCIAL,
        &inputs,
    ) {
        Ok(value) => write_success(out_value, value),
        Err(err) => track_error(&DefaultFirLinesError::from(err)),
    }
}

/// `Delta` against the resolved De Looze et al. (2014) relation.
///
/// # Safety
/// `physics` must point to a valid callback table and `out_value` to writable memory.
#[no_mangle]
pub unsafe extern "C" fn fir_lines_delta_de_looze(
    physics: *const FirLinesMicrophysics,
    log_density: f64,
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
    out_value: *mut f64,
) -> FirLinesErrorCode {
    let physics = match checked_physics(physics, out_value, "out_value") {
        Ok(physics) => physics,
        Err(err) => return track_error(&err),
    };
    match fir_lines_core::delta(
        &physics,
        &DE_LOOZE_2014_RESOLVED,
        log_density,
        metallicity,
        burstiness,
        sigma_sfr,
    ) {
        Ok(value) => write_success(out_value, value),
        Err(err) => track_error(&DefaultFirLinesError::from(err)),
    }
}
