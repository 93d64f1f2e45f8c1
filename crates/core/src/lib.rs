//! Far-Infrared Line Model Core Library
//!
//! Analytic predictions of the [CII] 158µm, [OIII] 88µm and [OIII] 52µm surface
//! brightness of star-forming gas, following the slab model of Ferrara et al. (2019)
//! and Vallini et al. (2021).
//!
//! ## Model outline
//!
//! - `Σ_SFR` and the burstiness `k` fix the gas surface density (Kennicutt-Schmidt),
//!   the ionization parameter and the slab column
//! - The slab is density-bounded or ionization-bounded depending on where the
//!   ionization and photo-dissociation fronts sit relative to the column
//! - [CII] is integrated through the ionized and neutral layers, [OIII] through the
//!   ionized layer only
//!
//! Ionic structure, cooling rates and atomic data are supplied by the caller through
//! the traits in [`microphysics`].

pub mod constants;
pub mod core_types;
pub mod empirical;
pub mod error;
pub mod microphysics;
pub mod physics;
pub mod surface_brightness;
pub mod vectorized;

// Re-export core types
pub use core_types::{DerivedQuantities, Kelvin, LineInputs, ModelParameters, SlabConditions, Temperatures};
pub use error::{BrightnessOrigin, ModelError, ModelResult};
pub use microphysics::{
    AtomicData, CoolingRates, EmpiricalRelation, IonStructure, Microphysics, MicrophysicsBundle,
    OiiiTransition,
};
pub use physics::CiiRegime;

// Re-export the surface-brightness entry points
pub use empirical::{PowerLawRelation, DE_LOOZE_2014_RESOLVED};
pub use surface_brightness::{
    delta, predict_lines, sigma_cii158, sigma_cii_density_bounded,
    sigma_cii_ionization_bounded_n0, sigma_cii_ionization_bounded_nf, sigma_oiii52, sigma_oiii88,
    LinePrediction,
};
