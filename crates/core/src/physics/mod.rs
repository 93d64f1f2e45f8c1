//! Analytic emission physics of a star-forming gas slab
//!
//! # References
//! - Ferrara, A., Vallini, L., Pallottini, A. et al. (2019). "A physical model for [CII]
//!   line emission from galaxies." MNRAS 489, 1-12.
//! - Vallini, L., Ferrara, A., Pallottini, A. et al. (2021). "High [OIII]/[CII] surface
//!   brightness ratios trace early starburst galaxies." MNRAS 505, 5543-5553.

pub mod abundance;
pub mod cii;
pub mod interpolation;
pub mod oiii;
pub mod regime;
pub mod star_formation;

pub use abundance::{carbon_abundance, oxygen_abundance};
pub use cii::{fcii_density_bounded, fcii_ionization_bounded_n0, fcii_ionization_bounded_nf};
pub use interpolation::LinearTable;
pub use oiii::{foiii52, foiii88, oiii_ionization_fraction};
pub use regime::{classify_regime, CiiRegime};
pub use star_formation::{column_density, gas_surface_density, ionization_parameter};
