//! Emission regime detection for the [CII] slab
//!
//! Compares the total hydrogen column of the slab with the column of the ionized
//! layer `N_i` and the column at the photo-dissociation front `N_F`:
//!
//! - `column < N_i`: **density-bounded**, the ionization front runs off the edge of
//!   the slab and no neutral layer forms
//! - `N_i ≤ column < N_F`: **ionization-bounded**, a neutral layer of column
//!   `column − N_i` sits behind the ionized gas
//! - `column ≥ N_F`: **ionization-bounded**, the neutral layer is capped at the
//!   front, `N_F − N_i`
//!
//! # Scientific References
//!
//! - Ferrara, A. et al. (2019). MNRAS 489, 1-12, section 3.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::microphysics::IonStructure;

/// Slab structure seen by the [CII] line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CiiRegime {
    /// Fully ionized slab (`column < N_i`)
    DensityBounded,
    /// Neutral layer ends at the slab edge (`N_i ≤ column < N_F`)
    IonizationBoundedN0,
    /// Neutral layer ends at the photo-dissociation front (`column ≥ N_F`)
    IonizationBoundedNF,
}

impl CiiRegime {
    /// Classify a slab of total column `column` using the collaborator's ionic structure
    pub fn classify<I: IonStructure + ?Sized>(
        ions: &I,
        ionization_parameter: f64,
        metallicity: f64,
        column: f64,
    ) -> Self {
        let ionized_column = ions.ionized_column_density(ionization_parameter, metallicity);
        let front_column = ions.front_column_density(ionization_parameter, metallicity);
        let regime = classify_regime(column, ionized_column, front_column);

        trace!(
            column,
            ionized_column,
            front_column,
            ?regime,
            "Classified [CII] emission regime"
        );

        regime
    }

    /// Whether a neutral layer is present
    pub fn has_neutral_layer(self) -> bool {
        !matches!(self, CiiRegime::DensityBounded)
    }
}

/// Ordered comparison of the slab column against `N_i` and `N_F`
///
/// NaN columns never satisfy a strict comparison and fall through to
/// [`CiiRegime::IonizationBoundedNF`].
pub fn classify_regime(column: f64, ionized_column: f64, front_column: f64) -> CiiRegime {
    if column < ionized_column {
        CiiRegime::DensityBounded
    } else if column < front_column {
        CiiRegime::IonizationBoundedN0
    } else {
        CiiRegime::IonizationBoundedNF
    }
}
