//! Emergent [CII] 158µm flux of a star-forming slab
//!
//! The flux is the sum of a neutral (PDR) layer term and an ionized layer term.
//! Each term is `emissivity per C⁺ ion × carbon column`, where the emissivity
//! depends on the density:
//!
//! ```text
//! n ≤ 3300 cm⁻³   collisional:  n × A_C(Z) × Λ(T) × ΔN
//! n > 3300 cm⁻³   LTE:          (g₂/g₁) e^(−ΔE/kT) × A_C(Z) × A₂₁ × ΔE × ΔN
//! ```
//!
//! The two branches are not matched at the threshold; the jump is part of the
//! model (Ferrara et al. 2019, eqs. 30-34).
//!
//! | Regime | neutral `ΔN` | ionized `ΔN` |
//! |---|---|---|
//! | density-bounded | none | `density_bounded_column_integral(U, Z, column)` |
//! | ionization-bounded N0 | `column − N_i` | `ionized_layer_column_integral(U, Z)` |
//! | ionization-bounded NF | `N_F − N_i` | `ionized_layer_column_integral(U, Z)` |

use crate::constants::{
    CII_EINSTEIN_A, CII_G_LOWER, CII_G_UPPER, CII_LTE_DENSITY_THRESHOLD, CII_TRANSITION_ENERGY,
    K_BOLTZMANN,
};
use crate::core_types::SlabConditions;
use crate::microphysics::{CoolingRates, IonStructure};
use crate::physics::abundance::carbon_abundance;
use crate::physics::regime::CiiRegime;

/// Whether the upper level is populated collisionally (true) or in LTE (false)
#[inline]
pub fn is_collisional(density: f64) -> bool {
    density <= CII_LTE_DENSITY_THRESHOLD
}

/// Boltzmann population ratio of the upper to lower [CII] level at temperature `temperature`
#[inline]
pub fn lte_population_ratio(temperature: f64) -> f64 {
    (CII_G_UPPER / CII_G_LOWER) * (-CII_TRANSITION_ENERGY / (K_BOLTZMANN * temperature)).exp()
}

/// Line flux from a carbon-bearing layer with hydrogen column `layer_column`.
///
/// `cooling_rate` is only used on the collisional branch.
fn layer_flux(
    density: f64,
    metallicity: f64,
    temperature: f64,
    cooling_rate: impl FnOnce(f64) -> f64,
    layer_column: f64,
) -> f64 {
    if is_collisional(density) {
        density * carbon_abundance(metallicity) * cooling_rate(temperature) * layer_column
    } else {
        lte_population_ratio(temperature)
            * carbon_abundance(metallicity)
            * CII_EINSTEIN_A
            * CII_TRANSITION_ENERGY
            * layer_column
    }
}

/// Flux from the ionized layer, given its column integral
fn ionized_layer_flux<C: CoolingRates + ?Sized>(
    cooling: &C,
    slab: &SlabConditions,
    layer_column: f64,
) -> f64 {
    layer_flux(
        slab.density,
        slab.metallicity,
        *slab.temperatures.ionized,
        |t| cooling.ionized_cooling_rate(t),
        layer_column,
    )
}

/// Flux from the neutral layer of hydrogen column `layer_column`
fn neutral_layer_flux<C: CoolingRates + ?Sized>(
    cooling: &C,
    slab: &SlabConditions,
    layer_column: f64,
) -> f64 {
    layer_flux(
        slab.density,
        slab.metallicity,
        *slab.temperatures.pdr,
        |t| cooling.neutral_cooling_rate(t),
        layer_column,
    )
}

/// [CII] flux of a density-bounded slab (no neutral layer)
///
/// The ionized term integrates the ionized fraction through the actual slab column,
/// not through `N_i`.
pub fn fcii_density_bounded<M>(physics: &M, slab: &SlabConditions) -> f64
where
    M: IonStructure + CoolingRates + ?Sized,
{
    let neutral = 0.0;
    let ionized_column = physics.density_bounded_column_integral(
        slab.ionization_parameter,
        slab.metallicity,
        slab.column,
    );
    neutral + ionized_layer_flux(physics, slab, ionized_column)
}

/// [CII] flux of an ionization-bounded slab whose neutral layer reaches the slab edge
pub fn fcii_ionization_bounded_n0<M>(physics: &M, slab: &SlabConditions) -> f64
where
    M: IonStructure + CoolingRates + ?Sized,
{
    let n_i = physics.ionized_column_density(slab.ionization_parameter, slab.metallicity);
    let neutral = neutral_layer_flux(physics, slab, slab.column - n_i);
    let ionized_column =
        physics.ionized_layer_column_integral(slab.ionization_parameter, slab.metallicity);
    neutral + ionized_layer_flux(physics, slab, ionized_column)
}

/// [CII] flux of an ionization-bounded slab whose neutral layer stops at the
/// photo-dissociation front
///
/// Independent of the total slab column.
pub fn fcii_ionization_bounded_nf<M>(physics: &M, slab: &SlabConditions) -> f64
where
    M: IonStructure + CoolingRates + ?Sized,
{
    let n_i = physics.ionized_column_density(slab.ionization_parameter, slab.metallicity);
    let n_f = physics.front_column_density(slab.ionization_parameter, slab.metallicity);
    let neutral = neutral_layer_flux(physics, slab, n_f - n_i);
    let ionized_column =
        physics.ionized_layer_column_integral(slab.ionization_parameter, slab.metallicity);
    neutral + ionized_layer_flux(physics, slab, ionized_column)
}

/// [CII] flux using the integrator for `regime`
pub fn fcii_for_regime<M>(physics: &M, slab: &SlabConditions, regime: CiiRegime) -> f64
where
    M: IonStructure + CoolingRates + ?Sized,
{
    match regime {
        CiiRegime::DensityBounded => fcii_density_bounded(physics, slab),
        CiiRegime::IonizationBoundedN0 => fcii_ionization_bounded_n0(physics, slab),
        CiiRegime::IonizationBoundedNF => fcii_ionization_bounded_nf(physics, slab),
    }
}
