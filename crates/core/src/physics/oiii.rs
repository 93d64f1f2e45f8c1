//! Emergent [OIII] 88µm and 52µm flux
//!
//! O⁺⁺ lives only in the ionized layer, so the flux is the same in every
//! [CII] regime:
//!
//! ```text
//! F = ε(T, n) × n × A_O(Z) × X_OIII(U) × N_i(U, Z)
//! ```
//!
//! `X_OIII` corrects for the fraction of ionized-layer oxygen that is only singly
//! ionized. It is interpolated from three photoionization models spanning
//! `log U ∈ [-3.5, -1.5]` (Vallini et al. 2021).

use tracing::trace;

use crate::constants::{OIII_FRACTION_ANCHORS, OIII_LOG_U_ANCHORS};
use crate::microphysics::{AtomicData, IonStructure, OiiiTransition};
use crate::physics::abundance::oxygen_abundance;
use crate::physics::interpolation::LinearTable;

/// O⁺⁺ fraction of ionized-layer oxygen versus `log10(U)`
pub const OIII_FRACTION_TABLE: LinearTable<3> =
    LinearTable::new(OIII_LOG_U_ANCHORS, OIII_FRACTION_ANCHORS);

/// Fraction of ionized-layer oxygen in O⁺⁺ at ionization parameter `ionization_parameter`.
/// Flat outside the tabulated range.
pub fn oiii_ionization_fraction(ionization_parameter: f64) -> f64 {
    let log_u = ionization_parameter.log10();
    if !OIII_FRACTION_TABLE.contains(log_u) {
        trace!(log_u, "log U outside the O++ fraction table, clamping");
    }
    OIII_FRACTION_TABLE.eval(log_u)
}

/// [OIII] flux of `transition` from the ionized layer
///
/// The upper-level population fraction is looked up and traced but does not
/// enter the flux; the emissivity already carries it.
pub fn foiii<M>(
    physics: &M,
    transition: OiiiTransition,
    density: f64,
    metallicity: f64,
    ionization_parameter: f64,
    temperature: f64,
) -> f64
where
    M: IonStructure + AtomicData + ?Sized,
{
    let emissivity = physics.emissivity(temperature, density, transition);
    let ionized_column = physics.ionized_column_density(ionization_parameter, metallicity);
    let oiii_fraction = oiii_ionization_fraction(ionization_parameter);

    let populations = physics.level_populations(temperature, density);
    let upper_level_fraction = populations.get(transition.upper_level()).copied();
    trace!(
        transition = transition.label(),
        ?upper_level_fraction,
        "[OIII] upper level population"
    );

    let oiii_column = oxygen_abundance(metallicity) * oiii_fraction * ionized_column;
    emissivity * density * oiii_column
}

/// [OIII] 88.3µm flux
pub fn foiii88<M>(
    physics: &M,
    density: f64,
    metallicity: f64,
    ionization_parameter: f64,
    temperature: f64,
) -> f64
where
    M: IonStructure + AtomicData + ?Sized,
{
    foiii(
        physics,
        OiiiTransition::Micron88,
        density,
        metallicity,
        ionization_parameter,
        temperature,
    )
}

/// [OIII] 51.8µm flux
pub fn foiii52<M>(
    physics: &M,
    density: f64,
    metallicity: f64,
    ionization_parameter: f64,
    temperature: f64,
) -> f64
where
    M: IonStructure + AtomicData + ?Sized,
{
    foiii(
        physics,
        OiiiTransition::Micron52,
        density,
        metallicity,
        ionization_parameter,
        temperature,
    )
}
