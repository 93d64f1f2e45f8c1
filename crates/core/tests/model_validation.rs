//! Line Model Validation Suite
//!
//! End-to-end checks of the slab model through the public API, using fixed
//! collaborators in place of photoionization grids and atomic databases.
//!
//! # Test Categories
//! 1. Reference values of the derived quantities
//! 2. Regime classification invariants
//! 3. Regime dispatch and continuity
//! 4. Golden values and sanity bounds
//! 5. [OIII] ionization correction
//!
//! Run tests with: `cargo test --test model_validation`

mod common;

use approx::assert_relative_eq;
use common::{sigma_sfr_sweep, ConstantPhysics, ScalingPhysics};
use fir_lines_core::{
    constants::KS_INDEX,
    physics::{
        carbon_abundance,
        cii::{fcii_density_bounded, fcii_ionization_bounded_n0, fcii_ionization_bounded_nf},
        gas_surface_density, oiii_ionization_fraction, oxygen_abundance,
    },
    sigma_cii158, sigma_cii_density_bounded, sigma_cii_ionization_bounded_n0,
    sigma_cii_ionization_bounded_nf, sigma_oiii52, sigma_oiii88,
    surface_brightness::cii_regime,
    CiiRegime, DerivedQuantities, IonStructure, LineInputs, ModelParameters, SlabConditions,
};
use rand::Rng;

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: DERIVED QUANTITIES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_solar_abundances() {
    assert_eq!(oxygen_abundance(1.0), 4.90e-4);
    assert_eq!(carbon_abundance(1.0), 2.7e-4);
}

#[test]
fn test_abundance_linearity_random_metallicities() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let z: f64 = rng.random_range(1e-3..10.0);
        assert_eq!(oxygen_abundance(2.0 * z), 2.0 * oxygen_abundance(z));
    }
}

/// `Σ_g(Σ_SFR = 1, k = 1) = (10¹²)^(1/1.4)`
#[test]
fn test_gas_surface_density_reference() {
    let sigma_g = gas_surface_density(1.0, 1.0, KS_INDEX);
    assert_relative_eq!(sigma_g, 3.727593720314942e8, max_relative = 1e-12);
    // Ten times the star formation gives 1.93e9
    assert_relative_eq!(
        gas_surface_density(10.0, 1.0, KS_INDEX),
        1.9306977288832512e9,
        max_relative = 1e-12
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: REGIME CLASSIFICATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_ionized_column_never_exceeds_front() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let log_u: f64 = rng.random_range(-4.0..-1.0);
        let z: f64 = rng.random_range(0.05..3.0);
        let u = 10f64.powf(log_u);
        let n_i = ScalingPhysics.ionized_column_density(u, z);
        let n_f = ScalingPhysics.front_column_density(u, z);
        assert!(n_i <= n_f, "N_i = {n_i:e} > N_F = {n_f:e} at U = {u:e}, Z = {z}");
    }
}

#[test]
fn test_sweep_visits_every_regime() {
    let mut seen = Vec::new();
    for k in [1.0, 100.0, 1e4] {
        for sigma_sfr in sigma_sfr_sweep() {
            let inputs = LineInputs::new(2.0, 1.0, k, sigma_sfr);
            let regime = cii_regime(&ScalingPhysics, &inputs, &ModelParameters::FIDUCIAL);
            if !seen.contains(&regime) {
                seen.push(regime);
            }
        }
    }
    assert_eq!(seen.len(), 3, "regimes seen: {seen:?}");
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: DISPATCH AND CONTINUITY
// ═══════════════════════════════════════════════════════════════════════════════

/// The dispatched value is exactly the value of the matching regime wrapper
#[test]
fn test_dispatch_matches_manual_branch_bit_for_bit() {
    for log_density in [1.0, 2.0, 3.0, 4.0] {
        for k in [1.0, 10.0, 100.0, 1e4] {
            for sigma_sfr in sigma_sfr_sweep() {
                let inputs = LineInputs::new(log_density, 1.0, k, sigma_sfr);
                let dispatched = sigma_cii158(&ScalingPhysics, log_density, 1.0, k, sigma_sfr);
                let manual = match cii_regime(&ScalingPhysics, &inputs, &ModelParameters::FIDUCIAL)
                {
                    CiiRegime::DensityBounded => {
                        sigma_cii_density_bounded(&ScalingPhysics, log_density, 1.0, k, sigma_sfr)
                    }
                    CiiRegime::IonizationBoundedN0 => sigma_cii_ionization_bounded_n0(
                        &ScalingPhysics,
                        log_density,
                        1.0,
                        k,
                        sigma_sfr,
                    ),
                    CiiRegime::IonizationBoundedNF => sigma_cii_ionization_bounded_nf(
                        &ScalingPhysics,
                        log_density,
                        1.0,
                        k,
                        sigma_sfr,
                    ),
                };
                assert_eq!(dispatched, manual);
            }
        }
    }
}

/// Integrators agree when the column sits exactly on `N_i` or `N_F`
#[test]
fn test_branches_continuous_at_regime_boundaries() {
    let params = ModelParameters::FIDUCIAL;
    for log_density in [1.0, 2.5, 3.0, 4.5] {
        for sigma_sfr in [0.05, 1.0, 20.0] {
            let inputs = LineInputs::new(log_density, 0.7, 10.0, sigma_sfr);
            let derived = DerivedQuantities::from_star_formation(sigma_sfr, 10.0, KS_INDEX);
            let slab = SlabConditions::from_inputs(&inputs, &derived, &params);
            let (u, z) = (slab.ionization_parameter, slab.metallicity);

            let at_ni = slab.with_column(ScalingPhysics.ionized_column_density(u, z));
            assert_relative_eq!(
                fcii_density_bounded(&ScalingPhysics, &at_ni),
                fcii_ionization_bounded_n0(&ScalingPhysics, &at_ni),
                max_relative = 1e-12
            );

            let at_nf = slab.with_column(ScalingPhysics.front_column_density(u, z));
            assert_relative_eq!(
                fcii_ionization_bounded_n0(&ScalingPhysics, &at_nf),
                fcii_ionization_bounded_nf(&ScalingPhysics, &at_nf),
                max_relative = 1e-12
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: GOLDEN VALUES AND SANITY BOUNDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Reference value recorded with the constant collaborators
#[test]
fn test_sigma_cii158_golden() {
    let sigma = sigma_cii158(&ConstantPhysics, 2.0, 1.0, 1.0, 1.0);
    assert_relative_eq!(sigma, 3.2698455710613e7, max_relative = 1e-10);
}

/// Σ_[CII] may dip where the neutral layer is capped at the front, but never by
/// more than a quarter between neighbouring quarter-dex steps in Σ_SFR
#[test]
fn test_cii_monotonic_within_regime_jump_bound() {
    for k in [1.0, 10.0, 100.0] {
        for log_density in [1.0, 2.0, 3.0, 4.0] {
            let values: Vec<f64> = sigma_sfr_sweep()
                .into_iter()
                .map(|sigma_sfr| sigma_cii158(&ScalingPhysics, log_density, 1.0, k, sigma_sfr))
                .collect();
            for pair in values.windows(2) {
                assert!(
                    pair[1] >= 0.75 * pair[0],
                    "Σ_CII dropped from {} to {} (k = {k}, log n = {log_density})",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn test_density_bounded_cii_rises_with_density_below_threshold() {
    let low = sigma_cii_density_bounded(&ConstantPhysics, 1.0, 1.0, 1.0, 1.0);
    let high = sigma_cii_density_bounded(&ConstantPhysics, 3.0, 1.0, 1.0, 1.0);
    assert_relative_eq!(high / low, 100.0, max_relative = 1e-10);
}

#[test]
fn test_lte_cii_independent_of_density() {
    let a = sigma_cii158(&ConstantPhysics, 4.0, 1.0, 1.0, 1.0);
    let b = sigma_cii158(&ConstantPhysics, 5.0, 1.0, 1.0, 1.0);
    assert_eq!(a, b);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 5: [OIII]
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_oiii_fraction_flat_extrapolation() {
    assert_relative_eq!(
        oiii_ionization_fraction(1e-5),
        oiii_ionization_fraction(10f64.powf(-3.5)),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        oiii_ionization_fraction(1e-1),
        oiii_ionization_fraction(10f64.powf(-1.5)),
        max_relative = 1e-12
    );
}

#[test]
fn test_oiii88_reference_value() {
    let a = sigma_oiii88(&ConstantPhysics, 2.0, 1.0, 1.0, 1.0);
    let expected = 2.474e9
        * 1e-20
        * 100.0
        * (4.90e-4 * oiii_ionization_fraction(0.001223465644101957) * 1e21);
    assert_relative_eq!(a, expected, max_relative = 1e-10);
}

#[test]
fn test_oiii52_to_88_ratio_tracks_critical_densities() {
    // Below both critical densities the ratio is ~1, above them it tends to 3600/510
    let low = sigma_oiii52(&ScalingPhysics, 0.0, 1.0, 1.0, 1.0)
        / sigma_oiii88(&ScalingPhysics, 0.0, 1.0, 1.0, 1.0);
    let high = sigma_oiii52(&ScalingPhysics, 6.0, 1.0, 1.0, 1.0)
        / sigma_oiii88(&ScalingPhysics, 6.0, 1.0, 1.0, 1.0);
    assert!(low < 1.01);
    assert!(high > 6.5 && high < 3600.0 / 510.0);
}
