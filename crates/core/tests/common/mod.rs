//! Collaborators shared by the integration suites
#![allow(dead_code)]

use fir_lines_core::{AtomicData, CoolingRates, IonStructure, OiiiTransition};

/// Install a test log subscriber once per test binary (`RUST_LOG=trace` to see regimes)
#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Constant ionic structure: `N_i = 1e21`, `N_F = 1e23`
pub struct ConstantPhysics;

impl IonStructure for ConstantPhysics {
    fn ionized_column_density(&self, _: f64, _: f64) -> f64 {
        1.0e21
    }
    fn front_column_density(&self, _: f64, _: f64) -> f64 {
        1.0e23
    }
    fn ionized_layer_column_integral(&self, _: f64, _: f64) -> f64 {
        5.0e20
    }
    fn density_bounded_column_integral(&self, _: f64, _: f64, column: f64) -> f64 {
        0.5 * column
    }
}

impl CoolingRates for ConstantPhysics {
    fn neutral_cooling_rate(&self, _: f64) -> f64 {
        1.0e-23
    }
    fn ionized_cooling_rate(&self, _: f64) -> f64 {
        5.0e-24
    }
}

impl AtomicData for ConstantPhysics {
    fn emissivity(&self, _: f64, _: f64, transition: OiiiTransition) -> f64 {
        match transition {
            OiiiTransition::Micron88 => 1.0e-20,
            OiiiTransition::Micron52 => 2.0e-20,
        }
    }
    fn level_populations(&self, _: f64, _: f64) -> Vec<f64> {
        vec![0.6, 0.3, 0.1]
    }
}

/// Ionic structure that scales like a Strömgren layer: `N_i ∝ U`,
/// `N_F = N_i + 1e22 / Z`. Continuous across both regime boundaries.
pub struct ScalingPhysics;

impl IonStructure for ScalingPhysics {
    fn ionized_column_density(&self, u: f64, _: f64) -> f64 {
        1.0e24 * u
    }
    fn front_column_density(&self, u: f64, z: f64) -> f64 {
        1.0e24 * u + 1.0e22 / z
    }
    fn ionized_layer_column_integral(&self, u: f64, _: f64) -> f64 {
        0.5e24 * u
    }
    fn density_bounded_column_integral(&self, _: f64, _: f64, column: f64) -> f64 {
        0.5 * column
    }
}

impl CoolingRates for ScalingPhysics {
    fn neutral_cooling_rate(&self, _: f64) -> f64 {
        1.0e-23
    }
    fn ionized_cooling_rate(&self, _: f64) -> f64 {
        5.0e-24
    }
}

impl AtomicData for ScalingPhysics {
    fn emissivity(&self, _: f64, density: f64, transition: OiiiTransition) -> f64 {
        let critical_density = match transition {
            OiiiTransition::Micron88 => 510.0,
            OiiiTransition::Micron52 => 3600.0,
        };
        1.0e-20 / (1.0 + density / critical_density)
    }
    fn level_populations(&self, _: f64, _: f64) -> Vec<f64> {
        vec![0.6, 0.3, 0.1]
    }
}

/// `Σ_SFR` from 0.01 to 1000 in quarter-dex steps
pub fn sigma_sfr_sweep() -> Vec<f64> {
    (0..=20_i32).map(|i| 10f64.powf(-2.0 + 0.25 * f64::from(i))).collect()
}
