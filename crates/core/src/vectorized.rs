//! Element-wise evaluation over many parameter points
//!
//! Each function maps its scalar counterpart over a slice of [`LineInputs`] in
//! parallel. Output order matches input order. The collaborators are shared
//! between worker threads, so they must be `Sync`.

use rayon::prelude::*;

use crate::core_types::{LineInputs, ModelParameters};
use crate::error::ModelResult;
use crate::microphysics::{AtomicData, CoolingRates, EmpiricalRelation, IonStructure, Microphysics};
use crate::surface_brightness::{
    delta_with, predict_lines_with, sigma_cii158_with, sigma_oiii52_with, sigma_oiii88_with,
    LinePrediction,
};

/// [`crate::surface_brightness::sigma_cii158`] over every point
pub fn sigma_cii158_many<M>(physics: &M, points: &[LineInputs]) -> Vec<f64>
where
    M: IonStructure + CoolingRates + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|inputs| sigma_cii158_with(physics, &ModelParameters::FIDUCIAL, inputs))
        .collect()
}

/// [`crate::surface_brightness::sigma_oiii88`] over every point
pub fn sigma_oiii88_many<M>(physics: &M, points: &[LineInputs]) -> Vec<f64>
where
    M: IonStructure + AtomicData + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|inputs| sigma_oiii88_with(physics, &ModelParameters::FIDUCIAL, inputs))
        .collect()
}

/// [`crate::surface_brightness::sigma_oiii52`] over every point
pub fn sigma_oiii52_many<M>(physics: &M, points: &[LineInputs]) -> Vec<f64>
where
    M: IonStructure + AtomicData + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|inputs| sigma_oiii52_with(physics, &ModelParameters::FIDUCIAL, inputs))
        .collect()
}

/// [`crate::surface_brightness::delta`] over every point; failures stay per-point
pub fn delta_many<M, R>(physics: &M, relation: &R, points: &[LineInputs]) -> Vec<ModelResult<f64>>
where
    M: IonStructure + CoolingRates + Sync + ?Sized,
    R: EmpiricalRelation + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|inputs| delta_with(physics, relation, &ModelParameters::FIDUCIAL, inputs))
        .collect()
}

/// [`crate::surface_brightness::predict_lines_with`] over every point
pub fn predict_lines_many<M>(
    physics: &M,
    params: &ModelParameters,
    points: &[LineInputs],
) -> Vec<LinePrediction>
where
    M: Microphysics + Sync + ?Sized,
{
    points
        .par_iter()
        .map(|inputs| predict_lines_with(physics, params, inputs))
        .collect()
}

/// Points sharing metallicity, burstiness and `Σ_SFR` over a list of `log10(n)`
pub fn density_sweep(
    log_densities: &[f64],
    metallicity: f64,
    burstiness: f64,
    sigma_sfr: f64,
) -> Vec<LineInputs> {
    log_densities
        .iter()
        .map(|&log_density| LineInputs::new(log_density, metallicity, burstiness, sigma_sfr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::microphysics::OiiiTransition;
    use crate::surface_brightness::{sigma_cii158, sigma_oiii52, sigma_oiii88};

    struct Scaled;

    impl IonStructure for Scaled {
        fn ionized_column_density(&self, u: f64, _: f64) -> f64 {
            1e24 * u
        }
        fn front_column_density(&self, u: f64, z: f64) -> f64 {
            1e24 * u + 1e22 / z
        }
        fn ionized_layer_column_integral(&self, u: f64, _: f64) -> f64 {
            5e23 * u
        }
        fn density_bounded_column_integral(&self, _: f64, _: f64, column: f64) -> f64 {
            0.5 * column
        }
    }

    impl CoolingRates for Scaled {
        fn neutral_cooling_rate(&self, _: f64) -> f64 {
            1e-23
        }
        fn ionized_cooling_rate(&self, _: f64) -> f64 {
            5e-24
        }
    }

    impl AtomicData for Scaled {
        fn emissivity(&self, _: f64, density: f64, transition: OiiiTransition) -> f64 {
            let critical = match transition {
                OiiiTransition::Micron88 => 510.0,
                OiiiTransition::Micron52 => 3600.0,
            };
            1e-20 / (1.0 + density / critical)
        }
        fn level_populations(&self, _: f64, _: f64) -> Vec<f64> {
            vec![0.6, 0.3, 0.1]
        }
    }

    fn sweep() -> Vec<LineInputs> {
        density_sweep(&[0.5, 1.0, 2.0, 3.0, 3.6, 4.0, 5.0], 0.4, 10.0, 3.0)
    }

    #[test]
    fn test_density_sweep_builds_points() {
        let points = sweep();
        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|p| p.metallicity == 0.4 && p.sigma_sfr == 3.0));
        assert_eq!(points[2].log_density, 2.0);
    }

    #[test]
    fn test_many_matches_scalar_in_order() {
        let points = sweep();
        let cii = sigma_cii158_many(&Scaled, &points);
        let o88 = sigma_oiii88_many(&Scaled, &points);
        let o52 = sigma_oiii52_many(&Scaled, &points);

        for (i, p) in points.iter().enumerate() {
            let args = (p.log_density, p.metallicity, p.burstiness, p.sigma_sfr);
            assert_eq!(cii[i], sigma_cii158(&Scaled, args.0, args.1, args.2, args.3));
            assert_eq!(o88[i], sigma_oiii88(&Scaled, args.0, args.1, args.2, args.3));
            assert_eq!(o52[i], sigma_oiii52(&Scaled, args.0, args.1, args.2, args.3));
        }
    }

    #[test]
    fn test_delta_many_keeps_failures_per_point() {
        let mut points = sweep();
        points.push(LineInputs::new(2.0, 0.0, 1.0, 1.0));
        let relation = |sigma_sfr: f64| 1e7 * sigma_sfr;

        let deltas = delta_many(&Scaled, &relation, &points);
        assert_eq!(deltas.len(), points.len());
        assert!(deltas[..points.len() - 1].iter().all(Result::is_ok));
        assert!(deltas[points.len() - 1].is_err());
    }

    #[test]
    fn test_predict_lines_many() {
        let points = sweep();
        let predictions = predict_lines_many(&Scaled, &ModelParameters::FIDUCIAL, &points);
        assert_eq!(predictions.len(), points.len());
        for (prediction, inputs) in predictions.iter().zip(&points) {
            assert_eq!(prediction.inputs, *inputs);
            assert!(prediction.sigma_cii158 > 0.0);
        }
    }
}
