//! Collaborator interfaces consumed by the line model
//!
//! The line model never computes ionic structure, cooling rates or atomic level
//! populations itself. Those come from external solvers (photoionization grids,
//! atomic databases) and are plugged in through the traits below. Every method is
//! expected to be a pure function of its arguments.

/// Column densities of the ionized layer and of the photo-dissociation front.
pub trait IonStructure {
    /// Hydrogen column of the ionized layer, `N_i(U, Z)` (cm⁻²)
    fn ionized_column_density(&self, ionization_parameter: f64, metallicity: f64) -> f64;

    /// Hydrogen column at the photo-dissociation front, `N_F(U, Z)` (cm⁻²).
    /// Must never be smaller than [`IonStructure::ionized_column_density`].
    fn front_column_density(&self, ionization_parameter: f64, metallicity: f64) -> f64;

    /// Column-weighted ionized fraction through the whole ionized layer
    fn ionized_layer_column_integral(&self, ionization_parameter: f64, metallicity: f64) -> f64;

    /// Column-weighted ionized fraction through a slab of total `column` that is
    /// fully ionized (density-bounded)
    fn density_bounded_column_integral(
        &self,
        ionization_parameter: f64,
        metallicity: f64,
        column: f64,
    ) -> f64;
}

/// [CII] collisional cooling coefficients.
pub trait CoolingRates {
    /// Cooling by collisions with neutral hydrogen at the PDR temperature
    fn neutral_cooling_rate(&self, temperature: f64) -> f64;

    /// Cooling by collisions with electrons at the HII temperature
    fn ionized_cooling_rate(&self, temperature: f64) -> f64;
}

/// [OIII] fine-structure transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OiiiTransition {
    /// ³P₁ → ³P₀, 88.3 µm
    Micron88,
    /// ³P₂ → ³P₁, 51.8 µm
    Micron52,
}

impl OiiiTransition {
    /// Wavelength label understood by atomic databases
    pub fn label(self) -> &'static str {
        match self {
            OiiiTransition::Micron88 => "88.3m",
            OiiiTransition::Micron52 => "51.8m",
        }
    }

    /// Index of the upper level of the transition in a population vector
    pub fn upper_level(self) -> usize {
        match self {
            OiiiTransition::Micron88 => 1,
            OiiiTransition::Micron52 => 2,
        }
    }
}

/// O⁺⁺ atomic data.
pub trait AtomicData {
    /// Line emissivity (erg s⁻¹ cm³) at temperature `temperature` and density `density`
    fn emissivity(&self, temperature: f64, density: f64, transition: OiiiTransition) -> f64;

    /// Fractional level populations, ordered from the ground level up
    fn level_populations(&self, temperature: f64, density: f64) -> Vec<f64>;
}

/// Empirical [CII]-SFR relation used as the comparison baseline.
pub trait EmpiricalRelation {
    /// [CII] surface brightness predicted from `Σ_SFR`
    fn surface_brightness(&self, sigma_sfr: f64) -> f64;
}

/// Everything the line model needs to evaluate all three lines.
pub trait Microphysics: IonStructure + CoolingRates + AtomicData {}

impl<T: IonStructure + CoolingRates + AtomicData> Microphysics for T {}

/// Combines three separate collaborator implementations into one [`Microphysics`].
#[derive(Debug, Clone, Default)]
pub struct MicrophysicsBundle<I, C, A> {
    pub ions: I,
    pub cooling: C,
    pub atomic: A,
}

impl<I, C, A> MicrophysicsBundle<I, C, A> {
    pub fn new(ions: I, cooling: C, atomic: A) -> Self {
        Self {
            ions,
            cooling,
            atomic,
        }
    }
}

impl<I: IonStructure, C, A> IonStructure for MicrophysicsBundle<I, C, A> {
    fn ionized_column_density(&self, ionization_parameter: f64, metallicity: f64) -> f64 {
        self.ions
            .ionized_column_density(ionization_parameter, metallicity)
    }

    fn front_column_density(&self, ionization_parameter: f64, metallicity: f64) -> f64 {
        self.ions.front_column_density(ionization_parameter, metallicity)
    }

    fn ionized_layer_column_integral(&self, ionization_parameter: f64, metallicity: f64) -> f64 {
        self.ions
            .ionized_layer_column_integral(ionization_parameter, metallicity)
    }

    fn density_bounded_column_integral(
        &self,
        ionization_parameter: f64,
        metallicity: f64,
        column: f64,
    ) -> f64 {
        self.ions
            .density_bounded_column_integral(ionization_parameter, metallicity, column)
    }
}

impl<I, C: CoolingRates, A> CoolingRates for MicrophysicsBundle<I, C, A> {
    fn neutral_cooling_rate(&self, temperature: f64) -> f64 {
        self.cooling.neutral_cooling_rate(temperature)
    }

    fn ionized_cooling_rate(&self, temperature: f64) -> f64 {
        self.cooling.ionized_cooling_rate(temperature)
    }
}

impl<I, C, A: AtomicData> AtomicData for MicrophysicsBundle<I, C, A> {
    fn emissivity(&self, temperature: f64, density: f64, transition: OiiiTransition) -> f64 {
        self.atomic.emissivity(temperature, density, transition)
    }

    fn level_populations(&self, temperature: f64, density: f64) -> Vec<f64> {
        self.atomic.level_populations(temperature, density)
    }
}

impl<F: Fn(f64) -> f64> EmpiricalRelation for F {
    fn surface_brightness(&self, sigma_sfr: f64) -> f64 {
        self(sigma_sfr)
    }
}
