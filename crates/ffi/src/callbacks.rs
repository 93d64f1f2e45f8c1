use fir_lines_core::{AtomicData, CoolingRates, EmpiricalRelation, IonStructure, OiiiTransition};
use std::os::raw::c_void;

use crate::error::DefaultFirLinesError;

/// Upper bound on the number of atomic levels a population callback may fill.
pub const FIR_LINES_MAX_LEVELS: usize = 16;

/// `f(user_data, U, Z)`
pub type ColumnCallback = extern "C" fn(user_data: *mut c_void, u: f64, z: f64) -> f64;

/// `f(user_data, U, Z, column)`
pub type ColumnIntegralCallback =
    extern "C" fn(user_data: *mut c_void, u: f64, z: f64, column: f64) -> f64;

/// `f(user_data, T)`
pub type RateCallback = extern "C" fn(user_data: *mut c_void, temperature: f64) -> f64;

/// `f(user_data, T, n, transition)`
pub type EmissivityCallback = extern "C" fn(
    user_data: *mut c_void,
    temperature: f64,
    density: f64,
    transition: FirLinesOiiiTransition,
) -> f64;

/// `f(user_data, T, n, out_populations, capacity) -> levels written`
pub type PopulationsCallback = extern "C" fn(
    user_data: *mut c_void,
    temperature: f64,
    density: f64,
    out_populations: *mut f64,
    capacity: usize,
) -> usize;

/// `f(user_data, Σ_SFR)`
pub type RelationCallback = extern "C" fn(user_data: *mut c_void, sigma_sfr: f64) -> f64;

/// [OIII] transitions as seen from C
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirLinesOiiiTransition {
    /// 88.3 µm
    Micron88 = 0,
    /// 51.8 µm
    Micron52 = 1,
}

impl From<OiiiTransition> for FirLinesOiiiTransition {
    fn from(transition: OiiiTransition) -> Self {
        match transition {
            OiiiTransition::Micron88 => FirLinesOiiiTransition::Micron88,
            OiiiTransition::Micron52 => FirLinesOiiiTransition::Micron52,
        }
    }
}

/// Collaborator callbacks supplied by the caller.
///
/// Every callback receives `user_data` unchanged as its first argument.
/// `level_populations` may be null, in which case no populations are reported;
/// every other entry must be set.
///
/// # Thread Safety
/// The library never stores the table. Callbacks are invoked on the calling thread,
/// during the call that received the table.
#[repr(C)]
pub struct FirLinesMicrophysics {
    pub user_data: *mut c_void,
    pub ionized_column_density: Option<ColumnCallback>,
    pub front_column_density: Option<ColumnCallback>,
    pub ionized_layer_column_integral: Option<ColumnCallback>,
    pub density_bounded_column_integral: Option<ColumnIntegralCallback>,
    pub neutral_cooling_rate: Option<RateCallback>,
    pub ionized_cooling_rate: Option<RateCallback>,
    pub emissivity: Option<EmissivityCallback>,
    pub level_populations: Option<PopulationsCallback>,
}

/// Empirical [CII]-SFR relation supplied by the caller.
#[repr(C)]
pub struct FirLinesEmpiricalRelation {
    pub user_data: *mut c_void,
    pub surface_brightness: Option<RelationCallback>,
}

/// Callback table with every required entry checked.
pub(crate) struct CallbackPhysics {
    user_data: *mut c_void,
    ionized_column_density: ColumnCallback,
    front_column_density: ColumnCallback,
    ionized_layer_column_integral: ColumnCallback,
    density_bounded_column_integral: ColumnIntegralCallback,
    neutral_cooling_rate: RateCallback,
    ionized_cooling_rate: RateCallback,
    emissivity: EmissivityCallback,
    level_populations: Option<PopulationsCallback>,
}

fn require<T>(callback: Option<T>, name: &str) -> Result<T, DefaultFirLinesError> {
    callback.ok_or_else(|| DefaultFirLinesError::missing_callback(name))
}

impl TryFrom<&FirLinesMicrophysics> for CallbackPhysics {
    type Error = DefaultFirLinesError;

    fn try_from(table: &FirLinesMicrophysics) -> Result<Self, Self::Error> {
        Ok(Self {
            user_data: table.user_data,
            ionized_column_density: require(
                table.ionized_column_density,
                "ionized_column_density",
            )?,
            front_column_density: require(table.front_column_density, "front_column_density")?,
            ionized_layer_column_integral: require(
                table.ionized_layer_column_integral,
                "ionized_layer_column_integral",
            )?,
            density_bounded_column_integral: require(
                table.density_bounded_column_integral,
                "density_bounded_column_integral",
            )?,
            neutral_cooling_rate: require(table.neutral_cooling_rate, "neutral_cooling_rate")?,
            ionized_cooling_rate: require(table.ionized_cooling_rate, "ionized_cooling_rate")?,
            emissivity: require(table.emissivity, "emissivity")?,
            level_populations: table.level_populations,
        })
    }
}

impl IonStructure for CallbackPhysics {
    fn ionized_column_density(&self, ionization_parameter: f64, metallicity: f64) -> f64 {
        (self.ionized_column_density)(self.user_data, ionization_parameter, metallicity)
    }

    fn front_column_density(&self, ionization_parameter: f64, metallicity: f64) -> f64 {
        (self.front_column_density)(self.user_data, ionization_parameter, metallicity)
    }

    fn ionized_layer_column_integral(&self, ionization_parameter: f64, metallicity: f64) -> f64 {
        (self.ionized_layer_column_integral)(self.user_data, ionization_parameter, metallicity)
    }

    fn density_bounded_column_integral(
        &self,
        ionization_parameter: f64,
        metallicity: f64,
        column: f64,
    ) -> f64 {
        (self.density_bounded_column_integral)(
            self.user_data,
            ionization_parameter,
            metallicity,
            column,
        )
    }
}

impl CoolingRates for CallbackPhysics {
    fn neutral_cooling_rate(&self, temperature: f64) -> f64 {
        (self.neutral_cooling_rate)(self.user_data, temperature)
    }

    fn ionized_cooling_rate(&self, temperature: f64) -> f64 {
        (self.ionized_cooling_rate)(self.user_data, temperature)
    }
}

impl AtomicData for CallbackPhysics {
    fn emissivity(&self, temperature: f64, density: f64, transition: OiiiTransition) -> f64 {
        (self.emissivity)(self.user_data, temperature, density, transition.into())
    }

    fn level_populations(&self, temperature: f64, density: f64) -> Vec<f64> {
        let Some(callback) = self.level_populations else {
            return Vec::new();
        };
        let mut buffer = [0.0; FIR_LINES_MAX_LEVELS];
        let written = callback(
            self.user_data,
            temperature,
            density,
            buffer.as_mut_ptr(),
            buffer.len(),
        );
        buffer[..written.min(FIR_LINES_MAX_LEVELS)].to_vec()
    }
}

/// Checked empirical relation callback.
pub(crate) struct CallbackRelation {
    user_data: *mut c_void,
    surface_brightness: RelationCallback,
}

impl TryFrom<&FirLinesEmpiricalRelation> for CallbackRelation {
    type Error = DefaultFirLinesError;

    fn try_from(table: &FirLinesEmpiricalRelation) -> Result<Self, Self::Error> {
        Ok(Self {
            user_data: table.user_data,
            surface_brightness: require(table.surface_brightness, "surface_brightness")?,
        })
    }
}

impl EmpiricalRelation for CallbackRelation {
    fn surface_brightness(&self, sigma_sfr: f64) -> f64 {
        (self.surface_brightness)(self.user_data, sigma_sfr)
    }
}
