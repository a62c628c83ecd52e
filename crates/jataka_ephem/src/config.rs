//! Provider configuration handle.
//!
//! Configuration is part of a provider's construction, not ambient global
//! state: a provider value is built from an [`EphemerisConfig`] once and is
//! immutable afterward, so there is no reconfiguration-after-first-use
//! hazard and concurrent chart generation only ever reads.

use std::path::PathBuf;

/// Supported sidereal reference systems (the Lahiri family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SiderealMode {
    #[default]
    Lahiri,
    Lahiri1940,
    LahiriVp285,
    LahiriIcrc,
}

impl SiderealMode {
    /// Display name of the ayanamsa system.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Lahiri1940 => "Lahiri 1940",
            Self::LahiriVp285 => "Lahiri VP285",
            Self::LahiriIcrc => "Lahiri ICRC",
        }
    }
}

/// Lunar node convention: smooth mean motion or perturbation-corrected
/// true position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeConvention {
    #[default]
    Mean,
    True,
}

/// Ayanamsa descriptor attached to a chart when the provider reports one.
#[derive(Debug, Clone, PartialEq)]
pub struct AyanamsaInfo {
    pub name: String,
    pub value: f64,
}

/// One-time provider configuration. Moved into the provider at
/// construction; never mutated afterward.
#[derive(Debug, Clone, Default)]
pub struct EphemerisConfig {
    /// Directory holding the provider's ephemeris data files, if it
    /// needs any.
    pub data_path: Option<PathBuf>,
    pub sidereal_mode: SiderealMode,
    pub node_convention: NodeConvention,
}

impl EphemerisConfig {
    pub fn new(
        data_path: Option<PathBuf>,
        sidereal_mode: SiderealMode,
        node_convention: NodeConvention,
    ) -> Self {
        Self {
            data_path,
            sidereal_mode,
            node_convention,
        }
    }
}
