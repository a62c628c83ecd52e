//! Scripting-bridge alternate provider.
//!
//! Chart calculations can optionally be delegated to an embedded scripting
//! runtime as a second calculation source. That runtime is an optional
//! build-time integration; this module models only its capability surface.
//! Selecting the bridge when no runtime is linked yields a provider whose
//! every computation reports [`EphemError::Unavailable`] - configuration
//! reports the absence, nothing crashes.

use jataka_vedic_base::Graha;

use crate::config::{AyanamsaInfo, EphemerisConfig};
use crate::error::EphemError;
use crate::julian::{CalendarMoment, JulianDay};
use crate::provider::EphemerisSource;

const NO_RUNTIME: &str = "scripting-bridge runtime is not linked into this build";

/// Alternate [`EphemerisSource`] backed by an external scripting runtime.
#[derive(Debug, Clone)]
pub struct BridgeEphemeris {
    config: EphemerisConfig,
}

impl BridgeEphemeris {
    pub fn new(config: EphemerisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Whether the bridge runtime is present. Always an error in this
    /// build; callers select the primary provider when it is.
    pub fn availability(&self) -> Result<(), EphemError> {
        Err(EphemError::Unavailable(NO_RUNTIME))
    }
}

impl EphemerisSource for BridgeEphemeris {
    fn julian_day(
        &self,
        _moment: &CalendarMoment,
        _tz_offset_hours: f64,
    ) -> Result<JulianDay, EphemError> {
        Err(EphemError::Unavailable(NO_RUNTIME))
    }

    fn sidereal_longitude(&self, _jd_ut: f64, _graha: Graha) -> Result<f64, EphemError> {
        Err(EphemError::Unavailable(NO_RUNTIME))
    }

    fn ascendant_longitude(
        &self,
        _jd_ut: f64,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<f64, EphemError> {
        Err(EphemError::Unavailable(NO_RUNTIME))
    }

    fn ayanamsa_info(&self, _jd_et: f64) -> Option<AyanamsaInfo> {
        None
    }
}
