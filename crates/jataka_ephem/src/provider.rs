//! The ephemeris provider capability interface.

use jataka_vedic_base::Graha;

use crate::config::AyanamsaInfo;
use crate::error::EphemError;
use crate::julian::{CalendarMoment, JulianDay, julian_day};

/// Capability interface chart assembly consumes.
///
/// A provider is constructed once from an `EphemerisConfig` and is
/// read-only afterward; implementations must be safe to share across
/// threads once built. The default `julian_day` body is the pure internal
/// conversion; providers backed by an astronomical library may override it
/// and report failure, in which case callers fall back to
/// [`crate::julian::julian_day`] themselves.
pub trait EphemerisSource {
    /// Convert a civil moment plus timezone offset to the Julian Day pair.
    fn julian_day(
        &self,
        moment: &CalendarMoment,
        tz_offset_hours: f64,
    ) -> Result<JulianDay, EphemError> {
        Ok(julian_day(moment, tz_offset_hours))
    }

    /// Sidereal longitude of a graha in degrees, for the configured
    /// ayanamsa and node convention.
    fn sidereal_longitude(&self, jd_ut: f64, graha: Graha) -> Result<f64, EphemError>;

    /// Sidereal longitude of the ascendant in degrees for a geographic
    /// position.
    fn ascendant_longitude(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<f64, EphemError>;

    /// Ayanamsa name and value at the moment, if the provider can report
    /// one.
    fn ayanamsa_info(&self, jd_et: f64) -> Option<AyanamsaInfo>;
}
