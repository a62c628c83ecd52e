//! Table-driven ephemeris provider.
//!
//! Serves positions from an explicit table instead of computing them.
//! Integration tests seed it from reference chart rows so the whole
//! assembly path runs without ephemeris data files; it is also the
//! smallest worked example of wiring a backend into
//! [`EphemerisSource`](crate::EphemerisSource).

use jataka_vedic_base::Graha;

use crate::config::{AyanamsaInfo, EphemerisConfig};
use crate::error::EphemError;
use crate::provider::EphemerisSource;

/// Provider over a fixed table of longitudes. Bodies without an entry are
/// reported unavailable, which exercises callers' substitution policy.
#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    config: EphemerisConfig,
    longitudes: [Option<f64>; 9],
    ascendant: Option<f64>,
    ayanamsa: Option<AyanamsaInfo>,
}

impl FixedEphemeris {
    pub fn new(config: EphemerisConfig) -> Self {
        Self {
            config,
            longitudes: [None; 9],
            ascendant: None,
            ayanamsa: None,
        }
    }

    /// Table entry for one graha.
    pub fn with_longitude(mut self, graha: Graha, lon: f64) -> Self {
        self.longitudes[graha.index() as usize] = Some(lon);
        self
    }

    pub fn with_ascendant(mut self, lon: f64) -> Self {
        self.ascendant = Some(lon);
        self
    }

    pub fn with_ayanamsa(mut self, ayanamsa: AyanamsaInfo) -> Self {
        self.ayanamsa = Some(ayanamsa);
        self
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }
}

impl EphemerisSource for FixedEphemeris {
    fn sidereal_longitude(&self, _jd_ut: f64, graha: Graha) -> Result<f64, EphemError> {
        self.longitudes[graha.index() as usize]
            .ok_or(EphemError::Unavailable("no table entry for body"))
    }

    fn ascendant_longitude(
        &self,
        _jd_ut: f64,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<f64, EphemError> {
        self.ascendant
            .ok_or(EphemError::Unavailable("no table entry for ascendant"))
    }

    fn ayanamsa_info(&self, _jd_et: f64) -> Option<AyanamsaInfo> {
        self.ayanamsa.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::CalendarMoment;

    #[test]
    fn serves_table_entries() {
        let provider = FixedEphemeris::new(EphemerisConfig::default())
            .with_longitude(Graha::Surya, 207.2)
            .with_ascendant(326.77);

        assert_eq!(provider.sidereal_longitude(0.0, Graha::Surya), Ok(207.2));
        assert_eq!(provider.ascendant_longitude(0.0, 16.84, 96.17), Ok(326.77));
    }

    #[test]
    fn missing_entries_unavailable() {
        let provider = FixedEphemeris::new(EphemerisConfig::default());
        assert!(provider.sidereal_longitude(0.0, Graha::Chandra).is_err());
        assert!(provider.ascendant_longitude(0.0, 0.0, 0.0).is_err());
        assert!(provider.ayanamsa_info(0.0).is_none());
    }

    #[test]
    fn default_julian_day_is_internal_conversion() {
        let provider = FixedEphemeris::new(EphemerisConfig::default());
        let moment = CalendarMoment::new(2000, 1, 1, 12, 0, 0);
        let jd = provider.julian_day(&moment, 0.0).unwrap();
        assert!((jd.ut - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn ayanamsa_reported_when_set() {
        let provider = FixedEphemeris::new(EphemerisConfig::default()).with_ayanamsa(AyanamsaInfo {
            name: "Lahiri".into(),
            value: 23.7417,
        });
        let info = provider.ayanamsa_info(2_448_573.85).unwrap();
        assert_eq!(info.name, "Lahiri");
        assert!((info.value - 23.7417).abs() < 1e-12);
    }
}
