//! The immutable chart record and its derived queries.

use std::collections::HashMap;

use jataka_ephem::{AyanamsaInfo, CalendarMoment};
use jataka_vedic_base::Graha;

use crate::birth::GeoCoordinate;

/// One computed chart: the birth moment, place, ascendant, and a longitude
/// per graha, all sidereal degrees in [0, 360).
///
/// Constructed once per generation call and never mutated; a derived chart
/// (divisional or Moon-anchored) is always a new record built from an
/// existing one's field values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub moment: CalendarMoment,
    pub tz_offset_hours: f64,
    pub location_name: String,
    pub coordinate: GeoCoordinate,
    pub ascendant_longitude: f64,
    pub longitudes: HashMap<Graha, f64>,
    pub ayanamsa: Option<AyanamsaInfo>,
}

impl ChartData {
    /// 0-based rashi index of the ascendant, clamped for the 360.0 edge.
    pub fn ascendant_rashi_index(&self) -> u8 {
        ((self.ascendant_longitude / 30.0).floor() as u8).min(11)
    }

    /// Longitude of a graha, if present.
    pub fn longitude_of(&self, graha: Graha) -> Option<f64> {
        self.longitudes.get(&graha).copied()
    }

    /// 1-based house of a graha, counted from the ascendant's rashi.
    /// The ascendant's own rashi is always house 1. A graha absent from
    /// the record defaults to house 1; assembly always populates all 9,
    /// so that path is defensive only.
    pub fn house_of(&self, graha: Graha) -> u8 {
        let Some(lon) = self.longitude_of(graha) else {
            return 1;
        };
        let graha_rashi = ((lon / 30.0).floor() as i16).min(11);
        let asc_rashi = self.ascendant_rashi_index() as i16;
        ((graha_rashi - asc_rashi + 12) % 12 + 1) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_vedic_base::ALL_GRAHAS;

    fn chart_with(asc: f64, entries: &[(Graha, f64)]) -> ChartData {
        ChartData {
            moment: CalendarMoment::new(1991, 11, 13, 15, 0, 0),
            tz_offset_hours: 6.5,
            location_name: "Rangoon, Burma".into(),
            coordinate: GeoCoordinate::new(16.8409, 96.1735),
            ascendant_longitude: asc,
            longitudes: entries.iter().copied().collect(),
            ayanamsa: None,
        }
    }

    #[test]
    fn ascendant_sign_index() {
        assert_eq!(chart_with(0.0, &[]).ascendant_rashi_index(), 0);
        assert_eq!(chart_with(326.77, &[]).ascendant_rashi_index(), 10);
        assert_eq!(chart_with(359.999, &[]).ascendant_rashi_index(), 11);
    }

    #[test]
    fn house_counts_from_ascendant_sign() {
        // Ascendant in Kumbha (10); Sun in Tula (6) is the 9th house
        let chart = chart_with(326.77, &[(Graha::Surya, 207.208)]);
        assert_eq!(chart.house_of(Graha::Surya), 9);
    }

    #[test]
    fn same_sign_is_house_one() {
        let chart = chart_with(326.77, &[(Graha::Chandra, 317.433)]);
        assert_eq!(chart.house_of(Graha::Chandra), 1);
    }

    #[test]
    fn houses_stay_in_range() {
        let chart = chart_with(
            95.0,
            &ALL_GRAHAS
                .iter()
                .enumerate()
                .map(|(i, &g)| (g, i as f64 * 37.5))
                .collect::<Vec<_>>(),
        );
        for g in ALL_GRAHAS {
            let house = chart.house_of(g);
            assert!((1..=12).contains(&house), "{}: house {house}", g.name());
        }
    }

    #[test]
    fn absent_graha_defaults_to_house_one() {
        let chart = chart_with(100.0, &[]);
        assert_eq!(chart.house_of(Graha::Shani), 1);
    }

    #[test]
    fn wrap_around_house() {
        // Ascendant Meena (11), graha Mesha (0): the 2nd house
        let chart = chart_with(340.0, &[(Graha::Mangal, 10.0)]);
        assert_eq!(chart.house_of(Graha::Mangal), 2);
    }
}
