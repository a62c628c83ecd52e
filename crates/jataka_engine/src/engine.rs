//! Chart generation over an injected ephemeris provider.

use std::collections::HashMap;

use jataka_ephem::{EphemerisSource, julian_day};
use jataka_vedic_base::{Graha, SAPTA_GRAHAS, Varga, normalize_360, varga_longitude};

use crate::birth::BirthInput;
use crate::chart::ChartData;

/// Longitude substituted when the provider cannot compute a value. A chart
/// must always be producible, even under partial data loss; the degraded
/// body lands at 0.0 degrees (house 1 behavior).
const DEFAULT_LONGITUDE: f64 = 0.0;

/// Assembly options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartOptions {
    /// Round Rahu/Ketu to 0.01 degree before divisional mapping, to match
    /// reference datasets that publish node positions at that precision.
    /// Applies to the nodes only, never to other bodies. Off by default.
    pub round_node_longitudes: bool,
}

/// Chart generation engine. Holds the provider handle; all methods are
/// read-only and produce new immutable records.
#[derive(Debug, Clone)]
pub struct ChartEngine<P: EphemerisSource> {
    provider: P,
    options: ChartOptions,
}

impl<P: EphemerisSource> ChartEngine<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            options: ChartOptions::default(),
        }
    }

    pub fn with_options(provider: P, options: ChartOptions) -> Self {
        Self { provider, options }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the base (D1) chart.
    ///
    /// Provider failures degrade the affected value to
    /// [`DEFAULT_LONGITUDE`] rather than aborting: a chart is always
    /// produced. The Julian Day falls back to the internal calendar
    /// conversion when the provider's own conversion reports failure.
    /// Ketu is never requested from the provider; it is Rahu + 180.
    pub fn base_chart(&self, input: &BirthInput) -> ChartData {
        let moment = input.moment();
        let jd = self
            .provider
            .julian_day(&moment, input.tz_offset_hours)
            .unwrap_or_else(|_| julian_day(&moment, input.tz_offset_hours));

        let mut longitudes = HashMap::with_capacity(9);
        for graha in SAPTA_GRAHAS {
            longitudes.insert(graha, self.body_longitude(jd.ut, graha));
        }
        let rahu = self.body_longitude(jd.ut, Graha::Rahu);
        longitudes.insert(Graha::Rahu, rahu);
        longitudes.insert(Graha::Ketu, normalize_360(rahu + 180.0));

        let ascendant_longitude = self
            .provider
            .ascendant_longitude(
                jd.ut,
                input.coordinate.latitude,
                input.coordinate.longitude,
            )
            .map(normalize_360)
            .unwrap_or(DEFAULT_LONGITUDE);

        ChartData {
            moment,
            tz_offset_hours: input.tz_offset_hours,
            location_name: input.location_name.clone(),
            coordinate: input.coordinate,
            ascendant_longitude,
            longitudes,
            ayanamsa: self.provider.ayanamsa_info(jd.et),
        }
    }

    /// Build a chart at the requested divisional scale.
    ///
    /// D1 returns the base chart unchanged. Any other scale maps the
    /// ascendant and every body independently through the varga engine;
    /// the moment, place, and ayanamsa carry over from the base chart.
    pub fn chart(&self, input: &BirthInput, varga: Varga) -> ChartData {
        let base = self.base_chart(input);
        if varga == Varga::D1 {
            return base;
        }

        let longitudes = base
            .longitudes
            .iter()
            .map(|(&graha, &lon)| (graha, varga_longitude(self.premap_longitude(graha, lon), varga)))
            .collect();

        ChartData {
            ascendant_longitude: varga_longitude(base.ascendant_longitude, varga),
            longitudes,
            ..base
        }
    }

    /// Re-anchor a chart's ascendant to its Moon, for Moon-chart
    /// (chandra lagna) analysis. Body longitudes and all other fields
    /// carry over. A chart with no Moon entry comes back unchanged.
    pub fn moon_chart(&self, chart: &ChartData) -> ChartData {
        match chart.longitude_of(Graha::Chandra) {
            Some(moon) => ChartData {
                ascendant_longitude: moon,
                ..chart.clone()
            },
            None => chart.clone(),
        }
    }

    fn body_longitude(&self, jd_ut: f64, graha: Graha) -> f64 {
        self.provider
            .sidereal_longitude(jd_ut, graha)
            .map(normalize_360)
            .unwrap_or(DEFAULT_LONGITUDE)
    }

    /// Node-precision adjustment applied before divisional mapping.
    fn premap_longitude(&self, graha: Graha, lon: f64) -> f64 {
        if self.options.round_node_longitudes && graha.is_node() {
            (lon * 100.0).round() / 100.0
        } else {
            lon
        }
    }
}
