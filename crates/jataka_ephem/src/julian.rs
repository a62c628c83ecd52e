//! Calendar to Julian-Day conversion and the Universal/Ephemeris Time pair.
//!
//! Providers normally perform this conversion themselves; the functions
//! here are the documented fallback path chart assembly uses when a
//! provider's conversion reports failure. The calendar formula is Meeus,
//! *Astronomical Algorithms* (2nd ed.), Chapter 7; the Delta-T polynomial
//! pieces are the Espenak-Meeus expressions.

/// Civil calendar moment, local or UTC depending on context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Fraction of a day past midnight.
    pub fn day_fraction(&self) -> f64 {
        self.hour as f64 / 24.0 + self.minute as f64 / 1440.0 + self.second as f64 / 86_400.0
    }
}

/// Julian Day in the two time scales chart assembly needs: Universal Time
/// for apparent geometry (ascendant, planet longitudes) and Ephemeris/
/// Dynamical Time for the ayanamsa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDay {
    pub ut: f64,
    pub et: f64,
}

/// Julian Day from a calendar date (Meeus Ch. 7).
///
/// `day_frac` carries the time of day (e.g. 13.5 = noon on the 13th).
/// Dates on or after 1582-10-15 are taken as Gregorian, earlier ones as
/// Julian.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (mut y, mut m) = (year, month as i32);
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let gregorian = (year, month, day_frac) >= (1582, 10, 15.0);
    let b = if gregorian {
        let a = y.div_euclid(100);
        2 - a + a.div_euclid(4)
    } else {
        0
    };

    (365.25 * (y as f64 + 4716.0)).floor()
        + (30.6001 * (m as f64 + 1.0)).floor()
        + day_frac
        + b as f64
        - 1524.5
}

/// Delta-T (TT - UT1) in seconds for a decimal year, Espenak-Meeus
/// polynomial pieces. Outside 1800-2150 the long-term parabola applies.
pub fn delta_t_seconds(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    if !(1800.0..=2150.0).contains(&year) {
        return -20.0 + 32.0 * u * u;
    }
    if year < 1860.0 {
        let t = year - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t * t + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if year < 1900.0 {
        let t = year - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t * t + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t.powi(3) - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    }
}

/// Julian Day pair from a civil moment and its timezone offset in hours.
///
/// This is the pure fallback conversion: subtract the offset to get UT,
/// then add Delta-T for the ET value.
pub fn julian_day(moment: &CalendarMoment, tz_offset_hours: f64) -> JulianDay {
    let day_frac = moment.day as f64 + moment.day_fraction() - tz_offset_hours / 24.0;
    let ut = calendar_to_jd(moment.year, moment.month, day_frac);
    let decimal_year = moment.year as f64 + (moment.month as f64 - 0.5) / 12.0;
    let et = ut + delta_t_seconds(decimal_year) / 86_400.0;
    JulianDay { ut, et }
}
