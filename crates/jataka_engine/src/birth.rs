//! Caller-supplied birth event.

use jataka_ephem::CalendarMoment;

/// Geographic coordinate in decimal degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A birth event: local calendar fields, timezone offset, and place.
/// Read-only; consumed once per chart generation to produce Julian Days.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Offset of local civil time from UTC, in hours (east positive,
    /// half-hour zones as fractions).
    pub tz_offset_hours: f64,
    pub coordinate: GeoCoordinate,
    pub location_name: String,
}

impl BirthInput {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        tz_offset_hours: f64,
        coordinate: GeoCoordinate,
        location_name: impl Into<String>,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            tz_offset_hours,
            coordinate,
            location_name: location_name.into(),
        }
    }

    /// The local calendar fields as a provider moment.
    pub fn moment(&self) -> CalendarMoment {
        CalendarMoment::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moment_carries_calendar_fields() {
        let input = BirthInput::new(
            1991,
            11,
            13,
            15,
            0,
            0,
            6.5,
            GeoCoordinate::new(16.8409, 96.1735),
            "Rangoon, Burma",
        );
        let m = input.moment();
        assert_eq!((m.year, m.month, m.day), (1991, 11, 13));
        assert_eq!((m.hour, m.minute, m.second), (15, 0, 0));
        assert_eq!(input.location_name, "Rangoon, Burma");
    }
}
