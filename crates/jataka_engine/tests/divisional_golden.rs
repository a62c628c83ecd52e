//! Divisional-chart fixture test: for each scale column group, the
//! ascendant sign and every body's house must match exactly (integer
//! equality, no tolerance).
//!
//! The fixture keys rows by a known location name; an unknown location,
//! an unparseable sign name, or a missing house column is a hard failure
//! at load time. Input longitudes come from the companion stress fixture
//! so both files describe the same reference chart.

use std::collections::HashMap;
use std::path::Path;

use csv::ReaderBuilder;

use jataka_engine::{BirthInput, ChartEngine, GeoCoordinate};
use jataka_ephem::{EphemerisConfig, FixedEphemeris};
use jataka_vedic_base::{ALL_GRAHAS, Graha, Rashi, SHODASHAVARGA, Varga};

const FIXTURE: &str = "tests/fixtures/divisional_charts.csv";
const STRESS_FIXTURE: &str = "tests/fixtures/rangoon_stress.csv";

/// Locations the divisional fixture may reference.
fn known_location(name: &str) -> (GeoCoordinate, f64) {
    match name {
        "Rangoon, Burma" => (GeoCoordinate::new(16.8409, 96.1735), 6.5),
        other => panic!("divisional fixture references unknown location: {other}"),
    }
}

struct FixtureRow {
    name: String,
    birth_input: BirthInput,
    /// Per varga: expected ascendant rashi index and per-body houses.
    expectations: Vec<(Varga, u8, Vec<(Graha, u8)>)>,
}

fn parse_date(value: &str) -> (i32, u32, u32) {
    let mut parts = value.split('-');
    (
        parts.next().and_then(|p| p.parse().ok()).expect("year"),
        parts.next().and_then(|p| p.parse().ok()).expect("month"),
        parts.next().and_then(|p| p.parse().ok()).expect("day"),
    )
}

fn parse_time(value: &str) -> (u32, u32, u32) {
    let mut parts = value.split(':');
    (
        parts.next().and_then(|p| p.parse().ok()).expect("hour"),
        parts.next().and_then(|p| p.parse().ok()).expect("minute"),
        parts.next().and_then(|p| p.parse().ok()).unwrap_or(0),
    )
}

fn load_rows(path: &Path) -> Vec<FixtureRow> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .expect("divisional fixture should open");
    let headers: Vec<String> = reader
        .headers()
        .expect("divisional fixture header")
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.expect("readable record");
        if record.len() < headers.len() {
            continue;
        }
        let fields: HashMap<&str, &str> = headers
            .iter()
            .map(String::as_str)
            .zip(record.iter())
            .collect();

        let (year, month, day) = parse_date(fields["date"]);
        let (hour, minute, second) = parse_time(fields["time"]);
        let location = fields["location"].to_owned();
        let (coordinate, tz_offset_hours) = known_location(&location);

        let mut expectations = Vec::new();
        for &varga in &SHODASHAVARGA {
            let prefix = format!("D{}", varga.code());
            let Some(&asc_name) = fields.get(format!("{prefix}_AscSign").as_str()) else {
                continue;
            };
            let asc_sign = Rashi::from_western_name(asc_name)
                .unwrap_or_else(|| panic!("unparseable sign name: {asc_name}"))
                .index();

            let mut houses = Vec::new();
            for g in ALL_GRAHAS {
                let key = format!("{prefix}_{}_House", g.english_name());
                let value = fields
                    .get(key.as_str())
                    .unwrap_or_else(|| panic!("missing column {key}"));
                let house: u8 = value
                    .parse()
                    .unwrap_or_else(|_| panic!("bad house value in {key}: {value}"));
                houses.push((g, house));
            }
            expectations.push((varga, asc_sign, houses));
        }

        rows.push(FixtureRow {
            name: fields.get("name").unwrap_or(&"Unknown").to_string(),
            birth_input: BirthInput::new(
                year,
                month,
                day,
                hour,
                minute,
                second,
                tz_offset_hours,
                coordinate,
                location,
            ),
            expectations,
        });
    }
    rows
}

/// Provider seeded from the stress fixture's reference row for the same
/// date and location.
fn provider_for(input: &BirthInput) -> FixedEphemeris {
    let mut reader = ReaderBuilder::new()
        .from_path(Path::new(STRESS_FIXTURE))
        .expect("stress fixture should open");
    let headers: Vec<String> = reader
        .headers()
        .expect("stress header")
        .iter()
        .map(str::to_owned)
        .collect();

    for record in reader.records() {
        let record = record.expect("readable record");
        let fields: HashMap<&str, &str> = headers
            .iter()
            .map(String::as_str)
            .zip(record.iter())
            .collect();
        let (year, month, day) = parse_date(fields["date"]);
        if (year, month, day) != (input.year, input.month, input.day)
            || fields["location"] != input.location_name
        {
            continue;
        }

        let lon = |key: &str| -> f64 { fields[key].parse().expect("longitude value") };
        return FixedEphemeris::new(EphemerisConfig::default())
            .with_ascendant(lon("asc_longitude"))
            .with_longitude(Graha::Surya, lon("sun_longitude"))
            .with_longitude(Graha::Chandra, lon("moon_longitude"))
            .with_longitude(Graha::Mangal, lon("mars_longitude"))
            .with_longitude(Graha::Buddh, lon("mercury_longitude"))
            .with_longitude(Graha::Guru, lon("jupiter_longitude"))
            .with_longitude(Graha::Shukra, lon("venus_longitude"))
            .with_longitude(Graha::Shani, lon("saturn_longitude"))
            .with_longitude(Graha::Rahu, lon("rahu_longitude"));
    }
    panic!(
        "no stress row for {} {}",
        input.location_name, input.year
    );
}

#[test]
fn divisional_charts_match_fixture() {
    let rows = load_rows(Path::new(FIXTURE));
    assert!(!rows.is_empty(), "expected divisional fixture rows to load");

    for row in rows {
        let engine = ChartEngine::new(provider_for(&row.birth_input));

        for (varga, expected_asc, houses) in &row.expectations {
            let chart = engine.chart(&row.birth_input, *varga);

            assert_eq!(
                chart.ascendant_rashi_index(),
                *expected_asc,
                "ascendant sign mismatch for {} {}",
                row.name,
                varga.name(),
            );

            for (graha, expected_house) in houses {
                assert_eq!(
                    chart.house_of(*graha),
                    *expected_house,
                    "{} house mismatch for {} {}",
                    graha.english_name(),
                    row.name,
                    varga.name(),
                );
            }
        }
    }
}

#[test]
fn fixture_covers_all_sixteen_scales() {
    let rows = load_rows(Path::new(FIXTURE));
    let row = rows.first().expect("at least one fixture row");
    assert_eq!(row.expectations.len(), SHODASHAVARGA.len());
    for (varga, _, houses) in &row.expectations {
        assert!(SHODASHAVARGA.contains(varga));
        assert_eq!(houses.len(), 9);
    }
}
