//! Pure zodiac and divisional-chart (varga) calculations.
//!
//! This crate provides:
//! - Rashi (zodiac sign) identification and DMS breakdown from a sidereal
//!   longitude
//! - The 9-graha body set used by natal charts
//! - The varga mapping engine: 20 divisional charts (D1-D60), each a
//!   deterministic remapping of a rashi position through a historical
//!   subdivision rule
//!
//! Everything here is a pure function over value types; sidereal longitudes
//! are expected to arrive already ayanamsa-corrected from an ephemeris
//! provider.

pub mod graha;
pub mod rashi;
pub mod util;
pub mod varga;

pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, RashiNature, deg_to_dms, dms_to_deg, is_odd_rashi,
    rashi_from_longitude, rashi_nature,
};
pub use util::normalize_360;
pub use varga::{
    ALL_VARGAS, SHODASHAVARGA, Varga, VargaPosition, varga_longitude, varga_longitudes,
    varga_position, varga_rashi_info,
};
