//! Ephemeris provider interface and supporting arithmetic.
//!
//! Chart assembly never computes astronomical positions itself; it consumes
//! an [`EphemerisSource`] - a capability handle constructed once from an
//! [`EphemerisConfig`]. This crate defines that contract, the Julian-Day
//! fallback arithmetic used when a provider cannot convert a calendar
//! moment, a table-driven provider for tests and diagnostics, and the
//! scripting-bridge alternate whose absence is reported rather than fatal.

pub mod bridge;
pub mod config;
pub mod error;
pub mod fixed;
pub mod julian;
pub mod provider;

pub use bridge::BridgeEphemeris;
pub use config::{AyanamsaInfo, EphemerisConfig, NodeConvention, SiderealMode};
pub use error::EphemError;
pub use fixed::FixedEphemeris;
pub use julian::{CalendarMoment, JulianDay, calendar_to_jd, delta_t_seconds, julian_day};
pub use provider::EphemerisSource;
