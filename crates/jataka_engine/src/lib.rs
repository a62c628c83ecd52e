//! Chart assembly: birth input to D1 and divisional charts.
//!
//! [`ChartEngine`] orchestrates an injected ephemeris provider into
//! immutable [`ChartData`] records: the base (D1) chart, any of the 20
//! divisional charts via the varga mapping engine, and the Moon-anchored
//! chart. Chart generation never fails outright - a provider failure for
//! one body degrades that body to the documented 0.0-longitude default.

pub mod birth;
pub mod chart;
pub mod engine;

pub use birth::{BirthInput, GeoCoordinate};
pub use chart::ChartData;
pub use engine::{ChartEngine, ChartOptions};
