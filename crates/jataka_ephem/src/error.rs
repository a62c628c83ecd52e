//! Error type for ephemeris providers.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors a provider can report. Chart assembly treats every variant as
/// "value unavailable" and substitutes a documented default; nothing here
/// aborts chart generation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Internal computation failure, with the provider's message.
    Computation(String),
    /// The provider (or one of its capabilities) is not available.
    Unavailable(&'static str),
    /// Calendar input the provider cannot convert to a Julian Day.
    InvalidDate(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Computation(msg) => write!(f, "ephemeris computation error: {msg}"),
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid calendar input: {msg}"),
        }
    }
}

impl Error for EphemError {}
