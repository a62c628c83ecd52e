//! Varga (divisional chart) mapping engine.
//!
//! Each varga divides the 30-degree span of a rashi into N parts and
//! reassigns every part to a target rashi according to a historical rule.
//! The supported set is the 16 shodashavarga charts plus D5, D6, D8,
//! and D11.
//!
//! Rule tables are immutable const data so they can be audited and tested
//! apart from the mapping algorithm that consumes them. All mappings are
//! pure and total: every (rashi, degree, varga) input has exactly one
//! output and there is no error path.

use crate::rashi::{RashiInfo, RashiNature, is_odd_rashi, rashi_from_longitude, rashi_nature};
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Varga enum
// ---------------------------------------------------------------------------

/// The 20 supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    D10,
    D11,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// All 20 vargas in order.
pub const ALL_VARGAS: [Varga; 20] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D5,
    Varga::D6,
    Varga::D7,
    Varga::D8,
    Varga::D9,
    Varga::D10,
    Varga::D11,
    Varga::D12,
    Varga::D16,
    Varga::D20,
    Varga::D24,
    Varga::D27,
    Varga::D30,
    Varga::D40,
    Varga::D45,
    Varga::D60,
];

/// The 16 shodashavarga charts, the subset reference fixtures cover.
pub const SHODASHAVARGA: [Varga; 16] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D12,
    Varga::D16,
    Varga::D20,
    Varga::D24,
    Varga::D27,
    Varga::D30,
    Varga::D40,
    Varga::D45,
    Varga::D60,
];

impl Varga {
    /// Number of divisions per rashi. D30's five segments are unequal in
    /// width but still count as 30 nominal parts.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D5 => 5,
            Self::D6 => 6,
            Self::D7 => 7,
            Self::D8 => 8,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D11 => 11,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Numeric D-number code.
    pub const fn code(self) -> u16 {
        self.divisions()
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "D1_Rashi",
            Self::D2 => "D2_Hora",
            Self::D3 => "D3_Drekkana",
            Self::D4 => "D4_Chaturthamsha",
            Self::D5 => "D5_Panchamsha",
            Self::D6 => "D6_Shashthamsha",
            Self::D7 => "D7_Saptamsha",
            Self::D8 => "D8_Ashtamsha",
            Self::D9 => "D9_Navamsha",
            Self::D10 => "D10_Dashamsha",
            Self::D11 => "D11_Rudramsha",
            Self::D12 => "D12_Dwadashamsha",
            Self::D16 => "D16_Shodashamsha",
            Self::D20 => "D20_Vimshamsha",
            Self::D24 => "D24_Chaturvimshamsha",
            Self::D27 => "D27_Bhamsha",
            Self::D30 => "D30_Trimshamsha",
            Self::D40 => "D40_Khavedamsha",
            Self::D45 => "D45_Akshavedamsha",
            Self::D60 => "D60_Shashtiamsha",
        }
    }

    /// Reverse lookup from the D-number code.
    pub fn from_code(code: u16) -> Option<Varga> {
        ALL_VARGAS.iter().copied().find(|v| v.code() == code)
    }
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// D2: target pair by division order. Odd signs run Simha then Karka,
/// even signs the reverse.
const HORA_ODD: [u8; 2] = [4, 3];
const HORA_EVEN: [u8; 2] = [3, 4];

/// D3: offsets from the natal rashi per division.
const DREKKANA_ODD: [u8; 3] = [0, 4, 8];
const DREKKANA_EVEN: [u8; 3] = [0, 8, 4];

/// D5: explicit offset sequence from the natal rashi, one row per nature.
const PANCHAMSHA_CHARA: [u8; 5] = [0, 10, 8, 2, 6];
const PANCHAMSHA_STHIRA: [u8; 5] = [0, 4, 10, 8, 6];
const PANCHAMSHA_DWISWABHAVA: [u8; 5] = [0, 10, 8, 2, 6];

/// Nature-offset scales: start offset from the natal rashi, indexed by
/// [chara, sthira, dwiswabhava].
const NAVAMSHA_OFFSETS: [u8; 3] = [0, 8, 4];
const RUDRAMSHA_OFFSETS: [u8; 3] = [0, 8, 4];
const SHODASHAMSHA_OFFSETS: [u8; 3] = [0, 4, 8];
const VIMSHAMSHA_OFFSETS: [u8; 3] = [0, 8, 4];
const BHAMSHA_OFFSETS: [u8; 3] = [0, 4, 8];

/// D30: unequal segments as (width, target rashi), scanned in order.
const TRIMSHAMSHA_ODD: [(f64, u8); 5] =
    [(5.0, 0), (5.0, 10), (8.0, 8), (7.0, 2), (5.0, 6)];
const TRIMSHAMSHA_EVEN: [(f64, u8); 5] =
    [(5.0, 1), (7.0, 5), (8.0, 11), (5.0, 9), (5.0, 7)];

/// Uniform-offset scales: start = natal for odd signs, natal + offset for
/// even signs; target walks one sign per division from there. A zero means
/// the scale has no parity shift.
const fn even_start_offset(varga: Varga) -> u8 {
    match varga {
        Varga::D7 => 6,
        Varga::D10 => 8,
        Varga::D24 => 4,
        Varga::D40 => 6,
        _ => 0,
    }
}

const fn nature_offsets(varga: Varga) -> [u8; 3] {
    match varga {
        Varga::D9 => NAVAMSHA_OFFSETS,
        Varga::D11 => RUDRAMSHA_OFFSETS,
        Varga::D16 => SHODASHAMSHA_OFFSETS,
        Varga::D20 => VIMSHAMSHA_OFFSETS,
        Varga::D27 => BHAMSHA_OFFSETS,
        _ => [0, 0, 0],
    }
}

const fn nature_row(nature: RashiNature) -> usize {
    match nature {
        RashiNature::Chara => 0,
        RashiNature::Sthira => 1,
        RashiNature::Dwiswabhava => 2,
    }
}

// ---------------------------------------------------------------------------
// Position type
// ---------------------------------------------------------------------------

/// A (rashi, degrees-in-rashi) pair in some divisional chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VargaPosition {
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

impl VargaPosition {
    /// Absolute longitude of this position in degrees [0, 360).
    pub fn longitude(&self) -> f64 {
        normalize_360(self.rashi_index as f64 * 30.0 + self.degrees_in_rashi)
    }

    /// Split a longitude back into a position. Round-trips with
    /// [`VargaPosition::longitude`] within floating tolerance.
    pub fn from_longitude(lon: f64) -> VargaPosition {
        let lon = normalize_360(lon);
        let rashi_index = ((lon / 30.0).floor() as u8).min(11);
        VargaPosition {
            rashi_index,
            degrees_in_rashi: lon - rashi_index as f64 * 30.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Target rashi for one equal-width division. D30 never reaches this
/// (its segments carry their own targets).
fn target_rashi(varga: Varga, rashi_index: u8, div_index: u16) -> u8 {
    let natal = rashi_index as u16;
    let div = div_index;
    match varga {
        Varga::D1 => rashi_index,

        Varga::D2 => {
            let pair = if is_odd_rashi(rashi_index) { HORA_ODD } else { HORA_EVEN };
            pair[div as usize]
        }

        Varga::D3 => {
            let offsets = if is_odd_rashi(rashi_index) {
                DREKKANA_ODD
            } else {
                DREKKANA_EVEN
            };
            ((natal + offsets[div as usize] as u16) % 12) as u8
        }

        Varga::D5 => {
            let row = match rashi_nature(rashi_index) {
                RashiNature::Chara => PANCHAMSHA_CHARA,
                RashiNature::Sthira => PANCHAMSHA_STHIRA,
                RashiNature::Dwiswabhava => PANCHAMSHA_DWISWABHAVA,
            };
            ((natal + row[div as usize] as u16) % 12) as u8
        }

        Varga::D9 | Varga::D11 | Varga::D16 | Varga::D20 | Varga::D27 => {
            let offsets = nature_offsets(varga);
            let start = offsets[nature_row(rashi_nature(rashi_index))] as u16;
            ((natal + start + div) % 12) as u8
        }

        Varga::D60 => {
            let start: u16 = if is_odd_rashi(rashi_index) { 0 } else { 6 };
            ((start + div) % 12) as u8
        }

        // Uniform-offset family (includes the parity-neutral scales)
        Varga::D4
        | Varga::D6
        | Varga::D7
        | Varga::D8
        | Varga::D10
        | Varga::D12
        | Varga::D24
        | Varga::D40
        | Varga::D45 => {
            let start = if is_odd_rashi(rashi_index) {
                natal
            } else {
                (natal + even_start_offset(varga) as u16) % 12
            };
            ((start + div) % 12) as u8
        }

        Varga::D30 => unreachable!("D30 is segment-mapped"),
    }
}

/// D30 trimshamsha: scan the unequal segments in order, accumulating
/// consumed width, and place the degree in the first segment that still
/// covers it. A degree of exactly 30.0 falls back to the last segment at
/// 29.9999 to guard against floating overflow at the sign boundary.
fn trimshamsha_position(rashi_index: u8, degrees_in_rashi: f64) -> VargaPosition {
    let segments = if is_odd_rashi(rashi_index) {
        &TRIMSHAMSHA_ODD
    } else {
        &TRIMSHAMSHA_EVEN
    };
    let deg = if degrees_in_rashi >= 30.0 { 29.9999 } else { degrees_in_rashi };

    let mut consumed = 0.0;
    for &(width, target) in segments {
        if deg < consumed + width {
            return VargaPosition {
                rashi_index: target,
                degrees_in_rashi: (deg - consumed) / width * 30.0,
            };
        }
        consumed += width;
    }
    // Floating accumulation can leave 29.9999.. just past the scan
    let (width, target) = segments[4];
    VargaPosition {
        rashi_index: target,
        degrees_in_rashi: (deg - (30.0 - width)) / width * 30.0,
    }
}

/// Map a rashi position into a divisional chart.
///
/// `degrees_in_rashi` is expected in [0, 30); values at or past 30.0 are
/// absorbed by the boundary clamps. The position within the matched
/// division is re-expressed as a position within a full 30-degree sign of
/// the divisional chart.
pub fn varga_position(rashi_index: u8, degrees_in_rashi: f64, varga: Varga) -> VargaPosition {
    let rashi_index = rashi_index % 12;

    if varga == Varga::D1 {
        return VargaPosition {
            rashi_index,
            degrees_in_rashi,
        };
    }
    if varga == Varga::D30 {
        return trimshamsha_position(rashi_index, degrees_in_rashi);
    }

    let divisions = varga.divisions();
    let width = 30.0 / divisions as f64;
    // Clamp absorbs floating rounding at the 30-degree boundary
    let div_index = ((degrees_in_rashi / width).floor() as u16).min(divisions - 1);
    let within = degrees_in_rashi - div_index as f64 * width;

    VargaPosition {
        rashi_index: target_rashi(varga, rashi_index, div_index),
        degrees_in_rashi: within / width * 30.0,
    }
}

/// Map a sidereal longitude through a varga, returning the mapped
/// longitude in [0, 360).
pub fn varga_longitude(sidereal_lon: f64, varga: Varga) -> f64 {
    let natal = VargaPosition::from_longitude(sidereal_lon);
    varga_position(natal.rashi_index, natal.degrees_in_rashi, varga).longitude()
}

/// Batch: one longitude through several vargas.
pub fn varga_longitudes(sidereal_lon: f64, vargas: &[Varga]) -> Vec<f64> {
    vargas.iter().map(|&v| varga_longitude(sidereal_lon, v)).collect()
}

/// Map a sidereal longitude through a varga, returning the full
/// [`RashiInfo`] of the mapped position.
pub fn varga_rashi_info(sidereal_lon: f64, varga: Varga) -> RashiInfo {
    rashi_from_longitude(varga_longitude(sidereal_lon, varga))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
