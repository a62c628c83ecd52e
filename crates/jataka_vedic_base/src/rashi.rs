//! Rashi (zodiac sign) identification, classification, and DMS breakdown.
//!
//! The ecliptic is divided into 12 signs of 30 degrees, starting from Mesha
//! (Aries) at 0 degrees sidereal. A sidereal longitude resolves to a rashi
//! plus a position within it; the varga rules additionally classify each
//! rashi by parity (odd/even) and by nature (movable/fixed/dual).

use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name, as used by reference chart data.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi from a 0-based index; any value is reduced modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Reverse lookup from the Western name ("Aries" .. "Pisces").
    pub fn from_western_name(name: &str) -> Option<Rashi> {
        ALL_RASHIS.iter().copied().find(|r| r.western_name() == name)
    }
}

/// Rashi nature classification used by several varga rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiNature {
    /// Movable (chara): Mesha, Karka, Tula, Makara.
    Chara,
    /// Fixed (sthira): Vrishabha, Simha, Vrischika, Kumbha.
    Sthira,
    /// Dual (dwiswabhava): Mithuna, Kanya, Dhanu, Meena.
    Dwiswabhava,
}

/// Nature of a rashi by 0-based index. Pure and total; the three classes
/// partition the zodiac.
pub const fn rashi_nature(rashi_index: u8) -> RashiNature {
    match rashi_index % 3 {
        0 => RashiNature::Chara,
        1 => RashiNature::Sthira,
        _ => RashiNature::Dwiswabhava,
    }
}

/// Parity flag used by the hora, drekkana, trimshamsha, and increment rules.
///
/// Convention: the 1-based odd (masculine) signs are the 0-based EVEN
/// indices - Mesha(0), Mithuna(2), Simha(4), etc. The varga tables are
/// validated against reference charts under exactly this convention.
pub const fn is_odd_rashi(rashi_index: u8) -> bool {
    rashi_index % 2 == 0
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds, may carry a fractional part.
    pub seconds: f64,
}

/// Full rashi position derived from a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Negative input is folded to its absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem_minutes = (d - degrees as f64) * 60.0;
    let minutes = rem_minutes.floor() as u8;
    let seconds = (rem_minutes - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Resolve a sidereal longitude to its rashi and position within it.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha =
/// [30, 60), and so on. The index is clamped to 11 to absorb a floating
/// value landing on exactly 360.0 after normalization.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_index = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - rashi_index as f64 * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
        assert_eq!(Rashi::from_index(23), Rashi::Meena);
    }

    #[test]
    fn western_name_round_trip() {
        for r in ALL_RASHIS {
            assert_eq!(Rashi::from_western_name(r.western_name()), Some(r));
        }
        assert_eq!(Rashi::from_western_name("Ophiuchus"), None);
    }

    #[test]
    fn nature_partitions_zodiac() {
        let mut counts = [0u8; 3];
        for i in 0..12u8 {
            match rashi_nature(i) {
                RashiNature::Chara => counts[0] += 1,
                RashiNature::Sthira => counts[1] += 1,
                RashiNature::Dwiswabhava => counts[2] += 1,
            }
        }
        assert_eq!(counts, [4, 4, 4]);
    }

    #[test]
    fn nature_known_signs() {
        assert_eq!(rashi_nature(0), RashiNature::Chara); // Mesha
        assert_eq!(rashi_nature(4), RashiNature::Sthira); // Simha
        assert_eq!(rashi_nature(11), RashiNature::Dwiswabhava); // Meena
        assert_eq!(rashi_nature(9), RashiNature::Chara); // Makara
    }

    #[test]
    fn parity_convention() {
        // 0-based even indices are the odd (masculine) signs
        assert!(is_odd_rashi(0));
        assert!(!is_odd_rashi(1));
        assert!(is_odd_rashi(10));
        assert!(!is_odd_rashi(11));
    }

    #[test]
    fn boundaries_land_in_new_sign() {
        for i in 0..12u8 {
            let info = rashi_from_longitude(i as f64 * 30.0);
            assert_eq!(info.rashi_index, i, "boundary at {}", i as f64 * 30.0);
            assert!(info.degrees_in_rashi.abs() < 1e-10);
        }
    }

    #[test]
    fn mid_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
        assert_eq!(info.dms.degrees, 15);
        assert_eq!(info.dms.minutes, 30);
        assert!(info.dms.seconds.abs() < 0.01);
    }

    #[test]
    fn wrap_and_negative() {
        let info = rashi_from_longitude(365.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert!((info.degrees_in_rashi - 5.0).abs() < 1e-10);

        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn dms_known_value() {
        // 23.853 deg = 23 deg 51' 10.8"
        let dms = deg_to_dms(23.853);
        assert_eq!(dms.degrees, 23);
        assert_eq!(dms.minutes, 51);
        assert!((dms.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn dms_round_trip() {
        for &v in &[0.0, 5.123, 15.5, 23.853, 29.999] {
            let back = dms_to_deg(&deg_to_dms(v));
            assert!((back - v).abs() < 1e-9, "{v} -> {back}");
        }
    }
}
