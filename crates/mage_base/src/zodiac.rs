//! Zodiac signs, elements and ecliptic positions.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Given a longitude we identify the sign the
//! point falls in and express the position within that sign.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::MageError;
use crate::util::normalize_360;

/// The 12 tropical zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in wheel order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }

    /// Fire and Air feed each other, as do Earth and Water.
    pub const fn is_compatible_with(self, other: Element) -> bool {
        matches!(
            (self, other),
            (Self::Fire, Self::Air)
                | (Self::Air, Self::Fire)
                | (Self::Earth, Self::Water)
                | (Self::Water, Self::Earth)
        )
    }
}

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode glyph of the sign.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    /// Display label of the sign's calendar range.
    pub const fn date_label(self) -> &'static str {
        match self {
            Self::Aries => "Mar 21 - Apr 19",
            Self::Taurus => "Apr 20 - May 20",
            Self::Gemini => "May 21 - Jun 20",
            Self::Cancer => "Jun 21 - Jul 22",
            Self::Leo => "Jul 23 - Aug 22",
            Self::Virgo => "Aug 23 - Sep 22",
            Self::Libra => "Sep 23 - Oct 22",
            Self::Scorpio => "Oct 23 - Nov 21",
            Self::Sagittarius => "Nov 22 - Dec 21",
            Self::Capricorn => "Dec 22 - Jan 19",
            Self::Aquarius => "Jan 20 - Feb 18",
            Self::Pisces => "Feb 19 - Mar 20",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign at a 0-based wheel index.
    pub fn from_index(index: u8) -> Result<Self, MageError> {
        ALL_SIGNS
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| MageError::InvalidSign(index.to_string()))
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = MageError;

    /// Accepts an English name (any case) or a wheel index `0..=11`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(idx) = s.parse::<u8>() {
            return Self::from_index(idx);
        }
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MageError::InvalidSign(s.to_string()))
    }
}

/// Index distance between two signs on the wheel (`|a - b|`, 0..=11).
///
/// This is a plain index difference, so a square shows up as 3 or 9 and
/// an opposition as 6.
pub fn wheel_distance(a: ZodiacSign, b: ZodiacSign) -> u8 {
    a.index().abs_diff(b.index())
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:02.0}\"", self.degrees, self.minutes, self.seconds.floor())
    }
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// A point on the zodiac wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// Ecliptic longitude in [0, 360).
    pub longitude: f64,
    /// Decimal degrees within the sign [0, 30).
    pub degree_in_sign: f64,
}

impl ZodiacPosition {
    pub fn dms(&self) -> Dms {
        deg_to_dms(self.degree_in_sign)
    }
}

/// Determine the sign from an ecliptic longitude in degrees.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn position_from_longitude(longitude_deg: f64) -> ZodiacPosition {
    let lon = normalize_360(longitude_deg);
    // Clamp in case of floating point edge (exactly 360.0)
    let idx = ((lon / 30.0).floor() as usize).min(11);
    ZodiacPosition {
        sign: ALL_SIGNS[idx],
        longitude: lon,
        degree_in_sign: lon - idx as f64 * 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signs_indexed_in_order() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn elements_three_each() {
        for el in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let n = ALL_SIGNS.iter().filter(|s| s.element() == el).count();
            assert_eq!(n, 3, "{}", el.name());
        }
    }

    #[test]
    fn parse_by_name_and_index() {
        assert_eq!("leo".parse::<ZodiacSign>().unwrap(), ZodiacSign::Leo);
        assert_eq!("SAGITTARIUS".parse::<ZodiacSign>().unwrap(), ZodiacSign::Sagittarius);
        assert_eq!("11".parse::<ZodiacSign>().unwrap(), ZodiacSign::Pisces);
        assert!(matches!("12".parse::<ZodiacSign>(), Err(MageError::InvalidSign(_))));
        assert!(matches!("Ophiuchus".parse::<ZodiacSign>(), Err(MageError::InvalidSign(_))));
    }

    #[test]
    fn distance_is_plain_index_difference() {
        assert_eq!(wheel_distance(ZodiacSign::Aries, ZodiacSign::Libra), 6);
        assert_eq!(wheel_distance(ZodiacSign::Aries, ZodiacSign::Capricorn), 9);
        assert_eq!(wheel_distance(ZodiacSign::Pisces, ZodiacSign::Aries), 11);
        assert_eq!(wheel_distance(ZodiacSign::Leo, ZodiacSign::Leo), 0);
    }

    #[test]
    fn element_compatibility() {
        assert!(Element::Fire.is_compatible_with(Element::Air));
        assert!(Element::Water.is_compatible_with(Element::Earth));
        assert!(!Element::Fire.is_compatible_with(Element::Water));
        assert!(!Element::Air.is_compatible_with(Element::Air));
    }

    #[test]
    fn position_wraps_negative_and_360() {
        let p = position_from_longitude(-30.0);
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert!((p.longitude - 330.0).abs() < 1e-12);
        let p = position_from_longitude(360.0);
        assert_eq!(p.sign, ZodiacSign::Aries);
        assert!(p.degree_in_sign.abs() < 1e-12);
    }

    #[test]
    fn dms_of_degree_in_sign() {
        let p = position_from_longitude(45.5);
        let dms = p.dms();
        assert_eq!(dms.degrees, 15);
        assert_eq!(dms.minutes, 30);
        assert!(dms.seconds.abs() < 1e-6);
    }
}
