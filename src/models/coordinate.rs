use serde::{Deserialize, Serialize};
use std::fmt;

/// Hemisphere marker for a latitude value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatitudeDirection {
    North,
    South,
}

/// Hemisphere marker for a longitude value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LongitudeDirection {
    East,
    West,
}

impl LatitudeDirection {
    /// Resolve a direction marker as written in text ("n", "South", ...).
    ///
    /// Only the first character counts, upper-cased.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match first_letter(marker)? {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Self::South)
    }
}

impl LongitudeDirection {
    /// Resolve a direction marker as written in text ("w", "EAST", ...).
    pub fn from_marker(marker: &str) -> Option<Self> {
        match first_letter(marker)? {
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Self::West)
    }
}

fn first_letter(marker: &str) -> Option<char> {
    marker.trim().chars().next()?.to_uppercase().next()
}

impl fmt::Display for LatitudeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for LongitudeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// What follows the minutes of one axis.
///
/// Seconds digits and a decimal fraction of minutes are mutually exclusive
/// for the same axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubMinute {
    /// One or two seconds digits, e.g. "15" or "7".
    Seconds(String),
    /// Fraction of a minute including its leading dot, e.g. ".50".
    MinuteFraction(String),
    Absent,
}

impl SubMinute {
    pub fn seconds(&self) -> Option<&str> {
        match self {
            Self::Seconds(digits) => Some(digits),
            _ => None,
        }
    }

    pub fn minute_fraction(&self) -> Option<&str> {
        match self {
            Self::MinuteFraction(fraction) => Some(fraction),
            _ => None,
        }
    }
}

/// Captured fields for one axis of a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisCapture<D> {
    pub direction: D,
    /// Degree digits as written ("45", "075", "122").
    pub degrees: String,
    /// Two minute digits, when the source had minutes.
    pub minutes: Option<String>,
    pub sub_minute: SubMinute,
}

impl<D> AxisCapture<D> {
    pub fn new(direction: D, degrees: impl Into<String>) -> Self {
        Self {
            direction,
            degrees: degrees.into(),
            minutes: None,
            sub_minute: SubMinute::Absent,
        }
    }

    pub fn with_minutes(mut self, minutes: impl Into<String>) -> Self {
        self.minutes = Some(minutes.into());
        self
    }

    pub fn with_sub_minute(mut self, sub_minute: SubMinute) -> Self {
        self.sub_minute = sub_minute;
        self
    }
}

/// One coordinate pair recognised in a text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateMatch {
    /// Exact substring of the fragment that matched.
    pub raw_text: String,
    /// Byte offsets of `raw_text` within the fragment.
    pub start: usize,
    pub end: usize,
    /// Byte offset (relative to `start`) where the longitude half begins.
    pub split: usize,
    pub latitude: AxisCapture<LatitudeDirection>,
    pub longitude: AxisCapture<LongitudeDirection>,
    pub degree_mark_present: bool,
}

impl CoordinateMatch {
    /// Latitude half of the raw text, with the delimiter stripped.
    pub fn lat_text(&self) -> &str {
        self.raw_text[..self.split]
            .trim_end_matches(|c: char| c == ',' || c == '/' || c.is_whitespace())
    }

    /// Longitude half of the raw text.
    pub fn lon_text(&self) -> &str {
        self.raw_text[self.split..].trim_start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_marker() {
        assert_eq!(
            LatitudeDirection::from_marker("south"),
            Some(LatitudeDirection::South)
        );
        assert_eq!(
            LatitudeDirection::from_marker("N"),
            Some(LatitudeDirection::North)
        );
        assert_eq!(
            LongitudeDirection::from_marker("west"),
            Some(LongitudeDirection::West)
        );
        assert_eq!(
            LongitudeDirection::from_marker("e"),
            Some(LongitudeDirection::East)
        );
        assert_eq!(LatitudeDirection::from_marker("east"), None);
        assert_eq!(LongitudeDirection::from_marker(""), None);
    }

    #[test]
    fn test_sign_of_direction() {
        assert!(LatitudeDirection::South.is_negative());
        assert!(!LatitudeDirection::North.is_negative());
        assert!(LongitudeDirection::West.is_negative());
        assert!(!LongitudeDirection::East.is_negative());
    }

    #[test]
    fn test_lat_lon_text_split() {
        let coordinate = CoordinateMatch {
            raw_text: "45°30'15\" N, 122°20'10\" W".to_string(),
            start: 0,
            end: 27,
            split: 14,
            latitude: AxisCapture::new(LatitudeDirection::North, "45"),
            longitude: AxisCapture::new(LongitudeDirection::West, "122"),
            degree_mark_present: true,
        };

        assert_eq!(coordinate.lat_text(), "45°30'15\" N");
        assert_eq!(coordinate.lon_text(), "122°20'10\" W");
    }
}
