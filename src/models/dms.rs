use crate::models::{LatitudeDirection, LongitudeDirection};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical degrees/minutes/seconds form of a coordinate pair.
///
/// Minute and second fields stay textual: a minutes field may carry an
/// appended fraction ("30.50"), and seconds may be a single digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDms {
    pub lat_dir: LatitudeDirection,
    pub lat_deg: String,
    pub lat_min: String,
    pub lat_sec: String,
    pub lon_dir: LongitudeDirection,
    pub lon_deg: String,
    pub lon_min: String,
    pub lon_sec: String,
}

impl NormalizedDms {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lat_dir: LatitudeDirection,
        lat_deg: impl Into<String>,
        lat_min: impl Into<String>,
        lat_sec: impl Into<String>,
        lon_dir: LongitudeDirection,
        lon_deg: impl Into<String>,
        lon_min: impl Into<String>,
        lon_sec: impl Into<String>,
    ) -> Self {
        Self {
            lat_dir,
            lat_deg: lat_deg.into(),
            lat_min: lat_min.into(),
            lat_sec: lat_sec.into(),
            lon_dir,
            lon_deg: lon_deg.into(),
            lon_min: lon_min.into(),
            lon_sec: lon_sec.into(),
        }
    }

    /// The eight fields in their canonical order, directions as letters.
    pub fn to_fields(&self) -> [String; 8] {
        [
            self.lat_dir.to_string(),
            self.lat_deg.clone(),
            self.lat_min.clone(),
            self.lat_sec.clone(),
            self.lon_dir.to_string(),
            self.lon_deg.clone(),
            self.lon_min.clone(),
            self.lon_sec.clone(),
        ]
    }
}

/// Number of decimal places kept after conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Precision {
    /// Whole degrees.
    Degrees,
    /// Minutes were present: three decimals.
    Minutes,
    /// Seconds were present: six decimals.
    Seconds,
}

impl Precision {
    pub fn decimal_places(&self) -> u32 {
        match self {
            Self::Degrees => 0,
            Self::Minutes => 3,
            Self::Seconds => 6,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees => write!(f, "degrees"),
            Self::Minutes => write!(f, "minutes"),
            Self::Seconds => write!(f, "seconds"),
        }
    }
}

/// Signed decimal-degree coordinate, quantized to `precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalCoordinate {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub precision: Precision,
}

impl DecimalCoordinate {
    /// Latitude rendered with exactly `precision` decimals.
    pub fn latitude_string(&self) -> String {
        self.latitude.to_string()
    }

    pub fn longitude_string(&self) -> String {
        self.longitude.to_string()
    }
}

impl fmt::Display for DecimalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
