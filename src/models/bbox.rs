use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimals kept when rendering bounding-box values.
pub const BOUNDING_BOX_DECIMALS: u32 = 6;

/// Which textual layout a bounding box was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxLayout {
    /// "lat1 to lat2, lon1 to lon2"
    LatitudeFirst,
    /// "lon1 to lon2, lat1 to lat2"
    LongitudeFirst,
    /// "lat1, lon1 to lat2, lon2"
    CornerPairs,
}

/// A study area given as a latitude range and a longitude range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat1: Decimal,
    pub lat2: Decimal,
    pub lon1: Decimal,
    pub lon2: Decimal,
    pub centroid_lat: Decimal,
    pub centroid_lon: Decimal,
}

impl BoundingBox {
    pub fn from_corners(lat1: Decimal, lat2: Decimal, lon1: Decimal, lon2: Decimal) -> Self {
        let two = Decimal::from(2);
        Self {
            lat1,
            lat2,
            lon1,
            lon2,
            centroid_lat: (lat1 + lat2) / two,
            centroid_lon: (lon1 + lon2) / two,
        }
    }

    pub fn is_within_range(&self) -> bool {
        let lat_limit = Decimal::from(90);
        let lon_limit = Decimal::from(180);
        [self.lat1, self.lat2].iter().all(|v| v.abs() <= lat_limit)
            && [self.lon1, self.lon2].iter().all(|v| v.abs() <= lon_limit)
    }

    /// Values in output order: lat1, lat2, lon1, lon2, centroid lat, centroid lon.
    pub fn rendered(&self) -> [String; 6] {
        [
            self.lat1,
            self.lat2,
            self.lon1,
            self.lon2,
            self.centroid_lat,
            self.centroid_lon,
        ]
        .map(render)
    }
}

fn render(value: Decimal) -> String {
    let mut rounded =
        value.round_dp_with_strategy(BOUNDING_BOX_DECIMALS, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(BOUNDING_BOX_DECIMALS);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

/// A bounding box found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBoxMatch {
    pub raw_text: String,
    pub layout: BoxLayout,
    pub bbox: BoundingBox,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_centroid() {
        let bbox = BoundingBox::from_corners(dec("34.5"), dec("35.5"), dec("-111.25"), dec("-111.75"));
        assert_eq!(bbox.centroid_lat, dec("35"));
        assert_eq!(bbox.centroid_lon, dec("-111.5"));
        assert!(bbox.is_within_range());
    }

    #[test]
    fn test_rendered_values() {
        let bbox = BoundingBox::from_corners(dec("1"), dec("2"), dec("3"), dec("4"));
        let rendered = bbox.rendered();
        assert_eq!(rendered[0], "1.000000");
        assert_eq!(rendered[4], "1.500000");
        assert_eq!(rendered[5], "3.500000");
    }

    #[test]
    fn test_rendered_zero_is_unsigned() {
        let bbox = BoundingBox::from_corners(-dec("0"), dec("-0.0000001"), dec("0"), dec("0"));
        let rendered = bbox.rendered();
        assert_eq!(rendered[0], "0.000000");
        assert_eq!(rendered[1], "0.000000");
        assert_eq!(rendered[4], "0.000000");
    }

    #[test]
    fn test_out_of_range() {
        let bbox = BoundingBox::from_corners(dec("95"), dec("96"), dec("3"), dec("4"));
        assert!(!bbox.is_within_range());
    }
}
