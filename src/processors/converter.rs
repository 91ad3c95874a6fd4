use crate::models::{CoordinateMatch, DecimalCoordinate, NormalizedDms, Precision};
use crate::processors::normalizer::normalize;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const DEFAULT_FIELD: &str = "00";

/// Pick the shared precision for both axes from the fields that carry data.
pub fn select_precision(dms: &NormalizedDms) -> Precision {
    if dms.lat_sec != DEFAULT_FIELD || dms.lon_sec != DEFAULT_FIELD {
        Precision::Seconds
    } else if dms.lat_min != DEFAULT_FIELD || dms.lon_min != DEFAULT_FIELD {
        Precision::Minutes
    } else {
        Precision::Degrees
    }
}

/// Convert normalized DMS fields to signed decimal degrees.
///
/// Seconds above 59 on either axis are read as hundredths of a minute, and
/// that reading is then applied to both axes. Values are quantized with
/// round-half-to-even.
///
/// # Examples
/// ```
/// use coord_extractor::models::{LatitudeDirection, LongitudeDirection, NormalizedDms};
/// use coord_extractor::processors::convert;
///
/// let dms = NormalizedDms::new(
///     LatitudeDirection::South, "50", "30", "30",
///     LongitudeDirection::West, "50", "30", "30",
/// );
/// let decimal = convert(&dms);
/// assert_eq!(decimal.latitude_string(), "-50.508333");
/// assert_eq!(decimal.longitude_string(), "-50.508333");
/// ```
pub fn convert(dms: &NormalizedDms) -> DecimalCoordinate {
    let precision = select_precision(dms);

    let lat_sec = parse_field("latitude seconds", &dms.lat_sec);
    let lon_sec = parse_field("longitude seconds", &dms.lon_sec);

    let sixty = Decimal::from(60);
    let seconds_divisor = if lat_sec > Decimal::from(59) || lon_sec > Decimal::from(59) {
        Decimal::from(100)
    } else {
        sixty
    };

    let mut latitude = parse_field("latitude degrees", &dms.lat_deg)
        + (parse_field("latitude minutes", &dms.lat_min) + lat_sec / seconds_divisor) / sixty;
    let mut longitude = parse_field("longitude degrees", &dms.lon_deg)
        + (parse_field("longitude minutes", &dms.lon_min) + lon_sec / seconds_divisor) / sixty;

    if dms.lat_dir.is_negative() {
        latitude = -latitude;
    }
    if dms.lon_dir.is_negative() {
        longitude = -longitude;
    }

    DecimalCoordinate {
        latitude: quantize(latitude, precision),
        longitude: quantize(longitude, precision),
        precision,
    }
}

/// Normalize and convert a match in one step.
pub fn convert_match(coordinate: &CoordinateMatch) -> DecimalCoordinate {
    convert(&normalize(coordinate))
}

fn quantize(value: Decimal, precision: Precision) -> Decimal {
    let places = precision.decimal_places();
    let mut quantized = value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    quantized.rescale(places);
    if quantized.is_zero() {
        quantized.set_sign_positive(true);
    }
    quantized
}

fn parse_field(name: &str, value: &str) -> Decimal {
    Decimal::from_str(value)
        .unwrap_or_else(|_| panic!("non-numeric {name} field {value:?} reached the converter"))
}
