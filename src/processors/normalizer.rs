use crate::models::{CoordinateMatch, NormalizedDms};

const DEFAULT_FIELD: &str = "00";

/// Canonicalize a match into the eight-field DMS form.
///
/// A minute fraction is folded into the minutes only when both axes carry
/// one; a fraction on a single axis is dropped and that axis' seconds
/// default to "00".
pub fn normalize(coordinate: &CoordinateMatch) -> NormalizedDms {
    let lat = &coordinate.latitude;
    let lon = &coordinate.longitude;

    let mut lat_min = field_or_default(lat.minutes.as_deref());
    let mut lon_min = field_or_default(lon.minutes.as_deref());

    let (lat_sec, lon_sec) = match (
        lat.sub_minute.minute_fraction(),
        lon.sub_minute.minute_fraction(),
    ) {
        (Some(lat_frac), Some(lon_frac)) => {
            lat_min.push_str(lat_frac);
            lon_min.push_str(lon_frac);
            (DEFAULT_FIELD.to_string(), DEFAULT_FIELD.to_string())
        }
        _ => (
            field_or_default(lat.sub_minute.seconds()),
            field_or_default(lon.sub_minute.seconds()),
        ),
    };

    NormalizedDms {
        lat_dir: lat.direction,
        lat_deg: lat.degrees.clone(),
        lat_min,
        lat_sec,
        lon_dir: lon.direction,
        lon_deg: lon.degrees.clone(),
        lon_min,
        lon_sec,
    }
}

fn field_or_default(field: Option<&str>) -> String {
    match field {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_FIELD.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AxisCapture, LatitudeDirection, LongitudeDirection, SubMinute};
    use pretty_assertions::assert_eq;

    fn coordinate(
        latitude: AxisCapture<LatitudeDirection>,
        longitude: AxisCapture<LongitudeDirection>,
    ) -> CoordinateMatch {
        CoordinateMatch {
            raw_text: String::new(),
            start: 0,
            end: 0,
            split: 0,
            latitude,
            longitude,
            degree_mark_present: false,
        }
    }

    #[test]
    fn test_minutes_without_seconds() {
        let m = coordinate(
            AxisCapture::new(LatitudeDirection::South, "60").with_minutes("30"),
            AxisCapture::new(LongitudeDirection::West, "50").with_minutes("40"),
        );

        assert_eq!(
            normalize(&m).to_fields(),
            ["S", "60", "30", "00", "W", "50", "40", "00"].map(String::from)
        );
    }

    #[test]
    fn test_paired_minute_fractions() {
        let m = coordinate(
            AxisCapture::new(LatitudeDirection::South, "60")
                .with_minutes("30")
                .with_sub_minute(SubMinute::MinuteFraction(".50".to_string())),
            AxisCapture::new(LongitudeDirection::West, "50")
                .with_minutes("40")
                .with_sub_minute(SubMinute::MinuteFraction(".90".to_string())),
        );

        assert_eq!(
            normalize(&m).to_fields(),
            ["S", "60", "30.50", "00", "W", "50", "40.90", "00"].map(String::from)
        );
    }

    #[test]
    fn test_single_axis_fraction_is_dropped() {
        let m = coordinate(
            AxisCapture::new(LatitudeDirection::North, "10")
                .with_minutes("15")
                .with_sub_minute(SubMinute::MinuteFraction(".5".to_string())),
            AxisCapture::new(LongitudeDirection::East, "20")
                .with_minutes("25")
                .with_sub_minute(SubMinute::Seconds("30".to_string())),
        );

        assert_eq!(
            normalize(&m).to_fields(),
            ["N", "10", "15", "00", "E", "20", "25", "30"].map(String::from)
        );
    }

    #[test]
    fn test_whole_degrees_default_fields() {
        let m = coordinate(
            AxisCapture::new(LatitudeDirection::North, "40"),
            AxisCapture::new(LongitudeDirection::West, "75"),
        );

        assert_eq!(
            normalize(&m).to_fields(),
            ["N", "40", "00", "00", "W", "75", "00", "00"].map(String::from)
        );
    }

    #[test]
    fn test_single_digit_seconds_kept_verbatim() {
        let m = coordinate(
            AxisCapture::new(LatitudeDirection::North, "40")
                .with_minutes("10")
                .with_sub_minute(SubMinute::Seconds("5".to_string())),
            AxisCapture::new(LongitudeDirection::West, "75").with_minutes("20"),
        );

        let dms = normalize(&m);
        assert_eq!(dms.lat_sec, "5");
        assert_eq!(dms.lon_sec, "00");
    }
}
