use crate::models::{BoundingBox, BoundingBoxMatch, BoxLayout};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rust_decimal::Decimal;
use std::str::FromStr;

const LAT_WORD: &str = "[Nn]orth|[Ss]outh|N|S";
const LON_WORD: &str = "[Ee]ast|[Ww]est|E|W";
const MINUTE_MARK: &str = "'|′|´";
const SECOND_MARK: &str = "''|\"|′′|ʺ|″";
const RANGE_SEPARATOR: &str = r"\s*(?:-|–|−|to|and|,)\s*";
const AXIS_SEPARATOR: &str = r"\s*(?:,\s*and|,|;|to|and)\s*(?:(?:between|from)\s*)?";
const LAT_PREFIX: &str = r"(?:(?:between|about|[Ll]atitudes?|[Ll]at\.?)\s*)?(?:(?:between|from)\s*)?";
const LON_PREFIX: &str = r"(?:(?:[Ll]ongitudes?|[Ll]ong\.?)\s*)?(?:(?:between|from)\s*)?";

/// One end of a range: `[dir] deg[°] [min′] [sec″] [dir]`.
///
/// The second end of each range must carry a degree sign.
fn end_pattern(prefix: &str, word: &str, degree_digits: &str, degree_sign_required: bool) -> String {
    let degree_sign = if degree_sign_required { "°" } else { "°?" };
    let number = |name: &str, digits: &str| format!(r"(?P<{prefix}{name}>[0-9]{{{digits}}}(?:\.[0-9]{{1,10}})?)");
    format!(
        r"(?:(?P<{prefix}dira>{word})\s*)?{deg}{degree_sign}\s*(?:{min}\s*(?:{MINUTE_MARK})\s*)?(?:{sec}\s*(?:{SECOND_MARK})\s*)?(?P<{prefix}dirb>{word})?",
        deg = number("deg", degree_digits),
        min = number("min", "1,2"),
        sec = number("sec", "1,2"),
    )
}

fn lat_range() -> String {
    format!(
        "{LAT_PREFIX}{}{RANGE_SEPARATOR}(?:(?:[Ll]atitude|[Ll]at\\.?)\\s*)?{}",
        end_pattern("lat1", LAT_WORD, "1,2", false),
        end_pattern("lat2", LAT_WORD, "1,2", true),
    )
}

fn lon_range() -> String {
    format!(
        "{LON_PREFIX}{}{RANGE_SEPARATOR}(?:(?:[Ll]ongitude|[Ll]ong\\.?)\\s*)?{}",
        end_pattern("lon1", LON_WORD, "1,3", false),
        end_pattern("lon2", LON_WORD, "1,3", true),
    )
}

static LAT_LON: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"\b{}{AXIS_SEPARATOR}{}", lat_range(), lon_range());
    Regex::new(&pattern).expect("Invalid latitude-first bounding box regex")
});

static LON_LAT: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"\b{}{AXIS_SEPARATOR}{}", lon_range(), lat_range());
    Regex::new(&pattern).expect("Invalid longitude-first bounding box regex")
});

static CORNER_PAIRS: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"\b{LAT_PREFIX}{}\s*,\s*{LON_PREFIX}{}{AXIS_SEPARATOR}(?:(?:[Ll]atitude|[Ll]at\.?)\s*)?{}\s*,\s*(?:(?:[Ll]ongitude|[Ll]ong\.?)\s*)?{}",
        end_pattern("lat1", LAT_WORD, "1,2", false),
        end_pattern("lon1", LON_WORD, "1,3", false),
        end_pattern("lat2", LAT_WORD, "1,2", true),
        end_pattern("lon2", LON_WORD, "1,3", true),
    );
    Regex::new(&pattern).expect("Invalid corner-pair bounding box regex")
});

/// Finds study-area bounding boxes such as
/// "36°31′ to 37°20′N, 108°52′ to 109°26′E".
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBoxMatcher;

impl BoundingBoxMatcher {
    pub fn new() -> Self {
        Self
    }

    /// First bounding box in `text`, trying latitude-first, longitude-first
    /// and corner-pair layouts in that order.
    pub fn find(&self, text: &str) -> Option<BoundingBoxMatch> {
        let layouts: [(&Regex, BoxLayout); 3] = [
            (&*LAT_LON, BoxLayout::LatitudeFirst),
            (&*LON_LAT, BoxLayout::LongitudeFirst),
            (&*CORNER_PAIRS, BoxLayout::CornerPairs),
        ];

        layouts.iter().find_map(|(regex, layout)| {
            regex
                .captures_iter(text)
                .find_map(|caps| build_box(&caps, *layout))
        })
    }
}

fn build_box(caps: &Captures<'_>, layout: BoxLayout) -> Option<BoundingBoxMatch> {
    let (lat1, lat2) = range_values(caps, "lat1", "lat2", 'S')?;
    let (lon1, lon2) = range_values(caps, "lon1", "lon2", 'W')?;
    let bbox = BoundingBox::from_corners(lat1, lat2, lon1, lon2);
    if !bbox.is_within_range() {
        return None;
    }

    Some(BoundingBoxMatch {
        raw_text: caps.get(0)?.as_str().trim_end().to_string(),
        layout,
        bbox,
    })
}

/// Both ends of one range, signed. An end without a direction borrows the
/// other end's.
fn range_values(
    caps: &Captures<'_>,
    first: &str,
    second: &str,
    negative: char,
) -> Option<(Decimal, Decimal)> {
    let first_dir = direction(caps, first);
    let second_dir = direction(caps, second);
    let first_dir = first_dir.or(second_dir);
    let second_dir = second_dir.or(first_dir);

    let sign = |dir: Option<char>, value: Decimal| {
        if dir == Some(negative) {
            -value
        } else {
            value
        }
    };

    Some((
        sign(first_dir, end_value(caps, first)?),
        sign(second_dir, end_value(caps, second)?),
    ))
}

fn direction(caps: &Captures<'_>, prefix: &str) -> Option<char> {
    caps.name(&format!("{prefix}dira"))
        .or_else(|| caps.name(&format!("{prefix}dirb")))
        .and_then(|m| m.as_str().chars().next())
        .and_then(|c| c.to_uppercase().next())
}

fn end_value(caps: &Captures<'_>, prefix: &str) -> Option<Decimal> {
    let field = |name: &str| -> Option<Decimal> {
        match caps.name(&format!("{prefix}{name}")) {
            Some(m) => Decimal::from_str(m.as_str()).ok(),
            None => Some(Decimal::ZERO),
        }
    };

    let degrees = field("deg")?;
    let minutes = field("min")?;
    let seconds = field("sec")?;
    Some(degrees + minutes / Decimal::from(60) + seconds / Decimal::from(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_latitude_first_range() {
        let found = BoundingBoxMatcher::new()
            .find("Study area: 34°30′ to 35°30′N, 111°15′ to 111°45′W.")
            .unwrap();

        assert_eq!(found.layout, BoxLayout::LatitudeFirst);
        assert_eq!(found.bbox.lat1, dec("34.5"));
        assert_eq!(found.bbox.lat2, dec("35.5"));
        assert_eq!(found.bbox.lon1, dec("-111.25"));
        assert_eq!(found.bbox.lon2, dec("-111.75"));
        assert_eq!(found.bbox.centroid_lat, dec("35"));
        assert_eq!(found.bbox.centroid_lon, dec("-111.5"));
    }

    #[test]
    fn test_dash_separated_range() {
        let found = BoundingBoxMatcher::new()
            .find("0°00′–0°40′S, 110°30′–111°30′E")
            .unwrap();

        assert_eq!(found.layout, BoxLayout::LatitudeFirst);
        assert!(found.bbox.lat1.is_zero());
        assert_eq!(found.bbox.rendered()[0], "0.000000");
        assert_eq!(found.bbox.rendered()[1], "-0.666667");
        assert_eq!(found.bbox.lon1, dec("110.5"));
        assert_eq!(found.bbox.lon2, dec("111.5"));
    }

    #[test]
    fn test_longitude_first_range() {
        let found = BoundingBoxMatcher::new()
            .find("between 98°29′W and 98°50′W, 40°41′N and 40°46′N")
            .unwrap();

        assert_eq!(found.layout, BoxLayout::LongitudeFirst);
        assert_eq!(found.bbox.rendered()[0], "40.683333");
        assert_eq!(found.bbox.rendered()[2], "-98.483333");
    }

    #[test]
    fn test_no_bounding_box() {
        assert!(BoundingBoxMatcher::new()
            .find("The plots were burned in 1998.")
            .is_none());
    }
}
