use crate::matchers::grammar::{Alternative, Grammar, GRAMMAR};
use crate::models::{AxisCapture, CoordinateMatch, LatitudeDirection, LongitudeDirection, SubMinute};
use regex::Captures;

/// Finds coordinate pairs in free text.
///
/// # Examples
/// ```
/// use coord_extractor::matchers::CoordinateMatcher;
///
/// let matcher = CoordinateMatcher::new();
/// let found: Vec<_> = matcher.find_iter("Plots at 40 N 75 W were sampled").collect();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].raw_text, "40 N 75 W");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMatcher {
    grammar: &'static Grammar,
}

impl CoordinateMatcher {
    pub fn new() -> Self {
        Self { grammar: &GRAMMAR }
    }

    /// Lazily scan `text` left to right for non-overlapping coordinate pairs.
    pub fn find_iter<'t>(&self, text: &'t str) -> CoordinateMatches<'t> {
        CoordinateMatches {
            grammar: self.grammar,
            captures: self.grammar.regex.captures_iter(text),
        }
    }

    /// First coordinate pair in `text`, if any.
    pub fn find(&self, text: &str) -> Option<CoordinateMatch> {
        self.find_iter(text).next()
    }
}

impl Default for CoordinateMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the coordinate pairs of one text fragment.
pub struct CoordinateMatches<'t> {
    grammar: &'static Grammar,
    captures: regex::CaptureMatches<'static, 't>,
}

impl<'t> Iterator for CoordinateMatches<'t> {
    type Item = CoordinateMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let alternative = self
            .grammar
            .alternatives
            .iter()
            .find(|alt| caps.name(&alt.names.lat_deg).is_some())
            .expect("every coordinate match belongs to one grammar alternative");
        Some(build_match(&caps, alternative))
    }
}

fn build_match(caps: &Captures<'_>, alternative: &Alternative) -> CoordinateMatch {
    let names = &alternative.names;
    let whole = caps.get(0).expect("group 0 is always present");
    let text = |name: &str| caps.name(name).map(|m| m.as_str());

    let lat_marker = text(&names.lat_dir).unwrap_or_default();
    let lon_marker = text(&names.lon_dir).unwrap_or_default();
    let lat_direction = LatitudeDirection::from_marker(lat_marker)
        .unwrap_or_else(|| panic!("grammar accepted latitude direction {lat_marker:?}"));
    let lon_direction = LongitudeDirection::from_marker(lon_marker)
        .unwrap_or_else(|| panic!("grammar accepted longitude direction {lon_marker:?}"));

    let lat_deg = text(&names.lat_deg).unwrap_or_default();
    let lon_deg = text(&names.lon_deg).unwrap_or_default();
    assert!(
        degree_value(lat_deg) <= 90,
        "grammar accepted latitude degrees {lat_deg:?}"
    );
    assert!(
        degree_value(lon_deg) <= 180,
        "grammar accepted longitude degrees {lon_deg:?}"
    );

    let latitude = axis(
        lat_direction,
        lat_deg,
        text(&names.lat_min),
        text(&names.lat_sec),
        text(&names.lat_frac),
    );
    let longitude = axis(
        lon_direction,
        lon_deg,
        text(&names.lon_min),
        text(&names.lon_sec),
        text(&names.lon_frac),
    );

    let split = caps
        .name(&names.lon_start)
        .map(|m| m.start() - whole.start())
        .unwrap_or_default();

    CoordinateMatch {
        raw_text: whole.as_str().to_string(),
        start: whole.start(),
        end: whole.end(),
        split,
        latitude,
        longitude,
        degree_mark_present: alternative.shape.degree_mark(),
    }
}

fn axis<D>(
    direction: D,
    degrees: &str,
    minutes: Option<&str>,
    seconds: Option<&str>,
    fraction: Option<&str>,
) -> AxisCapture<D> {
    let sub_minute = match (seconds, fraction) {
        (Some(s), _) if !s.is_empty() => SubMinute::Seconds(s.to_string()),
        (_, Some(f)) if !f.is_empty() => SubMinute::MinuteFraction(f.to_string()),
        _ => SubMinute::Absent,
    };
    let capture = AxisCapture::new(direction, degrees).with_sub_minute(sub_minute);
    match minutes {
        Some(m) if !m.is_empty() => capture.with_minutes(m),
        _ => capture,
    }
}

fn degree_value(digits: &str) -> u16 {
    digits.parse().unwrap_or(u16::MAX)
}
