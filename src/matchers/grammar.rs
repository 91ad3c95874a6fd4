//! Coordinate-pair grammar.
//!
//! Several choices early in a coordinate (where the latitude direction sits,
//! whether a degree mark separates degrees from minutes, whether minutes are
//! present at all) decide what the rest of the expression must look like.
//! Each combination is spelled out as its own alternative, with its own
//! suffixed capture names, and the alternatives are ordered so that the
//! preferred reading at a given position is tried first.

use once_cell::sync::Lazy;
use regex::Regex;

const LAT_WORD: &str = "NORTH|SOUTH|[NS]";
const LON_WORD: &str = "EAST|WEST|[EW]";
const LAT_DEGREES: &str = "[0-8][0-9]|90";
const LON_DEGREES: &str = "1(?:[0-7][0-9]|80)|0?[0-9][0-9]";
const DEGREE_MARK: &str = " ?[º°] ?|\\.|-| DEGREES, ";
const MINUTE_MARK: &str = "'|′|\"|″| MINUTES(?:, )?";
const SECOND_MARK: &str = "\"|″|'| SECONDS ";
const MINUTES: &str = "[0-5][0-9]";
const SECONDS: &str = "[0-9]{1,2}";
const MINUTE_FRACTION: &str = "\\.[0-9]{1,3}";
const DELIMITER: &str = "(?: ?[ /] ?|, )?";

/// How degrees are separated from minutes in the latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Separator {
    Space,
    DegreeMark,
    Nothing,
}

/// The choices that shape one alternative of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shape {
    /// Directions precede the degrees ("N45 ... W122") rather than follow
    /// the values ("45 N ... 122 W").
    pub(crate) leading_directions: bool,
    pub(crate) separator: Separator,
    pub(crate) has_minutes: bool,
}

impl Shape {
    pub(crate) fn degree_mark(&self) -> bool {
        self.separator == Separator::DegreeMark
    }

    /// Every shape in the order alternatives are tried.
    pub(crate) fn all() -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(12);
        for leading_directions in [true, false] {
            for separator in [Separator::Space, Separator::DegreeMark, Separator::Nothing] {
                for has_minutes in [true, false] {
                    shapes.push(Shape {
                        leading_directions,
                        separator,
                        has_minutes,
                    });
                }
            }
        }
        shapes
    }
}

/// Capture names belonging to one alternative.
#[derive(Debug, Clone)]
pub(crate) struct GroupNames {
    pub(crate) lat_dir: String,
    pub(crate) lat_deg: String,
    pub(crate) lat_min: String,
    pub(crate) lat_sec: String,
    pub(crate) lat_frac: String,
    pub(crate) lon_start: String,
    pub(crate) lon_dir: String,
    pub(crate) lon_deg: String,
    pub(crate) lon_min: String,
    pub(crate) lon_sec: String,
    pub(crate) lon_frac: String,
}

impl GroupNames {
    fn new(index: usize) -> Self {
        Self {
            lat_dir: format!("latdir_{index}"),
            lat_deg: format!("latdeg_{index}"),
            lat_min: format!("latmin_{index}"),
            lat_sec: format!("latsec_{index}"),
            lat_frac: format!("latfrac_{index}"),
            lon_start: format!("lon_{index}"),
            lon_dir: format!("londir_{index}"),
            lon_deg: format!("londeg_{index}"),
            lon_min: format!("lonmin_{index}"),
            lon_sec: format!("lonsec_{index}"),
            lon_frac: format!("lonfrac_{index}"),
        }
    }
}

/// One alternative of the grammar.
#[derive(Debug, Clone)]
pub(crate) struct Alternative {
    pub(crate) shape: Shape,
    pub(crate) names: GroupNames,
}

/// The compiled grammar.
#[derive(Debug)]
pub(crate) struct Grammar {
    pub(crate) regex: Regex,
    pub(crate) alternatives: Vec<Alternative>,
}

pub(crate) static GRAMMAR: Lazy<Grammar> = Lazy::new(|| {
    let alternatives: Vec<Alternative> = Shape::all()
        .into_iter()
        .enumerate()
        .map(|(index, shape)| Alternative {
            shape,
            names: GroupNames::new(index),
        })
        .collect();
    let pattern = build_pattern(&alternatives);
    let regex = Regex::new(&pattern).expect("Invalid coordinate grammar");
    Grammar {
        regex,
        alternatives,
    }
});

/// Assemble the full case-insensitive pattern.
pub(crate) fn build_pattern(alternatives: &[Alternative]) -> String {
    let body = alternatives
        .iter()
        .map(alternative_pattern)
        .collect::<Vec<_>>()
        .join("|");
    format!("(?i)\\b(?:{body})\\b")
}

fn alternative_pattern(alternative: &Alternative) -> String {
    let shape = &alternative.shape;
    let n = &alternative.names;
    let mut p = String::from("(?:");

    // Latitude
    if shape.leading_directions {
        p.push_str(&format!("(?P<{}>{LAT_WORD}) ?", n.lat_dir));
    }
    p.push_str(&format!("(?P<{}>{LAT_DEGREES})", n.lat_deg));
    match shape.separator {
        Separator::Space => p.push(' '),
        Separator::DegreeMark => p.push_str(&format!("(?:{DEGREE_MARK})")),
        Separator::Nothing => {}
    }
    if shape.has_minutes {
        p.push_str(&minutes_pattern(
            shape,
            &n.lat_min,
            &n.lat_sec,
            &n.lat_frac,
        ));
    }
    if shape.leading_directions {
        p.push_str(" ?");
    } else {
        p.push_str(&format!(" ?(?P<{}>{LAT_WORD})", n.lat_dir));
    }

    p.push_str(DELIMITER);
    p.push_str(&format!("(?P<{}>)", n.lon_start));

    // Longitude
    if shape.leading_directions {
        p.push_str(&format!("(?P<{}>{LON_WORD}) ?", n.lon_dir));
    }
    p.push_str(&format!("(?P<{}>{LON_DEGREES})", n.lon_deg));
    if shape.degree_mark() {
        p.push_str(&format!("(?: |{DEGREE_MARK})?"));
    } else {
        p.push_str("(?: )?");
    }
    if shape.has_minutes {
        p.push_str(&minutes_pattern(
            shape,
            &n.lon_min,
            &n.lon_sec,
            &n.lon_frac,
        ));
    }
    if !shape.leading_directions {
        p.push_str(&format!(" ?(?P<{}>{LON_WORD})", n.lon_dir));
    }

    p.push(')');
    p
}

/// Minutes followed by optional seconds or minute fraction, with the
/// closing punctuation the shape allows.
fn minutes_pattern(shape: &Shape, min: &str, sec: &str, frac: &str) -> String {
    let (minute_close, second_close) = if shape.degree_mark() {
        (format!("(?:{MINUTE_MARK})?"), format!("(?:{SECOND_MARK})?"))
    } else {
        ("(?: )?".to_string(), String::new())
    };
    format!(
        "(?P<{min}>{MINUTES}){minute_close}(?:(?P<{sec}>{SECONDS})|(?P<{frac}>{MINUTE_FRACTION}))?{second_close}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_order() {
        let shapes = Shape::all();
        assert_eq!(shapes.len(), 12);
        assert!(shapes[0].leading_directions);
        assert_eq!(shapes[0].separator, Separator::Space);
        assert!(shapes[0].has_minutes);
        assert!(!shapes[1].has_minutes);
        assert_eq!(shapes[2].separator, Separator::DegreeMark);
        assert!(!shapes[6].leading_directions);
    }

    #[test]
    fn test_grammar_compiles() {
        assert_eq!(GRAMMAR.alternatives.len(), 12);
        assert!(GRAMMAR.regex.is_match("40 N 75 W"));
        assert!(!GRAMMAR.regex.is_match("no coordinates here"));
    }

    #[test]
    fn test_capture_names_are_unique_per_alternative() {
        let names: Vec<_> = GRAMMAR.regex.capture_names().flatten().collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
