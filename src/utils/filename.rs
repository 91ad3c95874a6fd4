use crate::utils::constants::{BOUNDING_BOXES_PREFIX, COORDINATES_PREFIX, OUTPUT_DIR};
use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Default coordinate output: output/coordinates-{YYMMDD}.csv
pub fn generate_default_coordinates_filename() -> PathBuf {
    dated_filename(COORDINATES_PREFIX)
}

/// Default bounding box output: output/bounding-boxes-{YYMMDD}.csv
pub fn generate_default_bounding_boxes_filename() -> PathBuf {
    dated_filename(BOUNDING_BOXES_PREFIX)
}

fn dated_filename(prefix: &str) -> PathBuf {
    let now = Local::now();
    let filename = format!(
        "{}-{:02}{:02}{:02}.csv",
        prefix,
        now.year() % 100,
        now.month(),
        now.day()
    );
    PathBuf::from(OUTPUT_DIR).join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_coordinates_filename() {
        let filename = generate_default_coordinates_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename.starts_with("output"));
        assert!(filename_str.ends_with(".csv"));

        let file_part = filename.file_name().unwrap().to_string_lossy();
        assert!(file_part.starts_with("coordinates-"));
        // "coordinates-" + YYMMDD + ".csv"
        assert_eq!(file_part.len(), "coordinates-".len() + 6 + ".csv".len());
    }

    #[test]
    fn test_generate_default_bounding_boxes_filename() {
        let filename = generate_default_bounding_boxes_filename();
        let file_part = filename.file_name().unwrap().to_string_lossy();

        assert!(file_part.starts_with("bounding-boxes-"));
        assert!(file_part.ends_with(".csv"));
    }
}
