use crate::matchers::{BoundingBoxMatcher, CoordinateMatcher};
use crate::models::{Article, BoundingBoxRecord, CoordinateRecord, Precision};
use crate::processors::converter::convert_match;

/// Everything found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentScan {
    pub records: Vec<CoordinateRecord>,
    pub precisions: Vec<Precision>,
    pub boxes: Vec<BoundingBoxRecord>,
    pub fragments_scanned: usize,
}

/// Match and convert every coordinate pair in one text fragment.
pub fn scan_fragment(document_id: &str, fragment: &str) -> Vec<CoordinateRecord> {
    scan_fragment_with_precision(document_id, fragment)
        .into_iter()
        .map(|(record, _)| record)
        .collect()
}

fn scan_fragment_with_precision(
    document_id: &str,
    fragment: &str,
) -> Vec<(CoordinateRecord, Precision)> {
    CoordinateMatcher::new()
        .find_iter(fragment)
        .map(|coordinate| {
            let decimal = convert_match(&coordinate);
            (
                CoordinateRecord::new(document_id, &coordinate, &decimal),
                decimal.precision,
            )
        })
        .collect()
}

/// Scan all fragments of a document in order.
pub fn scan_document(article: &Article, with_bounding_boxes: bool) -> DocumentScan {
    let mut scan = DocumentScan::default();
    let box_matcher = BoundingBoxMatcher::new();

    for fragment in &article.fragments {
        scan.fragments_scanned += 1;
        for (record, precision) in scan_fragment_with_precision(&article.document_id, fragment) {
            scan.records.push(record);
            scan.precisions.push(precision);
        }

        if with_bounding_boxes {
            if let Some(found) = box_matcher.find(fragment) {
                scan.boxes
                    .push(BoundingBoxRecord::new(&article.document_id, &found));
            }
        }
    }

    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_fragment_records() {
        let records = scan_fragment(
            "10.1000/xyz",
            "The site (45°30'15\" N, 122°20'10\" W) was burned.",
        );

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            CoordinateRecord {
                document_id: "10.1000/xyz".to_string(),
                raw_text: "45°30'15\" N, 122°20'10\" W".to_string(),
                lat_text: "45°30'15\" N".to_string(),
                lon_text: "122°20'10\" W".to_string(),
                latitude: "45.504167".to_string(),
                longitude: "-122.336111".to_string(),
            }
        );
    }

    #[test]
    fn test_scan_fragment_without_coordinates() {
        assert!(scan_fragment("doc", "Vegetation was sampled in spring.").is_empty());
    }

    #[test]
    fn test_scan_document_preserves_fragment_order() {
        let article = Article::new("doc-1", "doc-1.xml").with_fragments(vec![
            "First plot at 41 N 76 W.".to_string(),
            "No coordinates here.".to_string(),
            "Second plot at 40 N 75 W.".to_string(),
            "Study area: 34°30′ to 35°30′N, 111°15′ to 111°45′W.".to_string(),
        ]);

        let scan = scan_document(&article, true);
        assert_eq!(scan.fragments_scanned, 4);
        assert_eq!(scan.records.len(), 2);
        assert_eq!(scan.records[0].latitude, "41");
        assert_eq!(scan.records[1].longitude, "-75");
        assert_eq!(scan.precisions, vec![Precision::Degrees, Precision::Degrees]);
        assert_eq!(scan.boxes.len(), 1);
        assert_eq!(scan.boxes[0].centroid_lat, "35.000000");
    }

    #[test]
    fn test_bounding_boxes_are_optional() {
        let article = Article::new("doc-1", "doc-1.txt")
            .with_fragments(vec!["34°30′ to 35°30′N, 111°15′ to 111°45′W".to_string()]);

        assert!(scan_document(&article, false).boxes.is_empty());
    }
}
