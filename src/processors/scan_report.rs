use crate::models::Precision;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub documents_scanned: usize,
    pub documents_failed: usize,
    pub documents_with_matches: usize,
    pub fragments_scanned: usize,
    pub matches_found: usize,
    pub bounding_boxes_found: usize,
    pub precision_counts: BTreeMap<Precision, usize>,
    pub failures: Vec<DocumentFailure>,
}

#[derive(Debug, Clone)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_document(
        &mut self,
        fragments: usize,
        precisions: &[Precision],
        bounding_boxes: usize,
    ) {
        self.documents_scanned += 1;
        self.fragments_scanned += fragments;
        self.matches_found += precisions.len();
        self.bounding_boxes_found += bounding_boxes;
        if !precisions.is_empty() {
            self.documents_with_matches += 1;
        }
        for precision in precisions {
            *self.precision_counts.entry(*precision).or_default() += 1;
        }
    }

    pub fn record_failure(&mut self, path: PathBuf, reason: String) {
        self.documents_failed += 1;
        self.failures.push(DocumentFailure { path, reason });
    }

    pub fn match_rate(&self) -> f64 {
        if self.documents_scanned == 0 {
            0.0
        } else {
            self.documents_with_matches as f64 / self.documents_scanned as f64 * 100.0
        }
    }

    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Coordinate Extraction Report\n");
        summary.push_str("============================\n");
        summary.push_str(&format!("Documents scanned: {}\n", self.documents_scanned));
        summary.push_str(&format!("Documents failed: {}\n", self.documents_failed));
        summary.push_str(&format!(
            "Documents with coordinates: {} ({:.1}%)\n",
            self.documents_with_matches,
            self.match_rate()
        ));
        summary.push_str(&format!("Text fragments scanned: {}\n", self.fragments_scanned));
        summary.push_str(&format!("Coordinates found: {}\n", self.matches_found));

        if !self.precision_counts.is_empty() {
            summary.push_str("\nBy precision:\n");
            for (precision, count) in &self.precision_counts {
                summary.push_str(&format!("  {}: {}\n", precision, count));
            }
        }

        if self.bounding_boxes_found > 0 {
            summary.push_str(&format!(
                "\nBounding boxes found: {}\n",
                self.bounding_boxes_found
            ));
        }

        if !self.failures.is_empty() {
            summary.push_str("\nFailed documents:\n");
            for failure in self.failures.iter().take(10) {
                summary.push_str(&format!(
                    "  - {}: {}\n",
                    failure.path.display(),
                    failure.reason
                ));
            }
            if self.failures.len() > 10 {
                summary.push_str(&format!("  ... and {} more\n", self.failures.len() - 10));
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_document_counts() {
        let mut report = ScanReport::new();
        report.record_document(5, &[Precision::Seconds, Precision::Degrees], 1);
        report.record_document(3, &[], 0);
        report.record_failure(PathBuf::from("broken.xml"), "XML parsing error".to_string());

        assert_eq!(report.documents_scanned, 2);
        assert_eq!(report.documents_failed, 1);
        assert_eq!(report.documents_with_matches, 1);
        assert_eq!(report.fragments_scanned, 8);
        assert_eq!(report.matches_found, 2);
        assert_eq!(report.precision_counts[&Precision::Seconds], 1);
        assert!((report.match_rate() - 50.0).abs() < f64::EPSILON);

        let summary = report.generate_summary();
        assert!(summary.contains("Coordinates found: 2"));
        assert!(summary.contains("seconds: 1"));
        assert!(summary.contains("broken.xml"));
    }

    #[test]
    fn test_empty_report() {
        let report = ScanReport::new();
        assert_eq!(report.match_rate(), 0.0);
        assert!(!report.generate_summary().contains("By precision"));
    }
}
