use crate::error::{ExtractError, Result};
use crate::models::{BoundingBoxRecord, CoordinateRecord};
use crate::processors::scan_report::ScanReport;
use crate::processors::scanner::{scan_document, DocumentScan};
use crate::readers::read_document;
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Results of a multi-document run, in input order.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub records: Vec<CoordinateRecord>,
    pub boxes: Vec<BoundingBoxRecord>,
    pub report: ScanReport,
}

pub struct ParallelProcessor {
    max_workers: usize,
    require_document_id: bool,
    extract_bounding_boxes: bool,
}

impl ParallelProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            require_document_id: false,
            extract_bounding_boxes: false,
        }
    }

    pub fn with_require_document_id(mut self, require_document_id: bool) -> Self {
        self.require_document_id = require_document_id;
        self
    }

    pub fn with_bounding_boxes(mut self, extract_bounding_boxes: bool) -> Self {
        self.extract_bounding_boxes = extract_bounding_boxes;
        self
    }

    /// Read and scan every path on a worker pool.
    ///
    /// A document that cannot be read is logged and counted in the report;
    /// the run continues with the rest.
    pub fn process_paths(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<ScanOutput> {
        if let Some(p) = progress {
            p.set_message(&format!("Scanning {} documents...", paths.len()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ExtractError::Config(e.to_string()))?;

        // Indexed collect keeps input order.
        let results: Vec<Result<DocumentScan>> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let result = read_document(path, self.require_document_id)
                        .map(|article| scan_document(&article, self.extract_bounding_boxes));
                    if let Some(p) = progress {
                        p.increment(1);
                    }
                    result
                })
                .collect()
        });

        let mut output = ScanOutput::default();
        for (path, result) in paths.iter().zip(results) {
            match result {
                Ok(scan) => {
                    debug!(
                        "{}: {} coordinates, {} bounding boxes",
                        path.display(),
                        scan.records.len(),
                        scan.boxes.len()
                    );
                    output.report.record_document(
                        scan.fragments_scanned,
                        &scan.precisions,
                        scan.boxes.len(),
                    );
                    output.records.extend(scan.records);
                    output.boxes.extend(scan.boxes);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    output.report.record_failure(path.clone(), e.to_string());
                }
            }
        }

        if let Some(p) = progress {
            p.finish_with_message(&format!(
                "Scanned {} documents, {} coordinates",
                output.report.documents_scanned, output.report.matches_found
            ));
        }

        Ok(output)
    }
}

impl Default for ParallelProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn article(id: &str, body: &str) -> String {
        format!(
            "<article><front><article-meta>\
             <article-id pub-id-type=\"doi\">{}</article-id>\
             </article-meta></front><body><p>{}</p></body></article>",
            id, body
        )
    }

    #[test]
    fn test_process_paths_keeps_input_order() -> Result<()> {
        let dir = TempDir::new()?;
        let mut paths = Vec::new();
        for (i, body) in ["Plot at 41 N 76 W.", "Nothing here.", "Plot at 40 N 75 W."]
            .iter()
            .enumerate()
        {
            let path = dir.path().join(format!("{}.xml", i));
            std::fs::write(&path, article(&format!("10.1/{}", i), body))?;
            paths.push(path);
        }

        let output = ParallelProcessor::new(2).process_paths(&paths, None)?;

        assert_eq!(output.records.len(), 2);
        assert_eq!(output.records[0].document_id, "10.1/0");
        assert_eq!(output.records[1].document_id, "10.1/2");
        assert_eq!(output.report.documents_scanned, 3);
        assert_eq!(output.report.documents_with_matches, 2);
        Ok(())
    }

    #[test]
    fn test_failed_documents_are_reported() -> Result<()> {
        let dir = TempDir::new()?;
        let good = dir.path().join("good.txt");
        std::fs::write(&good, "40 N 75 W\n")?;
        let missing = dir.path().join("missing.xml");

        let output =
            ParallelProcessor::new(1).process_paths(&[missing.clone(), good], None)?;

        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].document_id, "good");
        assert_eq!(output.report.documents_failed, 1);
        assert_eq!(output.report.failures[0].path, missing);
        Ok(())
    }

    #[test]
    fn test_required_document_id() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("anonymous.xml");
        std::fs::write(&path, "<article><p>40 N 75 W</p></article>")?;

        let output = ParallelProcessor::new(1)
            .with_require_document_id(true)
            .process_paths(&[path], None)?;

        assert!(output.records.is_empty());
        assert_eq!(output.report.documents_failed, 1);
        Ok(())
    }

    #[test]
    fn test_bounding_boxes_collected() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("box.txt");
        std::fs::write(&path, "Study area: 34°30′ to 35°30′N, 111°15′ to 111°45′W\n")?;

        let output = ParallelProcessor::new(1)
            .with_bounding_boxes(true)
            .process_paths(&[path], None)?;

        assert_eq!(output.boxes.len(), 1);
        assert_eq!(output.report.bounding_boxes_found, 1);
        Ok(())
    }
}
