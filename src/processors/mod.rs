pub mod converter;
pub mod normalizer;
pub mod parallel_processor;
pub mod scan_report;
pub mod scanner;

pub use converter::{convert, convert_match, select_precision};
pub use normalizer::normalize;
pub use parallel_processor::{ParallelProcessor, ScanOutput};
pub use scan_report::{DocumentFailure, ScanReport};
pub use scanner::{scan_document, scan_fragment, DocumentScan};
