pub mod cli;
pub mod config;
pub mod error;
pub mod matchers;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{ExtractError, Result};
pub use matchers::CoordinateMatcher;
pub use processors::{convert, normalize, scan_document, scan_fragment};
