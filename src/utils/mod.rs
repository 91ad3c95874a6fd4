pub mod constants;
pub mod encoding;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use encoding::decode_document;
pub use filename::{generate_default_bounding_boxes_filename, generate_default_coordinates_filename};
pub use progress::ProgressReporter;
