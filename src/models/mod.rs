pub mod bbox;
pub mod coordinate;
pub mod dms;
pub mod record;

pub use bbox::{BoundingBox, BoundingBoxMatch, BoxLayout};
pub use coordinate::{AxisCapture, CoordinateMatch, LatitudeDirection, LongitudeDirection, SubMinute};
pub use dms::{DecimalCoordinate, NormalizedDms, Precision};
pub use record::{Article, BoundingBoxRecord, CoordinateRecord};
