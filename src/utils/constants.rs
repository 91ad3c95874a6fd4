/// CSV headers
pub const COORDINATE_HEADER: [&str; 5] = ["doi", "origLat", "origLon", "latDD", "lonDD"];
pub const BOUNDING_BOX_HEADER: [&str; 8] = [
    "doi",
    "text",
    "lat1",
    "lat2",
    "lon1",
    "lon2",
    "centroidLat",
    "centroidLon",
];

/// Default article file extension
pub const ARTICLE_EXTENSION: &str = "xml";

/// Output naming
pub const OUTPUT_DIR: &str = "output";
pub const COORDINATES_PREFIX: &str = "coordinates";
pub const BOUNDING_BOXES_PREFIX: &str = "bounding-boxes";

/// Environment variable prefix for settings
pub const ENV_PREFIX: &str = "COORD_EXTRACTOR";
