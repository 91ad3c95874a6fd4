use crate::models::{BoundingBoxMatch, CoordinateMatch, DecimalCoordinate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A document as handed to the scanner: an identifier plus its plain-text
/// fragments in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub document_id: String,
    pub source: PathBuf,
    pub fragments: Vec<String>,
}

impl Article {
    pub fn new(document_id: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            document_id: document_id.into(),
            source: source.into(),
            fragments: Vec::new(),
        }
    }

    pub fn with_fragments(mut self, fragments: Vec<String>) -> Self {
        self.fragments = fragments;
        self
    }
}

/// One output row: a converted coordinate and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    pub document_id: String,
    pub raw_text: String,
    pub lat_text: String,
    pub lon_text: String,
    pub latitude: String,
    pub longitude: String,
}

impl CoordinateRecord {
    pub fn new(
        document_id: impl Into<String>,
        coordinate: &CoordinateMatch,
        decimal: &DecimalCoordinate,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            raw_text: coordinate.raw_text.clone(),
            lat_text: coordinate.lat_text().to_string(),
            lon_text: coordinate.lon_text().to_string(),
            latitude: decimal.latitude_string(),
            longitude: decimal.longitude_string(),
        }
    }
}

/// One bounding box found in a document, with rendered values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBoxRecord {
    pub document_id: String,
    pub raw_text: String,
    pub lat1: String,
    pub lat2: String,
    pub lon1: String,
    pub lon2: String,
    pub centroid_lat: String,
    pub centroid_lon: String,
}

impl BoundingBoxRecord {
    pub fn new(document_id: impl Into<String>, found: &BoundingBoxMatch) -> Self {
        let [lat1, lat2, lon1, lon2, centroid_lat, centroid_lon] = found.bbox.rendered();
        Self {
            document_id: document_id.into(),
            raw_text: found.raw_text.clone(),
            lat1,
            lat2,
            lon1,
            lon2,
            centroid_lat,
            centroid_lon,
        }
    }
}
