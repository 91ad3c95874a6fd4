use crate::error::Result;
use crate::models::{BoundingBoxRecord, CoordinateRecord};
use crate::utils::constants::{BOUNDING_BOX_HEADER, COORDINATE_HEADER};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes extraction results as delimited UTF-8 text.
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write coordinate records to `path`, creating parent directories.
    pub fn write_coordinates(&self, records: &[CoordinateRecord], path: &Path) -> Result<usize> {
        let file = create_file(path)?;
        let rows = self.write_coordinates_to(records, file)?;
        info!("Wrote {} coordinate rows to {}", rows, path.display());
        Ok(rows)
    }

    /// Rows are `doi, origLat, origLon, latDD, lonDD`.
    pub fn write_coordinates_to<W: Write>(
        &self,
        records: &[CoordinateRecord],
        writer: W,
    ) -> Result<usize> {
        let mut csv = self.builder().from_writer(writer);
        csv.write_record(COORDINATE_HEADER)?;
        for record in records {
            csv.write_record([
                record.document_id.as_str(),
                record.lat_text.as_str(),
                record.lon_text.as_str(),
                record.latitude.as_str(),
                record.longitude.as_str(),
            ])?;
        }
        csv.flush()?;
        Ok(records.len())
    }

    pub fn write_bounding_boxes(&self, records: &[BoundingBoxRecord], path: &Path) -> Result<usize> {
        let file = create_file(path)?;
        let rows = self.write_bounding_boxes_to(records, file)?;
        info!("Wrote {} bounding box rows to {}", rows, path.display());
        Ok(rows)
    }

    pub fn write_bounding_boxes_to<W: Write>(
        &self,
        records: &[BoundingBoxRecord],
        writer: W,
    ) -> Result<usize> {
        let mut csv = self.builder().from_writer(writer);
        csv.write_record(BOUNDING_BOX_HEADER)?;
        for record in records {
            csv.write_record([
                record.document_id.as_str(),
                record.raw_text.as_str(),
                record.lat1.as_str(),
                record.lat2.as_str(),
                record.lon1.as_str(),
                record.lon2.as_str(),
                record.centroid_lat.as_str(),
                record.centroid_lon.as_str(),
            ])?;
        }
        csv.flush()?;
        Ok(records.len())
    }

    fn builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder.delimiter(self.delimiter);
        builder
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record() -> CoordinateRecord {
        CoordinateRecord {
            document_id: "10.2111/REM-D-12-00042.1".to_string(),
            raw_text: "45°30'15\" N, 122°20'10\" W".to_string(),
            lat_text: "45°30'15\" N".to_string(),
            lon_text: "122°20'10\" W".to_string(),
            latitude: "45.504167".to_string(),
            longitude: "-122.336111".to_string(),
        }
    }

    #[test]
    fn test_write_coordinates_to_buffer() -> Result<()> {
        let mut buffer = Vec::new();
        let rows = CsvWriter::new().write_coordinates_to(&[record()], &mut buffer)?;
        assert_eq!(rows, 1);

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "doi,origLat,origLon,latDD,lonDD\n\
             10.2111/REM-D-12-00042.1,\"45°30'15\"\" N\",\"122°20'10\"\" W\",45.504167,-122.336111\n"
        );
        Ok(())
    }

    #[test]
    fn test_write_coordinates_creates_directories() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("coords.tsv");

        CsvWriter::new()
            .with_delimiter(b'\t')
            .write_coordinates(&[record()], &path)?;

        let content = std::fs::read_to_string(&path)?;
        assert!(content.starts_with("doi\torigLat\torigLon\tlatDD\tlonDD\n"));
        assert_eq!(content.lines().count(), 2);
        Ok(())
    }

    #[test]
    fn test_write_bounding_boxes_header() -> Result<()> {
        let mut buffer = Vec::new();
        CsvWriter::new().write_bounding_boxes_to(&[], &mut buffer)?;
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "doi,text,lat1,lat2,lon1,lon2,centroidLat,centroidLon\n"
        );
        Ok(())
    }
}
