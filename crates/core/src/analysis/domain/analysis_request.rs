use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::shared::constants::FILENAME_KEY;

/// The image one analysis runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    filename: PathBuf,
}

impl AnalysisRequest {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    /// Reads the `"filename"` entry of a caller's per-image record.
    ///
    /// The record is only read; results are merged back by the caller.
    pub fn from_record(record: &Map<String, Value>) -> Option<Self> {
        record
            .get(FILENAME_KEY)
            .and_then(Value::as_str)
            .map(Self::new)
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_from_record_reads_filename() {
        let r = record(json!({"filename": "/data/img.jpg", "text": "caption"}));
        let request = AnalysisRequest::from_record(&r).unwrap();
        assert_eq!(request.filename(), Path::new("/data/img.jpg"));
    }

    #[test]
    fn test_from_record_without_filename() {
        assert!(AnalysisRequest::from_record(&Map::new()).is_none());
    }

    #[test]
    fn test_from_record_non_string_filename() {
        let r = record(json!({"filename": 42}));
        assert!(AnalysisRequest::from_record(&r).is_none());
    }
}
