// CSV launch source - Reads the launch dataset file
use crate::application::launch_source::LaunchSource;
use crate::domain::launch::{LaunchRecord, Outcome};
use async_trait::async_trait;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [
    SITE_COLUMN,
    PAYLOAD_COLUMN,
    CLASS_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read dataset file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("Invalid record on line {row}: {reason}")]
    InvalidRecord { row: u64, reason: String },
}

/// One CSV row; columns other than these four are ignored
#[derive(Debug, Deserialize)]
struct LaunchRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl LaunchRow {
    fn into_record(self, row: u64) -> Result<LaunchRecord, LoadError> {
        let invalid = |reason: String| LoadError::InvalidRecord { row, reason };

        if self.site.is_empty() {
            return Err(invalid("launch site is empty".to_string()));
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(invalid(format!(
                "payload mass {} is not a non-negative number",
                self.payload_mass_kg
            )));
        }

        let outcome = match self.class {
            c if c == 0.0 || c == 1.0 => Outcome::from_class(c as u8),
            _ => None,
        }
        .ok_or_else(|| invalid(format!("class {} is not 0 or 1", self.class)))?;

        Ok(LaunchRecord::new(
            self.site,
            self.payload_mass_kg,
            outcome,
            self.booster_category,
        ))
    }
}

/// Parse launch records from CSV text with a header row
pub fn parse_launch_csv<R: Read>(input: R) -> Result<Vec<LaunchRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn { column });
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let parsed: LaunchRow = row
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::InvalidRecord {
                row: line,
                reason: e.to_string(),
            })?;
        records.push(parsed.into_record(line)?);
    }

    Ok(records)
}

#[derive(Debug, Clone)]
pub struct CsvLaunchSource {
    path: PathBuf,
}

impl CsvLaunchSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LaunchSource for CsvLaunchSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load_records(&self) -> anyhow::Result<Vec<LaunchRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.describe(),
                source,
            })?;

        Ok(parse_launch_csv(bytes.as_slice())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::launch_source::load_dataset;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40, 0 ,0.0,F9 v1.0  B0004,v1.0
2,3,KSC LC-39A,1.0,2490.0,F9 FT B1031.1,FT
3,4,VAFB SLC-4E,1,9600.0,F9 B4 B1041.1,B4
";

    #[test]
    fn test_parse_sample() {
        let records = parse_launch_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(
            records[2],
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "FT")
        );
        assert_eq!(records[1].outcome, Outcome::Failure);
        assert_eq!(records[3].booster_category, "B4");
    }

    #[test]
    fn test_missing_column() {
        let csv = "Launch Site,class,Booster Version Category\nA,1,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn { column: PAYLOAD_COLUMN }
        ));
    }

    #[test]
    fn test_rejects_negative_payload() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,-5,1,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRecord { row: 2, .. }));
    }

    #[test]
    fn test_rejects_non_binary_class() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   A,100,1,FT\n\
                   A,100,2,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRecord { row: 3, .. }));
    }

    #[test]
    fn test_rejects_unparseable_payload() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,heavy,1,FT\n";
        assert!(matches!(
            parse_launch_csv(csv.as_bytes()),
            Err(LoadError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        assert!(parse_launch_csv(csv.as_bytes()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "launch-dashboard-test-{}.csv",
            std::process::id()
        ));
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let dataset = load_dataset(&CsvLaunchSource::new(&path)).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.min_payload_kg(), 0.0);
        assert_eq!(dataset.max_payload_kg(), 9600.0);
    }

    #[tokio::test]
    async fn test_missing_file_is_load_failure() {
        let source = CsvLaunchSource::new("does/not/exist.csv");
        let err = source.load_records().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::Io { .. })
        ));
    }
}
