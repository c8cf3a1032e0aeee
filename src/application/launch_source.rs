// Source trait for launch records, plus the one-shot dataset loader
use crate::domain::dataset::LaunchDataset;
use crate::domain::launch::LaunchRecord;
use anyhow::Context;
use async_trait::async_trait;

#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Human-readable location of the data (file path, fixture name)
    fn describe(&self) -> String;

    /// Read every record; any failure is fatal to startup
    async fn load_records(&self) -> anyhow::Result<Vec<LaunchRecord>>;
}

/// Build the immutable dataset from a source. Called once at startup.
pub async fn load_dataset(source: &dyn LaunchSource) -> anyhow::Result<LaunchDataset> {
    let records = source
        .load_records()
        .await
        .with_context(|| format!("Failed to load launch dataset from {}", source.describe()))?;

    let dataset = LaunchDataset::new(records);
    tracing::info!(
        "Loaded {} launch records from {} (payload {}..={} kg)",
        dataset.len(),
        source.describe(),
        dataset.min_payload_kg(),
        dataset.max_payload_kg()
    );

    Ok(dataset)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::launch::Outcome;

    /// In-memory source used across the application tests
    pub(crate) struct FixtureSource(pub Vec<LaunchRecord>);

    #[async_trait]
    impl LaunchSource for FixtureSource {
        fn describe(&self) -> String {
            "fixture".to_string()
        }

        async fn load_records(&self) -> anyhow::Result<Vec<LaunchRecord>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl LaunchSource for BrokenSource {
        fn describe(&self) -> String {
            "broken.csv".to_string()
        }

        async fn load_records(&self) -> anyhow::Result<Vec<LaunchRecord>> {
            anyhow::bail!("file not found")
        }
    }

    /// The three-record scenario: sites A and B
    pub(crate) fn scenario_records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("A", 100.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("A", 200.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("B", 150.0, Outcome::Success, "FT"),
        ]
    }

    #[tokio::test]
    async fn test_load_dataset_computes_bounds() {
        let dataset = load_dataset(&FixtureSource(scenario_records())).await.unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.min_payload_kg(), 100.0);
        assert_eq!(dataset.max_payload_kg(), 200.0);
    }

    #[tokio::test]
    async fn test_load_dataset_failure_names_source() {
        let err = load_dataset(&BrokenSource).await.unwrap_err();
        assert!(err.to_string().contains("broken.csv"));
        assert!(format!("{:#}", err).contains("file not found"));
    }
}
