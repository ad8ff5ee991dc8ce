use crate::core::{JobTable, Pipeline};
use crate::domain::model::RunSummary;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let table = self.extract_and_transform().await?;
        let (records, columns) = (table.len(), table.columns.len());

        tracing::info!("💾 Writing CSV...");
        let output_path = self.pipeline.load(table).await?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(RunSummary {
            records,
            columns,
            output_path: Some(output_path),
        })
    }

    /// Runs extract and transform only; nothing is written.
    pub async fn dry_run(&self) -> Result<RunSummary> {
        let table = self.extract_and_transform().await?;
        tracing::info!(
            "🔍 Dry run: would write {} rows x {} columns",
            table.len(),
            table.columns.len()
        );
        if !table.columns.is_empty() {
            tracing::info!("🔍 Columns: {}", table.columns.join(", "));
        }

        Ok(RunSummary {
            records: table.len(),
            columns: table.columns.len(),
            output_path: None,
        })
    }

    async fn extract_and_transform(&self) -> Result<JobTable> {
        tracing::info!("🌐 Fetching jobs...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Fetched {} job records", records.len());

        let table = self.pipeline.transform(records).await?;
        tracing::info!(
            "Flattened into {} rows x {} columns",
            table.len(),
            table.columns.len()
        );

        Ok(table)
    }
}
