use crate::core::csv_writer::to_csv_bytes;
use crate::core::fetch::JobFetcher;
use crate::core::flatten::flatten;
use crate::core::{ConfigProvider, JobRecord, JobTable, Pipeline, Storage};
use crate::utils::error::Result;

/// Remotive listings -> flat CSV.
pub struct RemotivePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: JobFetcher,
}

impl<S: Storage, C: ConfigProvider> RemotivePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let fetcher = JobFetcher::new(config.api_endpoint(), config.search_term());
        Self {
            storage,
            config,
            fetcher,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RemotivePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<JobRecord>> {
        self.fetcher.fetch().await
    }

    async fn transform(&self, records: Vec<JobRecord>) -> Result<JobTable> {
        let table = flatten(&records);
        tracing::debug!(
            "Flattened {} records into {} columns",
            table.len(),
            table.columns.len()
        );
        Ok(table)
    }

    async fn load(&self, table: JobTable) -> Result<String> {
        // 先完整產生 CSV，再一次寫入檔案
        let data = to_csv_bytes(&table)?;
        let output_path = self.config.output_path();

        tracing::debug!("Writing CSV file ({} bytes) to {}", data.len(), output_path);
        self.storage.write_file(output_path, &data).await?;

        Ok(output_path.to_string())
    }
}
