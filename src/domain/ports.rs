use crate::domain::model::{JobRecord, JobTable};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn search_term(&self) -> &str;
    fn output_path(&self) -> &str;
    fn create_dirs(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<JobRecord>>;
    async fn transform(&self, records: Vec<JobRecord>) -> Result<JobTable>;
    async fn load(&self, table: JobTable) -> Result<String>;
}
