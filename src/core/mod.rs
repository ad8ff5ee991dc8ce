pub mod csv_writer;
pub mod etl;
pub mod fetch;
pub mod flatten;
pub mod pipeline;

pub use crate::domain::model::{JobRecord, JobTable};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
