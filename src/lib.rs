pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::RemotivePipeline};
pub use domain::model::{JobRecord, JobTable, RunSummary};
pub use utils::error::{EtlError, Result};
