pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::csv_writer::DEFAULT_OUTPUT_PATH;
#[cfg(feature = "cli")]
use crate::core::fetch::{DEFAULT_API_ENDPOINT, DEFAULT_SEARCH_TERM};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "remotive-extract")]
#[command(about = "Fetch Remotive job listings and save them as CSV")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_SEARCH_TERM)]
    pub search: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    /// Create the output directory if it does not exist
    #[arg(long)]
    pub create_dirs: bool,

    /// Path to a TOML configuration file (replaces the flags above)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fetch and flatten only, do not write the CSV file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn search_term(&self) -> &str {
        &self.search
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn create_dirs(&self) -> bool {
        self.create_dirs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_non_empty_string("search", &self.search)?;
        validation::validate_output_file("output_path", &self.output_path)?;
        Ok(())
    }
}
