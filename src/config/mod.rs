pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{DuplicatePolicy, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_INPUT: &str = "housing_data.csv";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "housing-stats")]
#[command(about = "Counts houses per height category and finds the least spacious one")]
pub struct CliConfig {
    /// CSV file with house_address, floor_count, population, heating_value, area_residential
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// How to treat rows that repeat an address
    #[arg(long, value_enum, default_value_t = DuplicatePolicy::LastWins)]
    pub duplicates: DuplicatePolicy,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)
    }
}
