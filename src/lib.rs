pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use core::{engine::ReportEngine, pipeline::HousingPipeline};
pub use domain::model::{
    AreaPerResident, CategoryCounts, DuplicatePolicy, HeightCategory, HouseRecord, HousingReport,
    OutputFormat,
};
pub use core::classifier::FloorValue;
pub use utils::error::{ClassifyError, HousingError, Result};
