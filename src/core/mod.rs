pub mod aggregator;
pub mod classifier;
pub mod engine;
pub mod loader;
pub mod per_capita;
pub mod pipeline;

pub use crate::domain::model::{HouseRecord, HousingReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
