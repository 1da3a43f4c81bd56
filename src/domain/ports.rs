use crate::domain::model::{DuplicatePolicy, HouseRecord, HousingReport, OutputFormat};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn duplicate_policy(&self) -> DuplicatePolicy;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<HouseRecord>>;
    fn transform(&self, records: Vec<HouseRecord>) -> Result<HousingReport>;
    fn load(&self, report: HousingReport) -> Result<String>;
}
