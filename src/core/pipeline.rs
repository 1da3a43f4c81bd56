use crate::core::aggregator::aggregate;
use crate::core::classifier::classify_all;
use crate::core::loader::load_records;
use crate::core::per_capita::find_min_area_address;
use crate::core::{ConfigProvider, HouseRecord, HousingReport, Pipeline, Storage};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

pub const CATEGORIES_HEADING: &str = "Результат категоризации домов:";
pub const MIN_AREA_HEADING: &str = "Дом с наименьшей средней жилой площадью на одного жильца:";

pub struct HousingPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> HousingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for HousingPipeline<S, C> {
    fn extract(&self) -> Result<Vec<HouseRecord>> {
        tracing::debug!("Loading {}", self.config.input_path());
        load_records(&self.storage, self.config.input_path())
    }

    fn transform(&self, records: Vec<HouseRecord>) -> Result<HousingReport> {
        let categories = classify_all(&records)?;
        let counts = aggregate(&categories);
        let min_area_address = find_min_area_address(&records, self.config.duplicate_policy())?;

        Ok(HousingReport {
            categories: counts,
            min_area_address,
        })
    }

    fn load(&self, report: HousingReport) -> Result<String> {
        render_report(&report, self.config.output_format())
    }
}

pub fn render_report(report: &HousingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}\n{}\n{}\n{}\n",
            CATEGORIES_HEADING,
            report.categories,
            MIN_AREA_HEADING,
            report.min_area_address.as_deref().unwrap_or("None")
        )),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}
