use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once and returns the rendered report.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting housing analysis...");

        tracing::debug!("Extracting records...");
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        tracing::debug!("Analysing records...");
        let report = self.pipeline.transform(records)?;
        tracing::info!(
            "Classified {} houses, minimum area address: {:?}",
            report.categories.total(),
            report.min_area_address
        );

        tracing::debug!("Rendering report...");
        let output = self.pipeline.load(report)?;

        Ok(output)
    }
}
