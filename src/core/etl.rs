use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order and returns the rendered report.
    pub fn run(&self) -> Result<String> {
        tracing::debug!("Starting medal table run");

        tracing::debug!("Extracting medal records...");
        let records = self.pipeline.extract()?;
        tracing::debug!("Extracted {} medal records", records.len());

        tracing::debug!("Aggregating...");
        let report = self.pipeline.transform(records)?;
        tracing::debug!(
            "Ranked {} countries, {} with single-gender medalists",
            report.ranking.len(),
            report.single_gender.len()
        );

        tracing::debug!("Rendering report...");
        let output = self.pipeline.load(report)?;
        tracing::debug!("Rendered {} bytes", output.len());

        Ok(output)
    }
}
