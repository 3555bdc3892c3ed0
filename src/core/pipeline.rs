use crate::core::aggregate::{aggregate, rank};
use crate::core::gender::single_gender_countries;
use crate::core::loader::load_rows;
use crate::core::mapper::map_rows;
use crate::core::report::{render, render_country_list, OutputFormat};
use crate::core::{ConfigProvider, MedalRecord, MedalReport, Pipeline, Storage};
use crate::utils::error::Result;

pub struct MedalPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> MedalPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for MedalPipeline<S, C> {
    fn extract(&self) -> Result<Vec<MedalRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Loading rows from {}", path);

        let rows = load_rows(&self.storage, path)?;
        tracing::debug!("Read {} data rows", rows.len());

        map_rows(&rows, self.config.columns(), self.config.strict())
    }

    fn transform(&self, records: Vec<MedalRecord>) -> Result<MedalReport> {
        let ranking = rank(aggregate(&records));
        let single_gender = single_gender_countries(&records);

        Ok(MedalReport {
            ranking,
            single_gender,
        })
    }

    fn load(&self, report: MedalReport) -> Result<String> {
        let format = self.config.output_format();
        if format == OutputFormat::Csv {
            // The csv rendering carries only the ranking.
            tracing::info!(
                "Single-gender countries: {}",
                render_country_list(&report.single_gender)
            );
        }
        render(&report, format)
    }
}
