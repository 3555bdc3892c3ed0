use crate::domain::model::{CountryTotals, MedalReport};
use crate::utils::error::{MedalError, Result};
use serde::{Deserialize, Serialize};

pub const TABLE_HEADER: &str = "País Ouro Prata Bronze Total";
pub const TABLE_LABEL: &str = "Medal table:";
pub const SINGLE_GENDER_LABEL: &str = "Countries with single-gender medalists (M or W):";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Fixed-width medal table, one line per country, each line newline-terminated.
pub fn render_table(ranking: &[CountryTotals]) -> String {
    let mut out = String::with_capacity(32 * (ranking.len() + 1));
    out.push_str(TABLE_HEADER);
    out.push('\n');

    for t in ranking {
        out.push_str(&format!(
            "{:<4} {:>4} {:>5} {:>6} {:>5}\n",
            t.country, t.gold, t.silver, t.bronze, t.total
        ));
    }

    out
}

pub fn render_country_list(countries: &[String]) -> String {
    countries.join(", ")
}

pub fn render(report: &MedalReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}\n{}\n{}\n{}\n",
            TABLE_LABEL,
            render_table(&report.ranking),
            SINGLE_GENDER_LABEL,
            render_country_list(&report.single_gender)
        )),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => render_csv(&report.ranking),
    }
}

fn render_csv(ranking: &[CountryTotals]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for t in ranking {
        writer.serialize(t)?;
    }
    if ranking.is_empty() {
        writer.write_record(["country", "gold", "silver", "bronze", "total"])?;
    }

    let bytes = writer.into_inner().map_err(|e| MedalError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| MedalError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
