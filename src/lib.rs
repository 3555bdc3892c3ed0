pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::Settings, RunConfig};

pub use crate::core::{etl::EtlEngine, pipeline::MedalPipeline, report::OutputFormat};
pub use domain::model::{CountryTotals, Gender, Medal, MedalRecord, MedalReport};
pub use utils::error::{MedalError, Result};
