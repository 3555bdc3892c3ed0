pub mod aggregate;
pub mod columns;
pub mod etl;
pub mod gender;
pub mod loader;
pub mod mapper;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{CountryTotals, MedalRecord, MedalReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
