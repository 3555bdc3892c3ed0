use crate::core::columns::ColumnMap;
use crate::core::report::OutputFormat;
use crate::domain::model::{MedalRecord, MedalReport};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<MedalRecord>>;
    fn transform(&self, records: Vec<MedalRecord>) -> Result<MedalReport>;
    fn load(&self, report: MedalReport) -> Result<String>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn columns(&self) -> &ColumnMap;
    fn strict(&self) -> bool;
    fn output_format(&self) -> OutputFormat;
}
