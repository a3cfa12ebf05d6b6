use super::matrix::CostMatrix;
use super::model::ErgonomicModel;
use super::Grader;
use crate::error::{GradeError, GradeResult};
use crate::frequency::FrequencyTable;
use crate::loader::ConfigTables;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Collects configuration tables and frequency statistics, then validates
/// every (bigram, layout) cost before handing out a `Grader`.
#[derive(Debug, Default)]
pub struct GraderBuilder {
    tables: Option<ConfigTables>,
    frequencies: Option<FrequencyTable>,
    ignore_chars: String,
}

impl GraderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, tables: ConfigTables) -> Self {
        self.tables = Some(tables);
        self
    }

    pub fn with_config_from_str(self, text: &str) -> GradeResult<Self> {
        Ok(self.with_config(ConfigTables::parse(text)?))
    }

    pub fn with_config_from_file<P: AsRef<Path>>(self, path: P) -> GradeResult<Self> {
        Ok(self.with_config(ConfigTables::load(path)?))
    }

    pub fn with_frequencies(mut self, table: FrequencyTable) -> Self {
        self.frequencies = Some(table);
        self
    }

    pub fn with_frequencies_from_reader<R: Read>(self, reader: R) -> GradeResult<Self> {
        Ok(self.with_frequencies(FrequencyTable::from_reader(reader)?))
    }

    pub fn with_frequencies_from_file<P: AsRef<Path>>(self, path: P) -> GradeResult<Self> {
        Ok(self.with_frequencies(FrequencyTable::load(path)?))
    }

    /// Bigrams containing any of these characters are dropped before grading.
    pub fn ignore_chars(mut self, chars: &str) -> Self {
        self.ignore_chars = chars.to_string();
        self
    }

    pub fn build(self) -> GradeResult<Grader> {
        let tables = self.tables.ok_or_else(|| {
            GradeError::Config("No layout configuration supplied".to_string())
        })?;
        let raw = self.frequencies.ok_or_else(|| {
            GradeError::Config("No frequency table supplied".to_string())
        })?;

        let frequencies = if self.ignore_chars.is_empty() {
            raw
        } else {
            raw.without_chars(&self.ignore_chars)
        };

        let model = ErgonomicModel::new(tables.keys, tables.penalties);
        let costs = CostMatrix::compute(&model, &tables.layouts, frequencies.bigrams())?;
        debug!(
            "Grader ready: {} layouts x {} bigrams x {} languages",
            tables.layouts.len(),
            frequencies.len(),
            frequencies.languages().len()
        );

        Ok(Grader {
            model,
            layouts: tables.layouts,
            frequencies,
            costs,
        })
    }
}
