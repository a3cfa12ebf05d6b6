pub mod builder;
pub mod engine;
pub mod matrix;
pub mod model;
pub mod types;

pub use self::builder::GraderBuilder;
pub use self::matrix::CostMatrix;
pub use self::model::{ErgonomicModel, Transition};
pub use self::types::{BigramContribution, GradeRow, GradeTable};
use crate::config::InputPaths;
use crate::diagnostics::{self, MissingLetters};
use crate::error::{GradeError, GradeResult};
use crate::frequency::{Bigram, FrequencyTable};
use crate::layouts::{Layout, LayoutSet};

/// Every table needed to grade, built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Grader {
    pub model: ErgonomicModel,
    pub layouts: LayoutSet,
    // Already filtered by the character pre-filter
    pub frequencies: FrequencyTable,
    pub costs: CostMatrix,
}

impl Grader {
    pub fn new(paths: &InputPaths, ignore_chars: &str) -> GradeResult<Self> {
        GraderBuilder::new()
            .with_config_from_file(&paths.config)?
            .with_frequencies_from_file(&paths.stats)?
            .ignore_chars(ignore_chars)
            .build()
    }

    pub fn builder() -> GraderBuilder {
        GraderBuilder::new()
    }

    pub fn layout(&self, name: &str) -> GradeResult<&Layout> {
        self.layouts
            .get(name)
            .ok_or_else(|| GradeError::Validation(format!("Unknown layout '{}'", name)))
    }

    fn layout_index(&self, name: &str) -> GradeResult<usize> {
        self.layouts
            .position(name)
            .ok_or_else(|| GradeError::Validation(format!("Unknown layout '{}'", name)))
    }

    fn language_index(&self, language: &str) -> GradeResult<usize> {
        self.frequencies
            .language_index(language)
            .ok_or_else(|| GradeError::Validation(format!("Unknown language '{}'", language)))
    }

    /// Cost of any bigram on a named layout, served from the matrix when the
    /// bigram is part of the frequency table.
    pub fn cost(&self, bigram: Bigram, layout: &str) -> GradeResult<f64> {
        let li = self.layout_index(layout)?;
        match self.frequencies.bigram_index(bigram) {
            Some(bi) => Ok(self.costs.get(li, bi)),
            None => self.model.cost(bigram, &self.layouts.as_slice()[li]),
        }
    }

    pub fn grade(&self, layout: &str, language: &str) -> GradeResult<f64> {
        let li = self.layout_index(layout)?;
        let lang = self.language_index(language)?;
        Ok(engine::grade_one(self, li, lang))
    }

    pub fn grade_all(&self) -> GradeTable {
        engine::grade_all(self)
    }

    pub fn breakdown(&self, layout: &str, language: &str) -> GradeResult<Vec<BigramContribution>> {
        let li = self.layout_index(layout)?;
        let lang = self.language_index(language)?;
        Ok(engine::breakdown(self, li, lang))
    }

    pub fn missing_letters(&self) -> Vec<MissingLetters> {
        diagnostics::missing_letters(&self.layouts, &self.frequencies)
    }
}
