use crate::error::{GradeError, GradeResult};
use crate::frequency::Bigram;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRow {
    pub layout: String,
    // Aligned with `GradeTable::languages`
    pub grades: Vec<f64>,
}

/// Grades for every (layout, language) pair. Lower is better.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GradeTable {
    pub languages: Vec<String>,
    pub rows: Vec<GradeRow>,
}

impl GradeTable {
    pub fn column(&self, language: &str) -> Option<usize> {
        self.languages.iter().position(|l| l == language)
    }

    pub fn get(&self, layout: &str, language: &str) -> Option<f64> {
        let col = self.column(language)?;
        self.rows
            .iter()
            .find(|r| r.layout == layout)
            .map(|r| r.grades[col])
    }

    /// Appends a column holding the weighted sum of existing language columns.
    pub fn add_blend(&mut self, name: &str, weights: &[(String, f64)]) -> GradeResult<()> {
        if self.column(name).is_some() {
            return Err(GradeError::Config(format!(
                "Blend column '{}' collides with an existing language",
                name
            )));
        }
        let mut resolved = Vec::with_capacity(weights.len());
        for (lang, w) in weights {
            let col = self.column(lang).ok_or_else(|| {
                GradeError::Validation(format!("Blend refers to unknown language '{}'", lang))
            })?;
            resolved.push((col, *w));
        }
        for row in &mut self.rows {
            let blended = resolved.iter().map(|&(col, w)| row.grades[col] * w).sum();
            row.grades.push(blended);
        }
        self.languages.push(name.to_string());
        Ok(())
    }

    /// Stable ascending sort on one language column.
    pub fn sort_by(&mut self, language: &str) -> GradeResult<()> {
        let col = self.column(language).ok_or_else(|| {
            GradeError::Validation(format!("Cannot sort by unknown language '{}'", language))
        })?;
        self.rows
            .sort_by(|a, b| a.grades[col].total_cmp(&b.grades[col]));
        Ok(())
    }

    /// Drops language columns from the table; unknown names are ignored.
    pub fn hide(&mut self, languages: &[String]) {
        let keep: Vec<bool> = self
            .languages
            .iter()
            .map(|l| !languages.contains(l))
            .collect();
        self.languages = keep_columns(&self.languages, &keep);
        for row in &mut self.rows {
            row.grades = keep_columns(&row.grades, &keep);
        }
    }

    /// Keeps layouts whose name contains `filter`, ignoring case.
    pub fn retain_layouts(&mut self, filter: &str) {
        let needle = filter.to_lowercase();
        self.rows
            .retain(|r| r.layout.to_lowercase().contains(&needle));
    }
}

fn keep_columns<T: Clone>(values: &[T], keep: &[bool]) -> Vec<T> {
    values
        .iter()
        .zip(keep)
        .filter(|(_, k)| **k)
        .map(|(v, _)| v.clone())
        .collect()
}

/// One bigram's share of a grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BigramContribution {
    pub bigram: Bigram,
    pub frequency: f64,
    pub cost: f64,
    pub contribution: f64,
}
