use crate::error::{parse_number, GradeError, GradeResult};
use csv::ReaderBuilder;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Two characters typed in immediate succession, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Bigram {
    pub first: char,
    pub second: char,
}

impl Bigram {
    pub fn new(first: char, second: char) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, c: char) -> bool {
        self.first == c || self.second == c
    }

    pub fn is_repeat(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl From<Bigram> for String {
    fn from(b: Bigram) -> Self {
        b.to_string()
    }
}

impl FromStr for Bigram {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Ok(Self::new(a, b)),
            _ => Err(GradeError::Validation(format!(
                "'{}' is not a two-character bigram",
                s
            ))),
        }
    }
}

/// Per-language bigram frequencies. Rows keep file order so that every
/// aggregation over them runs in the same sequence.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    languages: Vec<String>,
    bigrams: Vec<Bigram>,
    rows: Vec<Vec<f64>>,
    index: HashMap<Bigram, usize>,
}

impl FrequencyTable {
    /// Reads a table whose header lists language codes after an index
    /// column, one bigram per row. Empty or absent cells read as 0; rows whose
    /// index is not exactly two characters are skipped.
    pub fn from_reader<R: Read>(reader: R) -> GradeResult<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let languages: Vec<String> = rdr
            .headers()?
            .iter()
            .skip(1)
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        let mut skipped = 0;
        for record in rdr.records() {
            let record = record?;
            let Some(label) = record.get(0) else {
                continue;
            };
            let Ok(bigram) = label.parse::<Bigram>() else {
                skipped += 1;
                continue;
            };

            let mut freqs = Vec::with_capacity(languages.len());
            for (i, lang) in languages.iter().enumerate() {
                let cell = record.get(i + 1).unwrap_or("").trim();
                let value = if cell.is_empty() {
                    0.0
                } else {
                    parse_number(cell, &format!("frequency of '{}' for {}", bigram, lang))?
                };
                freqs.push(value);
            }
            rows.push((bigram, freqs));
        }

        if skipped > 0 {
            debug!("Skipped {} rows that are not bigrams.", skipped);
        }
        let table = Self::from_rows(languages, rows)?;
        debug!(
            "Loaded {} bigrams for {} languages",
            table.len(),
            table.languages.len()
        );
        Ok(table)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> GradeResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_rows(languages: Vec<String>, rows: Vec<(Bigram, Vec<f64>)>) -> GradeResult<Self> {
        let mut seen = HashSet::new();
        for lang in &languages {
            if lang.is_empty() {
                return Err(GradeError::Validation(
                    "Frequency table has an unnamed language column".to_string(),
                ));
            }
            if !seen.insert(lang.as_str()) {
                return Err(GradeError::Validation(format!(
                    "Language '{}' appears twice in the frequency table",
                    lang
                )));
            }
        }

        let mut table = Self {
            languages,
            ..Self::default()
        };
        for (bigram, mut freqs) in rows {
            if table.index.contains_key(&bigram) {
                return Err(GradeError::Validation(format!(
                    "Bigram '{}' appears twice in the frequency table",
                    bigram
                )));
            }
            freqs.resize(table.languages.len(), 0.0);
            table.index.insert(bigram, table.bigrams.len());
            table.bigrams.push(bigram);
            table.rows.push(freqs);
        }
        Ok(table)
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn language_index(&self, language: &str) -> Option<usize> {
        self.languages.iter().position(|l| l == language)
    }

    pub fn bigrams(&self) -> &[Bigram] {
        &self.bigrams
    }

    pub fn len(&self) -> usize {
        self.bigrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bigrams.is_empty()
    }

    pub fn bigram_index(&self, bigram: Bigram) -> Option<usize> {
        self.index.get(&bigram).copied()
    }

    pub fn frequency(&self, language: &str, bigram: Bigram) -> Option<f64> {
        let col = self.language_index(language)?;
        let row = self.bigram_index(bigram)?;
        Some(self.rows[row][col])
    }

    /// Frequencies of one language column, in row order.
    pub fn column(&self, col: usize) -> impl Iterator<Item = (Bigram, f64)> + '_ {
        self.bigrams
            .iter()
            .zip(&self.rows)
            .map(move |(b, freqs)| (*b, freqs[col]))
    }

    /// Copy without any bigram that contains one of `chars`.
    pub fn without_chars(&self, chars: &str) -> Self {
        let ignored: HashSet<char> = chars.chars().collect();
        let mut table = Self {
            languages: self.languages.clone(),
            ..Self::default()
        };
        for (bigram, freqs) in self.bigrams.iter().zip(&self.rows) {
            if ignored.contains(&bigram.first) || ignored.contains(&bigram.second) {
                continue;
            }
            table.index.insert(*bigram, table.bigrams.len());
            table.bigrams.push(*bigram);
            table.rows.push(freqs.clone());
        }
        debug!(
            "Character filter removed {} bigrams",
            self.len() - table.len()
        );
        table
    }

    /// Distinct characters at either end of any bigram, in first-seen order.
    pub fn letters(&self) -> Vec<char> {
        let mut seen = HashSet::new();
        let mut letters = Vec::new();
        for b in &self.bigrams {
            for c in [b.first, b.second] {
                if seen.insert(c) {
                    letters.push(c);
                }
            }
        }
        letters
    }
}
