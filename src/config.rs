use crate::error::{parse_number, GradeError, GradeResult};
use clap::Args;
use std::path::PathBuf;

/// Letters not every layout carries; bigrams using them are dropped by default.
pub const DEFAULT_IGNORE_CHARS: &str = "êàçâîô/äñößü";

/// Name of the derived column added by `--blend`.
pub const BLEND_COLUMN: &str = "blend";

#[derive(Args, Debug, Clone)]
pub struct InputPaths {
    /// Layout configuration file ([keys], [weights], [penalties], [layouts])
    #[arg(global = true, long, default_value = "data/config.txt")]
    pub config: PathBuf,

    /// Bigram frequency table, one column per language
    #[arg(global = true, long, default_value = "data/stats.csv")]
    pub stats: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            config: PathBuf::from("data/config.txt"),
            stats: PathBuf::from("data/stats.csv"),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GradeParams {
    /// Characters whose bigrams are removed before grading
    #[arg(long, default_value = DEFAULT_IGNORE_CHARS)]
    pub ignore_chars: String,

    /// Language column to sort by (ascending). Defaults to the first one.
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Comma-separated languages to leave out of the report
    #[arg(long, default_value = "")]
    pub hide: String,

    /// Weighted language mix, e.g. "en:0.5,fr:0.3,es:0.2"
    #[arg(long)]
    pub blend: Option<String>,

    /// Only report layouts whose name contains this (case-insensitive)
    #[arg(short, long)]
    pub layout: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Default for GradeParams {
    fn default() -> Self {
        Self {
            ignore_chars: DEFAULT_IGNORE_CHARS.to_string(),
            sort_by: None,
            hide: String::new(),
            blend: None,
            layout: None,
            json: false,
        }
    }
}

impl GradeParams {
    pub fn hidden_languages(&self) -> Vec<String> {
        split_list(&self.hide).map(str::to_string).collect()
    }

    /// Parsed `--blend` weights. A language given without `:weight` counts 1.0.
    pub fn blend_weights(&self) -> GradeResult<Option<Vec<(String, f64)>>> {
        let Some(list) = &self.blend else {
            return Ok(None);
        };
        let mut weights = Vec::new();
        for part in split_list(list) {
            let (lang, weight) = match part.split_once(':') {
                Some((lang, w)) => (lang.trim(), parse_number(w, "--blend weight")?),
                None => (part, 1.0),
            };
            if lang.is_empty() {
                return Err(GradeError::Config(format!(
                    "Blend entry '{}' has no language",
                    part
                )));
            }
            weights.push((lang.to_string(), weight));
        }
        if weights.is_empty() {
            return Err(GradeError::Config("--blend lists no languages".to_string()));
        }
        Ok(Some(weights))
    }
}

fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_defaults_missing_weight_to_one() {
        let params = GradeParams {
            blend: Some("en:0.5, fr".to_string()),
            ..Default::default()
        };
        let weights = params.blend_weights().unwrap().unwrap();
        assert_eq!(
            weights,
            vec![("en".to_string(), 0.5), ("fr".to_string(), 1.0)]
        );
    }

    #[test]
    fn test_blend_rejects_bad_weight() {
        let params = GradeParams {
            blend: Some("en:lots".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.blend_weights(),
            Err(GradeError::Numeric { .. })
        ));
    }

    #[test]
    fn test_hidden_languages_skip_blanks() {
        let params = GradeParams {
            hide: "en_perso, ,fr_perso".to_string(),
            ..Default::default()
        };
        assert_eq!(params.hidden_languages(), vec!["en_perso", "fr_perso"]);
    }
}
