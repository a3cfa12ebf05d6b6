use crate::error::{GradeError, GradeResult};
use crate::keys::{KeyId, KeyTable};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Token that opens each layout chunk inside the `[layouts]` block.
pub const LAYOUT_DELIMITER: &str = ">>";

/// A named assignment of characters onto the canonical key order.
///
/// Characters are not required to be unique. When one repeats, every
/// character lookup resolves to its first key in `[keys]` order.
#[derive(Debug, Clone)]
pub struct Layout {
    name: String,
    assignments: Vec<(KeyId, String)>,
    char_index: HashMap<char, usize>,
}

impl Layout {
    pub fn new(name: impl Into<String>, assignments: Vec<(KeyId, String)>) -> Self {
        let mut char_index = HashMap::new();
        for (i, (_, token)) in assignments.iter().enumerate() {
            if let Some(c) = single_char(token) {
                char_index.entry(c).or_insert(i);
            }
        }
        Self {
            name: name.into(),
            assignments,
            char_index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assignments(&self) -> &[(KeyId, String)] {
        &self.assignments
    }

    /// Key carrying `c`, first match in key order.
    pub fn key_for(&self, c: char) -> Option<&KeyId> {
        self.char_index.get(&c).map(|&i| &self.assignments[i].0)
    }

    pub fn contains(&self, c: char) -> bool {
        self.char_index.contains_key(&c)
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutSet {
    layouts: Vec<Layout>,
}

impl LayoutSet {
    /// Splits the `[layouts]` block on `>>`; each chunk is a name line followed
    /// by whitespace-separated characters in key order.
    pub fn build(block: &str, keys: &KeyTable) -> GradeResult<Self> {
        let mut layouts = Vec::new();

        for chunk in block.split(LAYOUT_DELIMITER) {
            if chunk.trim().is_empty() {
                continue;
            }
            let (name_line, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
            let name = name_line.trim();
            if name.is_empty() {
                return Err(GradeError::Config(
                    "Layout chunk has no name line after '>>'".to_string(),
                ));
            }

            let tokens: Vec<&str> = body.split_whitespace().collect();
            if tokens.len() != keys.len() {
                return Err(GradeError::LengthMismatch {
                    what: format!("layout '{}'", name),
                    expected: keys.len(),
                    found: tokens.len(),
                });
            }

            for token in tokens.iter().filter(|t| single_char(t).is_none()) {
                warn!(
                    "Layout '{}': token '{}' is not a single character and never matches a bigram.",
                    name, token
                );
            }

            let assignments = keys
                .ids()
                .cloned()
                .zip(tokens.into_iter().map(str::to_string))
                .collect();
            layouts.push(Layout::new(name, assignments));
        }

        debug!("Parsed {} layouts", layouts.len());
        Self::from_layouts(layouts)
    }

    pub fn from_layouts(layouts: Vec<Layout>) -> GradeResult<Self> {
        if layouts.is_empty() {
            return Err(GradeError::Config(
                "[layouts] does not define any layout".to_string(),
            ));
        }
        for (i, layout) in layouts.iter().enumerate() {
            if layouts[..i].iter().any(|l| l.name == layout.name) {
                return Err(GradeError::Config(format!(
                    "Layout '{}' is defined more than once",
                    layout.name
                )));
            }
        }
        Ok(Self { layouts })
    }

    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.layouts.iter().position(|l| l.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.layouts.iter()
    }

    pub fn as_slice(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
