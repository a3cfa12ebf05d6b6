use crate::error::{parse_number, GradeError, GradeResult};
use std::collections::HashMap;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Keys per row on one hand side.
pub const COLUMNS_PER_ROW: u8 = 7;
/// Rows per hand side.
pub const ROWS: u8 = 4;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
)]
pub enum Finger {
    #[strum(to_string = "p")]
    Pinky,
    #[strum(to_string = "r")]
    Ring,
    #[strum(to_string = "m")]
    Middle,
    #[strum(to_string = "i")]
    Index,
}

impl Finger {
    /// Finger for a 1-based column, counted from the outer edge of the hand.
    pub fn for_column(col: u8) -> Option<Self> {
        match col {
            1 | 2 => Some(Self::Pinky),
            3 => Some(Self::Ring),
            4 => Some(Self::Middle),
            5..=7 => Some(Self::Index),
            _ => None,
        }
    }
}

/// Row (1-4) and column (1-7) for a two-digit positional suffix `01`..`28`.
pub fn key_grid(suffix: &str) -> Option<(u8, u8)> {
    if suffix.len() != 2 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u8 = suffix.parse().ok()?;
    if n == 0 || n > COLUMNS_PER_ROW * ROWS {
        return None;
    }
    Some(((n - 1) / COLUMNS_PER_ROW + 1, (n - 1) % COLUMNS_PER_ROW + 1))
}

/// Finger and row for a positional suffix.
pub fn key_position(suffix: &str) -> Option<(Finger, u8)> {
    let (row, col) = key_grid(suffix)?;
    Finger::for_column(col).map(|f| (f, row))
}

/// Physical key identifier: a one-character side marker followed by a
/// positional suffix, e.g. `L15` or `R03`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn side(&self) -> Option<char> {
        self.0.chars().next()
    }

    pub fn suffix(&self) -> &str {
        match self.0.char_indices().nth(1) {
            Some((i, _)) => &self.0[i..],
            None => "",
        }
    }

    pub fn finger(&self) -> Option<Finger> {
        key_position(self.suffix()).map(|(f, _)| f)
    }

    pub fn row(&self) -> Option<u8> {
        key_grid(self.suffix()).map(|(r, _)| r)
    }

    pub fn column(&self) -> Option<u8> {
        key_grid(self.suffix()).map(|(_, c)| c)
    }

    pub fn same_hand(&self, other: &KeyId) -> bool {
        self.side().is_some() && self.side() == other.side()
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyInfo {
    pub id: KeyId,
    pub weight: f64,
    pub finger: Option<Finger>,
    pub row: Option<u8>,
}

/// Base weight, finger and row for every key, in canonical `[keys]` order.
#[derive(Debug, Clone, Default)]
pub struct KeyTable {
    keys: Vec<KeyInfo>,
    index: HashMap<KeyId, usize>,
}

impl KeyTable {
    /// Zips the `[keys]` and `[weights]` blocks positionally.
    pub fn build(keys_block: &str, weights_block: &str) -> GradeResult<Self> {
        let ids: Vec<&str> = keys_block.split_whitespace().collect();
        let weights: Vec<&str> = weights_block.split_whitespace().collect();
        if ids.len() != weights.len() {
            return Err(GradeError::LengthMismatch {
                what: "[weights]".to_string(),
                expected: ids.len(),
                found: weights.len(),
            });
        }

        let mut pairs = Vec::with_capacity(ids.len());
        for (id, w) in ids.into_iter().zip(weights) {
            pairs.push((KeyId::new(id), parse_number(w, &format!("weight of key {}", id))?));
        }
        Self::from_pairs(pairs)
    }

    pub fn from_pairs(pairs: Vec<(KeyId, f64)>) -> GradeResult<Self> {
        let mut keys = Vec::with_capacity(pairs.len());
        let mut index = HashMap::with_capacity(pairs.len());

        for (id, weight) in pairs {
            if index.insert(id.clone(), keys.len()).is_some() {
                return Err(GradeError::Config(format!(
                    "Key '{}' is listed more than once in [keys]",
                    id
                )));
            }
            let position = key_position(id.suffix());
            keys.push(KeyInfo {
                finger: position.map(|(f, _)| f),
                row: position.map(|(_, r)| r),
                id,
                weight,
            });
        }

        Ok(Self { keys, index })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, id: &KeyId) -> Option<&KeyInfo> {
        self.index.get(id).map(|&i| &self.keys[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyInfo> {
        self.keys.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &KeyId> {
        self.keys.iter().map(|k| &k.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_skips_side_marker() {
        let id = KeyId::new("R17");
        assert_eq!(id.side(), Some('R'));
        assert_eq!(id.suffix(), "17");
        assert_eq!(KeyId::new("L").suffix(), "");
    }

    #[test]
    fn test_position_rejects_out_of_table() {
        assert_eq!(key_position("00"), None);
        assert_eq!(key_position("29"), None);
        assert_eq!(key_position("5"), None);
        assert_eq!(key_position("28"), Some((Finger::Index, 4)));
    }
}
