use crate::error::{parse_number, GradeError, GradeResult};
use crate::keys::Finger;
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

/// Column of the penalty table, chosen by the row distance of two keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
pub enum RowJump {
    #[strum(to_string = "same_row")]
    SameRow,
    #[strum(to_string = "row_jump1")]
    RowJump1,
    #[strum(to_string = "row_jump2")]
    RowJump2,
}

impl RowJump {
    /// Bucket for an absolute row distance; anything past two rows has none.
    pub fn from_distance(distance: u8) -> Option<Self> {
        match distance {
            0 => Some(Self::SameRow),
            1 => Some(Self::RowJump1),
            2 => Some(Self::RowJump2),
            _ => None,
        }
    }
}

/// Two finger classes in the order they were typed. `ir` and `ri` are
/// different pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FingerPair {
    pub first: Finger,
    pub second: Finger,
}

impl FingerPair {
    pub fn new(first: Finger, second: Finger) -> Self {
        Self { first, second }
    }

    pub fn swapped(self) -> Self {
        Self::new(self.second, self.first)
    }
}

impl fmt::Display for FingerPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl FromStr for FingerPair {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Finger::from_str(&a.to_string())
                .ok()
                .zip(Finger::from_str(&b.to_string()).ok()),
            _ => None,
        };
        parsed
            .map(|(a, b)| Self::new(a, b))
            .ok_or_else(|| GradeError::Config(format!("Unknown finger pair '{}' in [penalties]", s)))
    }
}

/// A penalty cell whose swapped finger pair is missing or disagrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Asymmetry {
    pub pair: FingerPair,
    pub jump: RowJump,
    pub value: f64,
    pub swapped: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct PenaltyTable {
    cells: HashMap<(FingerPair, RowJump), f64>,
    rows: Vec<FingerPair>,
}

impl PenaltyTable {
    /// Parses the comma-separated `[penalties]` block: a header naming the
    /// row-jump columns, then one row per finger-pair code. Empty cells are
    /// kept undefined and only fail when looked up.
    pub fn build(block: &str) -> GradeResult<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(block.as_bytes());

        let columns: Vec<Option<RowJump>> = rdr
            .headers()?
            .iter()
            .skip(1)
            .map(|h| {
                let jump = RowJump::from_str(h).ok();
                if jump.is_none() {
                    warn!("Unknown [penalties] column '{}' ignored.", h);
                }
                jump
            })
            .collect();

        let mut table = Self::default();
        for record in rdr.records() {
            let record = record?;
            let Some(label) = record.get(0) else {
                continue;
            };
            let pair: FingerPair = label.parse()?;
            if table.rows.contains(&pair) {
                return Err(GradeError::Config(format!(
                    "Finger pair '{}' appears twice in [penalties]",
                    pair
                )));
            }
            table.rows.push(pair);

            for (jump, cell) in columns.iter().zip(record.iter().skip(1)) {
                let Some(jump) = jump else {
                    continue;
                };
                if cell.is_empty() {
                    continue;
                }
                let value = parse_number(cell, &format!("penalty {}/{}", pair, jump))?;
                table.cells.insert((pair, *jump), value);
            }
        }

        let asymmetries = table.asymmetries();
        if !asymmetries.is_empty() {
            warn!(
                "Penalty table is order-sensitive: {} cells differ from their swapped finger pair.",
                asymmetries.len()
            );
            for a in &asymmetries {
                debug!(
                    "  {} {} = {} but {} = {:?}",
                    a.pair,
                    a.jump,
                    a.value,
                    a.pair.swapped(),
                    a.swapped
                );
            }
        }
        Ok(table)
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (FingerPair, RowJump, f64)>,
    {
        let mut table = Self::default();
        for (pair, jump, value) in entries {
            if !table.rows.contains(&pair) {
                table.rows.push(pair);
            }
            table.cells.insert((pair, jump), value);
        }
        table
    }

    pub fn lookup(&self, pair: FingerPair, jump: RowJump) -> Option<f64> {
        self.cells.get(&(pair, jump)).copied()
    }

    /// Number of finger-pair rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells where swapping the finger order changes the penalty. A pair whose
    /// swap is defined with another value is reported once; a pair whose
    /// swap is missing is always reported.
    pub fn asymmetries(&self) -> Vec<Asymmetry> {
        let mut found = Vec::new();
        for &pair in &self.rows {
            if pair.first == pair.second {
                continue;
            }
            for jump in RowJump::iter() {
                let Some(value) = self.lookup(pair, jump) else {
                    continue;
                };
                let swapped = self.lookup(pair.swapped(), jump);
                let report = match swapped {
                    None => true,
                    Some(other) => other != value && pair < pair.swapped(),
                };
                if report {
                    found.push(Asymmetry {
                        pair,
                        jump,
                        value,
                        swapped,
                    });
                }
            }
        }
        found
    }
}
