use crate::error::{GradeError, GradeResult};
use crate::frequency::Bigram;
use crate::keys::{KeyId, KeyInfo, KeyTable};
use crate::layouts::Layout;
use crate::penalties::{FingerPair, PenaltyTable, RowJump};

/// How one bigram is typed on one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub first: KeyId,
    pub second: KeyId,
    pub base_cost: f64,
    pub is_same_hand: bool,
    pub is_repeat: bool,

    // Only filled when a same-hand penalty applies
    pub fingers: Option<FingerPair>,
    pub row_jump: Option<RowJump>,
    pub penalty: f64,
}

impl Transition {
    pub fn cost(&self) -> f64 {
        self.base_cost + self.penalty
    }
}

/// Ergonomic cost of a bigram: both keys' base weights, plus a same-hand
/// transition penalty looked up by (finger pair, row jump).
#[derive(Debug, Clone)]
pub struct ErgonomicModel {
    keys: KeyTable,
    penalties: PenaltyTable,
}

impl ErgonomicModel {
    pub fn new(keys: KeyTable, penalties: PenaltyTable) -> Self {
        Self { keys, penalties }
    }

    pub fn keys(&self) -> &KeyTable {
        &self.keys
    }

    pub fn penalties(&self) -> &PenaltyTable {
        &self.penalties
    }

    /// `None` when either character has no key on the layout.
    pub fn analyze(&self, bigram: Bigram, layout: &Layout) -> GradeResult<Option<Transition>> {
        let (Some(k1), Some(k2)) = (layout.key_for(bigram.first), layout.key_for(bigram.second))
        else {
            return Ok(None);
        };
        let info1 = self.key_info(k1, layout)?;
        let info2 = self.key_info(k2, layout)?;

        let mut t = Transition {
            first: k1.clone(),
            second: k2.clone(),
            base_cost: info1.weight + info2.weight,
            is_same_hand: k1.same_hand(k2),
            is_repeat: bigram.is_repeat(),
            fingers: None,
            row_jump: None,
            penalty: 0.0,
        };

        // Typing the same key twice carries no transition penalty.
        if !t.is_same_hand || t.is_repeat {
            return Ok(Some(t));
        }

        let undefined = |reason: String| GradeError::UndefinedPenalty {
            first: k1.to_string(),
            second: k2.to_string(),
            reason,
        };

        let (Some(f1), Some(r1)) = (info1.finger, info1.row) else {
            return Err(undefined(format!("key {} has no finger/row class", k1)));
        };
        let (Some(f2), Some(r2)) = (info2.finger, info2.row) else {
            return Err(undefined(format!("key {} has no finger/row class", k2)));
        };

        let distance = r1.abs_diff(r2);
        let jump = RowJump::from_distance(distance)
            .ok_or_else(|| undefined(format!("row jump of {} rows has no penalty column", distance)))?;
        let pair = FingerPair::new(f1, f2);
        let penalty = self
            .penalties
            .lookup(pair, jump)
            .ok_or_else(|| undefined(format!("no '{}' penalty for finger pair '{}'", jump, pair)))?;

        t.fingers = Some(pair);
        t.row_jump = Some(jump);
        t.penalty = penalty;
        Ok(Some(t))
    }

    /// Cost of `bigram` on `layout`; 0 when the layout lacks either character.
    pub fn cost(&self, bigram: Bigram, layout: &Layout) -> GradeResult<f64> {
        Ok(self
            .analyze(bigram, layout)?
            .map_or(0.0, |t| t.cost()))
    }

    fn key_info(&self, id: &KeyId, layout: &Layout) -> GradeResult<&KeyInfo> {
        self.keys.get(id).ok_or_else(|| {
            GradeError::Config(format!(
                "Layout '{}' assigns key '{}' which is not in [keys]",
                layout.name(),
                id
            ))
        })
    }
}
