use super::model::ErgonomicModel;
use crate::error::GradeResult;
use crate::frequency::Bigram;
use crate::layouts::LayoutSet;
use rayon::prelude::*;

/// Cost of every (layout, bigram) pair, computed once up front.
///
/// Row `i` follows layout order in the `LayoutSet`, column `j` follows
/// bigram order in the frequency table the matrix was built for.
#[derive(Debug, Clone, Default)]
pub struct CostMatrix {
    costs: Vec<Vec<f64>>,
}

impl CostMatrix {
    pub fn compute(
        model: &ErgonomicModel,
        layouts: &LayoutSet,
        bigrams: &[Bigram],
    ) -> GradeResult<Self> {
        let per_layout: Vec<GradeResult<Vec<f64>>> = layouts
            .as_slice()
            .par_iter()
            .map(|layout| {
                bigrams
                    .iter()
                    .map(|&b| model.cost(b, layout))
                    .collect()
            })
            .collect();

        // Sequential collect so the reported error is the first in layout order.
        let costs = per_layout.into_iter().collect::<GradeResult<Vec<_>>>()?;
        Ok(Self { costs })
    }

    pub fn layout_costs(&self, layout: usize) -> &[f64] {
        &self.costs[layout]
    }

    pub fn get(&self, layout: usize, bigram: usize) -> f64 {
        self.costs[layout][bigram]
    }
}
