use crate::frequency::FrequencyTable;
use crate::layouts::LayoutSet;
use serde::Serialize;

/// Letters that occur in the frequency data but have no key on a layout.
/// Bigrams using them cost 0 there, so such a layout grades optimistically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingLetters {
    pub layout: String,
    pub letters: Vec<char>,
}

/// One entry per layout that lacks at least one letter, in layout order.
/// Letters keep their first-seen order in the frequency table.
pub fn missing_letters(layouts: &LayoutSet, frequencies: &FrequencyTable) -> Vec<MissingLetters> {
    let letters = frequencies.letters();
    layouts
        .iter()
        .filter_map(|layout| {
            let missing: Vec<char> = letters
                .iter()
                .copied()
                .filter(|&c| !layout.contains(c))
                .collect();
            (!missing.is_empty()).then(|| MissingLetters {
                layout: layout.name().to_string(),
                letters: missing,
            })
        })
        .collect()
}
