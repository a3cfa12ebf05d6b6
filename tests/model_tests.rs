mod common;

use common::{
    abcd_config, assert_close, bigram, frequencies, index_ring_config, model_from, SAMPLE_CONFIG,
};
use keygrade::error::GradeError;
use keygrade::penalties::{FingerPair, RowJump};
use keygrade::scorer::GraderBuilder;
use rstest::rstest;

#[test]
fn test_zero_weights_grade_zero() {
    let grader = GraderBuilder::new()
        .with_config_from_str(&abcd_config([0.0; 4]))
        .unwrap()
        .with_frequencies(frequencies("en", &[("ab", 1.0)]))
        .build()
        .unwrap();
    assert_eq!(grader.grade("abcd", "en").unwrap(), 0.0);
}

#[test]
fn test_changed_weight_moves_grade_by_that_weight() {
    let grader = GraderBuilder::new()
        .with_config_from_str(&abcd_config([1.0, 0.0, 0.0, 0.0]))
        .unwrap()
        .with_frequencies(frequencies("en", &[("ab", 1.0)]))
        .build()
        .unwrap();
    assert_eq!(grader.grade("abcd", "en").unwrap(), 1.0);
}

#[test]
fn test_cross_hand_cost_is_base_weights() {
    let (model, tables) = model_from(&abcd_config([0.5, 0.25, 0.0, 0.0]));
    let layout = tables.layouts.get("abcd").unwrap();
    let t = model.analyze(bigram("ab"), layout).unwrap().unwrap();
    assert!(!t.is_same_hand);
    assert_eq!(t.penalty, 0.0);
    assert_eq!(t.cost(), 0.75);
}

#[test]
fn test_same_hand_index_ring_row_jump() {
    let (model, tables) = model_from(&index_ring_config());
    let layout = tables.layouts.get("hand").unwrap();

    let t = model.analyze(bigram("ab"), layout).unwrap().unwrap();
    assert!(t.is_same_hand);
    assert_eq!(t.fingers, Some("ir".parse::<FingerPair>().unwrap()));
    assert_eq!(t.row_jump, Some(RowJump::RowJump1));
    assert_close(t.cost(), 0.25 + 1.0 + 0.5);
}

#[test]
fn test_swapped_order_without_entry_is_undefined() {
    let (model, tables) = model_from(&index_ring_config());
    let layout = tables.layouts.get("hand").unwrap();

    match model.cost(bigram("ba"), layout) {
        Err(GradeError::UndefinedPenalty { first, second, .. }) => {
            assert_eq!(first, "L10");
            assert_eq!(second, "L19");
        }
        other => panic!("expected UndefinedPenalty, got {:?}", other),
    }
}

#[test]
fn test_grader_build_fails_fast_on_undefined_penalty() {
    let result = GraderBuilder::new()
        .with_config_from_str(&index_ring_config())
        .unwrap()
        .with_frequencies(frequencies("en", &[("ab", 0.5), ("ba", 0.5)]))
        .build();
    assert!(matches!(result, Err(GradeError::UndefinedPenalty { .. })));
}

#[test]
fn test_repeated_character_has_no_penalty() {
    // A same-finger same-row penalty exists but typing one key twice skips it.
    let config = "[keys]\nL15 L16\n[weights]\n0.5 1\n[penalties]\n, same_row, row_jump1, row_jump2\npp, 9, 9, 9\n[layouts]\n>> x\na b\n";
    let (model, tables) = model_from(config);
    let layout = tables.layouts.get("x").unwrap();
    assert_eq!(model.cost(bigram("aa"), layout).unwrap(), 1.0);
    assert_eq!(model.cost(bigram("ab"), layout).unwrap(), 10.5);
}

#[test]
fn test_two_row_jump_uses_row_jump2() {
    // Pinky on row 1, ring on row 3.
    let config = "[keys]\nL01 L17\n[weights]\n1 2\n[penalties]\n, same_row, row_jump1, row_jump2\npr, 0, 0, 0.75\n[layouts]\n>> wide\na b\n";
    let (model, tables) = model_from(config);
    let layout = tables.layouts.get("wide").unwrap();

    let t = model.analyze(bigram("ab"), layout).unwrap().unwrap();
    assert_eq!(t.fingers, Some("pr".parse::<FingerPair>().unwrap()));
    assert_eq!(t.row_jump, Some(RowJump::RowJump2));
    assert_eq!(model.cost(bigram("ab"), layout).unwrap(), 3.75);
}

#[test]
fn test_row_jump_beyond_two_is_undefined() {
    let config = "[keys]\nL01 L22\n[weights]\n0 0\n[penalties]\n, same_row, row_jump1, row_jump2\npp, 1, 1, 1\n[layouts]\n>> tall\na b\n";
    let (model, tables) = model_from(config);
    let layout = tables.layouts.get("tall").unwrap();
    match model.cost(bigram("ab"), layout) {
        Err(GradeError::UndefinedPenalty { reason, .. }) => assert!(reason.contains("3 rows")),
        other => panic!("expected UndefinedPenalty, got {:?}", other),
    }
}

#[test]
fn test_unclassified_same_hand_key_is_undefined() {
    let config = "[keys]\nLx L15\n[weights]\n0 0\n[penalties]\n, same_row, row_jump1, row_jump2\npp, 1, 1, 1\n[layouts]\n>> odd\na b\n";
    let (model, tables) = model_from(config);
    let layout = tables.layouts.get("odd").unwrap();
    assert!(matches!(
        model.cost(bigram("ab"), layout),
        Err(GradeError::UndefinedPenalty { .. })
    ));
}

#[test]
fn test_missing_character_costs_zero() {
    let (model, tables) = model_from(&abcd_config([1.0; 4]));
    let layout = tables.layouts.get("abcd").unwrap();
    assert_eq!(model.cost(bigram("qu"), layout).unwrap(), 0.0);
    assert_eq!(model.cost(bigram("aq"), layout).unwrap(), 0.0);
    assert!(model.analyze(bigram("qa"), layout).unwrap().is_none());
}

// Sample data: rows 2-4, left e=L11 (0.8), d=L18 (0.3), t=L13 (1.2); right h=R20 (0.6).
#[rstest]
#[case("qwerty", "th", 1.2 + 0.6)]
#[case("qwerty", "ee", 0.8 + 0.8)]
#[case("qwerty", "ed", 0.8 + 0.3 + 2.0)]
#[case("qwerty", "de", 0.3 + 0.8 + 2.0)]
#[case("qwerty", "sa", 0.5 + 1.0 + 0.3)]
#[case("colemak", "th", 0.2 + 0.6)]
fn test_sample_costs(#[case] layout: &str, #[case] pair: &str, #[case] expected: f64) {
    let (model, tables) = model_from(SAMPLE_CONFIG);
    let layout = tables.layouts.get(layout).unwrap();
    assert_close(model.cost(bigram(pair), layout).unwrap(), expected);
}
