//! Draft workflow: load fields, validate, choose a policy, apply.

use cobra::{
    Column, CompoundDraft, DraftMode, Error, IntegrateOptions, MissingFieldPolicy, RowRef, apply,
    format, parse,
};
use rstest::rstest;

use crate::helpers::sentence_assertions::*;
use crate::helpers::sentence_fixtures::*;

#[rstest]
#[case(2, "2-3")]
#[case(3, "2-4")]
#[case(10, "2-11")]
fn test_span_row_id_covers_constituents(#[case] count: usize, #[case] expected: &str) {
    let sentence = parse(HAUSAUFGABE).unwrap();
    let draft = CompoundDraft::new_span(&sentence, "2", count).unwrap();

    assert_eq!(draft.span.unwrap().id, expected);
    assert_eq!(draft.constituents.len(), count);
}

#[test]
fn test_abort_reports_each_missing_field() {
    let sentence = parse(HAUSAUFGABE).unwrap();
    let mut draft = CompoundDraft::new_span(&sentence, "2", 2).unwrap();
    draft.constituents[0].form = "Haus".into();

    let err = apply(&sentence, &draft, &IntegrateOptions::default()).unwrap_err();

    let Error::MissingFieldValue(fields) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[0].row, RowRef::Constituent(1));
    assert_eq!(fields[0].column, Column::Lemma);
    assert!(err.to_string().contains("FORM in constituent 2"));
}

#[test]
fn test_placeholder_policy_fills_underscores() {
    let sentence = parse(HAUSAUFGABE).unwrap();
    let draft = CompoundDraft::new_span(&sentence, "2", 2).unwrap();
    let options = IntegrateOptions {
        missing: MissingFieldPolicy::Placeholder,
        ..IntegrateOptions::default()
    };

    let out = apply(&sentence, &draft, &options).unwrap();

    assert_eq!(form_of(&out, 2), "_");
    assert_eq!(form_of(&out, 3), "_");
    assert_eq!(form_of(&out, 4), "ist");
    assert_contiguous(&out);
    assert_heads_resolve(&out);
    assert_deps_resolve(&out);
}

#[test]
fn test_loaded_deps_follow_their_target_after_apply() {
    let sentence = parse(HAUSAUFGABE).unwrap();
    let draft = CompoundDraft::new_span(&sentence, "2", 3).unwrap();
    let options = IntegrateOptions {
        missing: MissingFieldPolicy::Placeholder,
        ..IntegrateOptions::default()
    };

    let out = apply(&sentence, &draft, &options).unwrap();

    // the anchor's enhanced head `fertig` is token 6 after integration
    assert_eq!(form_of(&out, 6), "fertig");
    assert_eq!(&deps(&out)[1..4], ["6:nsubj", "6:nsubj", "6:nsubj"]);
    assert_eq!(out.records[1].fields().head, "_");
    assert_eq!(out.records[1].fields().deps, "_");
    assert_heads_resolve(&out);
    assert_deps_resolve(&out);
}

#[test]
fn test_loaded_draft_into_contraction_sentence_stays_consistent() {
    let sentence = parse(BAHNHOF).unwrap();
    let mut draft = CompoundDraft::new_span(&sentence, "2", 2).unwrap();
    draft.constituents[0].head = "3".into();
    draft.constituents[1].head = "0".into();
    draft.fill_missing();

    let out = apply(&sentence, &draft, &IntegrateOptions::default()).unwrap();

    assert_eq!(deps(&out)[..2], ["0:root", "0:root"]);
    assert_contiguous(&out);
    assert_heads_resolve(&out);
    assert_deps_resolve(&out);
}

#[test]
fn test_existing_tokens_reannotation_keeps_numbering() {
    let sentence = parse(BAHNHOF).unwrap();
    let mut draft = CompoundDraft::existing_tokens(&sentence, "3", 2).unwrap();
    assert_eq!(draft.mode, DraftMode::ExistingTokens);
    for row in &mut draft.constituents {
        row.head = "5".into();
        row.deprel = "case".into();
        row.misc = "_".into();
    }

    let out = apply(&sentence, &draft, &IntegrateOptions::default()).unwrap();

    assert_eq!(ids(&out), ids(&sentence));
    let deprels: Vec<_> = out.tokens().map(|t| t.fields.deprel.to_string()).collect();
    assert_eq!(deprels, vec!["nsubj", "root", "case", "case", "obl", "punct"]);
}

#[test]
fn test_failed_apply_leaves_sentence() {
    let sentence = parse(BAHNHOF).unwrap();
    let before = format(&sentence);
    let draft = CompoundDraft::new_span(&sentence, "5", 2).unwrap();

    assert!(apply(&sentence, &draft, &IntegrateOptions::default()).is_err());
    assert_eq!(format(&sentence), before);
}

#[test]
fn test_anchor_inside_contraction_is_rejected() {
    let sentence = parse(BAHNHOF).unwrap();
    let err = CompoundDraft::new_span(&sentence, "4", 2).unwrap_err();
    assert!(matches!(err, Error::AnchorInsideSpan { .. }));
    assert!(err.to_string().contains("3-4"));
}
