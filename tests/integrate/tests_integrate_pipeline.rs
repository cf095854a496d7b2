//! End-to-end integration through the public API: parse, draft, apply, format.

use cobra::{CompoundDraft, FieldRow, IntegrateOptions, apply, format, parse};

use crate::helpers::sentence_assertions::*;
use crate::helpers::sentence_fixtures::*;

/// Fill the caller-authored columns of each constituent row
fn fill(rows: &mut [FieldRow], values: &[(&str, &str, &str, &str)]) {
    for (row, (form, head, deprel, deps)) in rows.iter_mut().zip(values) {
        row.form = form.to_string();
        row.lemma = form.to_string();
        row.head = head.to_string();
        row.deprel = deprel.to_string();
        row.deps = deps.to_string();
        row.misc = "_".into();
    }
}

#[test]
fn test_hausaufgabe_three_constituents() {
    let sentence = parse(HAUSAUFGABE).unwrap();
    let mut draft = CompoundDraft::new_span(&sentence, "2", 3).unwrap();
    fill(
        &mut draft.constituents,
        &[
            ("Haus", "4", "compound", "4:compound"),
            ("auf", "4", "compound", "4:compound"),
            ("gabe", "6", "nsubj", "6:nsubj"),
        ],
    );

    let out = apply(&sentence, &draft, &IntegrateOptions::default()).unwrap();

    assert_eq!(ids(&out), vec!["1", "2-4", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(heads(&out), vec!["2", "4", "4", "6", "6", "0", "6"]);
    assert_eq!(
        deps(&out),
        vec!["2:det", "4:compound", "4:compound", "6:nsubj", "6:cop", "0:root", "6:punct"]
    );
    assert_eq!(out.comments, sentence.comments);
    assert_eq!(form_of(&out, 6), "fertig");
    assert_contiguous(&out);
    assert_heads_resolve(&out);
}

#[test]
fn test_span_before_anchor_is_kept() {
    let sentence = parse(BAHNHOF).unwrap();
    let mut draft = CompoundDraft::new_span(&sentence, "5", 2).unwrap();
    fill(
        &mut draft.constituents,
        &[("Bahn", "6", "compound", "6:compound"), ("hof", "2", "obl", "2:obl")],
    );

    let out = apply(&sentence, &draft, &IntegrateOptions::default()).unwrap();

    assert_eq!(ids(&out), vec!["1", "2", "3-4", "3", "4", "5-6", "5", "6", "7"]);
    assert_eq!(heads(&out), vec!["2", "0", "5", "5", "6", "2", "2"]);
    assert_eq!(out.records[2].fields().form, "zum");
    assert_contiguous(&out);
    assert_heads_resolve(&out);
}

#[test]
fn test_span_after_anchor_shifts_with_its_tokens() {
    let sentence = parse(BAHNHOF).unwrap();
    let mut draft = CompoundDraft::new_span(&sentence, "2", 2).unwrap();
    fill(
        &mut draft.constituents,
        &[("ge", "3", "dep", "3:dep"), ("ht", "0", "root", "0:root")],
    );

    let out = apply(&sentence, &draft, &IntegrateOptions::default()).unwrap();

    assert_eq!(ids(&out), vec!["1", "2-3", "2", "3", "4-5", "4", "5", "6", "7"]);
    assert_eq!(heads(&out), vec!["2", "3", "0", "6", "6", "2", "2"]);
    assert_eq!(deps(&out)[3], "6:case");
    assert_eq!(out.records[4].fields().form, "zum");
    assert_contiguous(&out);
}

#[test]
fn test_output_reparses_to_same_sentence() {
    let sentence = parse(BAHNHOF).unwrap();
    let mut draft = CompoundDraft::new_span(&sentence, "5", 2).unwrap();
    draft.fill_missing();

    let out = apply(&sentence, &draft, &IntegrateOptions::default()).unwrap();
    let text = format(&out);

    assert_eq!(parse(&text).unwrap(), out);
    assert!(text.starts_with("# text = Er geht zum Bahnhof."));
    assert!(text.lines().skip(1).all(|line| line.split('\t').count() == 10));
}

#[test]
fn test_short_rows_are_padded_in_output() {
    let sentence = parse(SHORT_ROWS).unwrap();
    let mut draft = CompoundDraft::new_span(&sentence, "2", 2).unwrap();
    draft.fill_missing();

    let out = apply(&sentence, &draft, &IntegrateOptions::default()).unwrap();

    let last = format(&out).lines().last().unwrap().to_string();
    assert_eq!(last, "4\tklemmt\t_\t_\t_\t_\t_\t_\t_\t_");
}
