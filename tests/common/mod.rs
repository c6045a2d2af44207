pub mod generative_testing;

use generative_testing::{Arbitrary, Gen};
use pareto_pretty_printer::doc_constructors::{align, choice, concat, nest, nl, text};
use pareto_pretty_printer::testing::{layout_cost, oracular_pretty_print};
use pareto_pretty_printer::{
    pretty_print, render_to_string, resolve, Col, DefaultCost, Doc, Measure, MeasureSet, Width,
};

fn compare_lines(message: &str, expected: &str, actual: &str) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message, expected, actual,
        );
        assert_eq!(actual, expected);
    }
}

/// Check that `doc` prints as `expected_lines` at `width`, and that the brute force oracle agrees.
#[track_caller]
pub fn assert_pp(doc: &Doc, width: Width, expected_lines: &[&str]) {
    assert_pp_at(doc, 0, width, expected_lines)
}

#[track_caller]
pub fn assert_pp_at(doc: &Doc, col: Col, width: Width, expected_lines: &[&str]) {
    let expected = expected_lines.join("\n");
    let oracle = match oracular_pretty_print::<DefaultCost>(doc, col, width) {
        Some(measure) => measure,
        None => panic!("BAD TEST CASE: no layout fits in width {}", width),
    };
    compare_lines(
        "ORACLE DISAGREES WITH TEST CASE, SO THE TEST CASE MUST BE WRONG",
        &expected,
        &render_to_string(&oracle.layout, col),
    );
    let printed = pretty_print::<DefaultCost>(doc, col, width);
    compare_lines("IN PRETTY PRINTING", &expected, &printed.text);
    assert!(!printed.is_tainted, "layout was tainted");
    assert_eq!(printed.cost, oracle.cost);
}

/// Check that no layout of `doc` fits in `width`, and that it prints as `expected_lines` anyways.
#[track_caller]
pub fn assert_pp_tainted(doc: &Doc, width: Width, expected_lines: &[&str]) {
    assert!(
        oracular_pretty_print::<DefaultCost>(doc, 0, width).is_none(),
        "BAD TEST CASE: some layout fits in width {}",
        width
    );
    let printed = pretty_print::<DefaultCost>(doc, 0, width);
    compare_lines(
        "IN TAINTED PRETTY PRINTING",
        &expected_lines.join("\n"),
        &printed.text,
    );
    assert!(printed.is_tainted, "layout was not tainted");
}

/// The `(last_col, cost)` of each measure in a front, or `None` if tainted.
pub fn front_points(set: &MeasureSet<DefaultCost>) -> Option<Vec<(Col, DefaultCost)>> {
    match set {
        MeasureSet::Front(measures) => Some(measures.iter().map(|m| (m.last_col, m.cost)).collect()),
        MeasureSet::Tainted(_) => None,
    }
}

/// Check that a measure is a choice-free layout with the column and cost it claims. Returns whether
/// it fits.
fn check_layout(doc: &Doc, measure: &Measure<DefaultCost>, col: Col, width: Width) -> bool {
    assert!(
        measure.layout.is_choice_free(),
        "layout has a choice, for doc {}",
        doc
    );
    let (recomputed, fits) = layout_cost::<DefaultCost>(&measure.layout, col, width);
    assert_eq!(
        (recomputed.last_col, recomputed.cost),
        (measure.last_col, measure.cost),
        "measure does not match its layout, for doc {}",
        doc
    );
    fits
}

/// Resolve `doc` and compare it against every one of its layouts:
///
/// - Every front is sorted by decreasing column and increasing cost, with no dominated measures.
/// - Every measure in a front is a layout that fits.
/// - The first measure of a front is as cheap as the cheapest layout that fits.
/// - The result is tainted exactly when no layout fits.
#[track_caller]
pub fn assert_matches_oracle(doc: &Doc, col: Col, width: Width) {
    let set = resolve::<DefaultCost>(doc, col, 0, width);
    let oracle = oracular_pretty_print::<DefaultCost>(doc, col, width);
    match (set, oracle) {
        (MeasureSet::Front(measures), Some(best)) => {
            assert!(!measures.is_empty(), "empty front for doc {}", doc);
            for pair in measures.windows(2) {
                assert!(
                    pair[0].last_col > pair[1].last_col && pair[0].cost < pair[1].cost,
                    "front out of order for doc {} at col {} width {}",
                    doc,
                    col,
                    width
                );
            }
            for (i, m1) in measures.iter().enumerate() {
                for (j, m2) in measures.iter().enumerate() {
                    assert!(i == j || !m1.dominates(m2), "dominated measure for doc {}", doc);
                }
            }
            for measure in &measures {
                assert!(
                    check_layout(doc, measure, col, width),
                    "layout in front does not fit, for doc {} at col {} width {}",
                    doc,
                    col,
                    width
                );
            }
            assert_eq!(
                measures[0].cost, best.cost,
                "not optimal, for doc {} at col {} width {}",
                doc, col, width
            );
        }
        (MeasureSet::Tainted(taint), None) => {
            let fallback = taint.force();
            check_layout(doc, &fallback, col, width);
        }
        (MeasureSet::Front(_), None) => {
            panic!("front, but nothing fits, for doc {} at col {} width {}", doc, col, width)
        }
        (MeasureSet::Tainted(_), Some(_)) => {
            panic!("tainted, but something fits, for doc {} at col {} width {}", doc, col, width)
        }
    }
}

/// Documents built from a handful of short texts, with every kind of `Doc` node.
impl Arbitrary for Doc {
    fn make(mut size: u32, mut gen: Gen) -> Doc {
        assert_ne!(size, 0);
        if size == 1 {
            match gen.pick(5) {
                0 => text(""),
                1 => text("a"),
                2 => text("bb"),
                3 => text("cccc"),
                4 => nl(),
                _ => unreachable!(),
            }
        } else if size == 2 {
            match gen.pick(2) {
                0 => nest(2, Doc::make(1, gen)),
                1 => align(Doc::make(1, gen)),
                _ => unreachable!(),
            }
        } else {
            size -= 1;
            let kind = gen.pick(4);
            match kind {
                0 | 1 => {
                    let left_size = gen.pick(size - 1) + 1;
                    let right_size = size - left_size;
                    let left = Doc::make(left_size, gen.reborrow());
                    let right = Doc::make(right_size, gen.reborrow());
                    if kind == 0 {
                        concat(left, right)
                    } else {
                        choice(left, right)
                    }
                }
                2 => nest(2, Doc::make(size, gen)),
                3 => align(Doc::make(size, gen)),
                _ => unreachable!(),
            }
        }
    }
}
