//! For testing! A brute force pretty printer, to check the real one against.

use super::measure::Measure;
use crate::cost::Cost;
use crate::doc::Doc;
use crate::geometry::{Col, Width};
use std::rc::Rc;

/// Every layout of `doc`, one for each way of resolving its choices. This is exponential in the
/// number of choices.
pub fn all_layouts(doc: &Doc) -> Vec<Doc> {
    use Doc::*;

    match doc {
        Text(_) | Newline => vec![doc.clone()],
        Nest(n, inner) => all_layouts(inner)
            .into_iter()
            .map(|layout| Nest(*n, Rc::new(layout)))
            .collect(),
        Align(inner) => all_layouts(inner)
            .into_iter()
            .map(|layout| Align(Rc::new(layout)))
            .collect(),
        Concat(left, right) => {
            let rights = all_layouts(right)
                .into_iter()
                .map(Rc::new)
                .collect::<Vec<_>>();
            let mut layouts = Vec::new();
            for left in all_layouts(left) {
                let left = Rc::new(left);
                for right in &rights {
                    layouts.push(Concat(left.clone(), right.clone()));
                }
            }
            layouts
        }
        Choice(opt1, opt2) => {
            let mut layouts = all_layouts(opt1);
            layouts.extend(all_layouts(opt2));
            layouts
        }
    }
}

/// Measure a choice-free `layout` printed at column `col` with indentation 0. Also says whether
/// the layout stays within `width`: that is, whether every piece of it starts at a column and
/// indentation within the width, and every text run ends within it.
///
/// # Panics
///
/// Panics if `layout` contains a `Choice`.
pub fn layout_cost<C: Cost>(layout: &Doc, col: Col, width: Width) -> (Measure<C>, bool) {
    let (last_col, cost, fits) = walk::<C>(layout, col, 0, width);
    let measure = Measure {
        last_col,
        cost,
        layout: layout.clone(),
    };
    (measure, fits)
}

/// The cheapest layout of `doc` that stays within `width`, found by trying every layout. `None` if
/// no layout fits. If several are equally cheap, returns the first in the order of
/// [`all_layouts`].
pub fn oracular_pretty_print<C: Cost>(doc: &Doc, col: Col, width: Width) -> Option<Measure<C>> {
    let mut best: Option<Measure<C>> = None;
    for layout in all_layouts(doc) {
        let (measure, fits) = layout_cost::<C>(&layout, col, width);
        if !fits {
            continue;
        }
        best = match best {
            Some(best) if !(measure.cost < best.cost) => Some(best),
            _ => Some(measure),
        };
    }
    best
}

fn walk<C: Cost>(layout: &Doc, col: Col, indent: Width, width: Width) -> (Col, C, bool) {
    use Doc::*;

    let starts_within = indent <= width && col <= width;
    match layout {
        Text(lit) => {
            let end = col.saturating_add(lit.width());
            (end, C::text(width, col, lit.width()), starts_within && end <= width)
        }
        Newline => (indent, C::newline(indent), starts_within),
        Nest(n, inner) => {
            let (last_col, cost, fits) = walk(inner, col, indent.saturating_add(*n), width);
            (last_col, cost, starts_within && fits)
        }
        Align(inner) => {
            let (last_col, cost, fits) = walk(inner, col, col, width);
            (last_col, cost, starts_within && fits)
        }
        Concat(left, right) => {
            let (mid_col, left_cost, left_fits) = walk::<C>(left, col, indent, width);
            let (last_col, right_cost, right_fits) = walk::<C>(right, mid_col, indent, width);
            (
                last_col,
                left_cost + right_cost,
                starts_within && left_fits && right_fits,
            )
        }
        Choice(_, _) => panic!("bug in oracle: layout contains a choice"),
    }
}
