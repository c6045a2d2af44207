use super::measure::Measure;
use super::measure_set::{prune_dominated, MeasureSet, Taint};
use crate::cost::Cost;
use crate::doc::Doc;
use crate::geometry::{Col, Width};
use crate::infra::span;
use std::rc::Rc;

/// Compute the candidate layouts for printing `doc` starting at column `col`, with indentation
/// level `indent`, when lines should not exceed `width_limit`.
///
/// Returns a `Front` if any layout of `doc` fits within the width limit. Otherwise returns a
/// `Tainted` set, whose fallback layout is only computed if something asks for it.
pub fn resolve<C: Cost>(doc: &Doc, col: Col, indent: Width, width_limit: Width) -> MeasureSet<C> {
    if exceeds(doc, col, indent, width_limit) {
        let doc = doc.clone();
        MeasureSet::Tainted(Taint::new(move || {
            resolve_inner::<C>(&doc, col, indent, width_limit).into_best()
        }))
    } else {
        resolve_inner(doc, col, indent, width_limit)
    }
}

/// Does printing `doc` here certainly go past the width limit?
fn exceeds(doc: &Doc, col: Col, indent: Width, width_limit: Width) -> bool {
    match doc {
        Doc::Text(lit) => {
            indent > width_limit || col.saturating_add(lit.width()) > width_limit
        }
        _ => indent > width_limit || col > width_limit,
    }
}

fn resolve_inner<C: Cost>(
    doc: &Doc,
    col: Col,
    indent: Width,
    width_limit: Width,
) -> MeasureSet<C> {
    use Doc::*;
    span!("resolve");

    match doc {
        Text(lit) => MeasureSet::singleton(Measure {
            last_col: col.saturating_add(lit.width()),
            cost: C::text(width_limit, col, lit.width()),
            layout: doc.clone(),
        }),
        Newline => MeasureSet::singleton(Measure {
            last_col: indent,
            cost: C::newline(indent),
            layout: Newline,
        }),
        Nest(n, inner) => {
            let n = *n;
            resolve(inner, col, indent.saturating_add(n), width_limit)
                .map_layout(move |layout| Nest(n, Rc::new(layout)))
        }
        Align(inner) => {
            resolve(inner, col, col, width_limit).map_layout(|layout| Align(Rc::new(layout)))
        }
        Choice(_, _) => {
            // Long chains of choices lean left; walk them without recursing.
            let mut options = Vec::new();
            let mut leftmost = doc;
            while let Choice(opt1, opt2) = leftmost {
                options.push(&**opt2);
                leftmost = &**opt1;
            }
            options
                .into_iter()
                .rev()
                .fold(resolve(leftmost, col, indent, width_limit), |set, option| {
                    set.merge(resolve(option, col, indent, width_limit))
                })
        }
        Concat(_, _) => {
            // Likewise for concatenations. Every `Concat` on the spine starts at the same column
            // and indentation as `leftmost`, so it exceeds the width limit only if `leftmost` does.
            let mut rights = Vec::new();
            let mut leftmost = doc;
            while let Concat(left, right) = leftmost {
                rights.push(right.clone());
                leftmost = &**left;
            }
            let mut set = resolve(leftmost, col, indent, width_limit);
            while let Some(right) = rights.pop() {
                set = match set {
                    MeasureSet::Tainted(taint) => {
                        rights.push(right);
                        return concat_tainted_chain(taint, rights, indent, width_limit);
                    }
                    front => process_concat(front, move |measure: &Measure<C>| {
                        resolve(&right, measure.last_col, indent, width_limit)
                    }),
                };
            }
            set
        }
    }
}

/// Follow a tainted layout with each of `rights`, in reverse order. Equivalent to calling
/// `process_concat` once per right, but forcing the result doesn't recurse once per right.
fn concat_tainted_chain<C: Cost>(
    taint: Taint<C>,
    mut rights: Vec<Rc<Doc>>,
    indent: Width,
    width_limit: Width,
) -> MeasureSet<C> {
    MeasureSet::Tainted(Taint::new(move || {
        let mut measure = taint.force();
        while let Some(right) = rights.pop() {
            let right = resolve::<C>(&right, measure.last_col, indent, width_limit).into_best();
            measure = measure.concat(&right);
        }
        measure
    }))
}

/// Combine the layouts of the left half of a concatenation with the layouts of its right half.
/// `resolve_right` gives the layouts of the right half when it starts where the given left layout
/// ends.
pub fn process_concat<C, F>(left: MeasureSet<C>, resolve_right: F) -> MeasureSet<C>
where
    C: Cost,
    F: Fn(&Measure<C>) -> MeasureSet<C> + 'static,
{
    span!("process_concat");

    match left {
        MeasureSet::Tainted(taint) => MeasureSet::Tainted(Taint::new(move || {
            let left = taint.force();
            let right = resolve_right(&left).into_best();
            left.concat(&right)
        })),
        MeasureSet::Front(lefts) => {
            let merged = lefts
                .into_iter()
                .map(|left| match resolve_right(&left) {
                    MeasureSet::Front(rights) => {
                        MeasureSet::Front(concat_with_front(&left, rights))
                    }
                    MeasureSet::Tainted(taint) => {
                        MeasureSet::Tainted(Taint::new(move || left.concat(&taint.force())))
                    }
                })
                .reduce(MeasureSet::merge);
            match merged {
                Some(set) => set,
                None => panic!("bug in process_concat: empty front"),
            }
        }
    }
}

/// Prepend `left` to each of `rights`.
fn concat_with_front<C: Cost>(left: &Measure<C>, rights: Vec<Measure<C>>) -> Vec<Measure<C>> {
    let front = rights
        .into_iter()
        .map(|right| left.concat(&right))
        .collect::<Vec<_>>();
    // Adding the same cost to each can make neighbours equal.
    prune_dominated(front)
}
