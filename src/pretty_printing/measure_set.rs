use super::measure::Measure;
use crate::cost::Cost;
use crate::doc::Doc;
use crate::infra::span;
use once_cell::unsync::Lazy;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// The candidate layouts of a document in a particular printing context.
#[derive(Clone, Debug)]
pub enum MeasureSet<C: Cost> {
    /// A Pareto front of layouts that fit within the width limit.
    ///
    /// INVARIANTS:
    /// - it is non-empty
    /// - `last_col` is non-increasing. For a total cost order it is strictly decreasing, so cost
    ///   is strictly increasing and the first measure is the cheapest
    /// - no measure dominates another
    Front(Vec<Measure<C>>),
    /// No layout is known to fit within the width limit. Holds a fallback layout, which is only
    /// computed if it's needed.
    Tainted(Taint<C>),
}

/// A deferred measure. It is computed at most once, the first time it's forced; clones share the
/// result.
#[derive(Clone)]
pub struct Taint<C: Cost>(Rc<Lazy<Measure<C>, Box<dyn FnOnce() -> Measure<C>>>>);

impl<C: Cost> Taint<C> {
    pub fn new(thunk: impl FnOnce() -> Measure<C> + 'static) -> Taint<C> {
        let thunk: Box<dyn FnOnce() -> Measure<C>> = Box::new(thunk);
        Taint(Rc::new(Lazy::new(thunk)))
    }

    /// Compute the measure, or get it if it was already computed.
    pub fn force(&self) -> Measure<C> {
        Lazy::force(&self.0).clone()
    }
}

impl<C: Cost + fmt::Debug> fmt::Debug for Taint<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match Lazy::get(&self.0) {
            Some(measure) => write!(f, "Taint({:?})", measure),
            None => write!(f, "Taint(<unforced>)"),
        }
    }
}

impl<C: Cost> MeasureSet<C> {
    pub fn singleton(measure: Measure<C>) -> MeasureSet<C> {
        MeasureSet::Front(vec![measure])
    }

    pub fn is_tainted(&self) -> bool {
        matches!(self, MeasureSet::Tainted(_))
    }

    /// The cheapest layout of a front, or else the fallback layout of a taint (forcing it).
    pub fn into_best(self) -> Measure<C> {
        match self {
            MeasureSet::Front(measures) => match measures.into_iter().next() {
                Some(measure) => measure,
                None => panic!("bug in MeasureSet: empty front"),
            },
            MeasureSet::Tainted(taint) => taint.force(),
        }
    }

    /// Combine the layouts of two alternatives for printing at the same position. Keeps every
    /// layout from either side that is not dominated by a layout on the other side. A front is
    /// always preferred over a taint.
    pub fn merge(self, other: MeasureSet<C>) -> MeasureSet<C> {
        use MeasureSet::{Front, Tainted};

        match (self, other) {
            (Front(left), Front(right)) => Front(merge_fronts(left, right)),
            (Front(front), Tainted(_)) | (Tainted(_), Front(front)) => Front(front),
            (Tainted(taint), Tainted(_)) => Tainted(taint),
        }
    }

    /// Apply `f` to every layout. It must not change the layouts' costs or ending columns.
    pub(crate) fn map_layout(self, f: impl Fn(Doc) -> Doc + 'static) -> MeasureSet<C> {
        match self {
            MeasureSet::Front(measures) => MeasureSet::Front(
                measures
                    .into_iter()
                    .map(|measure| measure.map_layout(&f))
                    .collect(),
            ),
            MeasureSet::Tainted(taint) => {
                MeasureSet::Tainted(Taint::new(move || taint.force().map_layout(f)))
            }
        }
    }
}

/// Remove every measure that another measure dominates, given measures sorted by non-increasing
/// `last_col`. Linear when costs are totally ordered; quadratic at worst for a partial order, where
/// a measure can be dominated by one that isn't its neighbour.
pub(crate) fn prune_dominated<C: Cost>(measures: Vec<Measure<C>>) -> Vec<Measure<C>> {
    // Built from the smallest `last_col` up, so a new measure can only be dominated by one that's
    // already kept, and can only dominate kept measures with the same `last_col`.
    let mut kept: Vec<Measure<C>> = Vec::with_capacity(measures.len());
    // Whether each kept cost is strictly less than the one kept before it.
    let mut is_chain = true;
    for measure in measures.into_iter().rev() {
        if let Some(last) = kept.last() {
            let is_cheapest = measure.last_col > last.last_col && measure.cost < last.cost;
            if !(is_chain && is_cheapest) {
                if kept.iter().any(|k| k.dominates(&measure)) {
                    continue;
                }
                kept.retain(|k| !measure.dominates(k));
                is_chain = false;
            }
        }
        kept.push(measure);
    }
    kept.reverse();
    kept
}

/// Merge two fronts, each sorted by decreasing `last_col`, into one.
fn merge_fronts<C: Cost>(left: Vec<Measure<C>>, right: Vec<Measure<C>>) -> Vec<Measure<C>> {
    span!("merge");

    let mut front = Vec::with_capacity(left.len() + right.len());
    let mut left = VecDeque::from(left);
    let mut right = VecDeque::from(right);
    while let (Some(l), Some(r)) = (left.front(), right.front()) {
        if l.dominates(r) {
            right.pop_front();
        } else if r.dominates(l) {
            left.pop_front();
        } else if l.last_col > r.last_col {
            // Everything left in either list ends at a smaller column, so can't dominate `l`.
            front.extend(left.pop_front());
        } else {
            front.extend(right.pop_front());
        }
    }
    front.extend(left);
    front.extend(right);
    prune_dominated(front)
}
