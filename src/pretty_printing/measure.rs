use crate::cost::Cost;
use crate::doc::Doc;
use crate::geometry::Col;
use std::rc::Rc;

/// One candidate layout of a document, in a particular printing context.
#[derive(Clone, Debug, PartialEq)]
pub struct Measure<C: Cost> {
    /// The column the layout ends at.
    pub last_col: Col,
    pub cost: C,
    /// The layout itself. Never contains a `Choice`.
    pub layout: Doc,
}

impl<C: Cost> Measure<C> {
    /// Is this measure at least as good as `other`, in both its ending column and its cost?
    pub fn dominates(&self, other: &Measure<C>) -> bool {
        self.last_col <= other.last_col && self.cost <= other.cost
    }

    /// The measure of printing `self` followed by `other`, where `other` was resolved starting at
    /// `self.last_col`.
    pub fn concat(&self, other: &Measure<C>) -> Measure<C> {
        Measure {
            last_col: other.last_col,
            cost: self.cost.clone() + other.cost.clone(),
            layout: Doc::Concat(Rc::new(self.layout.clone()), Rc::new(other.layout.clone())),
        }
    }

    pub(crate) fn map_layout(self, f: impl Fn(Doc) -> Doc) -> Measure<C> {
        Measure {
            last_col: self.last_col,
            cost: self.cost,
            layout: f(self.layout),
        }
    }
}
