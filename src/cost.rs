use crate::geometry::{Col, Width};
use std::fmt;
use std::ops::Add;

/// How bad a layout is. The pretty printer picks the layout with the lowest cost, among those
/// that fit within the width limit (if any do).
///
/// The cost of a layout is the sum (via `+`) of the costs of each of its text runs and newlines.
/// Costs are compared with `<=`. If this is not a total order, the printer still works, but may
/// keep around more candidate layouts than it needs to.
///
/// For the printer to find the optimal layout, the cost of text must not decrease as the column
/// it is placed at increases, and `+` must be monotonic with respect to `<=`.
pub trait Cost: Clone + PartialOrd + Add<Output = Self> + 'static {
    /// The cost of a text run of width `len` that starts at column `col`, when lines should not
    /// exceed `width_limit`.
    fn text(width_limit: Width, col: Col, len: Width) -> Self;

    /// The cost of a newline, followed by `indent` spaces of indentation.
    fn newline(indent: Width) -> Self;
}

/// A cost that first minimizes how far text sticks out past the width limit, and then minimizes
/// the number of lines.
///
/// Ordered lexicographically: `badness` first, then `height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefaultCost {
    /// Sum over every character past the width limit of `2 * (distance past the limit) + 1`, i.e.
    /// the square of the overflow for each line.
    pub badness: u64,
    /// Number of newlines.
    pub height: u32,
}

impl Cost for DefaultCost {
    fn text(width_limit: Width, col: Col, len: Width) -> DefaultCost {
        let end = u64::from(col) + u64::from(len);
        let limit = u64::from(width_limit);
        if end <= limit {
            return DefaultCost::default();
        }
        let start = u64::from(col).max(limit);
        let a = start - limit;
        let b = end - start;
        DefaultCost {
            badness: b * (2 * a + b),
            height: 0,
        }
    }

    fn newline(_indent: Width) -> DefaultCost {
        DefaultCost {
            badness: 0,
            height: 1,
        }
    }
}

impl Add<DefaultCost> for DefaultCost {
    type Output = DefaultCost;

    fn add(self, other: DefaultCost) -> DefaultCost {
        DefaultCost {
            badness: self.badness.saturating_add(other.badness),
            height: self.height.saturating_add(other.height),
        }
    }
}

impl fmt::Display for DefaultCost {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.badness, self.height)
    }
}

/// For testing costs that are only partially ordered: a pair of heights and text lengths,
/// compared component-wise.
#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PairCost(pub u32, pub u32);

#[cfg(test)]
impl PartialOrd for PairCost {
    fn partial_cmp(&self, other: &PairCost) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering::Equal;

        match (self.0.cmp(&other.0), self.1.cmp(&other.1)) {
            (x, y) if x == y => Some(x),
            (x, Equal) | (Equal, x) => Some(x),
            _ => None,
        }
    }
}

#[cfg(test)]
impl Add<PairCost> for PairCost {
    type Output = PairCost;

    fn add(self, other: PairCost) -> PairCost {
        PairCost(self.0 + other.0, self.1 + other.1)
    }
}

#[cfg(test)]
impl Cost for PairCost {
    fn text(_width_limit: Width, _col: Col, len: Width) -> PairCost {
        PairCost(0, len)
    }

    fn newline(_indent: Width) -> PairCost {
        PairCost(1, 0)
    }
}
