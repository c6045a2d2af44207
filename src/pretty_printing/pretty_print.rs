use super::resolve::resolve;
use crate::cost::{Cost, DefaultCost};
use crate::doc::Doc;
use crate::geometry::{Col, Width};
use crate::infra::span;
use crate::render::render_to_string;

/// The result of pretty printing a document.
#[derive(Clone, Debug, PartialEq)]
pub struct PrettyPrinted<C: Cost> {
    /// The rendered text, with lines separated by `\n`.
    pub text: String,
    /// True if no layout fit within the width limit, so some line is too long.
    pub is_tainted: bool,
    /// The cost of the chosen layout.
    pub cost: C,
    /// The chosen layout. Never contains a `Choice`.
    pub layout: Doc,
}

/// Where and how wide to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PrintOptions {
    /// The desired maximum line width.
    pub width: Width,
    /// The column that the first line starts at.
    pub start_col: Col,
}

impl Default for PrintOptions {
    fn default() -> PrintOptions {
        PrintOptions {
            width: 80,
            start_col: 0,
        }
    }
}

impl PrintOptions {
    pub fn pretty_print<C: Cost>(&self, doc: &Doc) -> PrettyPrinted<C> {
        pretty_print(doc, self.start_col, self.width)
    }
}

/// Print `doc` using its cheapest layout (according to `C`) that fits within `width`, starting
/// at column `col`. If no layout fits, prints some layout anyways and sets `is_tainted`.
pub fn pretty_print<C: Cost>(doc: &Doc, col: Col, width: Width) -> PrettyPrinted<C> {
    span!("pretty_print");

    let measures = resolve::<C>(doc, col, 0, width);
    let is_tainted = measures.is_tainted();
    let best = measures.into_best();
    PrettyPrinted {
        text: render_to_string(&best.layout, col),
        is_tainted,
        cost: best.cost,
        layout: best.layout,
    }
}

/// Print the document to a string using [`DefaultCost`], starting at column 0.
pub fn pretty_print_to_string(doc: &Doc, width: Width) -> String {
    pretty_print::<DefaultCost>(doc, 0, width).text
}
