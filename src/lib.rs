//! A pretty printer that picks the _optimal_ layout of a document.
//!
//! A [`Doc`] describes every way some text could be laid out, using `Choice`s between
//! alternatives. Given a width limit and a [`Cost`] model, [`pretty_print`] finds the cheapest
//! layout in which no line goes past the width limit (or, if there is no such layout, a cheap one
//! that goes past it as little as it can) and renders it.
//!
//! It does this by computing, for each part of the document, the Pareto front of its layouts: the
//! ones for which no other layout both ends at an earlier column and is cheaper. Parts that
//! certainly go past the width limit are set aside, and only looked at again if nothing else fits.

mod cost;
mod doc;
mod geometry;
mod infra;
mod pretty_printing;
mod render;

pub mod doc_constructors;
pub mod examples;

pub use cost::{Cost, DefaultCost};
pub use doc::{Doc, DocError, Literal};
pub use geometry::{str_width, Col, Width};
pub use pretty_printing::{
    pretty_print, pretty_print_to_string, process_concat, resolve, Measure, MeasureSet,
    PrettyPrinted, PrintOptions, Taint,
};
pub use render::{render, render_to_string};

/// Slow but obviously correct pretty printing, for checking the real thing against.
pub mod testing {
    pub use crate::pretty_printing::{all_layouts, layout_cost, oracular_pretty_print};
}
