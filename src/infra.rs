//! Profiling hooks. With the `profile` feature, `span!("name")` records a flamegraph span for the
//! rest of the enclosing block; without it, `span!` expands to nothing.

#[cfg(feature = "profile")]
pub use no_nonsense_flamegraphs::span;

#[cfg(not(feature = "profile"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __pareto_span {
    ($name:expr) => {};
}

// `macro_export` always places the macro at the crate root; re-export it so call sites can write
// `crate::infra::span` in both configurations.
#[cfg(not(feature = "profile"))]
pub use crate::__pareto_span as span;
