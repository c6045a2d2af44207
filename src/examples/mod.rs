//! Sample document types, with the `Doc`s that print them.
//!
//! - [`Json`](json::Json)

pub mod json;
