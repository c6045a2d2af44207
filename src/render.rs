use crate::doc::Doc;
use crate::geometry::{Col, Width};
use crate::infra::span;

/// Render a layout as a list of lines. The first line is assumed to start at column `col`, but is
/// not padded: the caller is expected to have already printed the first `col` columns.
///
/// # Panics
///
/// Panics if `layout` contains a `Choice`. Use the pretty printer to pick a layout first.
pub fn render(layout: &Doc, col: Col) -> Vec<String> {
    use Doc::*;
    span!("render");

    let mut lines = vec![String::new()];
    let mut current_col = col;
    // Last element is the leftmost unrendered piece, with its indentation level.
    let mut stack: Vec<(&Doc, Width)> = vec![(layout, 0)];
    while let Some((doc, indent)) = stack.pop() {
        match doc {
            Text(lit) => {
                if let Some(line) = lines.last_mut() {
                    line.push_str(lit.str());
                }
                current_col = current_col.saturating_add(lit.width());
            }
            Newline => {
                lines.push(" ".repeat(indent as usize));
                current_col = indent;
            }
            Concat(left, right) => {
                stack.push((&**right, indent));
                stack.push((&**left, indent));
            }
            Nest(n, inner) => stack.push((&**inner, indent.saturating_add(*n))),
            Align(inner) => stack.push((&**inner, current_col)),
            Choice(_, _) => panic!("bug in render: layout contains a choice"),
        }
    }
    lines
}

/// Render a layout as a single string, with lines separated by `\n`.
pub fn render_to_string(layout: &Doc, col: Col) -> String {
    render(layout, col).join("\n")
}
