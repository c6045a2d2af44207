//! Convenience constructors for building [`Doc`]s. Everything here is built out of the six `Doc`
//! forms; none of it is needed by the pretty printer itself.

use crate::doc::Doc;
use crate::geometry::Width;
use std::rc::Rc;

/// Display nothing.
pub fn empty() -> Doc {
    text("")
}

/// Literal text.
///
/// # Panics
///
/// Panics if `s` contains a line break. Use [`Doc::try_text`] to handle that case.
pub fn text(s: &str) -> Doc {
    match Doc::try_text(s) {
        Ok(doc) => doc,
        Err(err) => panic!("{}", err),
    }
}

pub fn nl() -> Doc {
    Doc::Newline
}

pub fn concat(left: Doc, right: Doc) -> Doc {
    Doc::Concat(Rc::new(left), Rc::new(right))
}

pub fn nest(indent: Width, doc: Doc) -> Doc {
    Doc::Nest(indent, Rc::new(doc))
}

pub fn align(doc: Doc) -> Doc {
    Doc::Align(Rc::new(doc))
}

pub fn choice(opt1: Doc, opt2: Doc) -> Doc {
    Doc::Choice(Rc::new(opt1), Rc::new(opt2))
}

/* Punctuation */

pub fn space() -> Doc {
    text(" ")
}

pub fn comma() -> Doc {
    text(",")
}

pub fn colon() -> Doc {
    text(":")
}

pub fn lparen() -> Doc {
    text("(")
}

pub fn rparen() -> Doc {
    text(")")
}

pub fn lbrack() -> Doc {
    text("[")
}

pub fn rbrack() -> Doc {
    text("]")
}

pub fn lbrace() -> Doc {
    text("{")
}

pub fn rbrace() -> Doc {
    text("}")
}

/* Derived combinators */

/// Multi-line text: each line of `s` becomes a `Text`, separated by `Newline`s. The lines after
/// the first are indented to the current indentation level.
pub fn lines(s: &str) -> Doc {
    let mut docs = s.lines().map(text);
    let first = docs.next().unwrap_or_else(empty);
    docs.fold(first, |acc, line| acc ^ line)
}

/// Replace every newline with a single space, and pick the first option of every choice.
pub fn flatten(doc: &Doc) -> Doc {
    use Doc::*;

    // Lists lean left, so walk down the left without recursing.
    let mut rights = Vec::new();
    let mut leftmost = doc;
    loop {
        match leftmost {
            Concat(left, right) => {
                rights.push(&**right);
                leftmost = &**left;
            }
            Nest(_, inner) | Align(inner) | Choice(inner, _) => leftmost = &**inner,
            Text(_) | Newline => break,
        }
    }
    let first = match leftmost {
        Newline => space(),
        _ => leftmost.clone(),
    };
    rights
        .into_iter()
        .rev()
        .fold(first, |acc, right| concat(acc, flatten(right)))
}

/// Either `doc` on a single line, or `doc` as given.
pub fn group(doc: Doc) -> Doc {
    choice(flatten(&doc), doc)
}

/// Concatenate `docs` horizontally.
pub fn hcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    sep(empty(), docs)
}

/// Stack `docs` vertically, with a newline between each.
pub fn vcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    sep(nl(), docs)
}

/// Concatenate `docs`, putting `separator` between each adjacent pair.
///
/// The result is nested on the left: `((a + sep) + b) + ...`. The printer walks left-nested
/// chains in a loop, so this shape works for lists of any length.
pub fn sep(separator: Doc, docs: impl IntoIterator<Item = Doc>) -> Doc {
    let mut docs = docs.into_iter();
    match docs.next() {
        None => empty(),
        Some(first) => docs.fold(first, |acc, doc| acc + separator.clone() + doc),
    }
}

/// A choice between any number of options. With no options, this is `empty()`.
pub fn choices(options: impl IntoIterator<Item = Doc>) -> Doc {
    let mut options = options.into_iter();
    match options.next() {
        None => empty(),
        Some(first) => options.fold(first, choice),
    }
}
