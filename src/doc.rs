use crate::geometry::{str_width, Width};
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, BitOr, BitXor, Shr};
use std::rc::Rc;
use thiserror::Error;

/// Describes every way a piece of text could be laid out. The pretty printer picks the layout
/// with the lowest cost (see [`Cost`](crate::Cost)) among those that fit within the width limit.
///
/// `Doc`s are immutable and share their children, so cloning one is cheap and never copies the
/// tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Doc {
    /// Literal text. Cannot contain a newline.
    Text(Literal),
    /// Display a newline, followed by the current indentation.
    Newline,
    /// Display both documents. The first character of the right document immediately follows the
    /// last character of the left document.
    Concat(Rc<Doc>, Rc<Doc>),
    /// Increase the indentation of the contained document by the given number of spaces. Only
    /// affects lines that start inside of it.
    Nest(Width, Rc<Doc>),
    /// Set the indentation of the contained document to the column at which it starts.
    Align(Rc<Doc>),
    /// Display whichever of the two documents is cheaper.
    Choice(Rc<Doc>, Rc<Doc>),
}

/// A piece of text that does not contain a newline, together with its display width.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Literal {
    string: Rc<str>,
    /// Display width (*not* num bytes!)
    width: Width,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    #[error("Text cannot contain a line break: {0:?}")]
    NewlineInText(String),
}

impl Literal {
    pub fn new(s: &str) -> Result<Literal, DocError> {
        if s.contains(|c: char| c == '\n' || c == '\r') {
            return Err(DocError::NewlineInText(s.to_owned()));
        }
        Ok(Literal {
            string: Rc::from(s),
            width: str_width(s),
        })
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn str(&self) -> &str {
        &self.string
    }
}

impl TryFrom<String> for Literal {
    type Error = DocError;

    fn try_from(string: String) -> Result<Literal, DocError> {
        Literal::new(&string)
    }
}

impl From<Literal> for String {
    fn from(literal: Literal) -> String {
        literal.string.to_string()
    }
}

impl Doc {
    /// A text run. Returns an error if `s` contains a line break.
    pub fn try_text(s: &str) -> Result<Doc, DocError> {
        Ok(Doc::Text(Literal::new(s)?))
    }

    /// Does this document (including all of its descendants) contain no `Choice`? If so, it has
    /// exactly one layout.
    pub fn is_choice_free(&self) -> bool {
        use Doc::*;

        let mut stack = vec![self];
        while let Some(doc) = stack.pop() {
            match doc {
                Text(_) | Newline => (),
                Nest(_, inner) | Align(inner) => stack.push(&**inner),
                Concat(left, right) => {
                    stack.push(&**left);
                    stack.push(&**right);
                }
                Choice(_, _) => return false,
            }
        }
        true
    }
}

thread_local! {
    static PLACEHOLDER: Rc<Doc> = Rc::new(Doc::Newline);
}

/// Long documents are deep, so drop them with an explicit stack instead of recursively.
impl Drop for Doc {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        take_children(self, &mut stack);
        while let Some(child) = stack.pop() {
            // Only children that nothing else refers to get dropped here.
            if let Ok(mut child) = Rc::try_unwrap(child) {
                take_children(&mut child, &mut stack);
            }
        }
    }
}

/// Move `doc`'s children onto `stack`, leaving placeholders in their place.
fn take_children(doc: &mut Doc, stack: &mut Vec<Rc<Doc>>) {
    use Doc::*;

    let mut take = |child: &mut Rc<Doc>| {
        if let Ok(placeholder) = PLACEHOLDER.try_with(Rc::clone) {
            stack.push(std::mem::replace(child, placeholder));
        }
    };
    match doc {
        Text(_) | Newline => (),
        Nest(_, inner) | Align(inner) => take(inner),
        Concat(left, right) | Choice(left, right) => {
            take(left);
            take(right);
        }
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Doc::*;

        match self {
            Text(lit) => write!(f, "'{}'", lit.str()),
            Newline => write!(f, "↵"),
            Concat(left, right) => write!(f, "{} + {}", left, right),
            Nest(i, doc) => write!(f, "{}⇒({})", i, doc),
            Align(doc) => write!(f, "Align({})", doc),
            Choice(opt1, opt2) => write!(f, "({} | {})", opt1, opt2),
        }
    }
}

impl Add<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for `Concat`.
    fn add(self, other: Doc) -> Doc {
        Doc::Concat(Rc::new(self), Rc::new(other))
    }
}

impl BitOr<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for `Choice`.
    fn bitor(self, other: Doc) -> Doc {
        Doc::Choice(Rc::new(self), Rc::new(other))
    }
}

impl BitXor<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for `X + Newline + Y`.
    fn bitxor(self, other: Doc) -> Doc {
        self + Doc::Newline + other
    }
}

impl Shr<Doc> for Width {
    type Output = Doc;

    /// Shorthand for an indented block: `Nest(n, Newline + doc)`.
    fn shr(self, doc: Doc) -> Doc {
        Doc::Nest(self, Rc::new(Doc::Newline + doc))
    }
}
