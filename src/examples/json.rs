use crate::doc::Doc;
use crate::doc_constructors::{
    colon, comma, lbrace, lbrack, nl, rbrace, rbrack, sep, space, text,
};
use crate::geometry::Width;

/// How far the elements of a multi-line list or object are indented.
const INDENT: Width = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum Json {
    Null,
    Bool(bool),
    /// Already formatted.
    Number(String),
    /// Unescaped.
    String(String),
    List(Vec<Json>),
    Dict(Vec<(String, Json)>),
}

pub fn json_null() -> Json {
    Json::Null
}

pub fn json_bool(b: bool) -> Json {
    Json::Bool(b)
}

pub fn json_string(s: &str) -> Json {
    Json::String(s.to_owned())
}

pub fn json_number(f: f64) -> Json {
    Json::Number(f.to_string())
}

pub fn json_list(elements: Vec<Json>) -> Json {
    Json::List(elements)
}

pub fn json_dict(entries: Vec<(&str, Json)>) -> Json {
    Json::Dict(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}

impl Json {
    /// Every list and object can be printed either on one line, or with one element per line.
    pub fn to_doc(&self) -> Doc {
        match self {
            Json::Null => text("null"),
            Json::Bool(true) => text("true"),
            Json::Bool(false) => text("false"),
            Json::Number(n) => text(n),
            Json::String(s) => quoted(s),
            Json::List(elements) => {
                collection(lbrack(), rbrack(), elements.iter().map(Json::to_doc))
            }
            Json::Dict(entries) => collection(
                lbrace(),
                rbrace(),
                entries
                    .iter()
                    .map(|(key, value)| quoted(key) + colon() + space() + value.to_doc()),
            ),
        }
    }
}

fn collection(open: Doc, close: Doc, elements: impl Iterator<Item = Doc>) -> Doc {
    let elements = elements.collect::<Vec<_>>();
    if elements.is_empty() {
        return open + close;
    }
    let single = open.clone() + sep(comma() + space(), elements.clone()) + close.clone();
    let multi = (open + (INDENT >> sep(comma() + nl(), elements))) ^ close;
    single | multi
}

fn quoted(s: &str) -> Doc {
    let mut escaped = String::with_capacity(s.len() + 2);
    escaped.push('"');
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped.push('"');
    text(&escaped)
}
