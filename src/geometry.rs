use unicode_width::UnicodeWidthStr;

/// Column, measured in characters from the start of the line. 0-indexed.
pub type Col = u32;
/// Width, measured in characters.
pub type Width = u32;

/// The number of columns `s` occupies when displayed. This is _not_ the number of bytes, nor the
/// number of chars: wide characters count for two columns and combining characters for zero.
pub fn str_width(s: &str) -> Width {
    UnicodeWidthStr::width(s) as Width
}
