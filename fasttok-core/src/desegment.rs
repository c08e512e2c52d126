//! Heuristic desegmentation
//!
//! Rebuilds natural spacing from a whitespace-delimited token stream. Each
//! token is classified once into a [`TokenClass`], and the class decides
//! whether a pending space is flushed before the token and whether a space
//! is requested after it. Quote pairing tracks one open apostrophe and one
//! open double quote at a time; deeper nesting is not modeled.

use crate::tables::tables;

/// Spacing category of a single token, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Opening bracket, initial quote, currency sign, `¿` or `¡`
    RightShift,
    /// Closing bracket, final quote, or one of `,.?!:;%`
    LeftShift,
    /// `/`, `\` or `|`
    BothShift,
    /// `@-@`, a hyphen joined on both sides
    JoinedDash,
    /// `-@`, a hyphen joined to the following token only
    RightJoinedDash,
    /// `@-`, a hyphen joined to the preceding token only
    LeftJoinedDash,
    /// A lone `'`
    Apostrophe,
    /// A lone `"`
    DoubleQuote,
    /// Anything else
    Word,
}

impl TokenClass {
    /// Classify a token
    pub fn of(token: &str) -> Self {
        let t = tables();
        if t.right_shift.contains_token(token) {
            return Self::RightShift;
        }
        if t.left_shift.contains_token(token) {
            return Self::LeftShift;
        }
        if t.both_shift.contains_token(token) {
            return Self::BothShift;
        }
        match token {
            "@-@" => Self::JoinedDash,
            "-@" => Self::RightJoinedDash,
            "@-" => Self::LeftJoinedDash,
            "'" => Self::Apostrophe,
            "\"" => Self::DoubleQuote,
            _ => Self::Word,
        }
    }
}

/// Per-call parse state, discarded when the call returns
struct State<'a> {
    apostrophe_open: bool,
    quote_open: bool,
    prepend_space: bool,
    previous_token: &'a str,
}

impl State<'_> {
    fn new() -> Self {
        Self {
            apostrophe_open: false,
            quote_open: false,
            prepend_space: true,
            previous_token: "",
        }
    }

    #[inline]
    fn flush_space(&self, out: &mut String) {
        if self.prepend_space {
            out.push(' ');
        }
    }

    /// Open or close a symmetric quote depending on `open`
    fn toggle(&mut self, token: &str, open: bool, out: &mut String) -> bool {
        if open {
            out.push_str(token);
            self.prepend_space = true;
            false
        } else {
            self.flush_space(out);
            out.push_str(token);
            self.prepend_space = false;
            true
        }
    }
}

/// Desegment `text`, appending the rebuilt line to `out`
pub(crate) fn desegment_into(text: &str, out: &mut String) {
    let start = out.len();
    let numeric = &tables().numeric;
    let mut state = State::new();

    for token in text.split_whitespace() {
        match TokenClass::of(token) {
            TokenClass::RightShift => {
                state.flush_space(out);
                out.push_str(token);
                state.prepend_space = false;
            }
            TokenClass::LeftShift => {
                out.push_str(token);
                state.prepend_space = true;
            }
            TokenClass::BothShift => {
                out.push_str(token);
                state.prepend_space = false;
            }
            TokenClass::JoinedDash => {
                out.push('-');
                state.prepend_space = false;
            }
            TokenClass::RightJoinedDash => {
                state.flush_space(out);
                out.push('-');
                state.prepend_space = false;
            }
            TokenClass::LeftJoinedDash => {
                out.push('-');
                state.prepend_space = true;
            }
            TokenClass::Apostrophe => {
                if state.previous_token.ends_with('s') {
                    // Plural possessive
                    out.push_str(token);
                    state.prepend_space = true;
                } else {
                    let open = state.apostrophe_open;
                    state.apostrophe_open = state.toggle(token, open, out);
                }
            }
            TokenClass::DoubleQuote => {
                let after_number = state
                    .previous_token
                    .chars()
                    .next_back()
                    .is_some_and(|c| numeric.contains_char(c));
                if after_number {
                    // Inch mark
                    out.push_str(token);
                    state.prepend_space = true;
                } else {
                    let open = state.quote_open;
                    state.quote_open = state.toggle(token, open, out);
                }
            }
            TokenClass::Word => {
                state.flush_space(out);
                out.push_str(token);
                state.prepend_space = true;
            }
        }
        state.previous_token = token;
    }

    // Only the leading flush can produce a space at the start
    if out[start..].starts_with(' ') {
        out.remove(start);
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed.max(start));
}
