use thiserror::Error;

/// Lexical rejection, reported before the grammar is consulted at all.
/// The interactive driver prints `ERROR` for these and `FALSE` for
/// grammar rejections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrecheckError {
    #[error("input is empty")]
    Empty,
    #[error("input contains a line break")]
    EmbeddedNewline,
    #[error("input must start with `(` and end with `)`")]
    NotParenthesized,
    #[error("parenthesis counts do not balance")]
    UnbalancedParens,
    #[error("illegal character `{0}`")]
    IllegalCharacter(char),
}

/// Character-level screen: non-empty, no newlines, wrapped in parens,
/// balanced counts, alphabet restricted to labels/parens/blanks.
pub fn precheck(input: &str) -> Result<(), PrecheckError> {
    if input.is_empty() {
        return Err(PrecheckError::Empty);
    }
    if input.contains('\n') || input.contains('\r') {
        return Err(PrecheckError::EmbeddedNewline);
    }
    if !input.starts_with('(') || !input.ends_with(')') {
        return Err(PrecheckError::NotParenthesized);
    }
    let open = input.chars().filter(|&c| c == '(').count();
    let close = input.chars().filter(|&c| c == ')').count();
    if open != close {
        return Err(PrecheckError::UnbalancedParens);
    }
    for c in input.chars() {
        if !c.is_ascii_alphabetic() && c != '(' && c != ')' && c != ' ' {
            return Err(PrecheckError::IllegalCharacter(c));
        }
    }
    Ok(())
}

pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    pub(crate) fn skip_blanks(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Consume one alphabetic label, returning it.
    pub(crate) fn take_label(&mut self) -> Option<&'a str> {
        self.skip_blanks();
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        // label bytes are ASCII alphabetic, slicing is char-safe
        std::str::from_utf8(&self.bytes[start..self.pos]).ok()
    }
}

/// Single-pass recursive-descent check. The whole input must be consumed.
pub fn validate(input: &str) -> bool {
    let mut cur = Cursor::new(input);
    cur.skip_blanks();
    if !node(&mut cur) {
        return false;
    }
    cur.skip_blanks();
    cur.at_end()
}

fn node(cur: &mut Cursor) -> bool {
    cur.skip_blanks();
    if cur.peek() != Some(b'(') {
        return false;
    }
    cur.bump();

    if cur.take_label().is_none() {
        return false;
    }

    cur.skip_blanks();
    if cur.peek() == Some(b'(') {
        cur.bump();
        if !children(cur) {
            return false;
        }
    }

    cur.skip_blanks();
    if cur.peek() != Some(b')') {
        return false;
    }
    cur.bump();
    true
}

fn child(cur: &mut Cursor) -> bool {
    cur.skip_blanks();
    if cur.peek() == Some(b'(') {
        return node(cur);
    }

    if cur.take_label().is_none() {
        return false;
    }

    cur.skip_blanks();
    if cur.peek() == Some(b'(') {
        cur.bump();
        if !children(cur) {
            return false;
        }
    }
    true
}

/// Child list body after the opening `(`: one or two children, then `)`.
fn children(cur: &mut Cursor) -> bool {
    let mut count = 0;
    loop {
        cur.skip_blanks();
        if cur.peek() == Some(b')') {
            cur.bump();
            break;
        }
        if !child(cur) {
            return false;
        }
        count += 1;
        if count > 2 {
            return false;
        }
    }
    count != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precheck_screens_lexical_errors() {
        assert_eq!(precheck(""), Err(PrecheckError::Empty));
        assert_eq!(precheck("a(b)"), Err(PrecheckError::NotParenthesized));
        assert_eq!(precheck("((a)"), Err(PrecheckError::UnbalancedParens));
        assert_eq!(precheck("(a1)"), Err(PrecheckError::IllegalCharacter('1')));
        assert_eq!(precheck("(a b)"), Ok(()));
    }

    #[test]
    fn accepts_single_node() {
        assert!(validate("(a)"));
        assert!(validate("( root )"));
    }

    #[test]
    fn accepts_nested_children() {
        assert!(validate("(a (b c))"));
        assert!(validate("(a (b (c d) e))"));
        assert!(validate("(a ((b) (c (d e))))"));
    }

    #[test]
    fn rejects_empty_child_list() {
        assert!(!validate("(a ())"));
    }

    #[test]
    fn rejects_third_child() {
        assert!(!validate("(a (b c d))"));
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(!validate("(a) b"));
        assert!(!validate("(a)(b)"));
    }

    #[test]
    fn rejects_missing_label() {
        assert!(!validate("()"));
        assert!(!validate("((a))"));
    }
}
