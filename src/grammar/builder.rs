//! Owned-tree construction for strings that already passed `validate`.
//! The descent mirrors the validator; the first child in a list becomes
//! `left`, the second `right`.

use super::ast::Node;
use super::validator::Cursor;

/// Build the tree. Returns None on malformed input rather than assuming
/// the caller validated, so the two passes stay independently safe.
pub fn build(input: &str) -> Option<Node> {
    let mut cur = Cursor::new(input);
    cur.skip_blanks();
    let root = node(&mut cur)?;
    cur.skip_blanks();
    if cur.at_end() {
        Some(root)
    } else {
        None
    }
}

fn node(cur: &mut Cursor) -> Option<Node> {
    cur.skip_blanks();
    if cur.peek() != Some(b'(') {
        return None;
    }
    cur.bump();

    let label = cur.take_label()?;
    let mut built = Node::leaf(label);

    cur.skip_blanks();
    if cur.peek() == Some(b'(') {
        cur.bump();
        attach_children(cur, &mut built)?;
    }

    cur.skip_blanks();
    if cur.peek() != Some(b')') {
        return None;
    }
    cur.bump();
    Some(built)
}

fn child(cur: &mut Cursor) -> Option<Node> {
    cur.skip_blanks();
    if cur.peek() == Some(b'(') {
        return node(cur);
    }

    let label = cur.take_label()?;
    let mut built = Node::leaf(label);

    cur.skip_blanks();
    if cur.peek() == Some(b'(') {
        cur.bump();
        attach_children(cur, &mut built)?;
    }
    Some(built)
}

fn attach_children(cur: &mut Cursor, parent: &mut Node) -> Option<()> {
    cur.skip_blanks();
    if cur.peek() == Some(b')') {
        // empty child list is a grammar error
        return None;
    }
    parent.left = Some(Box::new(child(cur)?));

    cur.skip_blanks();
    if cur.peek() != Some(b')') {
        parent.right = Some(Box::new(child(cur)?));
    }

    cur.skip_blanks();
    if cur.peek() != Some(b')') {
        return None;
    }
    cur.bump();
    Some(())
}
