//! Array-backed binary tree with implicit index arithmetic.
//!
//! Variables:
//!   slots : [Option<char>; CAPACITY], slot i holds the label of node i
//!   root  = 1                         (slot 0 unused)
//!
//! Equations:
//!   left(i)  = 2i
//!   right(i) = 2i + 1
//!   occupied(i) iff slots[i] is Some
//!
//! Built from the single-character variant of the parenthesized grammar:
//!   node  := '(' label [ '(' child child? ')' ] ')'
//!   child := label [ '(' child child? ')' ]
//! Traversals are iterative with an explicit stack; recursion is not used.

use serde::Serialize;
use thiserror::Error;

pub const CAPACITY: usize = 128;
pub const ROOT: usize = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeArrayError {
    #[error("tree must start with `(`")]
    ExpectedOpen,
    #[error("expected an alphabetic label at byte {0}")]
    ExpectedLabel(usize),
    #[error("missing closing `)` at byte {0}")]
    ExpectedClose(usize),
    #[error("node index {0} exceeds the tree capacity of {CAPACITY}")]
    Overflow(usize),
    #[error("unexpected trailing input at byte {0}")]
    TrailingInput(usize),
}

#[derive(Debug)]
pub struct TreeArray {
    slots: [Option<char>; CAPACITY],
}

/// One occupied slot, rendered with the raw child indices (0 when the
/// child slot is empty).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SlotRow {
    pub index: usize,
    pub label: char,
    pub left: usize,
    pub right: usize,
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn skip_blanks(&mut self) {
        while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn label(&mut self) -> Result<char, TreeArrayError> {
        self.skip_blanks();
        match self.peek() {
            Some(b) if b.is_ascii_alphabetic() => {
                self.pos += 1;
                Ok(b as char)
            }
            _ => Err(TreeArrayError::ExpectedLabel(self.pos)),
        }
    }

    fn expect_close(&mut self) -> Result<(), TreeArrayError> {
        self.skip_blanks();
        if self.peek() != Some(b')') {
            return Err(TreeArrayError::ExpectedClose(self.pos));
        }
        self.pos += 1;
        Ok(())
    }
}

impl TreeArray {
    /// Parse the single-character grammar into implicit slots.
    pub fn parse(input: &str) -> Result<Self, TreeArrayError> {
        let mut tree = Self {
            slots: [None; CAPACITY],
        };
        let mut p = Parser {
            bytes: input.as_bytes(),
            pos: 0,
        };

        p.skip_blanks();
        if p.peek() != Some(b'(') {
            return Err(TreeArrayError::ExpectedOpen);
        }
        p.pos += 1;

        let label = p.label()?;
        tree.slots[ROOT] = Some(label);

        p.skip_blanks();
        if p.peek() == Some(b'(') {
            p.pos += 1;
            tree.parse_children(&mut p, ROOT)?;
            p.expect_close()?;
        }
        p.expect_close()?;

        p.skip_blanks();
        if p.peek().is_some() {
            return Err(TreeArrayError::TrailingInput(p.pos));
        }
        Ok(tree)
    }

    fn parse_children(&mut self, p: &mut Parser, parent: usize) -> Result<(), TreeArrayError> {
        p.skip_blanks();
        if matches!(p.peek(), Some(b')') | None) {
            return Ok(());
        }
        self.parse_node(p, 2 * parent)?;

        p.skip_blanks();
        if matches!(p.peek(), Some(b')') | None) {
            return Ok(());
        }
        self.parse_node(p, 2 * parent + 1)
    }

    fn parse_node(&mut self, p: &mut Parser, index: usize) -> Result<(), TreeArrayError> {
        if index >= CAPACITY {
            return Err(TreeArrayError::Overflow(index));
        }
        let label = p.label()?;
        self.slots[index] = Some(label);

        p.skip_blanks();
        if p.peek() == Some(b'(') {
            p.pos += 1;
            self.parse_children(p, index)?;
            p.expect_close()?;
        }
        Ok(())
    }

    pub fn occupied(&self, index: usize) -> bool {
        index >= ROOT && index < CAPACITY && self.slots[index].is_some()
    }

    pub fn label(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    fn left(&self, index: usize) -> Option<usize> {
        let l = 2 * index;
        self.occupied(l).then_some(l)
    }

    fn right(&self, index: usize) -> Option<usize> {
        let r = 2 * index + 1;
        self.occupied(r).then_some(r)
    }

    /// Root-left-right, one explicit stack.
    pub fn preorder(&self) -> Vec<char> {
        let mut out = Vec::new();
        if !self.occupied(ROOT) {
            return out;
        }
        let mut stack = vec![ROOT];
        while let Some(i) = stack.pop() {
            out.push(self.slots[i].unwrap());
            if let Some(r) = self.right(i) {
                stack.push(r);
            }
            if let Some(l) = self.left(i) {
                stack.push(l);
            }
        }
        out
    }

    /// Left-root-right; descend-left loop with an explicit stack.
    pub fn inorder(&self) -> Vec<char> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = Vec::new();
        let mut current = self.occupied(ROOT).then_some(ROOT);

        while current.is_some() || !stack.is_empty() {
            while let Some(i) = current {
                stack.push(i);
                current = self.left(i);
            }
            let Some(i) = stack.pop() else { break };
            out.push(self.slots[i].unwrap());
            current = self.right(i);
        }
        out
    }

    /// Left-right-root via the two-stack reversal.
    pub fn postorder(&self) -> Vec<char> {
        let mut out = Vec::new();
        if !self.occupied(ROOT) {
            return out;
        }
        let mut stack = vec![ROOT];
        let mut reversed = Vec::new();
        while let Some(i) = stack.pop() {
            reversed.push(i);
            if let Some(l) = self.left(i) {
                stack.push(l);
            }
            if let Some(r) = self.right(i) {
                stack.push(r);
            }
        }
        while let Some(i) = reversed.pop() {
            out.push(self.slots[i].unwrap());
        }
        out
    }

    /// Occupied slots in index order, child columns 0 when absent.
    pub fn rows(&self) -> Vec<SlotRow> {
        (ROOT..CAPACITY)
            .filter_map(|i| {
                self.slots[i].map(|label| SlotRow {
                    index: i,
                    label,
                    left: self.left(i).unwrap_or(0),
                    right: self.right(i).unwrap_or(0),
                })
            })
            .collect()
    }
}
