//! Parenthesized binary-tree grammar: lexical precheck, validation and
//! owned-tree construction.
//!
//! Grammar (labels are alphabetic, blanks allowed between tokens):
//!   node  := '(' label [ '(' child child? ')' ] ')'
//!   child := node | label [ '(' child child? ')' ]
//!
//! A child list must hold one or two children; `()` and three children
//! are rejected.

pub mod ast;
pub mod builder;
pub mod validator;

pub use ast::Node;
pub use builder::build;
pub use validator::{precheck, validate, PrecheckError};
