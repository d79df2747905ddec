// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the query engine.
//!
//! These types define the vocabulary shared by the parser, the evaluator, and
//! the postings store: document identifiers, operator codes, and the tokens of
//! a postfix evaluation plan.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **DocId**: ordering is total and defines postings-list order. Every
//!   postings list is strictly increasing in `DocId`.
//! - **`ALL_DOCS`**: the reserved dictionary key under which the universal
//!   postings list is stored. It is never a real term, and every
//!   term-enumeration surface (prefix listing, wildcard expansion, B-tree
//!   construction) filters it out.
//! - **PlanToken**: a plan is well-formed when evaluating it leaves exactly
//!   one value on the stack. The parser guarantees this; the evaluator
//!   still checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The reserved dictionary key naming the universal document set.
///
/// A query operand that normalizes to nothing (pure punctuation, a stop
/// word, a bare `-`) is replaced by this marker and matches every document.
pub const ALL_DOCS: &str = "*";

/// Type-safe document identifier.
///
/// Prevents accidentally passing a list position where a document ID is
/// expected. Use `DocId::new()` for runtime-validated construction, or
/// `.into()` for trusted sources.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Create a new DocId, validating it's within the known universe size.
    #[inline]
    pub fn new(id: u32, num_docs: usize) -> Option<Self> {
        if (id as usize) < num_docs {
            Some(DocId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Boolean operator codes shared by the parser and the evaluator.
///
/// `And` and `Or` are binary; `Not` is unary (set complement with respect
/// to the universal postings list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpCode {
    And,
    Or,
    Not,
}

impl OpCode {
    /// Number of operands the operator consumes from the evaluation stack.
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            OpCode::Not => 1,
            OpCode::And | OpCode::Or => 2,
        }
    }

    /// Decode a binary-operator lexeme of the query alphabet.
    ///
    /// `AND` and `OR` are case-sensitive; `|` is an alias for `OR`. Unary
    /// `-` is not part of this alphabet - the parser folds it into its
    /// operand.
    #[inline]
    pub fn from_binary_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "AND" => Some(OpCode::And),
            "OR" | "|" => Some(OpCode::Or),
            _ => None,
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::And => f.write_str("AND"),
            OpCode::Or => f.write_str("OR"),
            OpCode::Not => f.write_str("NOT"),
        }
    }
}

/// One element of a postfix evaluation plan.
///
/// Operands are normalized terms (possibly the universal marker); operators
/// are [`OpCode`]s. The evaluator consumes a plan left to right with a
/// stack, so `a AND b` arrives as `[a, b, AND]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanToken {
    Operand(String),
    Op(OpCode),
}

impl PlanToken {
    /// Convenience constructor for operand tokens.
    #[inline]
    pub fn operand(term: impl Into<String>) -> Self {
        PlanToken::Operand(term.into())
    }
}
