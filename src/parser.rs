// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Infix boolean queries → postfix evaluation plans.
//!
//! The query language is deliberately small: operands and binary operators
//! alternate, `AND` is implicit between adjacent operands, a leading `-`
//! negates its operand, and there are no parentheses. All binary operators
//! share one precedence level, so parsing is a three-state walk:
//!
//! ```text
//!            operand                    binary operator
//!   Start ───────────▶ Token ◀─────────────────────────▶ Operator
//!     │                  │  ▲                               │
//!     └── operator ──▶ error │ operand (implicit AND)       └─ operator / end ──▶ error
//!                            └───────────
//! ```
//!
//! Operands are pushed to the plan as they are consumed; binary operators
//! wait on a stack and drain LIFO at end of input. A `-x` lexeme emits `x`
//! followed by `NOT` immediately, so negation binds tighter than any
//! binary operator.
//!
//! Each operand is normalized through the [`Tokenizer`]; an operand that
//! normalizes to nothing (stop word, pure punctuation, bare `-`) becomes
//! the universal marker and thus constrains nothing.

use crate::analyze::Tokenizer;
use crate::error::QueryError;
use crate::types::{OpCode, PlanToken, ALL_DOCS};

/// Parser states: what the last consumed lexeme allows next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing consumed yet; an operator here is malformed.
    Start,
    /// Last lexeme was an operand; an operator or another operand may follow.
    Token,
    /// Last lexeme was a binary operator; only an operand may follow.
    Operator,
}

/// Parse a raw query into a postfix plan.
///
/// The empty (or all-whitespace) query yields the empty plan, which the
/// evaluator answers with the universal document list.
///
/// # Errors
///
/// [`QueryError::Malformed`] when a binary operator appears where an
/// operand is required, or the query ends after a binary operator. The
/// reported position is the byte offset of the offending lexeme in the
/// raw query (`query.len()` for end-of-input).
pub fn parse(query: &str, tokenizer: &dyn Tokenizer) -> Result<Vec<PlanToken>, QueryError> {
    let mut plan = Vec::new();
    let mut pending: Vec<OpCode> = Vec::new();
    let mut state = State::Start;

    for (position, lexeme) in lexemes(query) {
        match (state, OpCode::from_binary_lexeme(lexeme)) {
            (State::Start, Some(_)) | (State::Operator, Some(_)) => {
                return Err(QueryError::Malformed {
                    query: query.to_string(),
                    position,
                });
            }
            (State::Token, Some(op)) => {
                pending.push(op);
                state = State::Operator;
            }
            (State::Token, None) => {
                // Adjacent operands: synthesize the implicit AND.
                pending.push(OpCode::And);
                emit_operand(&mut plan, lexeme, tokenizer);
            }
            (State::Start, None) | (State::Operator, None) => {
                emit_operand(&mut plan, lexeme, tokenizer);
                state = State::Token;
            }
        }
    }

    if state == State::Operator {
        return Err(QueryError::Malformed {
            query: query.to_string(),
            position: query.len(),
        });
    }
    while let Some(op) = pending.pop() {
        plan.push(PlanToken::Op(op));
    }
    Ok(plan)
}

/// Emit one operand lexeme, folding a leading `-` into a trailing NOT.
///
/// A bare `-` falls through to normalization, yields no token, and so
/// becomes the universal marker rather than an operator.
fn emit_operand(plan: &mut Vec<PlanToken>, lexeme: &str, tokenizer: &dyn Tokenizer) {
    if let Some(negated) = lexeme.strip_prefix('-').filter(|rest| !rest.is_empty()) {
        plan.push(PlanToken::Operand(normalize_operand(negated, tokenizer)));
        plan.push(PlanToken::Op(OpCode::Not));
    } else {
        plan.push(PlanToken::Operand(normalize_operand(lexeme, tokenizer)));
    }
}

/// Normalize an operand lexeme through the tokenizer; the first token
/// wins, and an empty tokenization means "no constraint".
///
/// Wildcard lexemes bypass the tokenizer (it would strip the `*`) and
/// keep their markers with each literal segment normalized, so the
/// expander sees the pattern intact.
fn normalize_operand(lexeme: &str, tokenizer: &dyn Tokenizer) -> String {
    if lexeme.contains('*') {
        return crate::analyze::normalize_pattern(lexeme);
    }
    tokenizer
        .tokenize(lexeme)
        .into_iter()
        .next()
        .map(|(_, token)| token)
        .unwrap_or_else(|| ALL_DOCS.to_string())
}

/// Split a query on whitespace, keeping each lexeme's byte offset in the
/// raw string. Runs of whitespace collapse for free.
fn lexemes(query: &str) -> impl Iterator<Item = (usize, &str)> {
    // split_whitespace yields substrings of `query`, so each one's offset
    // is recoverable from pointer arithmetic.
    query.split_whitespace().map(move |lexeme| {
        let offset = lexeme.as_ptr() as usize - query.as_ptr() as usize;
        (offset, lexeme)
    })
}
