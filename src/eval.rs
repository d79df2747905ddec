// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The postfix plan interpreter.
//!
//! Walks a plan left to right with a stack whose slots are either still
//! unresolved terms or resolved postings lists. Terms resolve lazily -
//! only when an operator actually consumes them - and borrow straight out
//! of the index; merge results are owned and live only for the query.
//!
//! Missing terms resolve to the empty sentinel, so the degenerate cases
//! need no special handling: intersection with nothing is nothing, union
//! with nothing passes the other side through, and the complement of
//! nothing is everything.

use std::borrow::Cow;

use crate::error::QueryError;
use crate::index::InvertedIndex;
use crate::postings::{self, PostingsList};
use crate::types::{DocId, OpCode, PlanToken};

/// A stack slot: a term nobody has resolved yet, or a postings list.
///
/// Tagged explicitly rather than resolving operands eagerly, so a plan
/// like `x y AND` touches the index only when the operator fires.
enum Slot<'p, 'i> {
    Term(&'p str),
    Docs(Cow<'i, PostingsList>),
}

/// Evaluate a postfix plan against the index.
///
/// The empty plan means "no constraints" and yields every known document.
///
/// # Errors
///
/// [`QueryError::PlanEvaluation`] when the stack does not hold exactly one
/// value at the end (or underflows mid-plan). The parser never produces
/// such a plan; hitting this is a bug upstream of evaluation, not bad user
/// input.
pub fn evaluate(plan: &[PlanToken], index: &InvertedIndex) -> Result<Vec<DocId>, QueryError> {
    if plan.is_empty() {
        return Ok(index.universal().to_vec());
    }

    let mut stack: Vec<Slot<'_, '_>> = Vec::new();
    for token in plan {
        match token {
            PlanToken::Operand(term) => stack.push(Slot::Term(term)),
            PlanToken::Op(OpCode::Not) => {
                let operand = pop_resolved(&mut stack, index)?;
                let negated = postings::complement(index.universal(), &operand);
                stack.push(Slot::Docs(Cow::Owned(negated)));
            }
            PlanToken::Op(op) => {
                // Binary: the top of the stack is the right-hand side.
                let rhs = pop_resolved(&mut stack, index)?;
                let lhs = pop_resolved(&mut stack, index)?;
                let merged = match op {
                    OpCode::And => postings::intersect(&lhs, &rhs),
                    OpCode::Or => postings::union(&lhs, &rhs),
                    OpCode::Not => unreachable!("handled above"),
                };
                stack.push(Slot::Docs(Cow::Owned(merged)));
            }
        }
    }

    if stack.len() != 1 {
        return Err(QueryError::PlanEvaluation {
            stack_len: stack.len(),
        });
    }
    let result = resolve(stack.pop().expect("len checked"), index);
    tracing::debug!(plan_len = plan.len(), hits = result.len(), "plan evaluated");
    Ok(result.to_vec())
}

fn pop_resolved<'p, 'i>(
    stack: &mut Vec<Slot<'p, 'i>>,
    index: &'i InvertedIndex,
) -> Result<Cow<'i, PostingsList>, QueryError> {
    match stack.pop() {
        Some(slot) => Ok(resolve(slot, index)),
        None => Err(QueryError::PlanEvaluation { stack_len: 0 }),
    }
}

fn resolve<'p, 'i>(slot: Slot<'p, 'i>, index: &'i InvertedIndex) -> Cow<'i, PostingsList> {
    match slot {
        Slot::Term(term) => Cow::Borrowed(index.lookup(term)),
        Slot::Docs(docs) => docs,
    }
}
