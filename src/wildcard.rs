// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wildcard patterns → bounded term disjunctions.
//!
//! A pattern like `yok*` or `y*l` cannot be looked up directly, so it is
//! rewritten - before evaluation - into the OR of every dictionary term
//! it matches. Candidate terms come from two B-trees over the dictionary:
//!
//! - the **forward** tree answers "which terms start with the literal
//!   prefix" (`yok*` → walk from `yok`);
//! - the **reverse** tree, keyed on character-reversed terms, answers
//!   "which terms end with the literal suffix" (`*l` → walk from `l`
//!   among the reversed keys).
//!
//! A pattern with both a prefix and a suffix intersects the two walks.
//! Either walk alone can admit false positives for multi-`*` patterns
//! (`y*kd*l` shares prefix and suffix with `yokdl`-less terms), so every
//! candidate is checked against the whole pattern literally before it
//! makes the cut.
//!
//! The bare `*` is never expanded - it stays the universal marker and the
//! evaluator resolves it to the full document list.

use crate::btree::TermBTree;
use crate::types::{OpCode, PlanToken, ALL_DOCS};

/// The forward/reverse tree pair over the dictionary terms.
#[derive(Debug)]
pub struct WildcardExpander {
    forward: TermBTree,
    reverse: TermBTree,
}

impl WildcardExpander {
    /// Index the given terms (the reserved universal marker, should it
    /// appear, is skipped).
    pub fn from_terms<'a>(terms: impl IntoIterator<Item = &'a str>) -> Self {
        let mut forward = TermBTree::new();
        let mut reverse = TermBTree::new();
        for term in terms {
            if term == ALL_DOCS {
                continue;
            }
            forward.insert(term);
            reverse.insert(&reverse_term(term));
        }
        WildcardExpander { forward, reverse }
    }

    /// The forward tree, for plain prefix enumeration.
    pub fn forward(&self) -> &TermBTree {
        &self.forward
    }

    /// Dictionary terms matching a pattern with at least one `*`, in
    /// lexicographic order. A pattern without `*` matches only itself,
    /// and only if stored.
    pub fn expand(&self, pattern: &str) -> Vec<String> {
        if !pattern.contains('*') {
            return if self.forward.contains(pattern) {
                vec![pattern.to_string()]
            } else {
                Vec::new()
            };
        }
        let first = pattern.find('*').expect("checked above");
        let last = pattern.rfind('*').expect("checked above");
        let prefix = &pattern[..first];
        let suffix = &pattern[last + 1..];

        let mut candidates = match (prefix.is_empty(), suffix.is_empty()) {
            (false, true) => self.forward.terms_with_prefix(prefix),
            (true, false) => {
                let mut terms: Vec<String> = self
                    .reverse
                    .terms_with_prefix(&reverse_term(suffix))
                    .iter()
                    .map(|t| reverse_term(t))
                    .collect();
                terms.sort();
                terms
            }
            (false, false) => {
                // Both walks are sound over-approximations; keep the
                // forward order and filter by suffix membership.
                let from_suffix: std::collections::HashSet<String> = self
                    .reverse
                    .terms_with_prefix(&reverse_term(suffix))
                    .iter()
                    .map(|t| reverse_term(t))
                    .collect();
                self.forward
                    .terms_with_prefix(prefix)
                    .into_iter()
                    .filter(|t| from_suffix.contains(t))
                    .collect()
            }
            // No literal prefix or suffix to walk from (`*ab*` shapes):
            // nothing narrows the candidate set, so enumerate everything.
            (true, true) => self.forward.terms(),
        };

        candidates.retain(|term| matches_pattern(term, pattern));
        tracing::debug!(pattern, matched = candidates.len(), "wildcard expanded");
        candidates
    }

    /// Rewrite a plan, splicing a disjunction over the matching terms in
    /// place of every `*`-carrying operand.
    ///
    /// An operand matching nothing is left in place; it is absent from the
    /// dictionary and resolves to the empty sentinel at evaluation time.
    pub fn expand_plan(&self, plan: Vec<PlanToken>) -> Vec<PlanToken> {
        let mut out = Vec::with_capacity(plan.len());
        for token in plan {
            match token {
                PlanToken::Operand(ref term) if term.contains('*') && term != ALL_DOCS => {
                    let matches = self.expand(term);
                    if matches.is_empty() {
                        out.push(token);
                    } else {
                        for (n, matched) in matches.into_iter().enumerate() {
                            out.push(PlanToken::Operand(matched));
                            if n > 0 {
                                out.push(PlanToken::Op(OpCode::Or));
                            }
                        }
                    }
                }
                other => out.push(other),
            }
        }
        out
    }
}

fn reverse_term(term: &str) -> String {
    term.chars().rev().collect()
}

/// Literal glob match: `*` spans any (possibly empty) run of characters,
/// every other character matches itself.
fn matches_pattern(term: &str, pattern: &str) -> bool {
    let mut segments = pattern.split('*');
    let head = segments.next().unwrap_or("");
    if !term.starts_with(head) {
        return false;
    }
    let mut rest = &term[head.len()..];
    let mut middle: Vec<&str> = segments.collect();
    let Some(tail) = middle.pop() else {
        // No `*` at all: the pattern is a literal.
        return rest.is_empty();
    };
    for segment in middle {
        if segment.is_empty() {
            continue;
        }
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }
    rest.len() >= tail.len() && rest.ends_with(tail)
}
