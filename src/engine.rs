// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine: one loaded index, every query surface.
//!
//! Ties the pieces together in the order the data flows:
//!
//! ```text
//! raw query ─▶ parser ─▶ postfix plan ─▶ wildcard expansion ─▶ evaluator ─▶ doc ids
//!                 │                            │                   │
//!                 ▼                            ▼                   ▼
//!             tokenizer               forward/reverse B-trees  inverted index
//! ```
//!
//! Everything behind an `Engine` is built once by [`Engine::load`] and
//! read-only afterwards; queries allocate only their intermediate merge
//! results.

use std::path::Path;

use crate::analyze::{BasicTokenizer, Tokenizer};
use crate::error::{LoadError, QueryError};
use crate::eval;
use crate::index::InvertedIndex;
use crate::parser;
use crate::phrase::PhraseIndex;
use crate::types::{DocId, PlanToken};
use crate::wildcard::WildcardExpander;

/// A loaded, immutable search engine.
pub struct Engine {
    index: InvertedIndex,
    expander: WildcardExpander,
    tokenizer: Box<dyn Tokenizer>,
    phrases: Option<PhraseIndex>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

impl Engine {
    /// Load an engine from a term dictionary and a document-list file.
    pub fn load(dict_path: &Path, docs_path: &Path) -> Result<Self, LoadError> {
        Ok(Self::from_index(InvertedIndex::load(dict_path, docs_path)?))
    }

    /// Build an engine around an index assembled elsewhere.
    pub fn from_index(index: InvertedIndex) -> Self {
        let expander = WildcardExpander::from_terms(index.terms());
        Engine {
            index,
            expander,
            tokenizer: Box::new(BasicTokenizer),
            phrases: None,
        }
    }

    /// Swap in the tokenizer that built the dictionary, when it is not the
    /// default pipeline.
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Attach a bigram dictionary enabling [`Engine::phrase`].
    pub fn attach_phrase_index(&mut self, path: &Path) -> Result<(), LoadError> {
        self.phrases = Some(PhraseIndex::load(path)?);
        Ok(())
    }

    /// The underlying inverted index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Evaluate a boolean query; the result is sorted ascending.
    pub fn search(&self, query: &str) -> Result<Vec<DocId>, QueryError> {
        let plan = parser::parse(query, self.tokenizer.as_ref())?;
        let plan = self.expander.expand_plan(plan);
        eval::evaluate(&plan, &self.index)
    }

    /// Dictionary terms beginning with `prefix`, in lexicographic order.
    pub fn prefix(&self, prefix: &str) -> Vec<String> {
        self.expander.forward().terms_with_prefix(prefix)
    }

    /// Documents matching any dictionary term the `*`-pattern expands to.
    pub fn wildcard(&self, pattern: &str) -> Result<Vec<DocId>, QueryError> {
        let plan = self
            .expander
            .expand_plan(vec![PlanToken::Operand(crate::analyze::normalize_pattern(
                pattern,
            ))]);
        eval::evaluate(&plan, &self.index)
    }

    /// Exact phrase lookup through the attached bigram dictionary.
    ///
    /// The phrase is tokenized with the engine's tokenizer; a single
    /// surviving word degenerates to a plain term query, none at all to
    /// the universal set.
    pub fn phrase(&self, text: &str) -> Result<Vec<DocId>, QueryError> {
        let phrases = self.phrases.as_ref().ok_or(QueryError::PhraseIndexMissing)?;
        let words: Vec<String> = self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .map(|(_, token)| token)
            .collect();
        match words.as_slice() {
            [] => eval::evaluate(&[], &self.index),
            [word] => Ok(self.index.lookup(word).to_vec()),
            _ => Ok(phrases.search(&words)),
        }
    }
}
