// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact phrase lookup through a bigram dictionary.
//!
//! A bigram dictionary indexes adjacent word pairs under keys like
//! `"old yoke"`, using the same file format as the main dictionary. A
//! phrase of n words then becomes n−1 bigram lookups intersected left to
//! right: a document can only contain the phrase if it contains every one
//! of its adjacent pairs. (The reverse is not guaranteed - a long phrase
//! can false-positive on documents containing its pairs apart - which is
//! the usual trade the bigram scheme makes.)

use std::collections::HashMap;
use std::path::Path;

use crate::error::LoadError;
use crate::index;
use crate::postings::{self, PostingsList};
use crate::types::DocId;

/// Word-pair → postings, loaded from a bigram dictionary file.
#[derive(Debug)]
pub struct PhraseIndex {
    pairs: HashMap<String, PostingsList>,
}

impl PhraseIndex {
    /// Load a bigram dictionary (`W1 W2|FREQ<TAB>ids` lines).
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let pairs = index::load_dictionary(path)?;
        tracing::debug!(pairs = pairs.len(), "bigram dictionary loaded");
        Ok(PhraseIndex { pairs })
    }

    /// Build from parts (tests, benches).
    pub fn from_pairs(pairs: HashMap<String, PostingsList>) -> Self {
        PhraseIndex { pairs }
    }

    /// Documents containing every adjacent pair of `words`, in order.
    ///
    /// Fewer than two words means there is no pair to look up; the caller
    /// decides what a one-word "phrase" means (the engine falls back to a
    /// plain term query).
    pub fn search(&self, words: &[String]) -> Vec<DocId> {
        let mut result: Option<PostingsList> = None;
        for pair in words.windows(2) {
            let key = format!("{} {}", pair[0], pair[1]);
            let current = match self.pairs.get(&key) {
                Some(postings) => postings,
                // An unseen pair rules every document out.
                None => return Vec::new(),
            };
            result = Some(match result {
                None => current.clone(),
                Some(acc) => postings::intersect(&acc, current),
            });
        }
        result.map(|list| list.to_vec()).unwrap_or_default()
    }
}
