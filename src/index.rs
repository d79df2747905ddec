// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The inverted index: term → postings, plus the universal document list.
//!
//! Built once from two text files and read-only afterwards:
//!
//! - the **term dictionary**, one `TERM|FREQ<TAB>id1,id2,…` line per term
//!   (the frequency is carried for compressed-dictionary tooling and
//!   ignored here);
//! - the **document list**, one `PATH<TAB>DOCID` line per document, from
//!   which only the ids are taken.
//!
//! The universal list lives in the same map under the reserved `"*"` key,
//! so the evaluator can resolve the match-everything marker through the
//! ordinary lookup path. Term enumeration always filters that key back out.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::postings::PostingsList;
use crate::types::{DocId, ALL_DOCS};

/// Term → postings map with the universal list under [`ALL_DOCS`].
#[derive(Debug)]
pub struct InvertedIndex {
    terms: HashMap<String, PostingsList>,
    /// The "no documents" sentinel handed out for unknown terms.
    empty: PostingsList,
}

impl InvertedIndex {
    /// Assemble an index from parts built elsewhere (tests, benches).
    ///
    /// `terms` must not contain the reserved key; the universal list is
    /// inserted under it here.
    pub fn from_parts(
        mut terms: HashMap<String, PostingsList>,
        universal: PostingsList,
    ) -> Result<Self, LoadError> {
        if terms.contains_key(ALL_DOCS) {
            return Err(LoadError::ReservedTerm {
                path: "<memory>".into(),
                line: 0,
            });
        }
        terms.insert(ALL_DOCS.to_string(), universal);
        Ok(InvertedIndex {
            terms,
            empty: PostingsList::new(),
        })
    }

    /// Load the index from a dictionary file and a document-list file.
    pub fn load(dict_path: &Path, docs_path: &Path) -> Result<Self, LoadError> {
        let terms = load_dictionary(dict_path)?;
        let universal = load_universal(docs_path)?;
        let index = Self::from_parts(terms, universal)?;
        tracing::debug!(
            terms = index.term_count(),
            universe = index.universal().len(),
            "inverted index loaded"
        );
        Ok(index)
    }

    /// Postings for `term`, or the empty sentinel when the term is
    /// unknown. The sentinel is a valid merge operand meaning
    /// "no documents".
    pub fn lookup(&self, term: &str) -> &PostingsList {
        self.terms.get(term).unwrap_or(&self.empty)
    }

    /// The universal postings list (every known document id, sorted).
    pub fn universal(&self) -> &PostingsList {
        // from_parts inserted the key; it cannot be missing.
        &self.terms[ALL_DOCS]
    }

    /// Number of real terms, the reserved key excluded.
    pub fn term_count(&self) -> usize {
        self.terms.len() - 1
    }

    /// Iterate the real terms of the dictionary, reserved key excluded.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms
            .keys()
            .map(String::as_str)
            .filter(|&t| t != ALL_DOCS)
    }
}

/// Parse a term dictionary file into a term → postings map.
pub(crate) fn load_dictionary(path: &Path) -> Result<HashMap<String, PostingsList>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut terms = HashMap::new();
    for (n, line) in text.lines().enumerate() {
        let line_no = n + 1;
        let malformed = || LoadError::MalformedLine {
            path: path.to_path_buf(),
            line: line_no,
        };
        let (key, id_list) = line.split_once('\t').ok_or_else(malformed)?;
        let (term, freq) = key.split_once('|').ok_or_else(malformed)?;
        if term.is_empty() || freq.parse::<u64>().is_err() {
            return Err(malformed());
        }
        if term == ALL_DOCS {
            return Err(LoadError::ReservedTerm {
                path: path.to_path_buf(),
                line: line_no,
            });
        }
        let mut postings = PostingsList::new();
        let mut last: Option<DocId> = None;
        for field in id_list.split(',') {
            let id = DocId(field.trim().parse::<u32>().map_err(|_| malformed())?);
            if last.map_or(false, |prev| prev >= id) {
                return Err(LoadError::UnsortedPostings {
                    path: path.to_path_buf(),
                    line: line_no,
                    term: term.to_string(),
                });
            }
            postings.push(id);
            last = Some(id);
        }
        terms.insert(term.to_string(), postings);
    }
    Ok(terms)
}

/// Parse a document-list file into the universal postings list.
///
/// The file fixes the set of known documents, not their order; ids are
/// sorted and deduplicated before the list is built.
pub(crate) fn load_universal(path: &Path) -> Result<PostingsList, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut ids = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let malformed = || LoadError::MalformedLine {
            path: path.to_path_buf(),
            line: n + 1,
        };
        let (_, id) = line.split_once('\t').ok_or_else(malformed)?;
        ids.push(DocId(id.trim().parse::<u32>().map_err(|_| malformed())?));
    }
    ids.sort_unstable();
    ids.dedup();
    Ok(PostingsList::from_sorted(ids))
}
