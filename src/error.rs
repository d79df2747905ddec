// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for index loading and query execution.
//!
//! Two families, matching the two lifetimes of the engine:
//!
//! - [`LoadError`] is fatal at startup and never raised at query time.
//! - [`QueryError`] is per-query and surfaced to the caller unchanged; no
//!   retries happen inside the engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the engine from its input files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file missing or unreadable.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of an input file does not follow the expected
    /// `TERM|FREQ<TAB>ids` or `PATH<TAB>DOCID` layout (bad delimiters,
    /// non-integer fields, empty line).
    #[error("{path}:{line}: malformed line")]
    MalformedLine { path: PathBuf, line: usize },

    /// A dictionary postings list is not strictly increasing.
    #[error("{path}:{line}: postings for \"{term}\" are not strictly increasing")]
    UnsortedPostings {
        path: PathBuf,
        line: usize,
        term: String,
    },

    /// The dictionary contains the reserved universal marker as a real term.
    #[error("{path}:{line}: dictionary contains the reserved term \"*\"")]
    ReservedTerm { path: PathBuf, line: usize },
}

/// Errors raised while parsing or evaluating a single query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The parser rejected the query; `position` is the byte offset of the
    /// offending lexeme in the raw query string.
    #[error("query \"{query}\" is incorrect at position {position}")]
    Malformed { query: String, position: usize },

    /// A lexeme looked like a binary operator but is not in the alphabet.
    ///
    /// Unreachable with the closed `AND`/`OR`/`|` alphabet; kept so the
    /// alphabet can grow without changing the error surface.
    #[error("operator \"{0}\" is not supported")]
    UnsupportedOperator(String),

    /// Evaluation finished with a stack size other than one. Indicates a
    /// parser bug, not a user mistake.
    #[error("plan left {stack_len} values on the evaluation stack")]
    PlanEvaluation { stack_len: usize },

    /// A phrase query was issued but no bigram dictionary is attached.
    #[error("no bigram dictionary is loaded for phrase queries")]
    PhraseIndexMissing,
}
