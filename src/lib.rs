// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean retrieval over an inverted index with skip pointers.
//!
//! crex ingests a previously built term dictionary and answers queries made
//! of terms joined by `AND`, `OR`/`|`, and a leading `-` for negation, with
//! `*`-wildcards expanded through an ordered term dictionary. It is the
//! query half of a search engine: tokenization, index construction, and
//! persistence all happen upstream.
//!
//! # Architecture
//!
//! ```text
//! raw query ─▶ parser ─▶ postfix plan ─┐
//!   (parser.rs)                        ├─▶ evaluator ─▶ sorted doc ids
//! dictionary ─▶ inverted index ────────┘   (eval.rs)
//!  (index.rs)        ▲
//!                    │ term enumeration at build time
//!                    └── forward + reverse B-trees (btree.rs)
//!                           ▲
//!                           │
//!                 wildcard expander (wildcard.rs)
//!                    on operands containing '*'
//! ```
//!
//! The postings store ([`postings`]) is the layer everything stands on: a
//! strictly increasing id sequence with skip pointers, and the
//! intersection/union/complement merges the evaluator applies.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use crex::Engine;
//!
//! let engine = Engine::load(Path::new("data/dict"), Path::new("data/files"))?;
//!
//! let hits = engine.search("yon AND yonder")?;
//! let terms = engine.prefix("yok");
//! let matches = engine.wildcard("y*l")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Everything is built once at load time and read-only afterwards; a query
//! allocates nothing but its own intermediate merge results, so sharing an
//! [`Engine`] across threads is safe as long as nobody mutates it.

pub mod analyze;
pub mod btree;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod eval;
pub mod index;
pub mod parser;
pub mod phrase;
pub mod postings;
pub mod types;
pub mod wildcard;

// Re-exports for the public API surface.
pub use analyze::{normalize, BasicTokenizer, Tokenizer};
pub use btree::{TermBTree, DEFAULT_ORDER};
pub use engine::Engine;
pub use error::{LoadError, QueryError};
pub use eval::evaluate;
pub use index::InvertedIndex;
pub use parser::parse;
pub use phrase::PhraseIndex;
pub use postings::{complement, intersect, union, PostingsList, SKIP_STEP};
pub use types::{DocId, OpCode, PlanToken, ALL_DOCS};
pub use wildcard::WildcardExpander;
