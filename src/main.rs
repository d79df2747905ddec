// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! crex CLI: query a term dictionary with boolean, prefix, wildcard, and
//! phrase lookups.
//!
//! ```bash
//! # Boolean query (quote it so the shell keeps it whole)
//! crex search --dict data/dict -D data/files "yon AND yonder"
//!
//! # Terms sharing a prefix
//! crex prefix --dict data/dict -D data/files yok
//!
//! # Wildcard expansion, evaluated as a disjunction
//! crex wildcard --dict data/dict -D data/files "y*l"
//! ```
//!
//! Set `RUST_LOG=crex=debug` for load and evaluation traces.

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crex::{DocId, Engine};

mod cli;
use cli::display::{count_label, styled, BOLD, CYAN, DIM, GREEN, RED};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {}", styled(RED, "error:"), message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Search {
            dict,
            docs,
            query,
            json,
        } => {
            let engine = load_engine(&dict, &docs)?;
            let hits = engine.search(&query).map_err(|e| e.to_string())?;
            print_doc_ids(&query, &hits, json);
        }
        Commands::Prefix {
            dict,
            docs,
            prefix,
            json,
        } => {
            let engine = load_engine(&dict, &docs)?;
            let terms = engine.prefix(&prefix);
            if json {
                println!("{}", serde_json::to_string(&terms).expect("serializable"));
            } else {
                println!(
                    "{} {}",
                    styled(BOLD, &count_label(terms.len(), "term")),
                    styled(DIM, &format!("with prefix \"{}\"", prefix))
                );
                for term in &terms {
                    println!("  {}", styled(CYAN, term));
                }
            }
        }
        Commands::Wildcard {
            dict,
            docs,
            pattern,
            json,
        } => {
            let engine = load_engine(&dict, &docs)?;
            let hits = engine.wildcard(&pattern).map_err(|e| e.to_string())?;
            print_doc_ids(&pattern, &hits, json);
        }
        Commands::Phrase {
            dict,
            docs,
            bigrams,
            text,
            json,
        } => {
            let mut engine = load_engine(&dict, &docs)?;
            engine
                .attach_phrase_index(Path::new(&bigrams))
                .map_err(|e| e.to_string())?;
            let hits = engine.phrase(&text).map_err(|e| e.to_string())?;
            print_doc_ids(&text, &hits, json);
        }
    }
    Ok(())
}

fn load_engine(dict: &str, docs: &str) -> Result<Engine, String> {
    Engine::load(Path::new(dict), Path::new(docs)).map_err(|e| e.to_string())
}

fn print_doc_ids(input: &str, hits: &[DocId], json: bool) {
    if json {
        println!("{}", serde_json::to_string(hits).expect("serializable"));
        return;
    }
    println!(
        "{} {}",
        styled(BOLD, &count_label(hits.len(), "document")),
        styled(DIM, &format!("for \"{}\"", input))
    );
    if !hits.is_empty() {
        let listed: Vec<String> = hits.iter().map(|id| id.to_string()).collect();
        println!("  {}", styled(GREEN, &listed.join(" ")));
    }
}
