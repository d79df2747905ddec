//! Shared test fixtures.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crex::{DocId, Engine};
use tempfile::TempDir;

/// The universal document set used across the scenario tests.
pub const UNIVERSE: &[u32] = &[0, 1, 2, 4, 5, 6, 7, 8, 10, 11];

/// An engine plus the temp directory its input files live in.
///
/// The directory must outlive the engine only during loading, but keeping
/// it here saves every test from cleanup bookkeeping.
pub struct Fixture {
    pub engine: Engine,
    pub dir: TempDir,
}

/// Write a dictionary + document-list pair and load an engine from them.
///
/// `dict_lines` are raw `TERM|FREQ<TAB>ids` lines; `doc_ids` become the
/// document list (with synthetic paths).
pub fn load_fixture(dict_lines: &[&str], doc_ids: &[u32]) -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let dict = write_file(&dir, "dict", &format!("{}\n", dict_lines.join("\n")));
    let docs_contents: String = doc_ids
        .iter()
        .map(|id| format!("files/{:03}.txt\t{}\n", id, id))
        .collect();
    let docs = write_file(&dir, "files", &docs_contents);
    let engine = Engine::load(&dict, &docs).expect("fixture loads");
    Fixture { engine, dir }
}

/// The yon/yonder dictionary from the end-to-end scenarios.
pub fn yon_fixture() -> Fixture {
    load_fixture(
        &["yon|6\t0,2,5,8,10,11", "yonder|3\t5,10,11"],
        UNIVERSE,
    )
}

/// The yok* dictionary from the B-tree and wildcard scenarios.
pub fn yoke_fixture() -> Fixture {
    load_fixture(
        &[
            "yokd|1\t1",
            "yoke|4\t0,2,4,6",
            "yokedevil|1\t5",
            "yokeelm|2\t2,7",
            "yokefellow|1\t8",
            "yokel|3\t0,5,10",
        ],
        UNIVERSE,
    )
}

pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("create fixture file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    path
}

/// Unwrap a query result into plain u32 ids.
pub fn ids(result: Result<Vec<DocId>, crex::QueryError>) -> Vec<u32> {
    result
        .expect("query succeeds")
        .into_iter()
        .map(DocId::get)
        .collect()
}
