//! End-to-end scenarios: raw query in, sorted doc ids out.

mod common;

use common::{ids, load_fixture, write_file, yoke_fixture, yon_fixture, UNIVERSE};
use crex::QueryError;

#[test]
fn empty_query_returns_every_document() {
    let f = yon_fixture();
    assert_eq!(ids(f.engine.search("")), UNIVERSE);
    assert_eq!(ids(f.engine.search("   \t  ")), UNIVERSE);
}

#[test]
fn lowercase_operator_words_are_no_constraint() {
    // "and" and "or" are stop words, so each collapses to the universal
    // marker; a bare "-" is an operand that tokenizes to nothing.
    let f = yon_fixture();
    assert_eq!(ids(f.engine.search("and")), UNIVERSE);
    assert_eq!(ids(f.engine.search("or")), UNIVERSE);
    assert_eq!(ids(f.engine.search("-")), UNIVERSE);
}

#[test]
fn adjacent_operands_intersect() {
    let f = yon_fixture();
    assert_eq!(ids(f.engine.search("yon yonder")), vec![5, 10, 11]);
}

#[test]
fn explicit_and() {
    let f = yon_fixture();
    assert_eq!(ids(f.engine.search("yon AND yonder")), vec![5, 10, 11]);
}

#[test]
fn explicit_or() {
    let f = yon_fixture();
    assert_eq!(
        ids(f.engine.search("yon OR yonder")),
        vec![0, 2, 5, 8, 10, 11]
    );
    assert_eq!(
        ids(f.engine.search("yon | yonder")),
        vec![0, 2, 5, 8, 10, 11]
    );
}

#[test]
fn negated_operand_excludes_its_documents() {
    // yon ∧ ¬yonder within the universe {0,1,2,4,5,6,7,8,10,11}:
    // ¬yonder = {0,1,2,4,6,7,8}, intersected with yon = {0,2,8}.
    let f = yon_fixture();
    assert_eq!(ids(f.engine.search("yon -yonder")), vec![0, 2, 8]);
}

#[test]
fn negation_alone_complements_the_universe() {
    let f = yon_fixture();
    assert_eq!(ids(f.engine.search("-yonder")), vec![0, 1, 2, 4, 6, 7, 8]);
    assert_eq!(ids(f.engine.search("-yon")), vec![1, 4, 6, 7]);
}

#[test]
fn single_term_returns_its_postings() {
    let f = yon_fixture();
    assert_eq!(ids(f.engine.search("yon")), vec![0, 2, 5, 8, 10, 11]);
    assert_eq!(ids(f.engine.search("yonder")), vec![5, 10, 11]);
}

#[test]
fn unknown_term_matches_nothing() {
    let f = yon_fixture();
    assert_eq!(ids(f.engine.search("nowhere")), Vec::<u32>::new());
    assert_eq!(ids(f.engine.search("yon AND nowhere")), Vec::<u32>::new());
    // OR passes the present side through.
    assert_eq!(
        ids(f.engine.search("yon OR nowhere")),
        vec![0, 2, 5, 8, 10, 11]
    );
}

#[test]
fn query_normalization_matches_dictionary_terms() {
    let f = yon_fixture();
    assert_eq!(ids(f.engine.search("Yonder,")), vec![5, 10, 11]);
    assert_eq!(ids(f.engine.search("YON!! yonder")), vec![5, 10, 11]);
}

#[test]
fn uppercase_operator_without_operand_is_malformed() {
    let f = yon_fixture();
    assert_eq!(
        f.engine.search("AND yon").unwrap_err(),
        QueryError::Malformed {
            query: "AND yon".to_string(),
            position: 0
        }
    );
    assert_eq!(
        f.engine.search("yon AND").unwrap_err(),
        QueryError::Malformed {
            query: "yon AND".to_string(),
            position: 7
        }
    );
    assert_eq!(
        f.engine.search("yon AND OR yonder").unwrap_err(),
        QueryError::Malformed {
            query: "yon AND OR yonder".to_string(),
            position: 8
        }
    );
}

#[test]
fn prefix_enumeration_scenarios() {
    let f = yoke_fixture();
    assert_eq!(
        f.engine.prefix("yok"),
        vec!["yokd", "yoke", "yokedevil", "yokeelm", "yokefellow", "yokel"]
    );
    assert_eq!(f.engine.prefix("yokefellow"), vec!["yokefellow"]);
    assert!(f.engine.prefix("zz").is_empty());
}

#[test]
fn wildcard_scenarios() {
    let f = yoke_fixture();
    // yok* covers the whole dictionary: union of all postings.
    assert_eq!(ids(f.engine.wildcard("yok*")), vec![0, 1, 2, 4, 5, 6, 7, 8, 10]);
    // y*l expands to {yokedevil, yokel}.
    assert_eq!(ids(f.engine.wildcard("y*l")), vec![0, 5, 10]);
    // No match: empty result, not an error.
    assert_eq!(ids(f.engine.wildcard("zz*")), Vec::<u32>::new());
    // The bare marker stays the universal set.
    assert_eq!(ids(f.engine.wildcard("*")), UNIVERSE);
}

#[test]
fn wildcard_operand_inside_boolean_query() {
    let f = yoke_fixture();
    // yoke*m expands to yokeelm {2,7}; AND with yoke {0,2,4,6} = {2}.
    assert_eq!(ids(f.engine.search("yoke yoke*m")), vec![2]);
    // Negated wildcard: universe minus the y*l documents {0,5,10}.
    assert_eq!(ids(f.engine.search("-y*l")), vec![1, 2, 4, 6, 7, 8, 11]);
}

#[test]
fn phrase_lookup_through_bigram_dictionary() {
    let mut f = load_fixture(
        &["old|3\t1,4,9", "yoke|4\t1,4,9,12", "elm|3\t4,9,12"],
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
    );
    let bigrams = write_file(
        &f.dir,
        "bigrams",
        "old yoke|3\t1,4,9\nyoke elm|3\t4,9,12\n",
    );
    f.engine.attach_phrase_index(&bigrams).unwrap();

    assert_eq!(ids(f.engine.phrase("old yoke")), vec![1, 4, 9]);
    assert_eq!(ids(f.engine.phrase("old yoke elm")), vec![4, 9]);
    assert_eq!(ids(f.engine.phrase("yoke nowhere")), Vec::<u32>::new());
    // One surviving word degenerates to a term query; stop words drop out.
    assert_eq!(ids(f.engine.phrase("the yoke")), vec![1, 4, 9, 12]);
}

#[test]
fn load_failures_name_the_offending_line() {
    let dir = tempfile::tempdir().unwrap();
    let docs = write_file(&dir, "files", "a.txt\t0\n");

    let bad_dict = write_file(&dir, "dict", "yon|6\t2,1\n");
    let err = crex::Engine::load(&bad_dict, &docs).unwrap_err();
    assert!(matches!(
        err,
        crex::LoadError::UnsortedPostings { line: 1, .. }
    ));

    let reserved = write_file(&dir, "dict2", "ok|1\t0\n*|1\t0\n");
    let err = crex::Engine::load(&reserved, &docs).unwrap_err();
    assert!(matches!(err, crex::LoadError::ReservedTerm { line: 2, .. }));
}
