//! Report lock tests: determinism, digest binding, and hash domains.

use std::collections::BTreeSet;

use lock_tests::snake_test_helpers::KATA_GRID;
use sha2::{Digest, Sha256};
use snake_kernel::grid::bordered::BorderedGrid;
use snake_kernel::grid::coord::Direction;
use snake_kernel::proof::hash_domain::HashDomain;
use snake_search::policy::SnakePolicyV1;
use snake_search::report::TerminationReasonV1;
use snake_search::search::{search, SnakeSearcher};

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn report_bytes_deterministic_n10() {
    let first = search(&KATA_GRID, "STRING", &SnakePolicyV1::default())
        .unwrap()
        .to_canonical_json_bytes()
        .unwrap();
    for i in 1..10 {
        let again = search(&KATA_GRID, "STRING", &SnakePolicyV1::default())
            .unwrap()
            .to_canonical_json_bytes()
            .unwrap();
        assert_eq!(first, again, "report bytes differed on run {i}");
    }
}

#[test]
fn report_digest_deterministic_n10() {
    let first = search(&KATA_GRID, "FUNCTION", &SnakePolicyV1::default())
        .unwrap()
        .digest()
        .unwrap();
    for i in 1..10 {
        let again = search(&KATA_GRID, "FUNCTION", &SnakePolicyV1::default())
            .unwrap()
            .digest()
            .unwrap();
        assert_eq!(first, again, "report digest differed on run {i}");
    }
}

// ---------------------------------------------------------------------------
// Digest binding
// ---------------------------------------------------------------------------

#[test]
fn digest_recomputes_from_canonical_bytes() {
    let report = search(&KATA_GRID, "CLASS", &SnakePolicyV1::default()).unwrap();
    let bytes = report.to_canonical_json_bytes().unwrap();

    let mut hasher = Sha256::new();
    hasher.update(HashDomain::SnakeReport.as_bytes());
    hasher.update(&bytes);
    let expected = format!("sha256:{}", hex::encode(hasher.finalize()));

    assert_eq!(report.digest().unwrap().as_str(), expected);
}

#[test]
fn canonical_bytes_round_trip_through_serde_json() {
    let report = search(&KATA_GRID, "RED", &SnakePolicyV1::default()).unwrap();
    let bytes = report.to_canonical_json_bytes().unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, report.to_json_value());
    assert_eq!(parsed["schema_version"], "snake_report.v1");
    assert_eq!(parsed["found"], true);
    assert_eq!(parsed["path"].as_array().map(Vec::len), Some(3));
}

#[test]
fn report_binds_grid_fingerprint() {
    let grid = BorderedGrid::from_rows(&KATA_GRID).unwrap();
    let report = SnakeSearcher::new(&grid).search("RED");
    assert_eq!(report.grid_fingerprint, grid.fingerprint());

    let mut other_rows = KATA_GRID;
    other_rows[4] = "YTIRTSQ";
    let other = search(&other_rows, "RED", &SnakePolicyV1::default()).unwrap();
    assert_eq!(other.path, report.path, "the change is far from RED");
    assert_ne!(other.grid_fingerprint, report.grid_fingerprint);
    assert_ne!(other.digest().unwrap(), report.digest().unwrap());
}

#[test]
fn policy_is_part_of_the_digest() {
    let reversed = SnakePolicyV1 {
        direction_order: [
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Up,
        ],
    };
    let a = search(&KATA_GRID, "NULL", &SnakePolicyV1::default()).unwrap();
    let b = search(&KATA_GRID, "NULL", &reversed).unwrap();
    assert_eq!(a.is_found(), b.is_found());
    assert_ne!(a.digest().unwrap(), b.digest().unwrap());
}

// ---------------------------------------------------------------------------
// Termination reasons
// ---------------------------------------------------------------------------

#[test]
fn termination_reasons_cover_every_outcome() {
    let policy = SnakePolicyV1::default();
    let tags: BTreeSet<&str> = ["", "ANGULAR", "ZEBRA", "NULL"]
        .iter()
        .map(|w| search(&KATA_GRID, w, &policy).unwrap().termination.tag())
        .collect();
    assert_eq!(
        tags,
        BTreeSet::from([
            "empty_word",
            "path_found",
            "no_start_cell",
            "start_cells_exhausted"
        ])
    );
}

#[test]
fn found_report_starts_where_path_starts() {
    let report = search(&KATA_GRID, "ANGULAR", &SnakePolicyV1::default()).unwrap();
    match report.termination {
        TerminationReasonV1::PathFound { start } => {
            assert_eq!(report.path.first(), Some(&start));
        }
        other => panic!("expected PathFound, got {other:?}"),
    }
    assert_eq!(report.counters.max_depth_reached, 7);
}

// ---------------------------------------------------------------------------
// Hash domain governance
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domains_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"SNAKE::"), "{domain}");
        assert!(bytes.ends_with(b"::V1\0"), "{domain}");
    }
}
