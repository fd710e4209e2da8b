//! Concurrency lock tests: one read-only grid shared by many searches.

use std::sync::Arc;

use lock_tests::snake_test_helpers::{KATA_ABSENT, KATA_GRID, KATA_PRESENT};
use snake_kernel::grid::bordered::BorderedGrid;
use snake_search::search::SnakeSearcher;

#[test]
fn scoped_threads_share_one_grid() {
    let grid = BorderedGrid::from_rows(&KATA_GRID).unwrap();
    let searcher = SnakeSearcher::new(&grid);

    let results: Vec<(String, bool)> = std::thread::scope(|scope| {
        let handles: Vec<_> = KATA_PRESENT
            .iter()
            .chain(&KATA_ABSENT)
            .map(|&word| {
                let searcher = &searcher;
                scope.spawn(move || (word.to_string(), searcher.contains(word)))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("search thread panicked"))
            .collect()
    });

    for (word, found) in results {
        assert_eq!(found, KATA_PRESENT.contains(&word.as_str()), "{word}");
    }
}

#[test]
fn arc_shared_grid_gives_identical_reports() {
    let grid = Arc::new(BorderedGrid::from_rows(&KATA_GRID).unwrap());
    let expected = SnakeSearcher::new(&grid)
        .search("UNDEFINED")
        .to_canonical_json_bytes()
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let grid = Arc::clone(&grid);
            std::thread::spawn(move || {
                SnakeSearcher::new(&grid)
                    .search("UNDEFINED")
                    .to_canonical_json_bytes()
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let bytes = handle.join().expect("search thread panicked");
        assert_eq!(bytes, expected, "report bytes differed on thread {i}");
    }
}
