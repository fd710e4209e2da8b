//! Shared grid generators for snake benchmark suites.

/// Rows of a `rows x cols` grid filled with `ch`.
#[must_use]
pub fn uniform_grid(rows: usize, cols: usize, ch: char) -> Vec<String> {
    (0..rows).map(|_| ch.to_string().repeat(cols)).collect()
}

/// Rows of a `rows x cols` grid over `alphabet`, reproducible from `seed`.
///
/// Uses xorshift64 so benchmark inputs are identical across machines.
///
/// # Panics
///
/// Panics if `alphabet` is empty.
#[must_use]
pub fn seeded_grid(rows: usize, cols: usize, alphabet: &[char], seed: u64) -> Vec<String> {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");
    let mut state = seed.max(1);
    let modulus = alphabet.len() as u64;
    (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    #[allow(clippy::cast_possible_truncation)]
                    let index = (state % modulus) as usize;
                    alphabet[index]
                })
                .collect()
        })
        .collect()
}

/// A word of `len` copies of `fill` followed by `tail`.
///
/// Against [`uniform_grid`] filled with `fill`, this forces the searcher to
/// walk every self-avoiding path of length `len` before giving up.
#[must_use]
pub fn dead_end_word(fill: char, len: usize, tail: char) -> String {
    let mut word = fill.to_string().repeat(len);
    word.push(tail);
    word
}
