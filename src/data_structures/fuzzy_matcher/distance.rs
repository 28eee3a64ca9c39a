// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Levenshtein edit distance.
//!
//! Insertions, deletions and substitutions each cost one; transpositions are
//! not recognized. Both functions compare `char`s exactly, so callers must
//! normalize case beforehand.

/// Computes the edit distance between `a` and `b`.
///
/// This is the classic dynamic-programming recurrence over an
/// `(|a| + 1) x (|b| + 1)` grid, keeping only the previous and current rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == *cb {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Computes the edit distance between `a` and `b` if it is at most `max`.
///
/// Returns `None` as soon as the distance is known to exceed `max`: either the
/// lengths differ by more than `max`, or every cell of a row already does.
/// Whenever the true distance is within `max` the result equals
/// [`levenshtein`].
pub fn bounded_levenshtein(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
            row_min = row_min.min(curr[j + 1]);
        }
        // Row minima never decrease, so the final cell cannot come back under `max`.
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= max).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("kitten", "sitting" => 3 ; "classic example")]
    #[test_case("", "" => 0 ; "both empty")]
    #[test_case("", "abc" => 3 ; "insert everything")]
    #[test_case("abc", "" => 3 ; "delete everything")]
    #[test_case("flaw", "lawn" => 2 ; "delete and insert")]
    #[test_case("car", "cat" => 1 ; "single substitution")]
    #[test_case("ab", "ba" => 2 ; "transposition costs two")]
    #[test_case("xyz", "dog" => 3 ; "nothing in common")]
    fn test_levenshtein(a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }

    #[test]
    fn test_levenshtein_identity_and_symmetry() {
        for (a, b) in [("hello", "hallo"), ("trie", "tree"), ("", "x"), ("sunday", "saturday")] {
            assert_eq!(levenshtein(a, a), 0);
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test_case("kitten", "sitting", 3 => Some(3) ; "exactly at bound")]
    #[test_case("kitten", "sitting", 2 => None ; "just over bound")]
    #[test_case("a", "abcdef", 2 => None ; "length gap exceeds bound")]
    #[test_case("same", "same", 0 => Some(0) ; "zero bound exact match")]
    #[test_case("same", "sane", 0 => None ; "zero bound mismatch")]
    #[test_case("", "ab", 2 => Some(2) ; "empty query")]
    fn test_bounded_levenshtein(a: &str, b: &str, max: usize) -> Option<usize> {
        bounded_levenshtein(a, b, max)
    }

    #[test]
    fn test_non_ascii_counts_characters() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(bounded_levenshtein("naïve", "naive", 1), Some(1));
    }
}
