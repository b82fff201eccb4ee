// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Password candidates for [Day 4]
//!
//! A password is checked via its runs of repeated digits, so `112333` is seen as two `1`s, one
//! `2`, and three `3`s.
//!
//! [Day 4]: https://adventofcode.com/2019/day/4

use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::parse::{ParseError, ParseErrorKind, field};

/// A digit, and how many times in a row it occurs
pub type Run = (u8, usize);

/// Split the decimal digits of `n` into runs of the same digit
pub fn runs(n: u64) -> Vec<Run> {
    n.to_string()
        .bytes()
        .map(|b| b - b'0')
        .dedup_with_count()
        .map(|(count, digit)| (digit, count))
        .collect()
}

/// The digits never decrease from left to right
pub fn is_monotonic(runs: &[Run]) -> bool {
    runs.iter().tuple_windows().all(|(a, b)| a.0 <= b.0)
}

/// At least two adjacent digits are the same
pub fn has_adjacent_pair(runs: &[Run]) -> bool {
    runs.iter().any(|&(_, count)| count >= 2)
}

/// At least two adjacent digits are the same, without being part of a larger group
pub fn has_exact_pair(runs: &[Run]) -> bool {
    runs.iter().any(|&(_, count)| count == 2)
}

/// Count the candidates in `range` that meet the first and second sets of rules, respectively
pub fn count_candidates(range: RangeInclusive<u64>) -> (usize, usize) {
    range
        .map(runs)
        .filter(|r| is_monotonic(r) && has_adjacent_pair(r))
        .fold((0, 0), |(loose, strict), r| {
            (loose + 1, strict + usize::from(has_exact_pair(&r)))
        })
}

/// Parse a range in the form `lo-hi`
pub fn parse_range(input: &str) -> Result<RangeInclusive<u64>, ParseError> {
    let input = input.trim();
    let (lo, hi) = input.split_once('-').ok_or_else(|| {
        ParseError::new(1, 1, input, ParseErrorKind::Malformed("a range like 100000-999999"))
    })?;
    Ok(field(1, 1, lo)?..=field(1, 2, hi)?)
}
