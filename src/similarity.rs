//! Character-sequence similarity for "did you mean" suggestions.
//!
//! [`ratio`] is the Ratcliff/Obershelp measure: find the longest common
//! substring, recurse on the pieces to its left and right, and report
//! `2 * matched / (len(a) + len(b))`. Comparison is exact and case sensitive.

use std::collections::HashMap;

/// Similarity of two strings in `0.0..=1.0`. Two empty strings score `1.0`.
///
/// ```
/// use dupini::similarity::ratio;
///
/// assert_eq!(ratio("MaxAnisotropy", "MaxAnisotropy"), 1.0);
/// assert!(ratio("MaxAnisotropy", "MaxAniso") > 0.75);
/// assert_eq!(ratio("abc", "xyz"), 0.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Every candidate scoring at least `threshold` against `missing`, in
/// candidate order, without repeats.
pub fn suggest<'a, I>(missing: &str, candidates: I, threshold: f64) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut suggestions: Vec<String> = Vec::new();
    for candidate in candidates {
        if suggestions.iter().any(|s| s == candidate) {
            continue;
        }
        if ratio(candidate, missing) >= threshold {
            suggestions.push(candidate.to_string());
        }
    }
    suggestions
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        b2j.entry(*ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b2j, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
/// Ties go to the run starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run length of the match ending at b[j], for the previous row of a
    let mut run_at: HashMap<usize, usize> = HashMap::new();

    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_run: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(ch) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let previous = match j.checked_sub(1) {
                    Some(prev) => run_at.get(&prev).copied().unwrap_or(0),
                    None => 0,
                };
                let size = previous + 1;
                next_run.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        run_at = next_run;
    }

    (best_i, best_j, best_size)
}
