// src/services/suggest.rs

//! "Did you mean" suggestions.
//!
//! Scores each title against the query with the Ratcliff/Obershelp ratio
//! `2 * M / (len(a) + len(b))`, where `M` counts characters in the longest
//! common blocks found recursively on either side of each match.

use std::collections::HashMap;

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum ratio for a title to be suggested.
pub const SIMILARITY_CUTOFF: f64 = 0.3;

/// Up to [`MAX_SUGGESTIONS`] titles scoring at least [`SIMILARITY_CUTOFF`]
/// against `query`, best first. Equal scores put the greater title first.
///
/// An empty query yields nothing.
pub fn suggest<'a, I>(query: &str, titles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return Vec::new();
    }

    let matcher = Matcher::new(query);
    let mut scored: Vec<(f64, &str)> = titles
        .into_iter()
        .map(|title| (matcher.ratio(title), title))
        .filter(|(score, _)| *score >= SIMILARITY_CUTOFF)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1)));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, title)| title.to_string())
        .collect()
}

/// Similarity of two strings in `[0, 1]`. Two empty strings score 1.
pub fn similarity(a: &str, b: &str) -> f64 {
    Matcher::new(b).ratio(a)
}

/// Query-side state reused across candidates.
struct Matcher {
    query: Vec<char>,
    positions: HashMap<char, Vec<usize>>,
}

impl Matcher {
    fn new(query: &str) -> Self {
        let query: Vec<char> = query.chars().collect();
        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, ch) in query.iter().enumerate() {
            positions.entry(*ch).or_default().push(j);
        }
        Self { query, positions }
    }

    fn ratio(&self, candidate: &str) -> f64 {
        let candidate: Vec<char> = candidate.chars().collect();
        let total = candidate.len() + self.query.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched(&candidate) as f64 / total as f64
    }

    /// Total size of the matching blocks between `a` and the query.
    fn matched(&self, a: &[char]) -> usize {
        let mut total = 0;
        let mut pending = vec![(0, a.len(), 0, self.query.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, k) = self.longest_match(a, alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }
        total
    }

    /// Longest block `a[i..i+k] == query[j..j+k]` within the given bounds.
    /// Ties go to the earliest `i`, then the earliest `j`.
    fn longest_match(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);
        // Length of the match ending at a[i - 1], query[j], keyed by j.
        let mut run: HashMap<usize, usize> = HashMap::new();

        for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next_run = HashMap::new();
            if let Some(js) = self.positions.get(ch) {
                for &j in js {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = if j > 0 { run.get(&(j - 1)).copied().unwrap_or(0) } else { 0 };
                    let k = prev + 1;
                    next_run.insert(j, k);
                    if k > best_k {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_k = k;
                    }
                }
            }
            run = next_run;
        }

        (best_i, best_j, best_k)
    }
}
