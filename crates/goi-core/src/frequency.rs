use indexmap::IndexMap;

/// Tallies occurrences, keyed in first-seen order.
///
/// Insertion order is part of the contract: callers iterate the map for
/// display, and ties must keep first-appearance order.
pub fn count(tokens: &[String]) -> IndexMap<String, u64> {
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Descending-count view of a tally. The sort is stable, so words with
/// equal counts keep their first-appearance order.
pub fn sorted_by_count(counts: &IndexMap<String, u64>) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> = counts
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}
