//! First-occurrence deduplication of plain sequences.
//!
//! Two strategies with the same contract: every distinct value appears once,
//! in the order it was first seen. Both are quadratic, which is fine for the
//! short sequences they are used on.

/// Keep position `i` only if `i` is where that value first occurs.
pub fn dedup_by_first_index<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, item)| items.iter().position(|x| x == *item) == Some(*i))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Scan once, appending each value unless the output already holds it.
pub fn dedup_by_accumulation<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
