use std::collections::HashMap;

/// Search `values` left to right for the first pair of indices whose
/// elements sum to `target`.
///
/// The returned pair `(i, j)` satisfies `i < j` and
/// `values[i] + values[j] == target`, with `i` the smallest index for
/// which such a `j` exists. Returns `None` when no pair qualifies.
///
/// Single pass, O(n) time, O(n) auxiliary space.
pub fn find_pair(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();

    for (index, &value) in values.iter().enumerate() {
        // A complement outside the i64 range can never match an element.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&earlier) = seen.get(&complement) {
                return Some((earlier, index));
            }
        }
        // A repeated value keeps its earliest index.
        seen.entry(value).or_insert(index);
    }

    None
}
