//! Competition-style rank assignment

/// Assign ranks over ratings already sorted in descending order.
///
/// The head takes rank 1. Each subsequent element shares the previous rank
/// when its rating equals the previous rating, otherwise it takes its
/// 1-based position. Ranks jump past a tie group: `[90, 90, 80]` yields
/// `[1, 1, 3]`, not `[1, 1, 2]`.
///
/// The advance condition tests inequality of adjacent ratings. Under a
/// descending sort this coincides with "strictly less"; it does not
/// generalize to an ascending sort.
pub(crate) fn competition_ranks(sorted_ratings: &[u32]) -> Vec<u32> {
    let mut ranks = Vec::with_capacity(sorted_ratings.len());
    let mut current = 1u32;
    for (i, &rating) in sorted_ratings.iter().enumerate() {
        if i > 0 && rating != sorted_ratings[i - 1] {
            current = i as u32 + 1;
        }
        ranks.push(current);
    }
    ranks
}
