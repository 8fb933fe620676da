/// First-fit one-to-one pairing of two sequences.
///
/// Each element of `first`, in order, takes the earliest still unused element
/// of `second` accepted by `predicate`. Elements left without a partner are
/// skipped. The result is not a maximum matching: an early element can take a
/// partner a later one needed. Returns `(first_index, second_index)` pairs in
/// `first` order.
///
/// ```
/// use fuzzy_sentence::greedy_match;
///
/// let pairs = greedy_match(&["ab", "ab"], &["xy", "ab", "ab"], |a, b| a == b);
/// assert_eq!(pairs, vec![(0, 1), (1, 2)]);
/// ```
pub fn greedy_match<A, B>(
    first: &[A],
    second: &[B],
    mut predicate: impl FnMut(&A, &B) -> bool,
) -> Vec<(usize, usize)> {
    let mut used = vec![false; second.len()];
    let mut pairs = Vec::with_capacity(first.len().min(second.len()));
    for (i, a) in first.iter().enumerate() {
        let found = second
            .iter()
            .enumerate()
            .find(|&(j, b)| !used[j] && predicate(a, b))
            .map(|(j, _)| j);
        if let Some(j) = found {
            used[j] = true;
            pairs.push((i, j));
        }
    }
    pairs
}

/// `matched / (len_a + len_b - matched)`.
///
/// Callers guarantee a non-zero denominator.
#[inline]
pub(crate) fn tanimoto(matched: usize, len_a: usize, len_b: usize) -> f32 {
    matched as f32 / (len_a + len_b - matched) as f32
}

/// Tanimoto coefficient over exactly matched subtokens.
pub(crate) fn subtoken_similarity(a: &[&str], b: &[&str]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let matched = greedy_match(a, b, |x, y| x == y).len();
    tanimoto(matched, a.len(), b.len())
}
