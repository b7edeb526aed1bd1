/// Apply `combine` to every unordered pair `(items[i], items[k])` with
/// `i < k`, keeping the results it produces.
///
/// Pairs are visited by ascending `i`, then ascending `k`. Boundary
/// segments are rebuilt from this order downstream, so it must not change.
pub fn pairwise<T, R, F>(items: &[T], mut combine: F) -> Vec<R>
where
    F: FnMut(&T, &T) -> Option<R>,
{
    let n = items.len();
    let mut result = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for k in (i + 1)..n {
            if let Some(r) = combine(&items[i], &items[k]) {
                result.push(r);
            }
        }
    }
    result
}
