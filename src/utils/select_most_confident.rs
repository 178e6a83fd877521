use crate::types::Confidence;

/// Returns the item with the highest score.
///
/// Ties are resolved in favor of the item encountered first, so results are stable with
/// respect to input order. Returns `None` for an empty input.
///
/// ### Example:
/// ```rust
/// use order_sniffer::utils::select_most_confident;
///
/// let scored = vec![("polo", 0.5), ("greco", 0.9), ("bianca", 0.9)];
/// let best = select_most_confident(scored, |(_, score)| *score);
///
/// assert_eq!(best, Some(("greco", 0.9)));
/// ```
pub fn select_most_confident<T, I, F>(items: I, score: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Confidence,
{
    items.into_iter().fold(None, |best, item| match best {
        Some(current) if score(&current) >= score(&item) => Some(current),
        _ => Some(item),
    })
}
