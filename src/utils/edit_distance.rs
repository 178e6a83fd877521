/// Levenshtein distance between two strings, counted in characters.
///
/// Fills the full `(len(a) + 1) x (len(b) + 1)` table; row and column zero hold the distance
/// from the empty string.
///
/// ### Example:
/// ```rust
/// use order_sniffer::utils::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("olives", ""), 6);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution_cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            table[i][j] = (table[i - 1][j - 1] + substitution_cost)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j] + 1);
        }
    }

    table[a.len()][b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_distances() {
        assert_eq!(edit_distance("margherita", "margherita"), 0);
        assert_eq!(edit_distance("marg", "margherita"), 6);
        assert_eq!(edit_distance("peperoni", "pepperoni"), 1);
        assert_eq!(edit_distance("olivs", "olives"), 1);
        assert_eq!(edit_distance("quattro", "quattro formaggi"), 9);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(edit_distance("jalapeños", "jalapenos"), 1);
        assert_eq!(edit_distance("ñ", ""), 1);
    }

    proptest! {
        #[test]
        fn edit_distance_is_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn edit_distance_is_zero_only_for_identical_strings(a in "[a-z ]{0,12}", b in "[a-z ]{0,12}") {
            prop_assert_eq!(edit_distance(&a, &b) == 0, a == b);
        }

        #[test]
        fn edit_distance_from_empty_is_length(a in "\\PC{0,16}") {
            prop_assert_eq!(edit_distance(&a, ""), a.chars().count());
            prop_assert_eq!(edit_distance("", &a), a.chars().count());
        }

        #[test]
        fn edit_distance_satisfies_triangle_inequality(
            a in "[a-e]{0,8}",
            b in "[a-e]{0,8}",
            c in "[a-e]{0,8}",
        ) {
            prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
        }

        #[test]
        fn edit_distance_is_bounded_by_longer_length(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            let distance = edit_distance(&a, &b);

            prop_assert!(distance <= a.len().max(b.len()));
            prop_assert!(distance >= a.len().abs_diff(b.len()));
        }
    }
}
