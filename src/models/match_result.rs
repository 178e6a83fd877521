use crate::models::BaseItemMatch;
use crate::types::{Price, ToppingName};

/// A fully parsed order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub base: BaseItemMatch,
    /// Accepted toppings in the order they were mentioned. Repeats are kept.
    pub toppings: Vec<ToppingName>,
    pub total_cost: Price,
}
