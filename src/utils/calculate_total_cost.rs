use crate::models::Catalog;
use crate::types::{Price, ToppingName, TokenRef};
use crate::Error;

/// Base price plus a flat surcharge for each accepted topping.
///
/// A base item missing from the catalog means a match was produced against a different
/// catalog than the one being priced, and is reported as `Error::UnknownBaseItem`.
pub fn calculate_total_cost(
    catalog: &Catalog,
    base_item_name: &TokenRef,
    toppings: &[ToppingName],
    topping_surcharge: Price,
) -> Result<Price, Error> {
    let base_price = catalog
        .base_price(base_item_name)
        .ok_or_else(|| Error::UnknownBaseItem(base_item_name.to_string()))?;

    Ok(base_price + topping_surcharge * toppings.len() as Price)
}
