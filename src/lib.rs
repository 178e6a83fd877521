#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_ORDER_EXTRACTOR_CONFIG;
mod constants;
pub mod models;
pub use models::{
    BaseItemMatch, BaseMatch, Catalog, CatalogEntry, Error, MatchResult, OrderExtractor,
    OrderExtractorConfig, Token, Tokenizer, Vocabulary, VocabularyKind,
};
pub mod types;
pub mod utils;
pub use types::{
    AliasName, BaseItemName, Confidence, Price, TokenPosition, TokenRef, TokenText, ToppingName,
};
pub use utils::read_menu_catalog_from_string;

/// Picks the single best-matching base item out of the text.
pub fn extract_base(text: &str, catalog: &Catalog) -> BaseMatch {
    extract_base_with_custom_config(text, catalog, DEFAULT_ORDER_EXTRACTOR_CONFIG)
}

pub fn extract_base_with_custom_config(
    text: &str,
    catalog: &Catalog,
    order_extractor_config: &OrderExtractorConfig,
) -> BaseMatch {
    OrderExtractor::new(order_extractor_config, catalog).extract_base(text)
}

/// Every topping mentioned after "with", in order of mention.
pub fn extract_toppings(text: &str, catalog: &Catalog) -> Vec<ToppingName> {
    extract_toppings_with_custom_config(text, catalog, DEFAULT_ORDER_EXTRACTOR_CONFIG)
}

pub fn extract_toppings_with_custom_config(
    text: &str,
    catalog: &Catalog,
    order_extractor_config: &OrderExtractorConfig,
) -> Vec<ToppingName> {
    OrderExtractor::new(order_extractor_config, catalog).extract_toppings(text)
}

/// Extracts the base item and toppings, and prices the order.
///
/// Returns `Error::NoBaseMatch` when nothing in the text resembles a base item.
pub fn parse_order(text: &str, catalog: &Catalog) -> Result<MatchResult, Error> {
    let match_result =
        parse_order_with_custom_config(text, catalog, DEFAULT_ORDER_EXTRACTOR_CONFIG)?;

    Ok(match_result)
}

pub fn parse_order_with_custom_config(
    text: &str,
    catalog: &Catalog,
    order_extractor_config: &OrderExtractorConfig,
) -> Result<MatchResult, Error> {
    let order_extractor = OrderExtractor::new(order_extractor_config, catalog);

    let match_result = order_extractor.parse_order(text)?;

    Ok(match_result)
}
