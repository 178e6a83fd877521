use crate::models::Catalog;
use crate::types::{AliasName, BaseItemName, Price, ToppingName};
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use log::warn;
use std::io::Cursor;

/// Parses a menu CSV with the headers `Kind,Name,Price,Aliases`.
///
/// - `Kind` is either `base` or `topping`.
/// - `Price` is required for base items and ignored for toppings.
/// - `Aliases` (optional column) is a comma-separated list of abbreviations which expand to `Name`.
pub fn read_menu_catalog_from_string(csv: &str) -> Result<Catalog, Error> {
    let mut base_items: Vec<(BaseItemName, Price)> = Vec::new();
    let mut toppings: Vec<ToppingName> = Vec::new();
    let mut aliases: Vec<(AliasName, String)> = Vec::new();

    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(true) // Ensure headers are expected
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(csv));

    // Extract column headers
    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let column = |header: &str| headers.iter().position(|h| h == header);
    let required_column = |header: &str| {
        column(header).ok_or_else(|| Error::ParserError(format!("Missing '{}' column", header)))
    };

    let kind_column = required_column("Kind")?;
    let name_column = required_column("Name")?;
    let price_column = required_column("Price")?;
    let aliases_column = column("Aliases");

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let kind = field(&record, kind_column, "Kind")?;
        let name = field(&record, name_column, "Name")?;

        match kind.to_lowercase().as_str() {
            "base" => {
                let price = field(&record, price_column, "Price")?
                    .parse::<Price>()
                    .map_err(|e| {
                        Error::ParserError(format!("Invalid price for {:?}: {}", name, e))
                    })?;

                base_items.push((name.to_string(), price));
            }
            "topping" => {
                if record.get(price_column).map_or(false, |price| !price.is_empty()) {
                    warn!("Ignoring price for topping {:?}", name);
                }

                toppings.push(name.to_string());
            }
            other => {
                return Err(Error::ParserError(format!(
                    "Unknown kind {:?} for {:?}",
                    other, name
                )));
            }
        }

        if let Some(comma_separated_aliases) = aliases_column.and_then(|idx| record.get(idx)) {
            aliases.extend(
                comma_separated_aliases
                    .split(',')
                    .map(|alias| alias.trim())
                    .filter(|alias| !alias.is_empty())
                    .map(|alias| (alias.to_string(), name.to_string())),
            );
        }
    }

    Catalog::new(base_items, toppings, aliases)
}

fn field<'r>(record: &'r StringRecord, idx: usize, header: &str) -> Result<&'r str, Error> {
    record
        .get(idx)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", header)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_base_items_toppings_and_aliases() {
        let csv = "Kind,Name,Price,Aliases\n\
                   base,margherita,3,marg\n\
                   base,pepperoni,5,\"pepp, peppe\"\n\
                   topping,olives,,\n\
                   topping,jalapenos,,jalap\n";

        let catalog = read_menu_catalog_from_string(csv).unwrap();

        assert_eq!(
            catalog.base_items().names().collect::<Vec<_>>(),
            vec!["margherita", "pepperoni"]
        );
        assert_eq!(
            catalog.toppings().names().collect::<Vec<_>>(),
            vec!["olives", "jalapenos"]
        );
        assert_eq!(catalog.base_price("pepperoni"), Some(5.0));
        assert_eq!(catalog.expand_alias("peppe"), "pepperoni");
        assert_eq!(catalog.expand_alias("jalap"), "jalapenos");
        assert_eq!(catalog.alias_count(), 4);
    }

    #[test]
    fn test_aliases_column_is_optional() {
        let csv = "Kind,Name,Price\nbase,polo,5.5\ntopping,egg,\n";

        let catalog = read_menu_catalog_from_string(csv).unwrap();

        assert_eq!(catalog.base_items().len(), 1);
        assert_eq!(catalog.toppings().len(), 1);
        assert_eq!(catalog.alias_count(), 0);
    }

    #[test]
    fn test_missing_price_for_base_item() {
        let csv = "Kind,Name,Price\nbase,polo,\n";

        assert!(matches!(
            read_menu_catalog_from_string(csv),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_invalid_price() {
        let csv = "Kind,Name,Price\nbase,polo,cheap\n";

        assert!(matches!(
            read_menu_catalog_from_string(csv),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_unknown_kind() {
        let csv = "Kind,Name,Price\ndrink,cola,2\n";

        assert!(matches!(
            read_menu_catalog_from_string(csv),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Name,Price\npolo,5.5\n";

        assert!(matches!(
            read_menu_catalog_from_string(csv),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let csv = "Kind,Name,Price\nbase,polo,5.5\nbase,Polo,6\n";

        assert!(matches!(
            read_menu_catalog_from_string(csv),
            Err(Error::CatalogError(_))
        ));
    }
}
