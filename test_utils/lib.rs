#![allow(dead_code)] // Not every helper is used by every integration test

#[path = "../shared/constants.rs"]
pub mod constants;

use constants::MENU_CSV_FILE_PATH;
use order_sniffer::{
    parse_order, read_menu_catalog_from_string, BaseItemName, Catalog, Error as LibError,
    MatchResult, Price, ToppingName,
};
use std::{fs, path::Path};

/// Marks a test file whose text should not produce any base item.
pub const NO_MATCH_MARKER: &str = "NONE";

/// Loads `data/menu.csv` directly, independent of the `embed-bytes` feature.
pub fn load_menu_catalog() -> Catalog {
    let csv = fs::read_to_string(&*MENU_CSV_FILE_PATH).expect("Failed to read menu CSV");

    read_menu_catalog_from_string(&csv).expect("Failed to parse menu CSV")
}

fn get_prefixed_values(file_path: &Path, prefix: &str) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(prefix)
                .map(|value| value.trim().to_string())
        })
        .collect()
}

// Helper function to get the expected base item from the text file
pub fn get_expected_base(file_path: &Path) -> Option<BaseItemName> {
    get_prefixed_values(file_path, "EXPECTED_BASE:")
        .into_iter()
        .next()
}

// Helper function to get the expected toppings, in order, from the text file
pub fn get_expected_toppings(file_path: &Path) -> Vec<ToppingName> {
    get_prefixed_values(file_path, "EXPECTED_TOPPING:")
}

// Helper function to get the expected total cost from the text file
pub fn get_expected_total(file_path: &Path) -> Option<Price> {
    get_prefixed_values(file_path, "EXPECTED_TOTAL:")
        .into_iter()
        .next()
        .map(|total| total.parse().expect("EXPECTED_TOTAL must be a number"))
}

// Reads the order text, skipping the expectation and comment lines
pub fn get_order_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();

            !line.starts_with("EXPECTED_BASE:")
                && !line.starts_with("EXPECTED_TOPPING:")
                && !line.starts_with("EXPECTED_TOTAL:")
                && !line.starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the order in a test file and asserts it against the file's expectations.
///
/// Returns `None` for files expecting no base item match.
pub fn run_test_for_file(
    test_file_path: &Path,
    catalog: &Catalog,
) -> Result<Option<MatchResult>, LibError> {
    let order_text = get_order_text(test_file_path);

    let expected_base =
        get_expected_base(test_file_path).expect("Test file is missing EXPECTED_BASE");
    let expected_toppings = get_expected_toppings(test_file_path);
    let expected_total = get_expected_total(test_file_path);

    let result = parse_order(&order_text, catalog);

    if expected_base == NO_MATCH_MARKER {
        assert!(
            matches!(result, Err(LibError::NoBaseMatch(_))),
            "{:?} - Expected no base match but got {:?}",
            test_file_path,
            result
        );

        return Ok(None);
    }

    let match_result = result?;

    assert_eq!(
        match_result.base.name, expected_base,
        "{:?} - Expected base {:?} but found {:?} (token {:?}, confidence {})",
        test_file_path,
        expected_base,
        match_result.base.name,
        match_result.base.token,
        match_result.base.confidence
    );

    assert_eq!(
        match_result.toppings, expected_toppings,
        "{:?} - Expected toppings {:?} but found {:?}",
        test_file_path, expected_toppings, match_result.toppings
    );

    if let Some(expected_total) = expected_total {
        assert!(
            (match_result.total_cost - expected_total).abs() < 1e-4,
            "{:?} - Expected total {} but found {}",
            test_file_path,
            expected_total,
            match_result.total_cost
        );
    }

    Ok(Some(match_result))
}
