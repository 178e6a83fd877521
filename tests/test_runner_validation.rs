#[path = "../test_utils/lib.rs"]
mod test_utils;

use test_utils::constants::TEST_RUNNER_VALIDATION_FILES_DIRECTORY;
use test_utils::{load_menu_catalog, run_test_for_file};

// Each validation file carries a deliberately wrong expectation; the runner must reject it.
fn run_validation_file(file_name: &str) {
    let catalog = load_menu_catalog();
    let file_path = TEST_RUNNER_VALIDATION_FILES_DIRECTORY.join(file_name);

    let _ = run_test_for_file(&file_path, &catalog);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Expected base")]
    fn test_runner_detects_wrong_base() {
        run_validation_file("wrong_base.txt");
    }

    #[test]
    #[should_panic(expected = "Expected toppings")]
    fn test_runner_detects_missing_topping() {
        run_validation_file("missing_topping.txt");
    }

    #[test]
    #[should_panic(expected = "Expected total")]
    fn test_runner_detects_wrong_total() {
        run_validation_file("wrong_total.txt");
    }
}
