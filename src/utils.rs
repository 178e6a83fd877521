pub mod calculate_total_cost;
pub use calculate_total_cost::calculate_total_cost;

pub mod decompress_menu;
pub use decompress_menu::decompress_menu;

pub mod edit_distance;
pub use edit_distance::edit_distance;

pub mod read_menu_catalog;
pub use read_menu_catalog::read_menu_catalog_from_string;

pub mod select_most_confident;
pub use select_most_confident::select_most_confident;
