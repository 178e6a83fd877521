/// Connective / filler words which never name a menu item.
///
/// Note: "extra" (and its "xtra" spelling) is consumed here as well; its presence is detected
/// separately as a topping signal before filtering.
pub const FILLER_WORDS: &[&str] = &["please", "pls", "and", "the", "extra", "xtra"];

/// Word which separates the base item from the list of toppings ("margherita with olives").
pub const SEGMENT_WORD: &str = "with";

/// Suffix used to detect "extra" and its variants ("xtra", "extra").
pub const EXTRA_SIGNAL_SUFFIX: &str = "xtra";

/// Number of leading characters compared by the prefix admissibility filter.
pub const PREFIX_LENGTH: usize = 3;

// Embed the compressed menu generated by `build.rs`
#[cfg(feature = "embed-bytes")]
pub const COMPRESSED_MENU_BYTE_ARRAY: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/menu.csv.gz"));
