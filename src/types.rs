// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type TokenText = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Zero-based position of a token within the sequence it is scored in.
pub type TokenPosition = usize;

/// Represents the name of a base item (e.g. a pizza) as an owned `String`.
pub type BaseItemName = String;

/// Represents the name of a topping as an owned `String`.
pub type ToppingName = String;

/// Represents an alternate spelling or abbreviation of a catalog name (e.g. "marg").
pub type AliasName = String;

/// Menu price, in whatever currency unit the catalog is authored in.
pub type Price = f64;

/// Real-valued match quality. Higher is better; not bounded to `[0, 1]` and may be negative.
pub type Confidence = f64;
