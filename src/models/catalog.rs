use crate::models::{CatalogEntry, Vocabulary, VocabularyKind};
use crate::types::{AliasName, BaseItemName, Price, ToppingName, TokenRef};
use crate::Error;
use std::collections::HashMap;

/// Immutable menu: the base-item vocabulary (with prices), the topping vocabulary, and the
/// abbreviation table used to expand shorthand such as "marg" before scoring.
///
/// A `Catalog` is never mutated after construction, so a single instance can be shared by
/// any number of concurrent extractions.
#[derive(Debug, Clone)]
pub struct Catalog {
    base_items: Vocabulary,
    toppings: Vocabulary,
    aliases: HashMap<AliasName, String>,
}

impl Catalog {
    pub fn new(
        base_items: Vec<(BaseItemName, Price)>,
        toppings: Vec<ToppingName>,
        aliases: Vec<(AliasName, String)>,
    ) -> Result<Self, Error> {
        let base_entries = base_items
            .into_iter()
            .map(|(name, price)| {
                let name = normalize_name(&name);

                if !price.is_finite() || price < 0.0 {
                    return Err(Error::CatalogError(format!(
                        "Invalid price {} for base item {:?}",
                        price, name
                    )));
                }

                Ok(CatalogEntry {
                    name,
                    price: Some(price),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let topping_entries = toppings
            .iter()
            .map(|name| CatalogEntry {
                name: normalize_name(name),
                price: None,
            })
            .collect();

        let base_items = Vocabulary::new(VocabularyKind::BaseItems, base_entries)?;
        let toppings = Vocabulary::new(VocabularyKind::Toppings, topping_entries)?;

        let mut alias_map: HashMap<AliasName, String> = HashMap::new();

        for (alias, canonical_name) in aliases {
            let alias = normalize_name(&alias);
            let canonical_name = normalize_name(&canonical_name);

            if alias.is_empty() {
                return Err(Error::CatalogError(format!(
                    "Empty alias for {:?}",
                    canonical_name
                )));
            }

            if !base_items.contains(&canonical_name) && !toppings.contains(&canonical_name) {
                return Err(Error::CatalogError(format!(
                    "Alias {:?} refers to unknown name {:?}",
                    alias, canonical_name
                )));
            }

            if let Some(existing) = alias_map.get(&alias) {
                if *existing != canonical_name {
                    return Err(Error::CatalogError(format!(
                        "Alias {:?} refers to both {:?} and {:?}",
                        alias, existing, canonical_name
                    )));
                }
            }

            alias_map.insert(alias, canonical_name);
        }

        Ok(Self {
            base_items,
            toppings,
            aliases: alias_map,
        })
    }

    /// Loads the default menu which is embedded into the library at build time.
    #[cfg(feature = "embed-bytes")]
    pub fn from_embedded_menu() -> Result<Self, Error> {
        use crate::constants::COMPRESSED_MENU_BYTE_ARRAY;
        use crate::utils::{decompress_menu, read_menu_catalog_from_string};

        let csv = decompress_menu(COMPRESSED_MENU_BYTE_ARRAY)?;

        read_menu_catalog_from_string(&csv)
    }

    pub fn base_items(&self) -> &Vocabulary {
        &self.base_items
    }

    pub fn toppings(&self) -> &Vocabulary {
        &self.toppings
    }

    pub fn vocabulary(&self, kind: VocabularyKind) -> &Vocabulary {
        match kind {
            VocabularyKind::BaseItems => &self.base_items,
            VocabularyKind::Toppings => &self.toppings,
        }
    }

    pub fn base_price(&self, base_item_name: &TokenRef) -> Option<Price> {
        self.base_items
            .get(base_item_name)
            .and_then(|entry| entry.price)
    }

    /// Returns the canonical name for a known abbreviation, or the token itself.
    pub fn expand_alias<'a>(&'a self, token: &'a TokenRef) -> &'a TokenRef {
        self.aliases
            .get(token)
            .map(|canonical_name| canonical_name.as_str())
            .unwrap_or(token)
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
