use crate::constants::PREFIX_LENGTH;
use crate::types::{Price, TokenRef};
use crate::Error;
use std::collections::HashSet;

/// Which of the catalog's vocabularies a piece of text is matched against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VocabularyKind {
    BaseItems,
    Toppings,
}

impl VocabularyKind {
    pub fn label(self) -> &'static str {
        match self {
            VocabularyKind::BaseItems => "base item",
            VocabularyKind::Toppings => "topping",
        }
    }
}

/// A single named menu entry. Base items carry a price; toppings do not.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub price: Option<Price>,
}

/// Ordered, immutable list of catalog entries plus the leading-character prefixes used
/// to cheaply discard tokens before they are scored.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<CatalogEntry>,
    prefixes: Vec<String>,
}

impl Vocabulary {
    /// Entry order is preserved; it decides ties when two names score the same.
    pub fn new(kind: VocabularyKind, entries: Vec<CatalogEntry>) -> Result<Self, Error> {
        {
            let mut seen_names = HashSet::new();

            for entry in &entries {
                if entry.name.is_empty() {
                    return Err(Error::CatalogError(format!(
                        "Empty {} name",
                        kind.label()
                    )));
                }

                if !seen_names.insert(entry.name.as_str()) {
                    return Err(Error::CatalogError(format!(
                        "Duplicate {} name: {:?}",
                        kind.label(),
                        entry.name
                    )));
                }
            }
        }

        let mut prefixes: Vec<String> = entries
            .iter()
            .map(|entry| entry.name.chars().take(PREFIX_LENGTH).collect())
            .collect();
        prefixes.sort();
        prefixes.dedup();

        Ok(Self { entries, prefixes })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &TokenRef) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &TokenRef) -> bool {
        self.get(name).is_some()
    }

    /// Whether the token begins with the leading characters of any name in this vocabulary.
    ///
    /// Names shorter than the prefix length contribute the whole name as their prefix.
    pub fn has_valid_prefix(&self, token: &TokenRef) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| token.starts_with(prefix.as_str()))
    }
}
