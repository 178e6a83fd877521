use crate::types::{BaseItemName, Confidence, TokenText};

/// The base item picked out of a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseItemMatch {
    /// The (normalized) unigram or bigram which produced the match.
    pub token: TokenText,
    pub name: BaseItemName,
    /// Low values are still returned; it is up to the caller to treat them as inconclusive.
    pub confidence: Confidence,
}

/// Outcome of base-item extraction.
///
/// `NoMatch` is returned when the text contains no token which could plausibly name a base
/// item, rather than inventing a default.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseMatch {
    Matched(BaseItemMatch),
    NoMatch,
}

impl BaseMatch {
    pub fn into_matched(self) -> Option<BaseItemMatch> {
        match self {
            BaseMatch::Matched(base_item_match) => Some(base_item_match),
            BaseMatch::NoMatch => None,
        }
    }
}

impl From<Option<BaseItemMatch>> for BaseMatch {
    fn from(base_item_match: Option<BaseItemMatch>) -> Self {
        base_item_match.map_or(BaseMatch::NoMatch, BaseMatch::Matched)
    }
}
