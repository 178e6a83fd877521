pub mod base_match;
pub use base_match::{BaseItemMatch, BaseMatch};

pub mod catalog;
pub use catalog::Catalog;

pub mod confidence_scorer;
pub use confidence_scorer::{ConfidenceScorer, PositionPenalty, ScoredCandidate};

pub mod error;
pub use error::Error;

pub mod match_result;
pub use match_result::MatchResult;

pub mod order_extractor;
pub use order_extractor::{OrderExtractor, OrderExtractorConfig};

pub mod token;
pub use token::Token;

pub mod tokenizer;
pub use tokenizer::{NormalizedText, TextSegment, Tokenizer, WordChars};

pub mod vocabulary;
pub use vocabulary::{CatalogEntry, Vocabulary, VocabularyKind};
