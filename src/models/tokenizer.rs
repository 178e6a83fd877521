use crate::constants::{EXTRA_SIGNAL_SUFFIX, FILLER_WORDS, SEGMENT_WORD};
use crate::models::{Catalog, Token, VocabularyKind};
use crate::types::{TokenRef, TokenText};

/// Which side of the first "with" is kept.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextSegment {
    BeforeSegmentWord,
    AfterSegmentWord,
}

/// Characters which make up a single word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WordChars {
    LettersAndHyphens,
    /// Letters, digits and underscores.
    WordCharacters,
}

impl WordChars {
    fn contains(self, c: char) -> bool {
        match self {
            WordChars::LettersAndHyphens => c.is_alphabetic() || c == '-',
            WordChars::WordCharacters => c.is_alphanumeric() || c == '_',
        }
    }
}

/// Tokens produced from a single utterance, ready for scoring.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedText {
    /// Unigrams that passed the prefix filter, positioned within that filtered sequence.
    pub unigrams: Vec<Token>,
    /// Adjacent pairs of unigrams, taken before prefix filtering.
    pub bigrams: Vec<Token>,
    pub has_segment_word: bool,
    pub has_extra_signal: bool,
}

#[derive(Copy, Clone, Debug)]
pub struct Tokenizer {
    pub segment: TextSegment,
    pub word_chars: WordChars,
    pub vocabulary: VocabularyKind,
    pub generate_bigrams: bool,
}

impl Tokenizer {
    /// Configuration for extracting the base item (everything before "with")
    pub fn base_item_parser() -> Self {
        Self {
            segment: TextSegment::BeforeSegmentWord,
            word_chars: WordChars::LettersAndHyphens,
            vocabulary: VocabularyKind::BaseItems,
            generate_bigrams: true,
        }
    }

    /// Configuration for extracting toppings (everything after "with")
    pub fn topping_parser() -> Self {
        Self {
            segment: TextSegment::AfterSegmentWord,
            word_chars: WordChars::WordCharacters,
            vocabulary: VocabularyKind::Toppings,
            generate_bigrams: false,
        }
    }

    /// Lowercases the text and splits it into words.
    pub fn split_words(self, text: &str) -> Vec<TokenText> {
        text.to_lowercase()
            .split(|c: char| !self.word_chars.contains(c))
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect()
    }

    /// Keeps the words on this tokenizer's side of the first "with".
    ///
    /// When extracting after "with" and the text has none, nothing is kept.
    pub fn segment_words(self, words: Vec<TokenText>) -> Vec<TokenText> {
        match self.segment {
            TextSegment::BeforeSegmentWord => words
                .into_iter()
                .take_while(|word| word != SEGMENT_WORD)
                .collect(),
            TextSegment::AfterSegmentWord => words
                .into_iter()
                .skip_while(|word| word != SEGMENT_WORD)
                .skip(1)
                .collect(),
        }
    }

    pub fn tokenize(self, text: &str, catalog: &Catalog) -> NormalizedText {
        let words = self.split_words(text);
        let has_segment_word = words.iter().any(|word| word == SEGMENT_WORD);

        let segment = self.segment_words(words);
        let has_extra_signal = segment.iter().any(|word| is_extra_signal(word));

        let expanded: Vec<TokenText> = segment
            .iter()
            .filter(|word| !is_filler_word(word))
            .map(|word| catalog.expand_alias(word).to_string())
            .collect();

        let bigrams = if self.generate_bigrams {
            Token::sequence(
                expanded
                    .windows(2)
                    .map(|pair| format!("{} {}", pair[0], pair[1])),
            )
        } else {
            Vec::new()
        };

        let vocabulary = catalog.vocabulary(self.vocabulary);
        let unigrams = Token::sequence(
            expanded
                .into_iter()
                .filter(|word| vocabulary.has_valid_prefix(word)),
        );

        NormalizedText {
            unigrams,
            bigrams,
            has_segment_word,
            has_extra_signal,
        }
    }
}

pub fn is_filler_word(word: &TokenRef) -> bool {
    FILLER_WORDS.contains(&word)
}

/// Matches "xtra" optionally preceded by a single character ("extra").
pub fn is_extra_signal(word: &TokenRef) -> bool {
    word.strip_suffix(EXTRA_SIGNAL_SUFFIX)
        .map_or(false, |lead| lead.chars().count() <= 1)
}
