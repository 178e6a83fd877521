use crate::types::{TokenPosition, TokenText};

/// A normalized unigram or bigram, along with where it sits in the sequence it is scored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: TokenText,
    pub position: TokenPosition,
    /// Total number of tokens in the sequence this token belongs to.
    pub count: usize,
}

impl Token {
    /// Builds a token sequence, assigning each token its position and the sequence length.
    pub fn sequence<I>(texts: I) -> Vec<Token>
    where
        I: IntoIterator<Item = TokenText>,
    {
        let texts: Vec<TokenText> = texts.into_iter().collect();
        let count = texts.len();

        texts
            .into_iter()
            .enumerate()
            .map(|(position, text)| Token {
                text,
                position,
                count,
            })
            .collect()
    }
}
