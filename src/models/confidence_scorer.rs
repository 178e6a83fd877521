use crate::models::{Token, Vocabulary};
use crate::types::{Confidence, TokenRef};
use crate::utils::{edit_distance, select_most_confident};

/// How much a token's position in its sequence counts against it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PositionPenalty {
    /// Subtracts `position / count²`, so earlier tokens win over later ones.
    FavorEarlyTokens,
    None,
}

impl PositionPenalty {
    pub fn for_token(self, token: &Token) -> Confidence {
        match self {
            PositionPenalty::FavorEarlyTokens if token.count > 0 => {
                token.position as Confidence / (token.count as Confidence).powi(2)
            }
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub candidate_name: &'a str,
    pub score: Confidence,
}

/// Edit-distance similarity of a token to a catalog name, normalized by the name's length.
///
/// Not clamped: a token far from the name produces a negative score.
pub fn score_candidate(
    token_text: &TokenRef,
    candidate_name: &str,
    position_penalty: Confidence,
) -> Confidence {
    let candidate_length = candidate_name.chars().count() as Confidence;
    let distance = edit_distance(token_text, candidate_name) as Confidence;

    1.0 - distance / candidate_length - position_penalty
}

/// Scores tokens against every name of a single vocabulary.
pub struct ConfidenceScorer<'a> {
    vocabulary: &'a Vocabulary,
    position_penalty: PositionPenalty,
}

impl<'a> ConfidenceScorer<'a> {
    pub fn new(vocabulary: &'a Vocabulary, position_penalty: PositionPenalty) -> Self {
        Self {
            vocabulary,
            position_penalty,
        }
    }

    /// One candidate per vocabulary entry, in catalog order.
    pub fn score_all(&self, token: &Token) -> Vec<ScoredCandidate<'a>> {
        let penalty = self.position_penalty.for_token(token);

        self.vocabulary
            .names()
            .map(|candidate_name| ScoredCandidate {
                candidate_name,
                score: score_candidate(&token.text, candidate_name, penalty),
            })
            .collect()
    }

    /// Highest-scoring candidate; ties go to the entry listed first in the catalog.
    pub fn best_candidate(&self, token: &Token) -> Option<ScoredCandidate<'a>> {
        select_most_confident(self.score_all(token), |candidate| candidate.score)
    }
}
