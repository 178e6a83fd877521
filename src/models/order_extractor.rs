use crate::models::{
    BaseItemMatch, BaseMatch, Catalog, ConfidenceScorer, MatchResult, NormalizedText,
    PositionPenalty, Token, Tokenizer,
};
use crate::types::{Confidence, Price, ToppingName};
use crate::utils::{calculate_total_cost, select_most_confident};
use crate::Error;

use log::{debug, info};

pub struct OrderExtractorConfig {
    /// Unigram matches below this confidence fall back to bigrams (e.g. "quattro formaggi").
    pub base_confidence_threshold: Confidence,
    /// Minimum confidence for a topping before any adjustments.
    pub topping_confidence_threshold: Confidence,
    /// Subtracted from the topping threshold when the text contains "with".
    pub with_threshold_discount: Confidence,
    /// Subtracted from the topping threshold when the toppings mention "extra".
    pub extra_threshold_discount: Confidence,
    pub topping_surcharge: Price,
}

pub struct OrderExtractor<'a> {
    config: &'a OrderExtractorConfig,
    catalog: &'a Catalog,
    base_item_tokenizer: Tokenizer,
    topping_tokenizer: Tokenizer,
}

impl<'a> OrderExtractor<'a> {
    pub fn new(config: &'a OrderExtractorConfig, catalog: &'a Catalog) -> Self {
        OrderExtractor {
            config,
            catalog,
            base_item_tokenizer: Tokenizer::base_item_parser(),
            topping_tokenizer: Tokenizer::topping_parser(),
        }
    }

    pub fn extract_base(&self, text: &str) -> BaseMatch {
        let normalized = self.base_item_tokenizer.tokenize(text, self.catalog);

        debug!(
            "Base item unigrams: {:?}, bigrams: {:?}",
            token_texts(&normalized.unigrams),
            token_texts(&normalized.bigrams)
        );

        let unigram_match = match self.most_confident_base_item(&normalized.unigrams) {
            Some(unigram_match) => unigram_match,
            None => {
                // Only a confident bigram may stand in when no single word is admissible,
                // e.g. "qattro formaggi".
                let bigram_match = self
                    .most_confident_base_item(&normalized.bigrams)
                    .filter(|bigram_match| {
                        bigram_match.confidence >= self.config.base_confidence_threshold
                    });

                if bigram_match.is_none() {
                    info!("No base item candidates in {:?}", text);
                }

                return bigram_match.into();
            }
        };

        if unigram_match.confidence >= self.config.base_confidence_threshold
            || normalized.bigrams.is_empty()
        {
            return BaseMatch::Matched(unigram_match);
        }

        info!(
            "Unigram confidence {} for {:?} is below {}; trying bigrams...",
            unigram_match.confidence, unigram_match.name, self.config.base_confidence_threshold
        );

        match self.most_confident_base_item(&normalized.bigrams) {
            Some(bigram_match) if bigram_match.confidence > unigram_match.confidence => {
                BaseMatch::Matched(bigram_match)
            }
            _ => BaseMatch::Matched(unigram_match),
        }
    }

    pub fn extract_toppings(&self, text: &str) -> Vec<ToppingName> {
        let normalized = self.topping_tokenizer.tokenize(text, self.catalog);

        if !normalized.has_segment_word {
            debug!("No toppings segment in {:?}", text);
            return Vec::new();
        }

        let threshold = self.topping_threshold(&normalized);

        debug!(
            "Topping unigrams: {:?}, threshold: {}",
            token_texts(&normalized.unigrams),
            threshold
        );

        let scorer = ConfidenceScorer::new(self.catalog.toppings(), PositionPenalty::None);

        normalized
            .unigrams
            .iter()
            .filter_map(|token| {
                let candidate = scorer.best_candidate(token)?;

                debug!(
                    "Topping token {:?} -> {:?} ({})",
                    token.text, candidate.candidate_name, candidate.score
                );

                if candidate.score >= threshold {
                    Some(candidate.candidate_name.to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn parse_order(&self, text: &str) -> Result<MatchResult, Error> {
        let base = self
            .extract_base(text)
            .into_matched()
            .ok_or_else(|| Error::NoBaseMatch(text.to_string()))?;

        let toppings = self.extract_toppings(text);

        let total_cost = calculate_total_cost(
            self.catalog,
            &base.name,
            &toppings,
            self.config.topping_surcharge,
        )?;

        Ok(MatchResult {
            base,
            toppings,
            total_cost,
        })
    }

    /// Best base item per token, then the best across tokens (earliest token wins ties).
    fn most_confident_base_item(&self, tokens: &[Token]) -> Option<BaseItemMatch> {
        let scorer = ConfidenceScorer::new(
            self.catalog.base_items(),
            PositionPenalty::FavorEarlyTokens,
        );

        let token_scores = tokens.iter().filter_map(|token| {
            scorer
                .best_candidate(token)
                .map(|candidate| (token, candidate))
        });

        select_most_confident(token_scores, |(_, candidate)| candidate.score).map(
            |(token, candidate)| BaseItemMatch {
                token: token.text.clone(),
                name: candidate.candidate_name.to_string(),
                confidence: candidate.score,
            },
        )
    }

    fn topping_threshold(&self, normalized: &NormalizedText) -> Confidence {
        let mut threshold = self.config.topping_confidence_threshold;

        if normalized.has_segment_word {
            threshold -= self.config.with_threshold_discount;
        }

        if normalized.has_extra_signal {
            threshold -= self.config.extra_threshold_discount;
        }

        threshold
    }
}

fn token_texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.text.as_str()).collect()
}
