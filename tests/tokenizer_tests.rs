#[path = "../test_utils/lib.rs"]
mod test_utils;

use order_sniffer::{Token, Tokenizer};
use test_utils::load_menu_catalog;

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.text.as_str()).collect()
}

#[cfg(test)]
mod base_item_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_text_before_with() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::base_item_parser();

        let normalized = tokenizer.tokenize("Margherita WITH pepperoni", &catalog);

        assert_eq!(texts(&normalized.unigrams), vec!["margherita"]);
        assert!(normalized.bigrams.is_empty());
        assert!(normalized.has_segment_word);
    }

    #[test]
    fn test_tokenize_expands_abbreviations() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::base_item_parser();

        let normalized = tokenizer.tokenize("a marg please", &catalog);

        assert_eq!(texts(&normalized.unigrams), vec!["margherita"]);
        assert_eq!(texts(&normalized.bigrams), vec!["a margherita"]);
    }

    #[test]
    fn test_tokenize_drops_filler_before_building_bigrams() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::base_item_parser();

        let normalized = tokenizer.tokenize("quattro and the formaggi", &catalog);

        assert_eq!(texts(&normalized.unigrams), vec!["quattro"]);
        assert_eq!(texts(&normalized.bigrams), vec!["quattro formaggi"]);
    }

    #[test]
    fn test_bigrams_are_not_prefix_filtered() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::base_item_parser();

        let normalized = tokenizer.tokenize("one big greco", &catalog);

        assert_eq!(texts(&normalized.unigrams), vec!["greco"]);
        assert_eq!(texts(&normalized.bigrams), vec!["one big", "big greco"]);
    }

    #[test]
    fn test_positions_are_relative_to_admissible_tokens() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::base_item_parser();

        let normalized = tokenizer.tokenize("i want polo or greco", &catalog);

        assert_eq!(
            normalized.unigrams,
            vec![
                Token {
                    text: "polo".to_string(),
                    position: 0,
                    count: 2
                },
                Token {
                    text: "greco".to_string(),
                    position: 1,
                    count: 2
                },
            ]
        );
        assert_eq!(normalized.bigrams.len(), 4);
        assert_eq!(normalized.bigrams[3].position, 3);
        assert_eq!(normalized.bigrams[3].count, 4);
    }

    #[test]
    fn test_tokenize_keeps_hyphenated_words() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::base_item_parser();

        let normalized = tokenizer.tokenize("a pepperoni-style pizza", &catalog);

        assert_eq!(texts(&normalized.unigrams), vec!["pepperoni-style"]);
    }

    #[test]
    fn test_tokenize_empty_string() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::base_item_parser();

        let normalized = tokenizer.tokenize("", &catalog);

        assert!(normalized.unigrams.is_empty());
        assert!(normalized.bigrams.is_empty());
        assert!(!normalized.has_segment_word);
    }
}

#[cfg(test)]
mod topping_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_text_after_first_with() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::topping_parser();

        let normalized = tokenizer.tokenize("Olives pizza with ham, with egg", &catalog);

        assert_eq!(texts(&normalized.unigrams), vec!["ham", "egg"]);
        assert!(normalized.bigrams.is_empty());
        assert!(normalized.has_segment_word);
        assert!(!normalized.has_extra_signal);
    }

    #[test]
    fn test_tokenize_without_with_has_no_tokens() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::topping_parser();

        let normalized = tokenizer.tokenize("margherita olives", &catalog);

        assert!(normalized.unigrams.is_empty());
        assert!(!normalized.has_segment_word);
    }

    #[test]
    fn test_tokenize_detects_extra_signal() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::topping_parser();

        let extra = tokenizer.tokenize("polo with extra cheese", &catalog);
        let xtra = tokenizer.tokenize("polo with xtra cheese", &catalog);
        let before_with = tokenizer.tokenize("extra large polo with cheese", &catalog);

        assert!(extra.has_extra_signal);
        assert!(xtra.has_extra_signal);
        assert!(!before_with.has_extra_signal);
        assert_eq!(texts(&extra.unigrams), vec!["cheese"]);
        assert_eq!(texts(&xtra.unigrams), vec!["cheese"]);
    }

    #[test]
    fn test_tokenize_expands_abbreviations_before_prefix_filter() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::topping_parser();

        let normalized = tokenizer.tokenize("pepperoni with jalep and pepp", &catalog);

        assert_eq!(texts(&normalized.unigrams), vec!["jalapenos", "pepperoni"]);
    }

    #[test]
    fn test_tokenize_splits_on_hyphens_and_punctuation() {
        let catalog = load_menu_catalog();
        let tokenizer = Tokenizer::topping_parser();

        let normalized = tokenizer.tokenize("polo with sun-dried tomatoes; olives!", &catalog);

        assert_eq!(texts(&normalized.unigrams), vec!["tomatoes", "olives"]);
    }
}
