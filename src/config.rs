use crate::models::OrderExtractorConfig;

pub const DEFAULT_ORDER_EXTRACTOR_CONFIG: &OrderExtractorConfig = &OrderExtractorConfig {
    base_confidence_threshold: 0.8,
    topping_confidence_threshold: 0.6,
    with_threshold_discount: 0.05,
    extra_threshold_discount: 0.15,
    topping_surcharge: 1.0,
};
