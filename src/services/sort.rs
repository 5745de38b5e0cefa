use crate::cli::SortKey;
use crate::domain::constants::PRICE_LOW_SENTINEL;
use crate::domain::models::AgentCard;
use std::cmp::Ordering;

/// Total order over ALL cards for the active sort key. Stable: ties keep
/// insertion order, which is also what makes `newest` a no-op.
pub fn compute_order(cards: &[AgentCard], key: SortKey) -> Vec<String> {
    let mut indices: Vec<usize> = (0..cards.len()).collect();
    indices.sort_by(|&a, &b| compare(&cards[a], &cards[b], key));
    indices.into_iter().map(|i| cards[i].id.clone()).collect()
}

fn compare(a: &AgentCard, b: &AgentCard, key: SortKey) -> Ordering {
    match key {
        SortKey::Rating => b
            .rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal),
        SortKey::Popularity => b.review_count.cmp(&a.review_count),
        SortKey::PriceLow => low_price(a)
            .partial_cmp(&low_price(b))
            .unwrap_or(Ordering::Equal),
        SortKey::PriceHigh => b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal),
        SortKey::Newest => Ordering::Equal,
    }
}

fn low_price(card: &AgentCard) -> f64 {
    if card.price > 0.0 {
        card.price
    } else {
        PRICE_LOW_SENTINEL
    }
}
