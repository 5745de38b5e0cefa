use crate::domain::models::{AgentCard, FilterState};
use std::collections::HashSet;

/// A card is visible iff it passes every active criterion. A zero price
/// means "no price", which the ceiling never excludes.
pub fn passes_filters(card: &AgentCard, filters: &FilterState) -> bool {
    if card.price > filters.max_price && card.price > 0.0 {
        return false;
    }
    if card.rating < filters.min_rating {
        return false;
    }
    if filters.verified_only && !card.verified {
        return false;
    }
    if let Some(protocol) = &filters.protocol {
        if !card.protocols.iter().any(|tag| tag == protocol) {
            return false;
        }
    }
    if !filters.search.is_empty() {
        let query = filters.search.to_lowercase();
        if !card.haystack.contains(&query) {
            return false;
        }
    }
    true
}

pub fn compute_visibility(cards: &[AgentCard], filters: &FilterState) -> HashSet<String> {
    cards
        .iter()
        .filter(|c| passes_filters(c, filters))
        .map(|c| c.id.clone())
        .collect()
}

pub fn results_label(visible: usize) -> String {
    format!(
        "Showing {} agent{}",
        visible,
        if visible == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, price: f64, rating: f64, verified: bool) -> AgentCard {
        AgentCard {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price,
            rating,
            verified,
            protocols: vec!["mcp".to_string()],
            review_count: 0,
            haystack: id.to_lowercase(),
        }
    }

    #[test]
    fn zero_price_is_exempt_from_the_ceiling() {
        let free = card("free", 0.0, 3.0, false);
        let pricey = card("pricey", 300.0, 5.0, true);
        let filters = FilterState {
            max_price: 200.0,
            ..FilterState::default()
        };
        assert!(passes_filters(&free, &filters));
        assert!(!passes_filters(&pricey, &filters));
    }

    #[test]
    fn rating_floor_and_verified_flag() {
        let c = card("a", 100.0, 4.5, false);
        let mut filters = FilterState {
            min_rating: 4.0,
            ..FilterState::default()
        };
        assert!(passes_filters(&c, &filters));
        filters.min_rating = 4.6;
        assert!(!passes_filters(&c, &filters));
        filters.min_rating = 0.0;
        filters.verified_only = true;
        assert!(!passes_filters(&c, &filters));
    }

    #[test]
    fn protocol_requires_a_matching_tag() {
        let c = card("a", 0.0, 0.0, false);
        let mut filters = FilterState {
            protocol: Some("mcp".to_string()),
            ..FilterState::default()
        };
        assert!(passes_filters(&c, &filters));
        filters.protocol = Some("a2a".to_string());
        assert!(!passes_filters(&c, &filters));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut c = card("copy-smith", 0.0, 0.0, false);
        c.haystack = "copysmith long-form marketing copy".to_string();
        let filters = FilterState {
            search: "MARKETING".to_string(),
            ..FilterState::default()
        };
        assert!(passes_filters(&c, &filters));
        let miss = FilterState {
            search: "video".to_string(),
            ..FilterState::default()
        };
        assert!(!passes_filters(&c, &miss));
    }

    #[test]
    fn relaxing_a_criterion_never_shrinks_the_visible_set() {
        let cards = vec![
            card("a", 100.0, 4.5, true),
            card("b", 0.0, 3.0, false),
            card("c", 300.0, 5.0, true),
        ];
        let strict = FilterState {
            max_price: 200.0,
            min_rating: 4.0,
            ..FilterState::default()
        };
        let relaxed = FilterState {
            max_price: 400.0,
            min_rating: 4.0,
            ..FilterState::default()
        };
        let strict_set = compute_visibility(&cards, &strict);
        let relaxed_set = compute_visibility(&cards, &relaxed);
        assert!(strict_set.is_subset(&relaxed_set));
    }

    #[test]
    fn results_label_pluralizes() {
        assert_eq!(results_label(0), "Showing 0 agents");
        assert_eq!(results_label(1), "Showing 1 agent");
        assert_eq!(results_label(5), "Showing 5 agents");
    }
}
