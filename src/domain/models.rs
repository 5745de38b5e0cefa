use crate::domain::constants::DEFAULT_MAX_PRICE;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One catalog entry after the parse step: every field typed, every
/// absence already collapsed to its permissive default.
#[derive(Debug, Clone)]
pub struct AgentCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub verified: bool,
    pub protocols: Vec<String>,
    pub review_count: u32,
    /// Lowercased text blob used for substring search.
    pub haystack: String,
}

/// Current values of the filter controls. `Default` is the clear-filters
/// state: ceiling 500, rating floor 0, no protocol, empty search.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub max_price: f64,
    pub min_rating: f64,
    pub verified_only: bool,
    pub protocol: Option<String>,
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            max_price: DEFAULT_MAX_PRICE,
            min_rating: 0.0,
            verified_only: false,
            protocol: None,
            search: String::new(),
        }
    }
}

#[derive(Serialize, Clone)]
pub struct CardRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub verified: bool,
    pub protocols: Vec<String>,
    pub review_count: u32,
}

impl From<&AgentCard> for CardRow {
    fn from(c: &AgentCard) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            price: c.price,
            rating: c.rating,
            verified: c.verified,
            protocols: c.protocols.clone(),
            review_count: c.review_count,
        }
    }
}

#[derive(Serialize)]
pub struct BrowseReport {
    pub category: String,
    pub visible: usize,
    pub label: String,
    pub cards: Vec<CardRow>,
}

#[derive(Serialize)]
pub struct CountReport {
    pub visible: usize,
    pub label: String,
}

#[derive(Serialize)]
pub struct SessionEventReport {
    pub event: String,
    pub visible: usize,
    pub label: String,
}
