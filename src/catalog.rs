use crate::domain::models::AgentCard;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Catalog document as rendered by the server. Card attributes arrive as
/// strings; `parse_cards` is the only place they become typed.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cards: Vec<RawCard>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RawCard {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub verified: Option<String>,
    #[serde(default)]
    pub protocols: Vec<String>,
    pub reviews: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("agent not found: {0}")]
    AgentNotFound(String),
    #[error("duplicate agent id: {0}")]
    DuplicateAgent(String),
}

pub fn resolve_catalog_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join(".agrid").join("catalog.json")
    } else {
        p.to_path_buf()
    }
}

pub fn load_catalog(source: &str) -> anyhow::Result<Catalog> {
    let file = resolve_catalog_file(source);
    let raw = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Parse every raw card into a typed record. Never fails: unparseable
/// numbers become 0 and missing attributes take their falsy defaults.
pub fn parse_cards(catalog: &Catalog) -> Vec<AgentCard> {
    catalog.cards.iter().map(parse_card).collect()
}

fn parse_card(raw: &RawCard) -> AgentCard {
    let description = raw.description.clone().unwrap_or_default();
    let reviews = raw.reviews.clone().unwrap_or_default();
    let haystack = format!(
        "{} {} {} {}",
        raw.name,
        description,
        raw.protocols.join(" "),
        reviews
    )
    .to_lowercase();

    AgentCard {
        id: raw.id.clone(),
        name: raw.name.clone(),
        description,
        price: parse_number(raw.price.as_deref()),
        rating: parse_number(raw.rating.as_deref()),
        verified: raw.verified.as_deref() == Some("true"),
        protocols: raw.protocols.clone(),
        review_count: first_uint(&reviews),
        haystack,
    }
}

fn parse_number(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// First run of decimal digits in the label, e.g. "128 reviews" -> 128.
fn first_uint(text: &str) -> u32 {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

pub fn find<'a>(cards: &'a [AgentCard], id: &str) -> anyhow::Result<&'a AgentCard> {
    cards
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| CatalogError::AgentNotFound(id.to_string()).into())
}

pub fn validate(catalog: &Catalog) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for c in &catalog.cards {
        if !seen.insert(&c.id) {
            return Err(CatalogError::DuplicateAgent(c.id.clone()).into());
        }
    }
    Ok(())
}
