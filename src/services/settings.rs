use crate::domain::constants::SEARCH_DEBOUNCE_MS;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub general: SettingsGeneral,
}

#[derive(Debug, Deserialize)]
pub struct SettingsGeneral {
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for SettingsGeneral {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            search_debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_catalog() -> String {
    "./catalog.json".to_string()
}

fn default_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

pub fn load_settings() -> anyhow::Result<SettingsFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/agrid/config.toml");
    if !path.exists() {
        return Ok(SettingsFile {
            general: SettingsGeneral::default(),
        });
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let parsed: SettingsFile = toml::from_str("").expect("empty settings parse");
        assert_eq!(parsed.general.catalog, "./catalog.json");
        assert_eq!(parsed.general.search_debounce_ms, 300);
    }

    #[test]
    fn partial_general_section_keeps_remaining_defaults() {
        let parsed: SettingsFile = toml::from_str(
            r#"[general]
search_debounce_ms = 150
"#,
        )
        .expect("partial settings parse");
        assert_eq!(parsed.general.search_debounce_ms, 150);
        assert_eq!(parsed.general.catalog, "./catalog.json");
    }
}
