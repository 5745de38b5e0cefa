use std::path::PathBuf;

/// Placeholder analytics reporting sink. Transport and backend are out of
/// scope; implementations only need to accept the two event kinds.
pub trait AnalyticsSink {
    fn agent_view(&self, agent_id: &str);
    fn category_view(&self, category_slug: &str);
}

/// Stub sink: appends one JSON line per event under the config dir.
/// Best effort, a failed write is never surfaced.
pub struct JsonlSink;

impl JsonlSink {
    fn record(&self, event: &str, data: serde_json::Value) {
        let home = match std::env::var("HOME") {
            Ok(h) => h,
            Err(_) => return,
        };
        let path = PathBuf::from(home).join(".config/agrid/analytics.jsonl");
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let line = format!(
            "{}\n",
            serde_json::json!({
                "ts": epoch_secs(),
                "event": event,
                "data": data
            })
        );
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
    }
}

impl AnalyticsSink for JsonlSink {
    fn agent_view(&self, agent_id: &str) {
        self.record("agent_view", serde_json::json!({ "agent": agent_id }));
    }

    fn category_view(&self, category_slug: &str) {
        self.record("category_view", serde_json::json!({ "category": category_slug }));
    }
}

fn epoch_secs() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}

/// Category identifier: the final path segment of the catalog source,
/// without the document extension.
pub fn slug_from_source(source: &str) -> String {
    let trimmed = source.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    last.strip_suffix(".json").unwrap_or(last).to_string()
}
