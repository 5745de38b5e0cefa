use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub catalog: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let catalog = make_fixture_catalog(tmp.path());

        // a quiet period far beyond any scheduler hiccup keeps piped
        // session input deterministic: queued queries settle on flush only
        let config_dir = home.join(".config/agrid");
        fs::create_dir_all(&config_dir).expect("create config dir");
        fs::write(
            config_dir.join("config.toml"),
            "[general]\nsearch_debounce_ms = 60000\n",
        )
        .expect("write settings");

        Self {
            _tmp: tmp,
            home,
            catalog,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("agrid").expect("agrid binary");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--catalog")
            .arg(self.catalog.to_str().expect("catalog path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Three-card category mirroring the canonical example: a priced verified
/// card, a free unverified one, and an expensive top-rated one.
pub fn make_fixture_catalog(base: &Path) -> PathBuf {
    let dir = base.join("catalogs/marketing-agents");
    fs::create_dir_all(dir.join(".agrid")).expect("create .agrid");

    let catalog = serde_json::json!({
        "category": "marketing-agents",
        "cards": [
            {
                "id": "copy-smith",
                "name": "CopySmith",
                "description": "Long-form marketing copy agent",
                "price": "100",
                "rating": "4.5",
                "verified": "true",
                "protocols": ["mcp"],
                "reviews": "40 reviews"
            },
            {
                "id": "free-scout",
                "name": "FreeScout",
                "description": "Inbox triage agent",
                "price": "0",
                "rating": "3.0",
                "protocols": ["a2a"],
                "reviews": "250 reviews"
            },
            {
                "id": "code-pilot",
                "name": "CodePilot",
                "description": "Pair-programming agent",
                "price": "300",
                "rating": "5.0",
                "verified": "true",
                "protocols": ["mcp", "a2a"],
                "reviews": "12 reviews"
            }
        ]
    });
    fs::write(
        dir.join(".agrid/catalog.json"),
        serde_json::to_string_pretty(&catalog).expect("serialize catalog"),
    )
    .expect("write catalog");

    dir
}
