use clap::Parser;
use std::time::Duration;

mod catalog;
mod cli;
mod commands;
mod domain;
mod services;

pub use catalog::CatalogError;
pub use cli::{Cli, Commands, SortKey, ViewMode};
pub use domain::constants::*;
pub use domain::models::*;
pub use services::analytics::{slug_from_source, AnalyticsSink, JsonlSink};
pub use services::controller::CatalogController;
pub use services::filter::{compute_visibility, passes_filters, results_label};
pub use services::output::{print_error, print_one};
pub use services::settings::load_settings;
pub use services::sort::compute_order;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        print_error(cli.json, error_code(&err), &err.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let source = cli
        .catalog
        .clone()
        .unwrap_or(settings.general.catalog);
    let quiet = Duration::from_millis(settings.general.search_debounce_ms);
    commands::handle_commands(cli, &source, &JsonlSink, quiet)
}

fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<CatalogError>() {
        Some(CatalogError::AgentNotFound(_)) => "NOT_FOUND",
        Some(CatalogError::DuplicateAgent(_)) => "INVALID_CATALOG",
        None => "CATALOG_ERROR",
    }
}
