use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "agrid", version, about = "Agent catalog browse CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog source (catalog.json or a directory containing .agrid/catalog.json)"
    )]
    pub catalog: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Browse {
        query: Option<String>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long, default_value_t = false)]
        verified_only: bool,
        #[arg(long)]
        protocol: Option<String>,
        #[arg(long, value_enum, default_value_t = SortKey::Rating)]
        sort: SortKey,
        #[arg(long, value_enum, default_value_t = ViewMode::Grid)]
        view: ViewMode,
    },
    Count {
        query: Option<String>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long, default_value_t = false)]
        verified_only: bool,
        #[arg(long)]
        protocol: Option<String>,
    },
    Show {
        agent: String,
    },
    Session,
    Validate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Rating,
    Popularity,
    PriceLow,
    PriceHigh,
    Newest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    List,
}
