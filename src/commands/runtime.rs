use crate::*;
use clap::ValueEnum;
use std::io::BufRead;
use std::time::{Duration, Instant};

pub fn handle_commands(
    cli: &Cli,
    source: &str,
    sink: &dyn AnalyticsSink,
    quiet: Duration,
) -> anyhow::Result<()> {
    let loaded = catalog::load_catalog(source)?;
    match &cli.command {
        Commands::Browse {
            query,
            max_price,
            min_rating,
            verified_only,
            protocol,
            sort,
            view,
        } => {
            let cards = catalog::parse_cards(&loaded);
            let mut ctl = CatalogController::new(cards, quiet);
            ctl.set_sort(*sort);
            ctl.set_view(*view);
            ctl.set_filters(FilterState {
                max_price: max_price.unwrap_or(DEFAULT_MAX_PRICE),
                min_rating: min_rating.unwrap_or(0.0),
                verified_only: *verified_only,
                protocol: protocol.clone(),
                search: query.clone().unwrap_or_default(),
            });
            let slug = slug_from_source(source);
            sink.category_view(&slug);

            let report = BrowseReport {
                category: slug,
                visible: ctl.visible_count(),
                label: ctl.results_line(),
                cards: ctl.visible_cards().into_iter().map(CardRow::from).collect(),
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                for row in &report.cards {
                    println!("{}", render_row(row, ctl.view()));
                }
                println!("{}", report.label);
            }
        }
        Commands::Count {
            query,
            max_price,
            min_rating,
            verified_only,
            protocol,
        } => {
            let cards = catalog::parse_cards(&loaded);
            let filters = FilterState {
                max_price: max_price.unwrap_or(DEFAULT_MAX_PRICE),
                min_rating: min_rating.unwrap_or(0.0),
                verified_only: *verified_only,
                protocol: protocol.clone(),
                search: query.clone().unwrap_or_default(),
            };
            let visible = compute_visibility(&cards, &filters).len();
            let report = CountReport {
                visible,
                label: results_label(visible),
            };
            print_one(cli.json, report, |r| r.label.clone())?;
        }
        Commands::Show { agent } => {
            let cards = catalog::parse_cards(&loaded);
            let card = catalog::find(&cards, agent)?;
            sink.agent_view(&card.id);
            let row = CardRow::from(card);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: row
                    })?
                );
            } else {
                println!("name: {}", row.name);
                println!("price: {}", price_label(row.price));
                println!("rating: {}", row.rating);
                println!("verified: {}", row.verified);
                println!("reviews: {}", row.review_count);
                if !row.protocols.is_empty() {
                    println!("protocols: {}", row.protocols.join(", "));
                }
                if !row.description.is_empty() {
                    println!("description: {}", row.description);
                }
            }
        }
        Commands::Session => {
            run_session(cli, &loaded, source, sink, quiet)?;
        }
        Commands::Validate => {
            catalog::validate(&loaded)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: "valid"
                    })?
                );
            } else {
                println!("catalog valid");
            }
        }
    }

    Ok(())
}

/// Stdin-driven control loop: one widget event per line, the same handlers
/// the page wires up. Filter events run a full filter+sort pass, `sort`
/// reorders only, `search` goes through the debouncer.
fn run_session(
    cli: &Cli,
    loaded: &catalog::Catalog,
    source: &str,
    sink: &dyn AnalyticsSink,
    quiet: Duration,
) -> anyhow::Result<()> {
    let cards = catalog::parse_cards(loaded);
    let mut ctl = CatalogController::new(cards, quiet);
    sink.category_view(&slug_from_source(source));
    emit(cli.json, "load", &ctl)?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let now = Instant::now();
        // a query queued earlier may have outlived its quiet period by now
        if ctl.tick(now) {
            emit(cli.json, "search", &ctl)?;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (event, rest) = match trimmed.split_once(' ') {
            Some((e, r)) => (e, r.trim()),
            None => (trimmed, ""),
        };

        if event == "search" {
            ctl.search_input(rest.to_string(), now);
            continue;
        }
        // any other control event settles the search box first
        if ctl.flush_search() {
            emit(cli.json, "search", &ctl)?;
        }

        match event {
            "max-price" => {
                ctl.set_max_price(rest.parse().unwrap_or(0.0));
                emit(cli.json, event, &ctl)?;
            }
            "min-rating" => {
                ctl.set_min_rating(rest.parse().unwrap_or(0.0));
                emit(cli.json, event, &ctl)?;
            }
            "verified" => {
                ctl.set_verified_only(rest == "on" || rest == "true");
                emit(cli.json, event, &ctl)?;
            }
            "protocol" => {
                let protocol = match rest {
                    "" | "any" => None,
                    tag => Some(tag.to_string()),
                };
                ctl.set_protocol(protocol);
                emit(cli.json, event, &ctl)?;
            }
            "sort" => {
                if let Ok(key) = SortKey::from_str(rest, true) {
                    ctl.set_sort(key);
                    emit(cli.json, event, &ctl)?;
                }
            }
            "view" => {
                if let Ok(mode) = ViewMode::from_str(rest, true) {
                    ctl.set_view(mode);
                    emit(cli.json, event, &ctl)?;
                }
            }
            "clear" => {
                ctl.clear_filters();
                emit(cli.json, event, &ctl)?;
            }
            "list" => {
                let rows: Vec<CardRow> =
                    ctl.visible_cards().into_iter().map(CardRow::from).collect();
                if cli.json {
                    println!("{}", serde_json::to_string(&JsonOut { ok: true, data: rows })?);
                } else {
                    for row in &rows {
                        println!("{}", render_row(row, ctl.view()));
                    }
                }
            }
            "count" => {
                emit(cli.json, event, &ctl)?;
            }
            // unknown events are ignored, the controls never error
            _ => {}
        }
    }

    // end of input settles any still-queued query
    if ctl.flush_search() {
        emit(cli.json, "search", &ctl)?;
    }
    Ok(())
}

fn emit(json: bool, event: &str, ctl: &CatalogController) -> anyhow::Result<()> {
    let report = SessionEventReport {
        event: event.to_string(),
        visible: ctl.visible_count(),
        label: ctl.results_line(),
    };
    if json {
        println!(
            "{}",
            serde_json::to_string(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        println!("{}\t{}", report.event, report.label);
    }
    Ok(())
}

fn render_row(row: &CardRow, view: ViewMode) -> String {
    match view {
        ViewMode::Grid => format!(
            "{}\t{}\t{}",
            row.name,
            row.rating,
            price_label(row.price)
        ),
        ViewMode::List => format!(
            "{}\t{}\t{}\t{}",
            row.name,
            price_label(row.price),
            row.protocols.join(","),
            row.description
        ),
    }
}

fn price_label(price: f64) -> String {
    if price > 0.0 {
        format!("${}/mo", price)
    } else {
        "free".to_string()
    }
}
