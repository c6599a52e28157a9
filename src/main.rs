use anyhow::bail;
use clap::Parser;
use flower_search::catalog::{Catalog, partition_by_category};
use flower_search::cli::Cli;
use flower_search::error::Result;
use flower_search::search::{Matcher, Scope, results_summary};

fn main() -> Result<()> {
    flower_search::tracing::init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample(),
    };

    let Some(scope) = Scope::from_label(&cli.scope) else {
        bail!(
            "unknown scope '{}' (expected one of: {})",
            cli.scope,
            Scope::labels().join(", ").to_lowercase()
        );
    };

    if cli.query.trim().is_empty() && scope == Scope::All {
        // No filter at all: show the catalog grouped by category, the way
        // the sectioned table does.
        for (category, group) in partition_by_category(catalog.items()) {
            println!("{category}");
            for item in group {
                println!(
                    "  {} | {} | {}",
                    item.name(),
                    item.formatted_price(),
                    item.year_introduced()
                );
            }
        }
        return Ok(());
    }

    let matcher = Matcher::new(cli.decimal_separator.into());
    let results = matcher.filter(catalog.items(), &cli.query, scope);

    for item in &results {
        println!(
            "{} | {} | {}",
            item.name(),
            item.formatted_price(),
            item.year_introduced()
        );
    }
    println!("{}", results_summary(&results));

    Ok(())
}
