use clap::Parser;
use std::process;

use dogam_core::{BrowserState, Catalog, Category, FacetValue};

mod commands;
mod render;

/// Heartopia field guide - browse and filter the reference catalog
///
/// Examples:
///   # List every fish
///   dogam --category fish
///
///   # Search across names, locations and crops
///   dogam --category fish --search 붕어
///
///   # Narrow with facets (repeatable; OR within a facet, AND across facets)
///   dogam --category fish --facet level=3 --facet weather=🌈
///
///   # Show the facet vocabulary for a category
///   dogam --category fish --options
///
///   # Browse interactively
///   dogam --interactive
#[derive(Parser, Debug)]
#[command(name = "dogam")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the seven collection files (fish.json, bird.json, ...)
    #[arg(value_name = "DIR", default_value = "data")]
    data_dir: String,

    /// Active category tab
    #[arg(short, long, value_name = "ID", default_value = "fish")]
    category: String,

    /// Free-text search over names, locations and crops
    #[arg(short, long, value_name = "TERM", default_value = "")]
    search: String,

    /// Facet selection (format: facet=value, can be specified multiple times)
    #[arg(short, long = "facet", value_name = "NAME=VALUE")]
    facets: Vec<String>,

    /// Print the category's facet vocabulary instead of records
    #[arg(short, long)]
    options: bool,

    /// Start an interactive browsing shell
    #[arg(short, long)]
    interactive: bool,
}

fn main() {
    let cli = Cli::parse();

    let catalog = Catalog::load_dir(&cli.data_dir).unwrap_or_else(|err| {
        eprintln!("Error loading catalog from '{}': {}", cli.data_dir, err);
        process::exit(1);
    });

    let category: Category = cli.category.parse().unwrap_or_else(|err: String| {
        eprintln!("Error: {}", err);
        process::exit(1);
    });

    let mut state = BrowserState::new();
    state.set_category(category);
    state.set_search_term(cli.search);

    for facet_arg in &cli.facets {
        match parse_facet_arg(facet_arg) {
            Ok(value) => state.toggle_facet_value(value),
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
    }

    if cli.interactive {
        if let Err(err) = commands::run_shell(&catalog, &mut state) {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
        return;
    }

    if cli.options {
        render::print_facet_options(catalog.records(state.category), state.category);
        return;
    }

    render::print_results(&catalog, &state);
}

/// Parse a `facet=value` command-line argument.
fn parse_facet_arg(raw: &str) -> Result<FacetValue, String> {
    match raw.split_once('=') {
        Some((name, value)) => FacetValue::parse(name.trim(), value.trim()),
        None => Err(format!(
            "invalid facet format '{}', expected 'name=value'",
            raw
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_facet_arg() {
        assert_eq!(parse_facet_arg("level=3"), Ok(FacetValue::Level(3)));
        assert_eq!(
            parse_facet_arg("shadow = 대형"),
            Ok(FacetValue::Shadow("대형".to_string()))
        );
        assert!(parse_facet_arg("level").is_err());
        assert!(parse_facet_arg("color=red").is_err());
    }
}
