use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use dogam_core::{BrowserState, Catalog, Category, FacetValue};

use crate::render;

/// One interactive command, mirroring the guide's UI actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tab(Category),
    Search(String),
    Toggle(FacetValue),
    Clear,
    List,
    Options,
    Help,
    Quit,
}

impl Command {
    /// Parse a shell line. Errors are user-facing messages, not faults.
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "tab" => rest.parse::<Category>().map(Command::Tab),
            "search" => Ok(Command::Search(rest.to_string())),
            "toggle" => match rest.split_once('=') {
                Some((name, value)) => {
                    FacetValue::parse(name.trim(), value.trim()).map(Command::Toggle)
                }
                None => Err(format!(
                    "invalid facet format '{}', expected 'name=value'",
                    rest
                )),
            },
            "clear" => Ok(Command::Clear),
            "list" | "" => Ok(Command::List),
            "options" => Ok(Command::Options),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{}', try 'help'", other)),
        }
    }
}

/// Read-eval-print loop over the catalog. Every mutation re-renders the
/// filtered view, the way the original page re-renders on each state
/// change.
pub fn run_shell(catalog: &Catalog, state: &mut BrowserState) -> Result<()> {
    println!("{}", "🌈 Heartopia 도감".bold());
    print_help();
    render::print_results(catalog, state);

    let stdin = io::stdin();
    loop {
        print!("{} ", "dogam>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::Options) => {
                render::print_facet_options(catalog.records(state.category), state.category)
            }
            Ok(Command::List) => render::print_results(catalog, state),
            Ok(Command::Tab(category)) => {
                state.set_category(category);
                render::print_results(catalog, state);
            }
            Ok(Command::Search(term)) => {
                state.set_search_term(term);
                render::print_results(catalog, state);
            }
            Ok(Command::Toggle(value)) => {
                state.toggle_facet_value(value);
                render::print_results(catalog, state);
            }
            Ok(Command::Clear) => {
                state.clear_all_filters();
                render::print_results(catalog, state);
            }
            Err(err) => println!("{} {}", "error:".red().bold(), err),
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "commands: tab <category> | search <term> | toggle <facet>=<value> | \
         clear | list | options | help | quit"
    );
    println!(
        "categories: {}",
        Category::ALL
            .iter()
            .map(|c| c.id())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab() {
        assert_eq!(Command::parse("tab garden"), Ok(Command::Tab(Category::Garden)));
        assert!(Command::parse("tab plants").is_err());
    }

    #[test]
    fn test_parse_search_keeps_the_whole_term() {
        assert_eq!(
            Command::parse("search 깊은 바다"),
            Ok(Command::Search("깊은 바다".to_string()))
        );
        assert_eq!(Command::parse("search"), Ok(Command::Search(String::new())));
    }

    #[test]
    fn test_parse_toggle() {
        assert_eq!(
            Command::parse("toggle level=3"),
            Ok(Command::Toggle(FacetValue::Level(3)))
        );
        assert_eq!(
            Command::parse("toggle weather=🌈"),
            Ok(Command::Toggle(FacetValue::Weather("🌈".to_string())))
        );
        assert!(Command::parse("toggle level").is_err());
        assert!(Command::parse("toggle color=red").is_err());
    }

    #[test]
    fn test_blank_line_lists() {
        assert_eq!(Command::parse("   "), Ok(Command::List));
    }

    #[test]
    fn test_unknown_verb_is_an_error() {
        assert!(Command::parse("frobnicate").is_err());
    }
}
