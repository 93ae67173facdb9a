//! Command-line interface for qex
//!
//! Explains a CSS selector or XPath expression in plain English.
//!
//! Usage:
//!   qex css `<selector>`             - Explain a CSS selector
//!   qex xpath `<expression>`         - Explain an XPath expression
//!   qex css --format json `<sel>`    - Emit the explanation map as JSON
//!
//! When no expression argument is given the input is read from stdin.

use clap::{Arg, Command};
use std::io::Read;

use qex::{explain, ExplanationMap, Grammar};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("qex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Explains CSS selectors and XPath expressions in plain English")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(grammar_command("css", "Explain a CSS selector"))
        .subcommand(grammar_command("xpath", "Explain an XPath expression"))
        .get_matches();

    let (grammar, sub_matches) = match matches.subcommand() {
        Some(("css", m)) => (Grammar::Css, m),
        Some(("xpath", m)) => (Grammar::XPath, m),
        _ => unreachable!("subcommand is required"),
    };

    let input = match sub_matches.get_one::<String>("expression") {
        Some(expression) => expression.clone(),
        None => read_stdin(),
    };
    let format = sub_matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    match explain(input.trim(), grammar) {
        Ok(map) => print_explanations(&map, format),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn grammar_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("expression")
                .help("The expression to explain; read from stdin when omitted")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
}

fn read_stdin() -> String {
    let mut buffer = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
        eprintln!("failed to read stdin: {}", err);
        std::process::exit(1);
    }
    buffer
}

fn print_explanations(map: &ExplanationMap, format: &str) {
    match format {
        "json" => match serde_json::to_string_pretty(map) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("failed to serialize explanations: {}", err);
                std::process::exit(1);
            }
        },
        _ => {
            // Deterministic order regardless of map iteration order
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                println!("{}", map[key].description);
            }
        }
    }
}
