//! Command-line interface for fuzzy-xml
//! This binary parses XML-like text (typically captured LLM output) and
//! renders the recovered node tree in a chosen format.
//!
//! Usage:
//!   fuzzy-xml parse `<path>` [--format `<format>`]  - Parse a file (or `-` for stdin)
//!   fuzzy-xml formats                             - List available output formats

use clap::{Arg, Command};
use fuzzy_xml::formats::FormatRegistry;
use std::io::Read;

fn main() {
    let matches = Command::new("fuzzy-xml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A lenient parser for XML-like text in LLM output")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print the recovered node tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'json', 'treeviz')")
                        .default_value("json"),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        Some(("formats", _)) => {
            handle_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    let nodes = fuzzy_xml::parse(&source);

    let registry = FormatRegistry::with_defaults();
    let output = registry.serialize(&nodes, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output.trim_end_matches('\n'));
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for (name, description) in registry.list_formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}
