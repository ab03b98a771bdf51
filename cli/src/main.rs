use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use enum_name_map_gen::emitter::format_table;
use enum_name_map_gen::{parse_enum_text, parse_enum_text_with_report};

#[derive(Debug, Parser)]
#[command(name = "enum-name-map")]
#[command(about = "Generate enum value-to-display-string map tables from assignment lines")]
struct Cli {
    /// Number of tab characters prefixed to every emitted line.
    #[arg(value_name = "DEPTH")]
    depth: usize,
    /// Map name accepted for compatibility with older invocations; unused.
    #[arg(value_name = "NAME")]
    name: Option<String>,
    /// Read assignment lines from a file instead of standard input.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Print a JSON parse report to standard error after the table.
    #[arg(long)]
    report: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    // NAME is parsed for invocation compatibility; nothing consumes it.
    let Cli {
        depth,
        name: _name,
        input,
        report,
    } = cli;

    let text = read_input(input.as_ref())?;

    if report {
        let run = parse_enum_text_with_report(&text).map_err(|err| err.to_string())?;
        print!("{}", format_table(&run.table, depth));
        let json = serde_json::to_string_pretty(&run.report)
            .map_err(|err| format!("Failed to serialize report: {err}"))?;
        eprintln!("{json}");
    } else {
        let table = parse_enum_text(&text).map_err(|err| err.to_string())?;
        print!("{}", format_table(&table, depth));
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String, String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("Failed to read '{}': {err}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| format!("Failed to read stdin: {err}"))?;
            Ok(text)
        }
    }
}
