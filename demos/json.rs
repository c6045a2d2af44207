//! Pretty print a JSON file.
//!
//!     cargo run --example json -- data.json --width 40

use clap::Parser;
use pareto_pretty_printer::examples::json::{
    json_bool, json_dict, json_list, json_null, json_string, Json,
};
use pareto_pretty_printer::{DefaultCost, PrintOptions, Width};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(about = "Pretty print a JSON file using its optimal layout")]
struct Args {
    /// The JSON file to print.
    path: PathBuf,
    /// Maximum line width. Defaults to the width of the terminal, or 80.
    #[arg(short, long)]
    width: Option<Width>,
    /// Print the cost of the chosen layout.
    #[arg(long)]
    cost: bool,
}

fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => json_null(),
        Value::Bool(b) => json_bool(*b),
        Value::Number(n) => Json::Number(n.to_string()),
        Value::String(s) => json_string(s),
        Value::Array(elements) => json_list(elements.iter().map(to_json).collect()),
        Value::Object(entries) => json_dict(
            entries
                .iter()
                .map(|(key, value)| (key.as_str(), to_json(value)))
                .collect(),
        ),
    }
}

fn main() {
    let args = Args::parse();

    let source = match fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args.path.display(), err);
            process::exit(1);
        }
    };
    let value: Value = match serde_json::from_str(&source) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Invalid JSON in {}: {}", args.path.display(), err);
            process::exit(1);
        }
    };

    let width = args.width.unwrap_or_else(|| match termion::terminal_size() {
        Ok((cols, _rows)) => Width::from(cols),
        Err(_) => PrintOptions::default().width,
    });
    let options = PrintOptions {
        width,
        ..PrintOptions::default()
    };
    let printed = options.pretty_print::<DefaultCost>(&to_json(&value).to_doc());
    println!("{}", printed.text);
    if printed.is_tainted {
        eprintln!("(Could not fit within {} columns.)", width);
    }
    if args.cost {
        eprintln!("cost: {}", printed.cost);
    }
}
