//! `multival` CLI: normalize JSON, read loosely typed values, and convert YAML.
//!
//! ## Usage
//!
//! ```sh
//! # Canonicalize a JSON object (stdin → stdout)
//! echo '{ "price": 1.50, "tags": [ "a" ] }' | multival normalize
//!
//! # Canonicalize a top-level array from a file
//! multival normalize --sequence -i rows.json -o rows.min.json
//!
//! # Read one value by dotted path and coerce it
//! multival get order.lines.0.quantity --as int -i order.json
//!
//! # YAML document → canonical JSON
//! multival yaml -i settings.yaml
//!
//! # Split a delimited setting string
//! multival split "host;db01, port;5432"
//! multival split "red, green, blue" --list
//! ```
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` or pass `-v`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use multival_core::settings::{self, DEFAULT_LIST_SEPARATOR, DEFAULT_PAIR_SEPARATOR};
use multival_core::{coerce, Mapping, Value};

#[derive(Parser)]
#[command(
    name = "multival",
    version,
    about = "Ordered JSON containers with total type coercion"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log swallowed parse failures to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON leniently and print it in canonical form
    Normalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Expect a top-level array instead of an object
        #[arg(long)]
        sequence: bool,
    },
    /// Read the value at a dotted path and coerce it to a type
    Get {
        /// Dotted path; numeric segments index into arrays (e.g. `items.0.id`)
        path: String,
        /// Target type of the coercion
        #[arg(long = "as", value_enum, default_value_t = Target::String)]
        target: Target,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Convert a YAML document to canonical JSON
    Yaml {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Keep keys verbatim instead of folding them to snake_case
        #[arg(long)]
        case_sensitive: bool,
    },
    /// Split a delimited setting string into key/value pairs
    Split {
        /// The raw setting text
        text: String,
        /// Separator between items
        #[arg(long, default_value = DEFAULT_LIST_SEPARATOR)]
        list_sep: String,
        /// Separator between a key and its value
        #[arg(long, default_value = DEFAULT_PAIR_SEPARATOR)]
        pair_sep: String,
        /// Print the items as a plain list instead of key/value pairs
        #[arg(long)]
        list: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    String,
    Bool,
    Decimal,
    Double,
    Int,
    Uint,
    Long,
    Ulong,
    Uuid,
    Datetime,
    Date,
    Time,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Normalize {
            input,
            output,
            sequence,
        } => {
            let json = read_input(input.as_deref())?;
            let canonical = if sequence {
                multival_core::to_json(&multival_core::parse_json_to_sequence(&json))
            } else {
                multival_core::to_json(&multival_core::parse_json_to_mapping(&json))
            };
            write_output(output.as_deref(), &canonical)?;
        }
        Commands::Get {
            path,
            target,
            input,
        } => {
            let json = read_input(input.as_deref())?;
            let root = multival_core::parse_json_to_mapping(&json);
            let leaf = lookup_path(&root, &path);
            tracing::debug!(path = %path, kind = leaf.kind(), "resolved path");
            println!("{}", render(leaf, target));
        }
        Commands::Yaml {
            input,
            output,
            case_sensitive,
        } => {
            let yaml = read_input(input.as_deref())?;
            let mapping: Mapping = multival_core::deserialize_yaml(&yaml, case_sensitive)
                .context("Failed to read YAML document")?;
            write_output(output.as_deref(), &multival_core::to_json(&mapping))?;
        }
        Commands::Split {
            text,
            list_sep,
            pair_sep,
            list,
        } => {
            let json = if list {
                multival_core::to_json(&settings::split_list(&text, &list_sep))
            } else {
                multival_core::to_json(&settings::split_pairs(&text, &list_sep, &pair_sep))
            };
            println!("{}", json);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("multival={level},multival_core={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

static NULL: Value = Value::Null;

/// Walk `path` through nested mappings and sequences. Any miss yields `Null`.
fn lookup_path<'a>(root: &'a Mapping, path: &str) -> &'a Value {
    let mut segments = path.split('.');
    let mut current = match segments.next() {
        Some(first) => &root[first],
        None => &NULL,
    };
    for segment in segments {
        current = match current {
            Value::Mapping(m) => &m[segment],
            Value::Sequence(s) => segment
                .parse::<usize>()
                .ok()
                .and_then(|i| s.get(i))
                .unwrap_or(&NULL),
            _ => &NULL,
        };
    }
    current
}

fn render(value: &Value, target: Target) -> String {
    match target {
        Target::String => coerce::to_string(value),
        Target::Bool => coerce::to_bool(value).to_string(),
        Target::Decimal => coerce::to_decimal(value).to_string(),
        Target::Double => coerce::to_f64(value).to_string(),
        Target::Int => coerce::to_i32(value).to_string(),
        Target::Uint => coerce::to_u32(value).to_string(),
        Target::Long => coerce::to_i64(value).to_string(),
        Target::Ulong => coerce::to_u64(value).to_string(),
        Target::Uuid => coerce::to_uuid(value).to_string(),
        Target::Datetime => Value::DateTime(coerce::to_datetime(value)).to_string(),
        Target::Date => coerce::to_date(value).to_string(),
        Target::Time => coerce::to_time(value).to_string(),
        Target::Json => multival_core::to_json(value),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
