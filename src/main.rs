//! proofmap CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use proofmap::{DeepNodePolicy, GraphStore, LayoutConfig, ProofMapError, compose_all, export};

/// Lay out a numbered proof corpus and query its hierarchy.
#[derive(Parser, Debug)]
#[command(
    name = "proofmap",
    version = env!("PROOFMAP_VERSION"),
    about = "Lay out a numbered proof corpus and query its hierarchy"
)]
struct Cli {
    /// Log lookup diagnostics to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out chapters side by side and print node coordinates as JSON
    Layout(LayoutArgs),
    /// Print the flat node table with proves/provenBy lists
    Table(TableArgs),
    /// Print ids of the nodes one level below NUMBER, one per line
    Children {
        number: String,
        /// Record file (reads from stdin if not provided)
        input: Option<String>,
    },
    /// Print the id of NUMBER's parent node
    Parent {
        number: String,
        /// Record file (reads from stdin if not provided)
        input: Option<String>,
    },
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Record file (reads from stdin if not provided)
    input: Option<String>,

    /// Lay out only these chapters (repeatable)
    #[arg(short = 'c', long = "chapter")]
    chapters: Vec<u64>,

    /// Skip these chapters when laying out all of them (repeatable)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<u64>,

    /// Distance between neighbouring nodes
    #[arg(long = "pad")]
    pad: Option<i64>,

    /// Horizontal gap between chapters
    #[arg(long = "gap")]
    gap: Option<i64>,

    /// Handling of numbers nested five or more levels deep
    #[arg(long = "deep-nodes", value_enum)]
    deep_nodes: Option<DeepNodePolicy>,

    /// JSON layout config file; flags override its values
    #[arg(long = "config")]
    config: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Record file (reads from stdin if not provided)
    input: Option<String>,

    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    format: TableFormat,

    /// Keep only nodes whose property KEY equals VALUE (repeatable)
    #[arg(short = 'w', long = "where", value_name = "KEY=VALUE", value_parser = parse_filter)]
    filters: Vec<(String, String)>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TableFormat {
    Json,
    Csv,
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}

fn read_input(path: Option<&str>) -> Result<String, ProofMapError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn load_store(path: Option<&str>) -> Result<GraphStore, ProofMapError> {
    GraphStore::from_json_str(&read_input(path)?)
}

fn layout_config(args: &LayoutArgs) -> Result<LayoutConfig, ProofMapError> {
    let mut config = match &args.config {
        Some(path) => LayoutConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    if let Some(pad) = args.pad {
        config.pad = pad;
    }
    if let Some(gap) = args.gap {
        config.gap = gap;
    }
    if let Some(policy) = args.deep_nodes {
        config.deep_nodes = policy;
    }
    config.excluded_chapters.extend(args.exclude.iter().copied());
    config.validate()?;
    Ok(config)
}

/// Run one subcommand. Returns the text to print and the output path, if any.
fn run(command: &Command) -> Result<(String, Option<&str>), ProofMapError> {
    match command {
        Command::Layout(args) => {
            let config = layout_config(args)?;
            let store = load_store(args.input.as_deref())?;
            let chapters = (!args.chapters.is_empty()).then_some(args.chapters.as_slice());
            let composed = compose_all(&store, chapters, &config)?;
            let mut text = serde_json::to_string_pretty(&composed)?;
            text.push('\n');
            Ok((text, args.output.as_deref()))
        }
        Command::Table(args) => {
            let store = load_store(args.input.as_deref())?;
            let predicate: Vec<(&str, &str)> = args
                .filters
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            let nodes = store.by_properties(&predicate);
            let text = match args.format {
                TableFormat::Json => {
                    let mut text = export::nodes_to_json(nodes)?;
                    text.push('\n');
                    text
                }
                TableFormat::Csv => export::nodes_to_csv(nodes)?,
            };
            Ok((text, args.output.as_deref()))
        }
        Command::Children { number, input } => {
            let store = load_store(input.as_deref())?;
            let text: String = store
                .children_of(number)
                .into_iter()
                .map(|id| id + "\n")
                .collect();
            Ok((text, None))
        }
        Command::Parent { number, input } => {
            let store = load_store(input.as_deref())?;
            let text = store
                .parent_of(number)
                .map(|id| id + "\n")
                .unwrap_or_default();
            Ok((text, None))
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let (text, output) = match run(&cli.command) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(path) = output {
        if let Err(e) = fs::write(path, text) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", text);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
