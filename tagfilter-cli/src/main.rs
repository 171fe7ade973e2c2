use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tagfilter::{OutputContext, Policy, Sanitizer, Scanner, Segment};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tagfilter", version)]
#[command(about = "Filter untrusted markup, color values and script text")]
struct Cli {
    /// Log rewrites to stderr (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter markup for a document body
    Html {
        #[command(flatten)]
        source: Source,

        /// JSON policy file with `allowed_tags` / `denied_attributes`
        #[arg(long)]
        policy: Option<PathBuf>,
    },

    /// Validate CSS color values
    Color {
        #[command(flatten)]
        source: Source,
    },

    /// Neutralize text headed for a script block
    Js {
        #[command(flatten)]
        source: Source,
    },

    /// Show how markup is split into text and tag segments
    Scan {
        /// Markup to scan
        #[arg(short, long)]
        input: String,
    },
}

#[derive(Args)]
struct Source {
    /// Input string to filter
    #[arg(short, long)]
    input: Option<String>,

    /// File containing inputs (one per line)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct Filtered {
    input: String,
    output: String,
    changed: bool,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_policy(path: &Path) -> Result<Policy> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read policy file: {}", path.display()))?;
    Policy::from_json(&contents)
        .with_context(|| format!("Failed to parse policy file: {}", path.display()))
}

fn read_inputs_from_file(file_path: &Path) -> Result<Vec<String>> {
    let file = fs::File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path.display()))?;
    let reader = BufReader::new(file);

    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read line")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }

    Ok(inputs)
}

fn collect_inputs(source: &Source) -> Result<Vec<String>> {
    if let Some(input) = &source.input {
        Ok(vec![input.clone()])
    } else if let Some(file) = &source.file {
        read_inputs_from_file(file)
    } else {
        anyhow::bail!("Either --input or --file must be specified");
    }
}

fn filter_inputs(
    sanitizer: &Sanitizer,
    context: OutputContext,
    inputs: Vec<String>,
) -> Vec<Filtered> {
    inputs
        .into_iter()
        .map(|input| {
            let output = sanitizer.sanitize(context, &input);
            let changed = output != input;
            Filtered {
                input,
                output,
                changed,
            }
        })
        .collect()
}

fn run_filter(sanitizer: &Sanitizer, context: OutputContext, source: &Source) -> Result<()> {
    let inputs = collect_inputs(source)?;
    info!(%context, count = inputs.len(), "filtering inputs");

    let results = filter_inputs(sanitizer, context, inputs);

    if source.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in results {
            println!("{}", result.output);
        }
    }

    Ok(())
}

fn run_scan(sanitizer: &Sanitizer, input: &str) {
    for segment in Scanner::new(input) {
        match segment {
            Segment::PlainText(_) => println!("{}", segment),
            Segment::Tag(tag) => {
                let outcome = sanitizer.inspect_tag(tag);
                println!("{} -> {:?} [{}]", segment, outcome.output, outcome.rewrites);
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Html { source, policy } => {
            let sanitizer = match policy {
                Some(path) => {
                    debug!(path = %path.display(), "loading policy");
                    Sanitizer::with_policy(load_policy(&path)?)
                }
                None => Sanitizer::new(),
            };
            run_filter(&sanitizer, OutputContext::Html, &source)?;
        }

        Commands::Color { source } => {
            run_filter(&Sanitizer::new(), OutputContext::Color, &source)?;
        }

        Commands::Js { source } => {
            run_filter(&Sanitizer::new(), OutputContext::Script, &source)?;
        }

        Commands::Scan { input } => {
            run_scan(&Sanitizer::new(), &input);
        }
    }

    Ok(())
}
