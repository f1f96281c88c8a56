use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use suft::output::print_match;
use suft::tree::{Alphabet, SuffixTree};

#[derive(Parser)]
#[command(name = "suft")]
#[command(about = "Suffix-tree substring index: linear-time build, pattern-time search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pattern to look up (when no subcommand is given)
    pattern: Option<String>,

    /// Text to index
    #[arg(short, long)]
    text: Option<String>,

    /// Read the text to index from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Alphabet preset: ascii, lower, dna
    #[arg(short, long, default_value = "ascii")]
    alphabet: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one or more patterns in a text
    Find {
        /// Patterns to look up
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Text to index
        #[arg(short, long)]
        text: Option<String>,

        /// Read the text to index from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Alphabet preset: ascii, lower, dna
        #[arg(short, long, default_value = "ascii")]
        alphabet: String,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show structural statistics of the built tree
    Stats {
        /// Text to index
        #[arg(short, long)]
        text: Option<String>,

        /// Read the text to index from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Alphabet preset: ascii, lower, dna
        #[arg(short, long, default_value = "ascii")]
        alphabet: String,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Find {
            patterns,
            text,
            file,
            alphabet,
            no_color,
        }) => run_find(&patterns, text, file, &alphabet, no_color),
        Some(Commands::Stats {
            text,
            file,
            alphabet,
            json,
        }) => run_stats(text, file, &alphabet, json),
        None => match cli.pattern {
            Some(pattern) => run_find(
                std::slice::from_ref(&pattern),
                cli.text,
                cli.file,
                &cli.alphabet,
                cli.no_color,
            ),
            None => bail!("no pattern given; try `suft --help`"),
        },
    }
}

fn load_text(text: Option<String>, file: Option<PathBuf>) -> Result<Vec<u8>> {
    match (text, file) {
        (Some(text), None) => Ok(text.into_bytes()),
        (None, Some(path)) => {
            std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))
        }
        (Some(_), Some(_)) => bail!("--text and --file are mutually exclusive"),
        (None, None) => bail!("no text given; pass --text or --file"),
    }
}

fn parse_alphabet(name: &str) -> Result<Alphabet> {
    match name {
        "ascii" => Ok(Alphabet::ascii_printable()),
        "lower" => Ok(Alphabet::lowercase()),
        "dna" => Ok(Alphabet::dna()),
        other => bail!("unknown alphabet {other:?} (expected ascii, lower or dna)"),
    }
}

fn run_find(
    patterns: &[String],
    text: Option<String>,
    file: Option<PathBuf>,
    alphabet: &str,
    no_color: bool,
) -> Result<()> {
    let source = load_text(text, file)?;
    let tree = SuffixTree::build(source, parse_alphabet(alphabet)?)?;

    let queries: Vec<&[u8]> = patterns.iter().map(|p| p.as_bytes()).collect();
    let positions = tree.index_of_batch(&queries);

    for (pattern, position) in patterns.iter().zip(positions) {
        print_match(pattern, tree.source(), position, !no_color)?;
    }
    Ok(())
}

fn run_stats(
    text: Option<String>,
    file: Option<PathBuf>,
    alphabet: &str,
    json: bool,
) -> Result<()> {
    let source = load_text(text, file)?;
    let tree = SuffixTree::build(source, parse_alphabet(alphabet)?)?;
    let stats = tree.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Suffix Tree Statistics");
    println!("======================");
    println!();
    println!("Source length:    {}", stats.source_len);
    println!("Expanded length:  {}", stats.text_len);
    println!("Alphabet size:    {}", stats.alphabet_size);
    println!("Inner nodes:      {}", stats.node_count);
    println!("Edges:            {}", stats.edge_count);
    println!("Leaves:           {}", stats.leaf_count);
    println!("Memory:           {} bytes", stats.memory_bytes);

    Ok(())
}
