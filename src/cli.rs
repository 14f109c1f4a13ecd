//! Command line harness of the `suffixdex` binary.

pub mod benchmark;
pub mod reader;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use log::LevelFilter;

use crate::{IndexConfig, LongestPrefixMatch, StructureKind};
use benchmark::BenchmarkConfig;

#[derive(Parser)]
#[command(name = "suffixdex")]
#[command(about = "Longest prefix search with suffix tries, suffix trees and suffix arrays")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Build one structure over a text and print the longest prefix match of every query
    Search(SearchArgs),
    /// Time construction and search of all structures on windows of sequence files
    Bench(BenchArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// The structure to build
    #[arg(long, value_enum, default_value_t = StructureKind::Tree)]
    structure: StructureKind,

    #[command(flatten)]
    input: TextInput,

    /// Query sequences
    #[arg(long, num_args = 1.., required = true)]
    query: Vec<String>,

    /// Only index the first WINDOW symbols of the text
    #[arg(long)]
    window: Option<usize>,

    /// Terminal symbol appended to the text before indexing
    #[arg(long, default_value_t = '$')]
    terminal: char,
}

#[derive(Args)]
#[command(group = ArgGroup::new("text").required(true))]
struct TextInput {
    /// Reference sequence file (FASTA or FASTQ, optionally gzip compressed), the first record is indexed
    #[arg(long, group = "text")]
    reference: Option<PathBuf>,

    /// Reference sequence
    #[arg(long, group = "text")]
    string: Option<String>,
}

impl TextInput {
    fn load(&self) -> Result<Vec<u8>> {
        match (&self.reference, &self.string) {
            (Some(path), _) => Ok(reader::first_record(path)?.seq),
            (None, Some(string)) => Ok(string.clone().into_bytes()),
            (None, None) => bail!("A text is required, pass either --reference or --string"),
        }
    }
}

#[derive(Args)]
struct BenchArgs {
    /// Directory with sequence files
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Number of symbols per window
    #[arg(long, default_value_t = 1000)]
    window_size: usize,

    /// Maximum number of windows taken from the start of every file
    #[arg(long, default_value_t = 1)]
    windows: usize,

    /// Skip files whose name contains one of these substrings
    #[arg(long, num_args = 1..)]
    exclude: Vec<String>,

    /// Query sequences
    #[arg(long, num_args = 1.., default_values = ["AA", "AGTCCAG", "ACATACTAGATCCACCA"])]
    query: Vec<String>,

    /// Write all measurements to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Search(args) => run_search(&args, &mut io::stdout().lock()),
            Command::Bench(args) => run_bench(args),
        }
    }
}

fn run_search(args: &SearchArgs, out: &mut impl Write) -> Result<()> {
    let mut text = args.input.load()?;

    if let Some(window) = args.window {
        text.truncate(window);
    }

    // non-ASCII characters occupy several bytes of the UTF-8 text
    if !args.terminal.is_ascii() {
        bail!(
            "The terminal symbol {:?} is not an ASCII character",
            args.terminal
        );
    }
    let terminal = args.terminal as u8;

    if memchr::memchr(terminal, &text).is_some() {
        bail!(
            "The terminal symbol {:?} occurs in the text, choose another one with --terminal",
            args.terminal
        );
    }

    log::info!(
        "building {} for text of length {}",
        args.structure,
        text.len()
    );

    let index = IndexConfig::new()
        .terminal(terminal)
        .construct(args.structure, &text);

    for query in &args.query {
        let match_len = index.longest_prefix_match(query.as_bytes());
        writeln!(out, "{query} : {match_len}")?;
    }

    Ok(())
}

fn run_bench(args: BenchArgs) -> Result<()> {
    let files = reader::sequence_files(&args.data, &args.exclude)?;

    if files.is_empty() {
        bail!("No sequence files found in {}", args.data.display());
    }

    let config = BenchmarkConfig {
        window_size: args.window_size,
        max_windows: args.windows,
        queries: args.query.into_iter().map(String::into_bytes).collect(),
    };

    let report = benchmark::run(&files, &config)?;

    print!("{}", report.summary());

    if let Some(path) = &args.json {
        report.write_json(path)?;
        log::info!("wrote measurements to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_args(args: &[&str]) -> SearchArgs {
        let cli = Cli::try_parse_from(["suffixdex", "search"].iter().chain(args)).unwrap();

        match cli.command {
            Command::Search(args) => args,
            Command::Bench(_) => unreachable!(),
        }
    }

    fn search_output(args: &[&str]) -> Result<String> {
        let mut out = Vec::new();
        run_search(&search_args(args), &mut out)?;

        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn search_prints_queries_in_order() {
        for structure in ["trie", "tree", "array"] {
            let output = search_output(&[
                "--structure",
                structure,
                "--string",
                "banana",
                "--query",
                "ana",
                "xyz",
                "nab",
            ])
            .unwrap();

            assert_eq!(output, "ana : 3\nxyz : 0\nnab : 2\n");
        }
    }

    #[test]
    fn search_window() {
        let output = search_output(&[
            "--string",
            "AGTCCAG",
            "--window",
            "4",
            "--query",
            "AGT",
            "CCA",
            "AGTCCAG",
        ])
        .unwrap();

        assert_eq!(output, "AGT : 3\nCCA : 1\nAGTCCAG : 4\n");
    }

    #[test]
    fn search_reference_file() {
        let dir = std::env::temp_dir().join(format!("suffixdex-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("reference.fa");
        std::fs::write(&path, ">ref\nAGTC\nCAG\n").unwrap();

        let output = search_output(&[
            "--reference",
            path.to_str().unwrap(),
            "--query",
            "AGA",
            "TCCA",
        ])
        .unwrap();

        assert_eq!(output, "AGA : 2\nTCCA : 4\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn terminal_in_text() {
        let error = search_output(&["--string", "AC$", "--query", "A"]).unwrap_err();
        assert!(error.to_string().contains("occurs in the text"));

        let output =
            search_output(&["--string", "AC$", "--terminal", "#", "--query", "C$"]).unwrap();
        assert_eq!(output, "C$ : 2\n");

        // the terminal is outside of the window
        let output =
            search_output(&["--string", "AC$", "--window", "2", "--query", "AC"]).unwrap();
        assert_eq!(output, "AC : 2\n");
    }

    #[test]
    fn non_ascii_terminal() {
        let error =
            search_output(&["--string", "ACé", "--terminal", "é", "--query", "C"]).unwrap_err();
        assert!(error.to_string().contains("not an ASCII character"));

        let error =
            search_output(&["--string", "AC", "--terminal", "é", "--query", "C"]).unwrap_err();
        assert!(error.to_string().contains("not an ASCII character"));
    }

    #[test]
    fn missing_text() {
        assert!(Cli::try_parse_from(["suffixdex", "search", "--query", "A"]).is_err());
        assert!(
            Cli::try_parse_from([
                "suffixdex", "search", "--string", "A", "--reference", "a.fa", "--query", "A"
            ])
            .is_err()
        );

        let input = TextInput {
            reference: None,
            string: None,
        };
        let error = input.load().unwrap_err();
        assert!(error.to_string().contains("A text is required"));
    }
}
