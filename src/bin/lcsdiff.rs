use std::env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use lcsdiff::DifferBuilder;
use tracing_subscriber::EnvFilter;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("lcsdiff: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&options) {
        eprintln!("lcsdiff: {err:#}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> anyhow::Result<()> {
    let differ = DifferBuilder::new()
        .fold_case(!options.keep_case)
        .matched_marker(options.matched.clone())
        .unmatched_marker(options.unmatched.clone())
        .build();

    let diffs = differ.diff_files(&options.first, options.second.as_deref())?;
    tracing::info!(pairs = diffs.len(), "diff complete");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for diff in &diffs {
        writeln!(out, "{}", differ.render(diff)).context("failed to write output")?;
    }
    out.flush().context("failed to write output")?;
    Ok(())
}

struct Options {
    first: PathBuf,
    second: Option<PathBuf>,
    keep_case: bool,
    matched: String,
    unmatched: String,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut files = Vec::new();
        let mut keep_case = false;
        let mut matched = "^".to_string();
        let mut unmatched = "#".to_string();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--keep-case" {
                keep_case = true;
            } else if let Some(value) = arg.strip_prefix("--matched=") {
                matched = value.to_string();
            } else if arg == "--matched" {
                matched = args
                    .next()
                    .ok_or_else(|| "missing value after --matched".to_string())?
                    .into();
            } else if let Some(value) = arg.strip_prefix("--unmatched=") {
                unmatched = value.to_string();
            } else if arg == "--unmatched" {
                unmatched = args
                    .next()
                    .ok_or_else(|| "missing value after --unmatched".to_string())?
                    .into();
            } else if arg.starts_with('-') {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                files.push(PathBuf::from(arg));
            }
        }

        let mut files = files.into_iter();
        let first = files
            .next()
            .ok_or_else(|| "expected one or two input files".to_string())?;
        let second = files.next();
        if files.next().is_some() {
            return Err("expected one or two input files".to_string());
        }

        Ok(Self {
            first,
            second,
            keep_case,
            matched,
            unmatched,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: lcsdiff [options] <file1> [file2]

Marks the words of each sentence pair that belong to their longest common
subsequence. One sentence per line. With two files, line i of file1 is
compared with line i of file2; with one file, lines are compared in
consecutive pairs.

Options:
  --keep-case               Compare words without lower-casing them
  --matched <marker>        Suffix for words in the LCS (default: ^)
  --unmatched <marker>      Suffix for words not in the LCS (default: #)
  -h, --help                Print this help message

Logging goes to stderr and is controlled by RUST_LOG (default: warn)."
        );
    }
}
