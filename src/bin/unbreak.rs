//! CLI binary for unbreak-md.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `RepairConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unbreak_md::{
    repair_file, unbreak_with_report, write_markdown, EmphasisScope, RepairConfig, RepairOutput,
};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Repair a file (stdout)
  unbreak answer.md

  # Repair in place
  unbreak answer.md -o answer.md

  # Pipe a streamed snapshot through
  printf '**"Quote"** and **21%%**' | unbreak

  # Finished document: keep a final "!" as punctuation
  unbreak --keep-images report.md

  # See which rules fired
  unbreak --json answer.md | jq .report.hits

ENVIRONMENT VARIABLES:
  RUST_LOG                Log filter (overrides -v / -q)
  UNBREAK_OUTPUT          Default output file
  UNBREAK_EMPHASIS        both, bold, italic
"#;

/// Move punctuation outside Markdown emphasis and drop dangling image markup.
#[derive(Parser, Debug)]
#[command(
    name = "unbreak",
    version,
    about = "Repair streamed Markdown: punctuation outside emphasis, no dangling images",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to repair. Omit or pass `-` to read stdin.
    input: Option<PathBuf>,

    /// Write the repaired Markdown to this file instead of stdout.
    #[arg(short, long, env = "UNBREAK_OUTPUT")]
    output: Option<PathBuf>,

    /// Print the repaired Markdown and rule report as JSON.
    #[arg(long, env = "UNBREAK_JSON")]
    json: bool,

    /// Leave curly quotes as they are.
    #[arg(long, env = "UNBREAK_NO_QUOTE_NORMALIZATION")]
    no_quote_normalization: bool,

    /// Skip boundary and partial quote extraction.
    #[arg(long, env = "UNBREAK_NO_QUOTES")]
    no_quotes: bool,

    /// Skip link, parenthetical, percent and question-mark extraction.
    #[arg(long, env = "UNBREAK_NO_PUNCTUATION")]
    no_punctuation: bool,

    /// Keep trailing image fragments and `!`.
    #[arg(long, env = "UNBREAK_KEEP_IMAGES")]
    keep_images: bool,

    /// Emphasis kinds to rewrite.
    #[arg(long, env = "UNBREAK_EMPHASIS", value_enum, default_value = "both")]
    emphasis: EmphasisArg,

    /// Enable DEBUG-level tracing logs (one line per rule that fired).
    #[arg(short, long, env = "UNBREAK_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "UNBREAK_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum EmphasisArg {
    Both,
    Bold,
    Italic,
}

impl From<EmphasisArg> for EmphasisScope {
    fn from(v: EmphasisArg) -> Self {
        match v {
            EmphasisArg::Both => EmphasisScope::Both,
            EmphasisArg::Bold => EmphasisScope::BoldOnly,
            EmphasisArg::Italic => EmphasisScope::ItalicOnly,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli);

    // ── Run repair ───────────────────────────────────────────────────────
    let output = match cli.input.as_deref().filter(|p| p.as_os_str() != "-") {
        Some(path) => repair_file(path, cli.output.as_deref(), &config)
            .with_context(|| format!("Failed to repair {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            let output = unbreak_with_report(&text, &config);
            if let Some(ref path) = cli.output {
                write_markdown(path, &output.markdown)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            output
        }
    };

    print_output(&cli, &output)?;

    if !cli.quiet && !cli.json {
        let report = &output.report;
        eprintln!(
            "{} rewrite{}{}",
            report.total_rewrites(),
            if report.total_rewrites() == 1 { "" } else { "s" },
            match report.skipped.len() {
                0 => String::new(),
                n => format!(", {n} rule(s) skipped"),
            },
        );
    }

    Ok(())
}

/// Map CLI args to `RepairConfig`.
fn build_config(cli: &Cli) -> RepairConfig {
    RepairConfig::builder()
        .normalize_quotes(!cli.no_quote_normalization)
        .quotes(!cli.no_quotes)
        .punctuation(!cli.no_punctuation)
        .strip_incomplete_images(!cli.keep_images)
        .emphasis(cli.emphasis.clone().into())
        .build()
}

fn print_output(cli: &Cli, output: &RepairOutput) -> Result<()> {
    if cli.json {
        let json = serde_json::to_string_pretty(output).context("Failed to serialise output")?;
        println!("{json}");
        return Ok(());
    }

    // Markdown already went to the output file.
    if cli.output.is_some() {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(output.markdown.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}
