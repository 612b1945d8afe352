//! CLI entry point for pfem.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `pfem-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use pfem_app::{
    format_lints, load_deck, render_result, run_deck_check, run_explain, DeckLocation,
    ExplainInput, OutputFormat,
};
use pfem_deck::CopyDeck;
use pfem_types::{Audience, Verbosity};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pfem",
    version,
    about = "Friendly explanations for Python error messages"
)]
struct Cli {
    /// Copy deck file; overrides --decks/--locale.
    #[arg(long, global = true)]
    deck: Option<Utf8PathBuf>,

    /// Directory of decks laid out as <dir>/<locale>/copydeck.json.
    #[arg(long, global = true, default_value = "copydecks")]
    decks: Utf8PathBuf,

    /// Locale to load (falls back to the base language, then en).
    #[arg(long, global = true, default_value = "en")]
    locale: String,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Explain an error message.
    Explain {
        /// File holding the interpreter output or a JSON trace (stdin if omitted).
        #[arg(long)]
        error_file: Option<Utf8PathBuf>,

        /// The learner's source file.
        #[arg(long)]
        code: Option<Utf8PathBuf>,

        /// kid, beginner or intermediate.
        #[arg(long, default_value = "beginner")]
        audience: String,

        /// brief, standard or guided.
        #[arg(long, default_value = "standard")]
        verbosity: String,

        /// text, json, markdown or html.
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Lint a copy deck; exits 1 when any lint is an error.
    CheckDeck {
        /// Path to the copy deck JSON.
        file: Utf8PathBuf,
    },

    /// Print the copy deck JSON schema.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.cmd {
        Commands::Explain {
            error_file,
            code,
            audience,
            verbosity,
            format,
        } => cmd_explain(
            &cli,
            error_file.as_ref(),
            code.as_ref(),
            audience,
            verbosity,
            format,
        ),
        Commands::CheckDeck { file } => cmd_check_deck(file),
        Commands::Schema => cmd_schema(),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn deck_location(cli: &Cli) -> DeckLocation {
    match &cli.deck {
        Some(path) => DeckLocation::File(path.clone()),
        None => DeckLocation::Tree {
            root: cli.decks.clone(),
            locale: cli.locale.clone(),
        },
    }
}

fn cmd_explain(
    cli: &Cli,
    error_file: Option<&Utf8PathBuf>,
    code: Option<&Utf8PathBuf>,
    audience: &str,
    verbosity: &str,
    format: &str,
) -> anyhow::Result<()> {
    let format: OutputFormat = format.parse()?;

    let error_text = match error_file {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("read {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read error text from stdin")?;
            buf
        }
    };
    let code = code
        .map(|path| std::fs::read_to_string(path).with_context(|| format!("read {path}")))
        .transpose()?;

    let loaded = load_deck(&deck_location(cli))?;
    let ui = loaded.deck.ui.clone();
    let result = run_explain(ExplainInput {
        deck: loaded.deck,
        error_text: &error_text,
        code: code.as_deref(),
        audience: Audience::parse_lenient(audience),
        verbosity: Verbosity::parse_lenient(verbosity),
        locale: Some(&loaded.locale),
    })?;

    print!("{}", render_result(&result, &ui, format)?);
    Ok(())
}

fn cmd_check_deck(file: &Utf8PathBuf) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file).with_context(|| format!("read {file}"))?;
    let output = run_deck_check(&text).with_context(|| format!("check {file}"))?;
    print!("{}", format_lints(&output));

    let code = output.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(CopyDeck);
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).context("serialize schema")?
    );
    Ok(())
}
