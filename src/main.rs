//! notesum CLI - Summarise notes and transcripts with Gemini
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use anyhow::Context;
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use notesum::export::{self, ExportFormat};
use notesum::text::{count_characters, count_words, reduction_percent, validate_input};
use notesum::{setup_logging, Config, Settings, SummaryStyle, Summarizer};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notesum")]
#[command(author, version, about = "Summarise notes and transcripts with Gemini", long_about = None)]
struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a text file, piped stdin, or text entered in $EDITOR
    Summarise {
        /// Text file to summarise
        file: Option<PathBuf>,
        /// Summary style: professional or bullet (defaults to the saved style)
        #[arg(short, long)]
        style: Option<SummaryStyle>,
        /// Write the summary to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export as markdown instead of plain text
        #[arg(long)]
        markdown: bool,
        /// Export to summary-<date>.txt (or .md) in the current directory
        #[arg(long)]
        save: bool,
    },
    /// Show or change the default summary style
    Style {
        /// New default style
        style: Option<SummaryStyle>,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    match cli.command {
        Commands::Summarise {
            file,
            style,
            output,
            markdown,
            save,
        } => {
            let config = Config::load()?;
            let style = match style {
                Some(style) => style,
                None => open_settings(&config)?.summary_style()?,
            };

            let input = read_input(file.as_ref())?;
            let text = validate_input(&input)?;
            let original_words = count_words(text);

            eprintln!(
                "Summarising {} words ({} characters) as {}...\n",
                original_words,
                count_characters(text),
                style.label().to_lowercase()
            );

            let summarizer = Summarizer::from_config(config)?;
            let summary = tokio::select! {
                result = summarizer.summarize(text, style) => result?,
                _ = tokio::signal::ctrl_c() => anyhow::bail!("summarisation cancelled"),
            };

            println!("{}", summary);

            let summary_words = count_words(&summary);
            eprintln!(
                "\n{} {} summary: {} words ({}% shorter)",
                "✔".green(),
                style.label(),
                summary_words,
                reduction_percent(original_words, summary_words)
            );

            let format = if markdown
                || output
                    .as_ref()
                    .and_then(|p| p.extension())
                    .is_some_and(|ext| ext == "md")
            {
                ExportFormat::Markdown
            } else {
                ExportFormat::Text
            };
            let today = Local::now().date_naive();
            let target = output.or_else(|| {
                save.then(|| PathBuf::from(export::default_filename(format, today)))
            });

            if let Some(path) = target {
                export::write_export(&path, &summary, format, today)?;
                eprintln!("{} Saved to {}", "✔".green(), path.display());
            }
        }
        Commands::Style { style } => {
            let config = Config::load()?;
            let settings = open_settings(&config)?;
            match style {
                Some(style) => {
                    settings.set_summary_style(style)?;
                    println!("Default style set to {}", style.to_string().bold());
                }
                None => {
                    println!("{}", settings.summary_style()?);
                }
            }
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "notesum", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn open_settings(config: &Config) -> anyhow::Result<Settings> {
    let path = config.storage.path.join("settings");
    Settings::open(&path).with_context(|| format!("opening settings at {}", path.display()))
}

/// Read from the given file, piped stdin, or an editor session
fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }

    if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    edit::edit("").context("opening editor")
}
