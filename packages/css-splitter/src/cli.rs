//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR};
use crate::content::read_stylesheet;
use crate::error::{Result, SplitterError};
use crate::mapping::{create_default_mapping, Classification, MappingTable};
use crate::report::{preview, Report};
use crate::splitting::{group_sections, LexerStrategy, RegexStrategy, SplitEngine};
use crate::types::Token;
use crate::writer::SplitPlan;

/// CSS Splitter - Split a stylesheet into modular files at its section headers.
#[derive(Parser)]
#[command(name = "css-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the token count and a preview of the first section headers.
    Report {
        /// Stylesheet to read
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Use the comment scanner instead of the regex tokenizer
        #[arg(long)]
        lexer: bool,
    },

    /// Show the destination of every section header.
    Classify {
        /// Stylesheet to read
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// YAML mapping file (default: built-in table)
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// Use the comment scanner instead of the regex tokenizer
        #[arg(long)]
        lexer: bool,
    },

    /// Write each section to its destination file.
    Split {
        /// Stylesheet to read
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Base directory for the split files
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// YAML mapping file (default: built-in table)
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// Use the comment scanner instead of the regex tokenizer
        #[arg(long)]
        lexer: bool,

        /// Print the plan without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => report_command(Path::new(DEFAULT_INPUT_PATH), false),
        Some(Commands::Report { input, lexer }) => report_command(&input, lexer),
        Some(Commands::Classify {
            input,
            mapping,
            lexer,
        }) => classify_command(&input, mapping.as_deref(), lexer),
        Some(Commands::Split {
            input,
            output,
            mapping,
            lexer,
            dry_run,
        }) => split_command(&input, &output, mapping.as_deref(), lexer, dry_run),
    }
}

/// Tokenize with the strategy selected on the command line.
fn tokenize_input(text: &str, lexer: bool) -> Vec<Token<'_>> {
    if lexer {
        SplitEngine::new(LexerStrategy).tokenize(text)
    } else {
        SplitEngine::new(RegexStrategy).tokenize(text)
    }
}

/// Load the mapping file if given, else the built-in table.
fn load_mapping(mapping: Option<&Path>) -> Result<MappingTable> {
    match mapping {
        Some(path) => MappingTable::load(path),
        None => Ok(create_default_mapping()),
    }
}

/// Execute the report command.
fn report_command(input: &Path, lexer: bool) -> Result<()> {
    let text = read_stylesheet(input)?;
    let tokens = tokenize_input(&text, lexer);

    print!("{}", Report::from_tokens(&tokens));

    Ok(())
}

/// Execute the classify command.
fn classify_command(input: &Path, mapping: Option<&Path>, lexer: bool) -> Result<()> {
    let table = load_mapping(mapping)?;
    let text = read_stylesheet(input)?;
    let tokens = tokenize_input(&text, lexer);

    let mut headers = 0;
    let mut unclassified = 0;

    for (index, token) in tokens.iter().enumerate().filter(|(_, t)| t.is_header()) {
        headers += 1;
        let classification = table.classify(token.text);
        let target = match classification {
            Classification::Destination(d) => style(d.to_string()).green(),
            Classification::Unclassified => {
                unclassified += 1;
                style(classification.to_string()).yellow()
            }
        };
        println!("{index}: {} -> {target}", style(preview(token.text)).cyan());
    }

    println!();
    println!(
        "{} headers, {} unclassified",
        headers,
        style(unclassified).yellow().bold()
    );

    Ok(())
}

/// Execute the split command.
fn split_command(
    input: &Path,
    output: &Path,
    mapping: Option<&Path>,
    lexer: bool,
    dry_run: bool,
) -> Result<()> {
    if output.exists() && !output.is_dir() {
        return Err(SplitterError::InvalidOutput(output.to_path_buf()));
    }

    let table = load_mapping(mapping)?;
    let text = read_stylesheet(input)?;
    let tokens = tokenize_input(&text, lexer);
    let sections = group_sections(&tokens);
    let plan = SplitPlan::build(&sections, &table);

    println!(
        "{} {} into {} files",
        style("Splitting").bold(),
        style(input.display()).cyan(),
        plan.files.len()
    );
    if !plan.unclassified.is_empty() {
        println!(
            "  Unclassified headers: {} (-> {})",
            style(plan.unclassified.len()).yellow().bold(),
            table.fallback()
        );
    }
    println!();

    if dry_run {
        for file in &plan.files {
            println!(
                "  {} ({} sections, {} bytes)",
                style(&file.destination).green(),
                file.sections,
                file.contents.len()
            );
        }
        return Ok(());
    }

    for path in plan.write(output)? {
        println!("{} {}", style("Wrote:").green().bold(), path.display());
    }

    Ok(())
}
