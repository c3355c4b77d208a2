//! Command-line front end for the report formatter.
//!
//! # Usage
//!
//! Format with the default options (writes `report_Formatted.docx`):
//! ```sh
//! report-format report.docx
//! ```
//!
//! Override options:
//! ```sh
//! report-format report.docx --font Arial --font-size 12 \
//!     --line-spacing 1.5 --no-justify --no-page-breaks
//! ```
//!
//! Load options from a YAML file and refresh the TOC with LibreOffice:
//! ```sh
//! report-format report.docx --config formatter.yaml \
//!     --refresh-command soffice --refresh-arg --headless --refresh-arg '{path}'
//! ```

use clap::{Parser, ValueEnum};
use report_formatter::format::{
    CommandRefresher, FormatMode, FormatterConfig, LineSpacingChoice, MAX_FONT_SIZE, MIN_FONT_SIZE,
    NoopRefresher, TocRefresher, TocStatus, apply_formatting,
};
use std::fs;
use std::path::PathBuf;

/// Apply house formatting rules to a Word report
#[derive(Parser, Debug)]
#[command(
    name = "report-format",
    about = "Apply consistent formatting to Word (.docx) reports",
    long_about = "Rewrites heading, body and spacing formatting of a .docx report, optionally\n\
                  inserting a table of contents, and saves the result as <name>_Formatted.docx\n\
                  next to the input.",
    version
)]
struct Args {
    /// Input document
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Formatting mode [default: options, or template when --template is given]
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Template document; implies --mode template
    #[arg(long, value_name = "TEMPLATE")]
    template: Option<PathBuf>,

    /// YAML configuration file; command-line flags override its values
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Leave heading runs unbolded
    #[arg(long)]
    no_bold_headings: bool,

    /// Do not start level 1 headings on a new page
    #[arg(long)]
    no_page_breaks: bool,

    /// Body font
    #[arg(long, value_name = "FONT")]
    font: Option<String>,

    /// Body font size in points
    #[arg(
        long,
        value_name = "PT",
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_FONT_SIZE)..=i64::from(MAX_FONT_SIZE))
    )]
    font_size: Option<u32>,

    /// Align body paragraphs left instead of justifying them
    #[arg(long)]
    no_justify: bool,

    /// Body line spacing: single, 1.15, 1.5 or double
    #[arg(long, value_name = "SPACING")]
    line_spacing: Option<LineSpacingChoice>,

    /// Do not insert a table of contents
    #[arg(long)]
    no_toc: bool,

    /// Program that updates the TOC of the saved document
    #[arg(long, value_name = "PROGRAM")]
    refresh_command: Option<String>,

    /// Argument for the refresh program; `{path}` is replaced by the document path
    #[arg(long, value_name = "ARG", allow_hyphen_values = true, requires = "refresh_command")]
    refresh_arg: Vec<String>,

    /// Also copy the formatted document to this path
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Formatting mode options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Apply the formatting options
    Options,
    /// Copy formatting from a template document
    Template,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if !args.input.is_file() {
        eprintln!("Error: Input file does not exist: {}", args.input.display());
        std::process::exit(1);
    }

    let config = match &args.config {
        Some(path) => match FormatterConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            },
        },
        None => FormatterConfig::default(),
    };

    let (mode, refresher) = match build_request(&args, config) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    };
    let refresher: Box<dyn TocRefresher> = match refresher {
        Some(command) => Box::new(command),
        None => Box::new(NoopRefresher),
    };
    match apply_formatting(&args.input, &mode, refresher) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                eprintln!("Warning: {}", warning);
            }
            let output_path = match &args.output {
                Some(target) => {
                    fs::copy(&outcome.output_path, target)?;
                    target.clone()
                },
                None => outcome.output_path.clone(),
            };
            println!("✓ {} -> {}", args.input.display(), output_path.display());
            if args.verbose {
                println!(
                    "  {} paragraphs ({} top headings, {} second headings, {} other headings, {} body)",
                    outcome.paragraph_count,
                    outcome.kinds.top_headings,
                    outcome.kinds.second_headings,
                    outcome.kinds.other_headings,
                    outcome.kinds.body
                );
            }
            if outcome.toc == TocStatus::Inserted {
                println!("  Table of contents inserted; update fields in Word to fill it in");
            }
            Ok(())
        },
        Err(e) => {
            eprintln!("✗ {}: {}", args.input.display(), e);
            std::process::exit(1);
        },
    }
}

impl Args {
    /// The selected mode; `--template` alone selects template mode.
    fn resolved_mode(&self) -> Result<ModeArg, String> {
        match (self.mode, &self.template) {
            (Some(ModeArg::Options), Some(_)) => {
                Err("--template cannot be used with --mode options".to_string())
            },
            (Some(mode), _) => Ok(mode),
            (None, Some(_)) => Ok(ModeArg::Template),
            (None, None) => Ok(ModeArg::Options),
        }
    }
}

/// Merge the configuration file with command-line overrides.
///
/// Flags win over configuration values, and `--refresh-command` replaces the
/// configured refresh command.
fn build_request(
    args: &Args,
    config: FormatterConfig,
) -> Result<(FormatMode, Option<CommandRefresher>), String> {
    let mut options = config.options;
    if args.no_bold_headings {
        options.bold_headings = false;
    }
    if args.no_page_breaks {
        options.page_break_before_top_headings = false;
    }
    if let Some(font) = &args.font {
        options.font_name = font.clone();
    }
    if let Some(size) = args.font_size {
        options.font_size = size;
    }
    if args.no_justify {
        options.justify_paragraphs = false;
    }
    if let Some(line_spacing) = args.line_spacing {
        options.line_spacing = line_spacing;
    }
    if args.no_toc {
        options.insert_toc = false;
    }

    let refresher = match &args.refresh_command {
        Some(program) => Some(CommandRefresher {
            program: program.clone(),
            args: args.refresh_arg.clone(),
        }),
        None => config.refresh,
    };

    let mode = match args.resolved_mode()? {
        ModeArg::Options => FormatMode::Options(options),
        ModeArg::Template => FormatMode::Template {
            template: args.template.clone(),
        },
    };
    Ok((mode, refresher))
}
