//! unpage CLI - page and metadata extraction from engine-rendered XHTML

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unpage::engine::{ContentEngine, XhtmlEngine};
use unpage::{
    ExtractOptions, Extractor, JsonFormat, MetadataNormalizer, NormalizeOptions, WhatlangIdentifier,
};

#[derive(Parser)]
#[command(name = "unpage")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract pages and unified metadata from engine-rendered XHTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract full text, metadata and pages as JSON
    Extract {
        /// Input XHTML files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Compress extracted text, removing extra whitespace and trimming output
        #[arg(short = 'c', long, default_value_t = true, action = ArgAction::Set)]
        compress: bool,

        /// Return raw metadata
        #[arg(short = 'M', long, default_value_t = false, action = ArgAction::Set)]
        raw_metadata: bool,

        /// Return unified metadata
        #[arg(short = 'm', long, default_value_t = true, action = ArgAction::Set)]
        metadata: bool,

        /// Return full text for PDFs, too
        #[arg(short = 'f', long = "fulltext", default_value_t = true, action = ArgAction::Set)]
        full_text: bool,

        /// Guess the language from the text when metadata has none
        #[arg(short = 'l', long, default_value_t = true, action = ArgAction::Set)]
        detect_language: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Split a document into pages
    Pages {
        /// Input XHTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Compress page text
        #[arg(short = 'c', long, default_value_t = true, action = ArgAction::Set)]
        compress: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document metadata
    Meta {
        /// Input XHTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show the raw metadata table instead of unified metadata
        #[arg(long)]
        raw: bool,

        /// Guess the language from the text when metadata has none
        #[arg(short = 'l', long, default_value_t = true, action = ArgAction::Set)]
        detect_language: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            inputs,
            compress,
            raw_metadata,
            metadata,
            full_text,
            detect_language,
            output,
            compact,
        } => {
            let options = ExtractOptions::new()
                .with_compress(compress)
                .with_raw_metadata(raw_metadata)
                .with_metadata(metadata)
                .with_full_text(full_text)
                .with_detect_language(detect_language);
            cmd_extract(&inputs, options, output.as_deref(), json_format(compact))
        }
        Commands::Pages {
            input,
            compress,
            output,
            compact,
        } => cmd_pages(&input, compress, output.as_deref(), json_format(compact)),
        Commands::Meta {
            input,
            raw,
            detect_language,
            output,
            compact,
        } => cmd_meta(
            &input,
            raw,
            detect_language,
            output.as_deref(),
            json_format(compact),
        ),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_extract(
    inputs: &[PathBuf],
    options: ExtractOptions,
    output: Option<&Path>,
    format: JsonFormat,
) -> CliResult {
    let pb = ProgressBar::new(inputs.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let mut documents = Vec::with_capacity(inputs.len());
    for input in inputs {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        pb.set_message(format!("Reading {}...", name));
        documents.push((name, fs::read(input)?));
        pb.inc(1);
    }

    pb.set_message("Extracting...");
    let extractor = Extractor::new().with_options(options);
    let batch = extractor.extract_batch(documents.as_slice());
    pb.inc(1);
    pb.finish_and_clear();

    let mut results = Vec::with_capacity(documents.len());
    for ((name, _), result) in documents.iter().zip(batch) {
        results.push(result.map_err(|e| format!("{}: {}", name, e))?);
    }

    let json = if results.len() == 1 {
        unpage::to_json(&results[0], format)?
    } else {
        unpage::to_json(&results, format)?
    };

    write_output(&json, output)
}

fn cmd_pages(input: &Path, compress: bool, output: Option<&Path>, format: JsonFormat) -> CliResult {
    let xhtml = fs::read_to_string(input)?;
    let pages = unpage::pages_from_xhtml(&xhtml, compress)?;
    log::info!("{}: {} pages", input.display(), pages.len());

    let json = unpage::to_json(&pages, format)?;
    write_output(&json, output)
}

fn cmd_meta(
    input: &Path,
    raw: bool,
    detect_language: bool,
    output: Option<&Path>,
    format: JsonFormat,
) -> CliResult {
    let data = fs::read(input)?;
    let extraction = XhtmlEngine::new().extract_text(&data)?;

    let json = if raw {
        unpage::to_json(&extraction.metadata, format)?
    } else {
        let identifier = WhatlangIdentifier::new();
        let meta = MetadataNormalizer::with_identifier(&identifier).normalize(
            &extraction.metadata,
            Some(&extraction.text),
            NormalizeOptions::new().with_detect_language(detect_language),
        );
        unpage::to_json(&meta, format)?
    };

    write_output(&json, output)
}

fn write_output(content: &str, output: Option<&Path>) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unpage".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page and metadata extraction tool");
    println!();
    println!("License: MIT");
}
