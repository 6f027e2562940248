//! Swagger declarations CLI
//!
//! Command-line interface for generating TypeScript declaration files from
//! Swagger documents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use swagger_dts::{
    generate, load_document_auto, summarize, DefinitionKind, GenerateOptions, DEFAULT_WRAPPER,
};

#[derive(Parser)]
#[command(name = "swagger-dts")]
#[command(about = "Generate TypeScript declaration files from Swagger definitions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate declarations from a Swagger document
    Generate {
        /// Document source: file path or URL (http:// or https://)
        source: String,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// camelCase property keys in the generated declarations
        #[arg(long)]
        camelcase: bool,

        /// Namespace wrapper around the declarations
        #[arg(long, default_value = DEFAULT_WRAPPER, conflicts_with = "no_wrapper")]
        wrapper: String,

        /// Emit the declarations without a namespace wrapper
        #[arg(long)]
        no_wrapper: bool,

        /// Prepend the auto-generated notice (default: true)
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        warning: bool,
    },

    /// List the definitions in a Swagger document
    Defs {
        /// Document source: file path or URL (http:// or https://)
        source: String,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Only list definitions that produce a declaration
        #[arg(long)]
        emitted: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            source,
            output,
            camelcase,
            wrapper,
            no_wrapper,
            warning,
        } => run_generate(&source, output, camelcase, wrapper, no_wrapper, warning),

        Commands::Defs {
            source,
            format,
            emitted,
        } => run_defs(&source, &format, emitted),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_generate(
    source: &str,
    output: Option<PathBuf>,
    camelcase: bool,
    wrapper: String,
    no_wrapper: bool,
    warning: bool,
) -> Result<(), u8> {
    let document = load_document_auto(source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let mut options = GenerateOptions::new().camelcase(camelcase).warning(warning);
    options = if no_wrapper {
        options.no_wrapper()
    } else {
        options.wrapper(wrapper)
    };

    let declarations = generate(&document, &options).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    match output {
        Some(path) => {
            std::fs::write(&path, &declarations).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            print!("{}", declarations);
        }
    }

    Ok(())
}

fn run_defs(source: &str, format: &str, emitted_only: bool) -> Result<(), u8> {
    let document = load_document_auto(source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let mut summaries = summarize(&document).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;
    if emitted_only {
        summaries.retain(|s| s.emitted);
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summaries).unwrap());
        return Ok(());
    }

    let width = summaries
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    for summary in &summaries {
        let kind = match summary.kind {
            DefinitionKind::Object => "object",
            DefinitionKind::Array => "array",
            DefinitionKind::Primitive => "primitive",
            DefinitionKind::Other => "other",
        };
        let note = if summary.emitted { "" } else { "  (inlined)" };
        println!(
            "{:width$}  {:9}  {} properties{}",
            summary.name,
            kind,
            summary.properties,
            note,
            width = width
        );
    }

    Ok(())
}
