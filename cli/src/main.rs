//! unofd CLI - OFD to editable passage conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use unofd::{
    convert_file_with_options, render, Conversion, ConvertOptions, ErrorMode, JsonFormat,
};

#[derive(Parser)]
#[command(name = "unofd")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert OFD object trees into editable page models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a serialized OFD tree to passage JSON
    Convert {
        /// Input OFD tree (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Fail on the first object that cannot be converted
        #[arg(long)]
        strict: bool,

        /// Build pages in parallel
        #[arg(long)]
        parallel: bool,

        /// Let pages without an area use the document's common area
        #[arg(long)]
        inherit_area: bool,
    },

    /// Print the text of the converted passage
    Text {
        /// Input OFD tree (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information and conversion statistics
    Info {
        /// Input OFD tree (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            compact,
            strict,
            parallel,
            inherit_area,
        } => {
            let error_mode = if strict {
                ErrorMode::Strict
            } else {
                ErrorMode::Lenient
            };
            let options = ConvertOptions::new()
                .with_error_mode(error_mode)
                .with_parallel(parallel)
                .with_common_area_inheritance(inherit_area);
            cmd_convert(&input, output.as_deref(), compact, &options)
        }
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn report_diagnostics(conversion: &Conversion) {
    for diagnostic in &conversion.diagnostics {
        eprintln!("{}: {}", "Skipped".yellow(), diagnostic);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = convert_file_with_options(input, options)?;
    report_diagnostics(&conversion);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&conversion.passage, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = convert_file_with_options(input, &ConvertOptions::default())?;
    report_diagnostics(&conversion);

    let text = render::to_text(&conversion.passage);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = convert_file_with_options(input, &ConvertOptions::default())?;
    let passage = &conversion.passage;
    let info = &passage.doc_info;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {} {}", "Format".bold(), passage.doc_type, passage.version);
    println!("{}: {}", "Pages".bold(), passage.page_count());

    if let Some(ref title) = info.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = info.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref creator) = info.creator {
        match info.creator_version {
            Some(ref version) => println!("{}: {} {}", "Creator".bold(), creator, version),
            None => println!("{}: {}", "Creator".bold(), creator),
        }
    }
    if let Some(ref created) = info.creation_date {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = info.mod_date {
        println!("{}: {}", "Modified".bold(), modified);
    }
    if !info.keywords.is_empty() {
        println!("{}: {}", "Keywords".bold(), info.keywords.join(", "));
    }

    let stats = &conversion.stats;

    println!();
    println!("{}", "Conversion Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Layers".bold(), stats.layer_count);
    println!("{}: {}", "Text blocks".bold(), stats.text_block_count);
    println!(
        "{}: {} paths, {} images",
        "Not converted".bold(),
        stats.skipped_path_count,
        stats.skipped_image_count
    );
    println!(
        "{}: {} layers, {} objects",
        "Failed".bold(),
        stats.failed_layer_count,
        stats.failed_object_count
    );

    log::debug!("conversion stats: {:?}", stats);

    Ok(())
}
