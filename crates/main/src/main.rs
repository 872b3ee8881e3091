use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use resume_pdf::{ResumeBuilder, DEFAULT_OUTPUT_PATH};

/// Renders the resume to a PDF file.
///
/// Fonts are looked up under `assets/fonts` next to the binary or in the crate sources, or in the
/// directory named by `RESUME_FONTS_DIR`; system Liberation Sans or DejaVu Sans is used otherwise.
#[derive(Parser)]
#[command(author, version, about = "Generate the resume PDF")]
struct Cli {
    /// Where to write the PDF.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Add an outline entry for every section heading.
    #[cfg(feature = "bookmarks")]
    #[arg(long)]
    bookmarks: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), resume_pdf::ResumeError> {
    let builder = ResumeBuilder::default();

    #[cfg(feature = "bookmarks")]
    let rendered = if cli.bookmarks {
        builder.write_with_bookmarks_to(&cli.output)?
    } else {
        builder.write_to(&cli.output)?
    };

    #[cfg(not(feature = "bookmarks"))]
    let rendered = builder.write_to(&cli.output)?;

    log::debug!("resume spans {} pages", rendered.page_count);
    println!("Resume generated successfully: {}", cli.output.display());
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
