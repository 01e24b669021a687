//! ocr2txt - Reconstruct newspaper pages from Tesseract TSV output
//!
//! A command line tool that turns raw Tesseract detections into article
//! text, paragraph block reports, or cleaned corpus text.

use clap::{ArgAction, Parser, ValueEnum};
use image::DynamicImage;
use patrika_core::detect::{Detection, NormalizeOptions, max_right_edge};
use patrika_core::error::Result;
use patrika_core::high_level::{AssembleOptions, build_corpus, reconstruct_page};
use patrika_core::layout::LayoutParams;
use patrika_core::render::{write_articles, write_block_report};
use patrika_core::script::DEVANAGARI;
use patrika_core::stroke::PixelSource;
use patrika_core::text::CorpusLevel;
use patrika_core::tsv::{TsvLevel, parse_detections};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Output type for the reconstructed content.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Assembled articles as HEADLINE/CONTENT pairs (default)
    #[default]
    Articles,
    /// One report row per paragraph block
    Blocks,
    /// Cleaned corpus text built from the raw tokens
    Corpus,
}

/// Corpus granularity for corpus output.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Granularity {
    /// Running text, paragraph break after sentence terminators (default)
    #[default]
    Word,
    /// One token per line
    Sentence,
    /// One token per blank-line-separated paragraph
    Paragraph,
}

/// Tesseract TSV hierarchy level to read.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TsvLevelArg {
    /// Level 4 rows, one per text line
    Line,
    /// Level 5 rows, one per word
    Word,
}

/// A command line tool that turns raw Tesseract detections into article
/// text, paragraph block reports, or cleaned corpus text.
#[derive(Parser, Debug)]
#[command(name = "ocr2txt")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// One or more paths to Tesseract TSV files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Input options ===
    /// Page image to sample stroke widths from (without it headline
    /// promotion uses block height only)
    #[arg(short = 'i', long = "image")]
    image: Option<PathBuf>,

    /// TSV hierarchy level to read. Defaults to line, or word for corpus
    /// output
    #[arg(long = "tsv-level", value_enum)]
    tsv_level: Option<TsvLevelArg>,

    // === Normalization options ===
    /// Drop detections below this confidence
    #[arg(long = "min-confidence", default_value = "0.0")]
    min_confidence: f64,

    /// Drop detections starting above this y coordinate (0 = keep all)
    #[arg(long = "header-margin", default_value = "0")]
    header_margin: i32,

    /// Keep lines that carry no character of the target script
    #[arg(long = "keep-foreign", action = ArgAction::SetTrue)]
    keep_foreign: bool,

    /// Drop short lines matching the built-in Nepali UI noise phrases
    #[arg(long = "filter-ui-noise", action = ArgAction::SetTrue)]
    filter_ui_noise: bool,

    // === Layout analysis options ===
    /// Paragraph split threshold (relative to line height)
    #[arg(short = 'G', long = "gap-ratio", default_value = "0.6")]
    gap_ratio: f64,

    /// Dead band around the page center for zone classification, in pixels
    #[arg(short = 'B', long = "buffer-zone", default_value = "50")]
    buffer_zone: i32,

    /// Block height above which a block becomes a headline, in pixels
    #[arg(short = 'H', long = "height-threshold", default_value = "22")]
    height_threshold: i32,

    /// Stroke width above which a block becomes a headline
    #[arg(short = 'S', long = "stroke-threshold", default_value = "2.2")]
    stroke_threshold: f64,

    /// Vertical gap that ends an article within a zone, in pixels
    #[arg(long = "gap-break", default_value = "120")]
    gap_break: i32,

    /// Luminance below which a pixel counts as ink (0-255)
    #[arg(long = "darkness-cutoff", default_value = "156.0")]
    darkness_cutoff: f32,

    /// Page width in pixels for zone classification (default: rightmost
    /// detection edge)
    #[arg(short = 'W', long = "page-width")]
    page_width: Option<i32>,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "articles")]
    output_type: OutputType,

    /// Corpus granularity (corpus output only)
    #[arg(short = 'l', long = "level", value_enum, default_value = "word")]
    level: Granularity,

    /// Emit the full page reconstruction as pretty JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Reject threshold values clap cannot range-check itself.
fn validate_args(args: &Args) -> std::result::Result<(), String> {
    if !args.gap_ratio.is_finite() || args.gap_ratio < 0.0 {
        return Err(format!(
            "gap-ratio must be a non-negative number, got {}",
            args.gap_ratio
        ));
    }
    if !(0.0..=255.0).contains(&args.darkness_cutoff) {
        return Err(format!(
            "darkness-cutoff must be between 0 and 255, got {}",
            args.darkness_cutoff
        ));
    }
    Ok(())
}

/// TSV level to parse: explicit flag first, otherwise words for corpus
/// output and lines for everything else.
fn effective_tsv_level(args: &Args) -> TsvLevel {
    match args.tsv_level {
        Some(TsvLevelArg::Line) => TsvLevel::Line,
        Some(TsvLevelArg::Word) => TsvLevel::Word,
        None => match args.output_type {
            OutputType::Corpus => TsvLevel::Word,
            OutputType::Articles | OutputType::Blocks => TsvLevel::Line,
        },
    }
}

fn corpus_level(args: &Args) -> CorpusLevel {
    match args.level {
        Granularity::Word => CorpusLevel::Word,
        Granularity::Sentence => CorpusLevel::Sentence,
        Granularity::Paragraph => CorpusLevel::Paragraph,
    }
}

/// Build AssembleOptions from command line arguments.
fn build_options(args: &Args, detections: &[Detection]) -> AssembleOptions {
    let mut normalize = if args.filter_ui_noise {
        NormalizeOptions::default().with_nepali_ui_noise()
    } else {
        NormalizeOptions::default()
    };
    normalize.min_confidence = args.min_confidence;
    normalize.header_margin = args.header_margin;
    normalize.script_filter = !args.keep_foreign;

    let params = LayoutParams {
        gap_threshold_ratio: args.gap_ratio,
        buffer_zone: args.buffer_zone,
        height_threshold: args.height_threshold,
        stroke_threshold: args.stroke_threshold,
        gap_break: args.gap_break,
        darkness_cutoff: args.darkness_cutoff,
        ..LayoutParams::default()
    };

    // Width comes from the raw detections so a filtered-out rightmost line
    // still anchors the column split.
    let page_width = args
        .page_width
        .unwrap_or_else(|| max_right_edge(detections));

    AssembleOptions {
        params,
        normalize,
        script: DEVANAGARI.clone(),
        page_width: Some(page_width),
    }
}

/// Process a single TSV file.
fn process_file<W: Write>(
    path: &PathBuf,
    writer: &mut W,
    args: &Args,
    pixels: Option<&DynamicImage>,
) -> Result<()> {
    let tsv = std::fs::read_to_string(path)?;
    let detections = parse_detections(&tsv, effective_tsv_level(args));

    match args.output_type {
        OutputType::Articles | OutputType::Blocks => {
            let options = build_options(args, &detections);
            let page = reconstruct_page(
                &detections,
                pixels.map(|p| p as &dyn PixelSource),
                &options,
            );
            if args.json {
                serde_json::to_writer_pretty(&mut *writer, &page).map_err(io::Error::other)?;
                writeln!(writer)?;
            } else if matches!(args.output_type, OutputType::Articles) {
                write_articles(writer, &page.articles)?;
            } else {
                write_block_report(writer, &page.blocks)?;
            }
        }
        OutputType::Corpus => {
            let corpus = build_corpus(
                &DEVANAGARI,
                detections.iter().map(|d| d.text.as_str()),
                corpus_level(args),
            );
            writer.write_all(corpus.as_bytes())?;
        }
    }

    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = validate_args(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Load the page image once; it is shared across all input files
    let pixels: Option<DynamicImage> = match &args.image {
        Some(path) => Some(
            image::open(path)
                .map_err(|e| format!("Failed to open image {}: {}", path.display(), e))?,
        ),
        None => None,
    };

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    // Process each input file
    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            std::process::exit(1);
        }

        if let Err(e) = process_file(path, &mut output, &args, pixels.as_ref()) {
            eprintln!("Error processing {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    output.flush()?;

    Ok(())
}
