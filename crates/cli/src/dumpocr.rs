//! dumpocr - Inspect Tesseract TSV detections and layout stages
//!
//! A command line tool for dumping raw detections, reading-order lines, or
//! clustered paragraph blocks.

use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use image::DynamicImage;
use patrika_core::detect::{
    Detection, NormalizeOptions, max_right_edge, normalize_lines, sort_reading_order,
};
use patrika_core::error::Result;
use patrika_core::layout::{LayoutParams, ParagraphBlock, cluster_lines};
use patrika_core::render::write_line_dump;
use patrika_core::script::DEVANAGARI;
use patrika_core::stroke::{PixelSource, measure_blocks};
use patrika_core::tsv::{TsvLevel, parse_detections};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Tesseract TSV hierarchy level to read.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum TsvLevelArg {
    /// Level 4 rows, one per text line (default)
    #[default]
    Line,
    /// Level 5 rows, one per word
    Word,
}

/// Dump raw detections exactly as parsed.
fn dump_raw<W: Write>(out: &mut W, detections: &[Detection]) -> Result<()> {
    for (i, det) in detections.iter().enumerate() {
        let b = &det.bbox;
        writeln!(
            out,
            "[{i}] ({},{})-({},{}) || {} || {:.2}",
            b.x0, b.y0, b.x1, b.y1, det.text, det.confidence
        )?;
    }
    Ok(())
}

/// Dump clustered paragraph blocks with line counts and stroke widths.
fn dump_blocks<W: Write>(out: &mut W, blocks: &[ParagraphBlock]) -> Result<()> {
    for (i, block) in blocks.iter().enumerate() {
        let b = &block.bbox;
        writeln!(
            out,
            "[{i}] ({},{})-({},{}) lines={} stroke={:.2} || {} || {:.2}",
            b.x0, b.y0, b.x1, b.y1, block.line_count, block.stroke_width, block.text,
            block.confidence
        )?;
    }
    Ok(())
}

/// A command line tool for dumping raw detections, reading-order lines, or
/// clustered paragraph blocks.
#[derive(Parser, Debug)]
#[command(name = "dumpocr")]
#[command(author, version, about = "Inspect Tesseract TSV detections and layout stages", long_about = None)]
#[command(disable_version_flag = true)]
#[command(group(
    ArgGroup::new("procedure")
        .args(["raw", "blocks"])
))]
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

    // === Procedure options (mutually exclusive) ===
    /// Dump raw detections, skipping normalization
    #[arg(short = 'r', long = "raw", action = ArgAction::SetTrue)]
    raw: bool,

    /// Dump clustered paragraph blocks instead of lines
    #[arg(short = 'b', long = "blocks", action = ArgAction::SetTrue)]
    blocks: bool,

    // === Parser options ===
    /// TSV hierarchy level to read
    #[arg(long = "tsv-level", value_enum, default_value = "line")]
    tsv_level: TsvLevelArg,

    /// Paragraph split threshold for --blocks (relative to line height)
    #[arg(short = 'G', long = "gap-ratio", default_value = "0.6")]
    gap_ratio: f64,

    /// Page image to sample stroke widths from (--blocks only)
    #[arg(short = 'i', long = "image")]
    image: Option<PathBuf>,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
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

    let level = match args.tsv_level {
        TsvLevelArg::Line => TsvLevel::Line,
        TsvLevelArg::Word => TsvLevel::Word,
    };

    let pixels: Option<DynamicImage> = match &args.image {
        Some(path) => Some(image::open(path)?),
        None => None,
    };

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)?;
        Box::new(BufWriter::new(file))
    };

    let normalize = NormalizeOptions::default();
    let params = LayoutParams {
        gap_threshold_ratio: args.gap_ratio,
        ..LayoutParams::default()
    };

    // Process each input file
    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            std::process::exit(1);
        }

        let tsv = std::fs::read_to_string(path)?;
        let detections = parse_detections(&tsv, level);
        writeln!(
            output,
            "{}: {} detections, page width {}",
            path.display(),
            detections.len(),
            max_right_edge(&detections)
        )?;

        if args.raw {
            dump_raw(&mut output, &detections)?;
            continue;
        }

        let mut lines = normalize_lines(&detections, &normalize, &DEVANAGARI);
        sort_reading_order(&mut lines);

        if args.blocks {
            let mut blocks = cluster_lines(&lines, &params);
            measure_blocks(
                pixels.as_ref().map(|p| p as &dyn PixelSource),
                &mut blocks,
                &params,
            );
            dump_blocks(&mut output, &blocks)?;
        } else {
            write_line_dump(&mut output, &lines)?;
        }
    }

    output.flush()?;
    Ok(())
}
