use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::config::ScanSettings;
use crate::error::{ExtractError, Result};
use crate::matchers::BoundingBoxMatcher;
use crate::models::{Article, CoordinateRecord};
use crate::processors::{scan_document, ParallelProcessor};
use crate::readers::{read_document, ArticleReader, TextReader};
use crate::utils::filename::{
    generate_default_bounding_boxes_filename, generate_default_coordinates_filename,
};
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Extract {
            input_dir,
            output_file,
            bbox_output_file,
            max_workers,
            extension,
        } => {
            let mut settings =
                ScanSettings::load(cli.config.as_deref())?.with_overrides(max_workers, extension)?;
            if bbox_output_file.is_some() {
                settings.extract_bounding_boxes = true;
            }
            let output_file = output_file.unwrap_or_else(generate_default_coordinates_filename);

            extract_directory(&input_dir, &output_file, bbox_output_file, &settings)
        }

        Commands::Scan {
            input_file,
            text,
            format,
        } => {
            let settings = ScanSettings::load(cli.config.as_deref())?;
            let article = match (input_file, text) {
                (Some(path), _) => read_document(&path, settings.require_document_id)?,
                (None, Some(text)) => {
                    Article::new("text", "-").with_fragments(TextReader::split_fragments(&text))
                }
                (None, None) => {
                    return Err(ExtractError::InvalidInput(
                        "Either --input-file or --text is required".to_string(),
                    ))
                }
            };

            let scan = scan_document(&article, false);
            info!(
                "{}: {} coordinates in {} fragments",
                article.document_id,
                scan.records.len(),
                scan.fragments_scanned
            );
            print_records(&scan.records, format)
        }

        Commands::Boxes { input_file } => report_bounding_boxes(&input_file),
    }
}

fn extract_directory(
    input_dir: &Path,
    output_file: &Path,
    bbox_output_file: Option<PathBuf>,
    settings: &ScanSettings,
) -> Result<()> {
    println!("Extracting coordinates...");
    println!("Input directory: {}", input_dir.display());
    println!("Output file: {}", output_file.display());
    println!("Workers: {}", settings.max_workers);

    let paths = ArticleReader::find_articles(input_dir, &settings.file_extension)?;
    if paths.is_empty() {
        warn!(
            "No .{} files found in {}",
            settings.file_extension,
            input_dir.display()
        );
    }

    let progress = ProgressReporter::new(paths.len() as u64, "Scanning documents...", false);
    let processor = ParallelProcessor::new(settings.max_workers)
        .with_require_document_id(settings.require_document_id)
        .with_bounding_boxes(settings.extract_bounding_boxes);
    let output = processor.process_paths(&paths, Some(&progress))?;

    let writer = CsvWriter::new();
    writer.write_coordinates(&output.records, output_file)?;

    if settings.extract_bounding_boxes {
        let bbox_file = bbox_output_file.unwrap_or_else(generate_default_bounding_boxes_filename);
        writer.write_bounding_boxes(&output.boxes, &bbox_file)?;
        println!("Bounding boxes written to {}", bbox_file.display());
    }

    println!("\n{}", output.report.generate_summary());
    println!("Extraction complete!");
    Ok(())
}

fn print_records(records: &[CoordinateRecord], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Csv => {
            CsvWriter::new().write_coordinates_to(records, &mut handle)?;
        }
        OutputFormat::Json => {
            for record in records {
                serde_json::to_writer(&mut handle, record)?;
                writeln!(handle)?;
            }
        }
    }

    handle.flush()?;
    Ok(())
}

fn report_bounding_boxes(input_file: &Path) -> Result<()> {
    let article = TextReader::new().read_fragments(input_file)?;
    let matcher = BoundingBoxMatcher::new();

    let mut matched = 0usize;
    for (index, line) in article.fragments.iter().enumerate() {
        match matcher.find(line) {
            Some(found) => {
                matched += 1;
                let [lat1, lat2, lon1, lon2, centroid_lat, centroid_lon] = found.bbox.rendered();
                println!(
                    "{:>5}  {:?}: lat {} to {}, lon {} to {}, centroid ({}, {})",
                    index + 1,
                    found.layout,
                    lat1,
                    lat2,
                    lon1,
                    lon2,
                    centroid_lat,
                    centroid_lon
                );
            }
            None => println!("{:>5}  no match: {}", index + 1, line),
        }
    }

    let total = article.fragments.len();
    let rate = if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64 * 100.0
    };
    println!("\nMatched {} of {} lines ({:.1}%)", matched, total, rate);
    Ok(())
}

/// Install the global subscriber: `debug` with `--verbose`, otherwise
/// `RUST_LOG` or `info`. A log file receives plain (non-ANSI) output. An
/// already-installed subscriber is left in place.
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    };

    if let Err(e) = result {
        debug!("Keeping existing tracing subscriber: {}", e);
    }
    Ok(())
}
