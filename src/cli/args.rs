use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coord-extractor")]
#[command(about = "Extract geographic coordinates from scholarly article text")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Settings file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract coordinates from every article in a directory
    Extract {
        #[arg(short, long, help = "Directory containing article files")]
        input_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV file path [default: output/coordinates-{YYMMDD}.csv]"
        )]
        output_file: Option<PathBuf>,

        #[arg(
            long,
            help = "Also extract bounding boxes and write them to this CSV file"
        )]
        bbox_output_file: Option<PathBuf>,

        #[arg(long, help = "Worker threads [default: number of CPUs]")]
        max_workers: Option<usize>,

        #[arg(short, long, help = "Article file extension [default: xml]")]
        extension: Option<String>,
    },

    /// Scan a single file or a piece of text and print the coordinates found
    Scan {
        #[arg(
            short,
            long,
            conflicts_with = "text",
            required_unless_present = "text",
            help = "File to scan (.xml articles or plain text)"
        )]
        input_file: Option<PathBuf>,

        #[arg(short, long, help = "Text to scan")]
        text: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },

    /// Run the bounding-box matcher over each line of a file
    Boxes {
        #[arg(short, long, help = "Plain-text file, one candidate per line")]
        input_file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}
