use clap::Parser;
use coord_extractor::cli::{run, Cli};
use coord_extractor::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
