//! CLI entry point for photomosaic construction

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicRunner};
use photomosaic::io::logging;

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    let runner = MosaicRunner::new(cli);
    runner.run()?;
    Ok(())
}
