//! # batchdns
//!
//! Bulk-resolves DNS entries listed in a file (`name<TAB>type` per line)
//! through a pool of concurrent workers.

use anyhow::Context;
use batchdns_application::Pipeline;
use batchdns_infrastructure::HickoryLookup;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::BufReader;
use tracing::{error, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "batchdns")]
#[command(version)]
#[command(about = "Resolve DNS entries listed in a file")]
struct Cli {
    /// Number of resolver workers
    #[arg(short, long, default_value_t = 5)]
    workers: usize,

    /// Input file with one `name<TAB>record-type` entry per line
    file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::init_logging();

    let cli = Cli::parse();

    let file = match File::open(&cli.file).await {
        Ok(file) => file,
        Err(err) => {
            error!(path = %cli.file.display(), %err, "cannot open input file");
            std::process::exit(2);
        }
    };

    let lookup = Arc::new(HickoryLookup::new().context("resolver initialization failed")?);
    let pipeline = Pipeline::new(lookup, cli.workers);

    let processed = pipeline
        .run(BufReader::new(file), Box::new(tokio::io::stdout()))
        .await?;

    info!(entries = processed, "finished processing");
    Ok(())
}
