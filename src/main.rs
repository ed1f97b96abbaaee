use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use randhex::{fixture::Fixture, format::write_fixture};

/// Prints 512 random bytes as rows of 16 C-style hexadecimal literals.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _ = Cli::parse();

    // stdout is reserved for the literals
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    info!("drawing bytes from the thread-local RNG");
    let fixture = Fixture::random(&mut rand::thread_rng());

    let stdout = io::stdout();
    write_fixture(&fixture, &mut BufWriter::new(stdout.lock()))?;

    Ok(())
}
