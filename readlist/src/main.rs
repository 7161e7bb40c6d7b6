// src/main.rs
use anyhow::Result;
use clap::Parser;

use readlist::utils::init_logger;
use readlist::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);
    run(args)?;
    Ok(())
}
