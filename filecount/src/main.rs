// src/main.rs
use anyhow::Result;
use clap::Parser;
use filecount::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    run(args)
}
